//! Display list generation for 2D primitives
//!
//! Backends that only know how to draw circles, lines and text can paint
//! `display_list(frame)` in order. Coordinates are truncated to whole pixels.

use glam::IVec2;

use super::{Frame, WormView};
use crate::sim::Color;

/// Trail joint radius
const JOINT_RADIUS: i32 = 2;
/// Head radius
const HEAD_RADIUS: i32 = 3;
/// Bonus radius
const BONUS_RADIUS: i32 = 4;

/// Scoreboard text anchors (leader first) and the tick timer anchor
const SCORE_ANCHORS: [IVec2; 2] = [IVec2::new(10, 10), IVec2::new(10, 40)];
const TIMER_ANCHOR: IVec2 = IVec2::new(500, 10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Clear(Color),
    Circle {
        center: IVec2,
        radius: i32,
        color: Color,
    },
    Line {
        from: IVec2,
        to: IVec2,
        color: Color,
    },
    Text {
        anchor: IVec2,
        text: String,
        color: Color,
    },
}

/// Build the draw commands for one frame, back to front
pub fn display_list(frame: &Frame<'_>) -> Vec<Shape> {
    let mut shapes = vec![Shape::Clear(Color(0, 0, 0))];

    for (anchor, player) in SCORE_ANCHORS.iter().zip(frame.standings()) {
        shapes.push(Shape::Text {
            anchor: *anchor,
            text: format!("{}", frame.worms[player].score as i64),
            color: frame.worms[player].own_color,
        });
    }
    shapes.push(Shape::Text {
        anchor: TIMER_ANCHOR,
        text: format!("{}", frame.last_tick_ms),
        color: Color::WHITE,
    });

    for worm in &frame.worms {
        worm_shapes(worm, &mut shapes);
    }

    for bonus in frame.bonuses {
        shapes.push(Shape::Circle {
            center: pixel(bonus.pos),
            radius: BONUS_RADIUS,
            color: Color::BONUS,
        });
    }

    shapes
}

fn worm_shapes(worm: &WormView<'_>, shapes: &mut Vec<Shape>) {
    let color = worm.color;
    let joints: Vec<IVec2> = worm.trail.iter().copied().map(pixel).collect();

    if let Some(&first) = joints.first() {
        shapes.push(Shape::Circle {
            center: first,
            radius: JOINT_RADIUS,
            color,
        });
    }
    for pair in joints.windows(2) {
        shapes.push(Shape::Line {
            from: pair[0],
            to: pair[1],
            color,
        });
        shapes.push(Shape::Circle {
            center: pair[1],
            radius: JOINT_RADIUS,
            color,
        });
    }

    let head = pixel(worm.pos);
    if let Some(&last) = joints.last() {
        shapes.push(Shape::Line {
            from: last,
            to: head,
            color,
        });
    }
    shapes.push(Shape::Circle {
        center: head,
        radius: HEAD_RADIUS,
        color,
    });
    // Heading indicator is always drawn in green
    shapes.push(Shape::Line {
        from: head,
        to: pixel(worm.look_ahead),
        color: Color::GREEN,
    });
}

#[inline]
fn pixel(p: glam::DVec2) -> IVec2 {
    // Truncation toward zero, like an integer cast
    IVec2::new(p.x as i32, p.y as i32)
}
