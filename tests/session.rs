//! End-to-end sessions driven through the game loop

use std::collections::VecDeque;
use std::time::Duration;

use glam::DVec2;
use worm_wars::demo::DemoInput;
use worm_wars::platform::{InputEvent, InputSource, Key, ManualClock};
use worm_wars::renderer::{Frame, Renderer, Shape, display_list};
use worm_wars::sim::{Bonus, Color, Spawn};
use worm_wars::{Game, Settings};

struct Script(VecDeque<Vec<InputEvent>>);

impl Script {
    fn idle(ticks: usize) -> Self {
        Self((0..ticks).map(|_| Vec::new()).collect())
    }
}

impl InputSource for Script {
    fn poll(&mut self) -> anyhow::Result<Vec<InputEvent>> {
        Ok(self.0.pop_front().unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<FrameSummary>,
}

#[derive(Debug, Clone)]
struct FrameSummary {
    heads: [DVec2; 2],
    trail_lens: [usize; 2],
    colors: [Color; 2],
    bonuses: usize,
    shapes: usize,
}

impl Renderer for Recorder {
    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        self.frames.push(FrameSummary {
            heads: [frame.worms[0].pos, frame.worms[1].pos],
            trail_lens: [frame.worms[0].trail.len(), frame.worms[1].trail.len()],
            colors: [frame.worms[0].color, frame.worms[1].color],
            bonuses: frame.bonuses.len(),
            shapes: display_list(frame).len(),
        });
        Ok(())
    }
}

fn quiet_settings() -> Settings {
    let mut settings = Settings::default();
    settings.rules.spawn_hits = 0;
    settings
}

#[test]
fn cruising_worm_samples_trail_every_twenty_units() {
    let mut game = Game::new(&quiet_settings(), Script::idle(3), Recorder::default(), ManualClock::new());
    game.state_mut().worms[0].speed = 10.0;
    game.run().expect("session runs");

    let frames = &game.renderer().frames;
    assert_eq!(frames.len(), 4);
    assert!((frames[1].heads[0] - DVec2::new(110.0, 100.0)).length() < 1e-9);
    assert_eq!(frames[1].trail_lens[0], 1);
    assert_eq!(frames[2].trail_lens[0], 1);
    assert_eq!(frames[3].trail_lens[0], 2);
}

#[test]
fn worm_wraps_at_field_edge() {
    let mut settings = quiet_settings();
    settings.spawns[0] = Spawn {
        pos: (995.0, 100.0),
        color: Color::RED,
    };
    let mut game = Game::new(&settings, Script::idle(1), Recorder::default(), ManualClock::new());
    game.state_mut().worms[0].speed = 10.0;
    game.run().expect("session runs");

    let worm = &game.state().worms[0];
    assert_eq!(worm.pos, DVec2::new(0.0, 100.0));
    assert_eq!(worm.trail(), &[DVec2::new(0.0, 100.0)]);
}

#[test]
fn spawn_immunity_shows_in_frames_then_expires() {
    // 15 s of immunity at 40 ms per tick is 375 ticks
    let mut game = Game::new(&quiet_settings(), Script::idle(400), Recorder::default(), ManualClock::new());
    game.run().expect("session runs");

    let frames = &game.renderer().frames;
    assert_eq!(frames[1].colors, [Color::GREEN, Color::GREEN]);
    assert_eq!(frames[400].colors, [Color::RED, Color::BLUE]);
}

#[test]
fn bonus_pickup_grants_immunity() {
    let mut game = Game::new(&quiet_settings(), Script::idle(2), Recorder::default(), ManualClock::new());
    {
        let state = game.state_mut();
        for worm in &mut state.worms {
            worm.immunity_until = Duration::ZERO;
        }
        state.worms[0].speed = 10.0;
        state.bonuses.push(Bonus::new(DVec2::new(111.0, 101.0), Duration::ZERO));
    }
    game.run().expect("session runs");

    let frames = &game.renderer().frames;
    assert_eq!(frames[0].bonuses, 1);
    assert_eq!(frames[1].bonuses, 0);
    assert_eq!(frames[1].colors[0], Color::GREEN);
    assert_eq!(frames[1].colors[1], Color::BLUE);
    assert_eq!(
        game.state().worms[0].immunity_until,
        Duration::ZERO + Duration::from_secs(15)
    );
}

#[test]
fn keyboard_controls_steer_player_two() {
    let mut script = Script::idle(0);
    script.0.push_back(vec![InputEvent::KeyDown(Key::W)]);
    for _ in 0..49 {
        script.0.push_back(Vec::new());
    }
    script.0.push_back(vec![InputEvent::KeyUp(Key::W), InputEvent::KeyDown(Key::D)]);
    for _ in 0..17 {
        script.0.push_back(Vec::new());
    }

    let mut game = Game::new(&quiet_settings(), script, Recorder::default(), ManualClock::new());
    game.run().expect("session runs");

    let worm = &game.state().worms[1];
    assert!((worm.speed - 10.0).abs() < 1e-9);
    // 18 ticks of turning right at 5 degrees
    assert!((worm.heading - 90.0).abs() < 1e-9);
    assert_eq!(game.state().worms[0].speed, 0.0);
}

#[test]
fn demo_session_runs_to_completion() {
    let mut settings = Settings::default();
    settings.rules.spawn_hits = 40;
    let input = DemoInput::new(11, Some(600));
    let mut game = Game::new(&settings, input, Recorder::default(), ManualClock::new());
    game.run().expect("session runs");

    assert_eq!(game.state().time_ticks, 600);
    let frames = &game.renderer().frames;
    assert_eq!(frames.len(), 601);
    assert!(frames.iter().all(|f| f.shapes > 0));
    for f in frames {
        for head in f.heads {
            assert!((0.0..=1000.0).contains(&head.x) && (0.0..=600.0).contains(&head.y));
        }
    }
    let scores: Vec<f64> = game.state().worms.iter().map(|w| w.score).collect();
    assert!(scores.iter().all(|&s| s > 0.0));
}

#[test]
fn display_list_covers_every_element() {
    let mut game = Game::new(&quiet_settings(), Script::idle(0), Recorder::default(), ManualClock::new());
    game.state_mut()
        .bonuses
        .push(Bonus::new(DVec2::new(300.0, 300.0), Duration::ZERO));
    game.render().expect("render");

    let state = game.state();
    let frame = Frame::new(state, Color::GREEN, 0);
    let shapes = display_list(&frame);
    let texts = shapes.iter().filter(|s| matches!(s, Shape::Text { .. })).count();
    assert_eq!(texts, 3);
    assert!(shapes.contains(&Shape::Circle {
        center: glam::IVec2::new(300, 300),
        radius: 4,
        color: Color::BONUS,
    }));
}
