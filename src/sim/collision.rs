//! Trail crossing between the two worms
//!
//! Each worm's most recent recorded segment is tested against the other
//! worm's trail, newest segment first. The crossed segment's start index is
//! where the victim's trail gets cut. Only recorded points take part, so a
//! crossing is seen one trail sample after it happens on screen.

use std::time::Duration;

use glam::DVec2;

use super::segment::{Segment, segments};
use super::tick::GameEvent;
use super::worm::Worm;

/// Index of the newest segment of `trail` crossed by `cutter`
///
/// The index is that of the segment's earlier endpoint. Trails with fewer
/// than two points have no segments and are never crossed.
pub fn find_crossing(cutter: &Segment, trail: &[DVec2]) -> Option<usize> {
    segments(trail)
        .enumerate()
        .rev()
        .find(|(_, seg)| cutter.crosses(seg))
        .map(|(i, _)| i)
}

/// Crossing indices found this tick, per victim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crossings {
    /// `cuts[p]` is where player `p`'s trail was crossed by the opponent
    pub cuts: [Option<usize>; 2],
}

/// Detect crossings in both directions without mutating anything
pub fn detect_crossings(worms: &[Worm; 2]) -> Crossings {
    let crossed = |cutter: &Worm, victim: &Worm| {
        cutter
            .latest_segment()
            .and_then(|seg| find_crossing(&seg, victim.trail()))
    };

    Crossings {
        cuts: [crossed(&worms[1], &worms[0]), crossed(&worms[0], &worms[1])],
    }
}

/// Detect crossings and cut every crossed worm that is not immune
pub fn resolve_crossings(worms: &mut [Worm; 2], now: Duration, events: &mut Vec<GameEvent>) {
    let crossings = detect_crossings(worms);

    for (player, cut) in crossings.cuts.into_iter().enumerate() {
        // A crossing at the first segment leaves nothing to cut
        let Some(index) = cut.filter(|&i| i > 0) else {
            continue;
        };
        let worm = &mut worms[player];

        if worm.is_immune(now) {
            log::debug!("Player {} crossed at {} but is immune", player + 1, index);
            events.push(GameEvent::CrossingIgnored { player, index });
        } else if worm.cut_trail(index) {
            log::info!("Player {} trail cut at segment {}", player + 1, index);
            events.push(GameEvent::TrailCut { player, index });
        }
    }
}
