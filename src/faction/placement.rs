//! Home system placement

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::types::Vector2D;
use crate::faction::expansion::{is_claimable, ClaimRegistry};
use crate::galaxy::star::Star;

/// Pick a home star far from the homes already chosen.
///
/// Draws up to `samples` random stars, skipping the galactic centre and
/// claimed stars, and keeps the one whose nearest existing home is
/// farthest away. When no sample is usable, falls back to the first
/// claimable star in scan order. `None` only when every star is taken.
pub fn choose_home_star<'a, R: Rng + ?Sized>(
    stars: &'a [Star],
    homes: &[Vector2D],
    registry: &ClaimRegistry,
    samples: usize,
    rng: &mut R,
) -> Option<&'a Star> {
    let mut best: Option<(&Star, f32)> = None;

    for _ in 0..samples {
        let Some(candidate) = stars.choose(rng) else {
            break;
        };
        if !is_claimable(candidate, registry) {
            continue;
        }

        let separation = nearest_home_distance(candidate.position, homes);
        if best.map_or(true, |(_, best_separation)| separation > best_separation) {
            best = Some((candidate, separation));
        }
    }

    best.map(|(star, _)| star)
        .or_else(|| stars.iter().find(|s| is_claimable(s, registry)))
}

/// Distance to the closest home, infinite when there are none yet
fn nearest_home_distance(position: Vector2D, homes: &[Vector2D]) -> f32 {
    homes
        .iter()
        .map(|home| home.distance(&position))
        .fold(f32::INFINITY, f32::min)
}
