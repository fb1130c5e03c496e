//! Star placement: galactic centre, core cluster and spiral disk
//!
//! Disk positions come from a density-biased rejection sampler followed by
//! a logarithmic-spiral transform. Every placement is checked against the
//! stars already placed, so the output order matters: centre first, then
//! the core cluster, then the disk.

use rand::Rng;
use std::f32::consts::TAU;

use crate::core::config::GalaxyConfig;
use crate::core::types::{StarId, Vector2D};
use crate::galaxy::naming::generate_star_name;
use crate::galaxy::star::{
    core_star_weights, star_weights, Star, StarRegion, StarType, CENTER_STAR_NAME,
    CENTER_STAR_SIZE,
};
use crate::galaxy::weighted::weighted_choice;

/// The black hole at the exact galactic centre
pub fn center_star(config: &GalaxyConfig) -> Star {
    Star {
        id: StarId(0),
        position: config.center(),
        name: CENTER_STAR_NAME.to_string(),
        star_type: StarType::BlackHole,
        size: CENTER_STAR_SIZE,
        color: StarType::BlackHole.info().color.to_string(),
        region: StarRegion::Center,
    }
}

/// Place up to `core_star_count` stars uniformly inside the core disk,
/// keeping `core_min_separation` from every star already placed.
///
/// Gives up after `core_star_count * core_attempt_multiplier` attempts.
pub fn place_core_stars<R: Rng + ?Sized>(config: &GalaxyConfig, stars: &mut Vec<Star>, rng: &mut R) {
    let center = config.center();
    let core_radius = config.radius * config.core_radius_fraction;
    let weights = core_star_weights(config.core_size_threshold);
    let max_attempts = config.core_star_count * config.core_attempt_multiplier;

    let mut placed = 0;
    let mut attempts = 0;

    while placed < config.core_star_count && attempts < max_attempts && stars.len() < config.max_stars {
        attempts += 1;

        // sqrt keeps the density uniform over the disk area
        let distance = core_radius * rng.gen::<f32>().sqrt();
        let angle = rng.gen_range(0.0..TAU);
        let position = Vector2D::from_polar(center, distance, angle);

        if is_crowded(stars, position, config.core_min_separation) {
            continue;
        }

        let star_type = weighted_choice(rng, &weights)
            .copied()
            .unwrap_or(StarType::YellowDwarf);
        let star = make_star(stars.len(), position, star_type, StarRegion::Core, rng);
        stars.push(star);
        placed += 1;
    }

    tracing::debug!(
        "Placed {}/{} core stars in {} attempts",
        placed,
        config.core_star_count,
        attempts
    );
}

/// Fill the disk until `max_stars` stars exist or `max_attempts` draws
/// have been spent. Callers must tolerate fewer stars than requested.
pub fn place_disk_stars<R: Rng + ?Sized>(config: &GalaxyConfig, stars: &mut Vec<Star>, rng: &mut R) {
    let center = config.center();
    let weights = star_weights();
    let mut attempts = 0;

    while stars.len() < config.max_stars && attempts < config.max_attempts {
        attempts += 1;

        let Some(position) = sample_spiral_position(config, rng) else {
            continue;
        };

        let distance_ratio = position.distance(&center) / config.radius;
        if distance_ratio > 1.0 {
            continue;
        }

        if is_crowded(stars, position, config.min_distance_at(distance_ratio)) {
            continue;
        }

        let star_type = weighted_choice(rng, &weights)
            .copied()
            .unwrap_or(StarType::YellowDwarf);
        let star = make_star(stars.len(), position, star_type, StarRegion::Disk, rng);
        stars.push(star);
    }

    if stars.len() < config.max_stars {
        tracing::debug!(
            "Disk sampling exhausted after {} attempts with {}/{} stars",
            attempts,
            stars.len(),
            config.max_stars
        );
    }
}

/// One draw of the spiral sampler. `None` when the density test rejects it.
pub fn sample_spiral_position<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> Option<Vector2D> {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(0.0..=config.radius);
    let distance_ratio = distance / config.radius;

    let density = (-config.density_falloff * distance_ratio).exp() * config.density_boost;
    if rng.gen::<f32>() > density {
        return None;
    }

    let arm_width = TAU / config.spiral_arms as f32;
    let arm = ((angle / arm_width) as u32).min(config.spiral_arms - 1);

    let twist = config.arm_tightness * TAU * distance_ratio;
    let jitter = (rng.gen::<f32>() - 0.5) * config.arm_spread * distance_ratio;
    let spiral_angle = arm as f32 * arm_width + twist + jitter;

    Some(Vector2D::from_polar(config.center(), distance, spiral_angle))
}

fn is_crowded(stars: &[Star], position: Vector2D, min_distance: f32) -> bool {
    stars.iter().any(|s| s.position.distance(&position) < min_distance)
}

fn make_star<R: Rng + ?Sized>(
    index: usize,
    position: Vector2D,
    star_type: StarType,
    region: StarRegion,
    rng: &mut R,
) -> Star {
    let info = star_type.info();
    Star {
        id: StarId(index as u32),
        position,
        name: generate_star_name(star_type, rng),
        star_type,
        size: info.size * rng.gen_range(0.8..1.2),
        color: info.color.to_string(),
        region,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_center_star() {
        let config = GalaxyConfig::default();
        let star = center_star(&config);
        assert_eq!(star.id, StarId(0));
        assert_eq!(star.position, Vector2D::new(3000.0, 3000.0));
        assert_eq!(star.star_type, StarType::BlackHole);
        assert_eq!(star.name, "Sagittarius A*");
    }

    #[test]
    fn test_core_stars_within_core_and_separated() {
        let config = GalaxyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut stars = vec![center_star(&config)];
        place_core_stars(&config, &mut stars, &mut rng);

        assert!(stars.len() > 1);
        assert!(stars.len() <= 1 + config.core_star_count);

        let core_radius = config.radius * config.core_radius_fraction;
        for (i, a) in stars.iter().enumerate() {
            if a.region == StarRegion::Core {
                assert!(a.position.distance(&config.center()) <= core_radius + 1e-3);
            }
            for b in &stars[i + 1..] {
                assert!(a.distance_to(b) >= config.core_min_separation);
            }
        }
    }

    #[test]
    fn test_spiral_samples_stay_inside_disk() {
        let config = GalaxyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut accepted = 0;

        for _ in 0..2_000 {
            if let Some(p) = sample_spiral_position(&config, &mut rng) {
                accepted += 1;
                assert!(p.distance(&config.center()) <= config.radius + 0.5);
            }
        }

        // exp(-0.7) * 2 > 0.99, so nearly every draw is accepted
        assert!(accepted > 1_900);
    }

    #[test]
    fn test_disk_respects_position_dependent_separation() {
        let config = GalaxyConfig { max_stars: 200, ..GalaxyConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut stars = vec![center_star(&config)];
        place_core_stars(&config, &mut stars, &mut rng);
        place_disk_stars(&config, &mut stars, &mut rng);

        assert!(stars.len() <= 200);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.id, StarId(i as u32));
            if star.region != StarRegion::Disk {
                continue;
            }
            let ratio = star.position.distance(&config.center()) / config.radius;
            let min = config.min_distance_at(ratio);
            for earlier in &stars[..i] {
                assert!(star.distance_to(earlier) >= min);
            }
        }
    }

    #[test]
    fn test_attempt_cap_stops_generation() {
        let config = GalaxyConfig { max_attempts: 10, ..GalaxyConfig::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut stars = vec![center_star(&config)];
        place_disk_stars(&config, &mut stars, &mut rng);
        assert!(stars.len() <= 11);
    }
}
