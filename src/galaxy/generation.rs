//! Galaxy generation entry point

use rand::Rng;

use crate::core::config::GalaxyConfig;
use crate::galaxy::lanes::build_lanes;
use crate::galaxy::map::Galaxy;
use crate::galaxy::planet::{generate_system, StarSystem};
use crate::galaxy::sampling::{center_star, place_core_stars, place_disk_stars};
use crate::galaxy::star::Star;

/// Generate stars, their systems and the lane graph
pub fn generate_galaxy<R: Rng + ?Sized>(config: &GalaxyConfig, rng: &mut R) -> Galaxy {
    let mut stars = Vec::with_capacity(config.max_stars);
    stars.push(center_star(config));

    place_core_stars(config, &mut stars, rng);
    place_disk_stars(config, &mut stars, rng);

    let star_systems = generate_systems(&stars, config, rng);
    let hyperspace_lanes = build_lanes(&stars, config);

    tracing::info!(
        "Generated galaxy: {} stars, {} systems, {} lanes",
        stars.len(),
        star_systems.len(),
        hyperspace_lanes.len()
    );

    Galaxy {
        stars,
        star_systems,
        hyperspace_lanes,
    }
}

/// One system per star, in star order
pub fn generate_systems<R: Rng + ?Sized>(stars: &[Star], config: &GalaxyConfig, rng: &mut R) -> Vec<StarSystem> {
    let mut next_planet_id = 0;
    stars
        .iter()
        .map(|star| {
            generate_system(
                star,
                config.min_planets..=config.max_planets,
                &mut next_planet_id,
                rng,
            )
        })
        .collect()
}
