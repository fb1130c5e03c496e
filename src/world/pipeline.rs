//! Seeded end-to-end generation

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::WorldConfig;
use crate::core::error::{GalaxyError, Result};
use crate::core::types::{FactionId, StarId};
use crate::faction::{generate_initial_factions, Faction};
use crate::galaxy::{generate_galaxy, Galaxy, StarSystem};
use crate::start::{select_starting_system, SelectionTier};

/// A generated galaxy with its factions and the player's starting system
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    pub seed: u64,
    pub galaxy: Galaxy,
    pub factions: Vec<Faction>,
    pub starting_system_id: StarId,
    pub starting_tier: SelectionTier,
    pub generation_time_ms: u64,
}

impl World {
    pub fn starting_system(&self) -> Result<&StarSystem> {
        self.galaxy
            .system(self.starting_system_id)
            .ok_or(GalaxyError::StarNotFound(self.starting_system_id))
    }

    pub fn faction(&self, id: FactionId) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }

    /// Faction controlling `star`, if any
    pub fn controller_of(&self, star: StarId) -> Option<&Faction> {
        self.factions.iter().find(|f| f.controls(star))
    }
}

/// Run the whole pipeline from a single seed.
///
/// The same config and seed always produce the same world.
pub fn generate_world(config: &WorldConfig, seed: u64) -> Result<World> {
    config.validate()?;

    let start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let galaxy = generate_galaxy(&config.galaxy, &mut rng);
    let factions = generate_initial_factions(&galaxy.stars, &config.factions, &mut rng);

    let (starting_system_id, starting_tier) = {
        let chosen = select_starting_system(&galaxy.star_systems, &factions, &config.start, &mut rng)?;
        (chosen.system.id, chosen.tier)
    };

    let generation_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "World {} ready in {}ms: {} stars, {} factions, start at {} ({:?})",
        seed,
        generation_time_ms,
        galaxy.stars.len(),
        factions.len(),
        starting_system_id,
        starting_tier
    );

    Ok(World {
        seed,
        galaxy,
        factions,
        starting_system_id,
        starting_tier,
        generation_time_ms,
    })
}

/// Run [`generate_world`] on the blocking thread pool.
///
/// Generation is CPU-bound and cannot be cancelled once started.
pub async fn generate_world_in_background(config: WorldConfig, seed: u64) -> Result<World> {
    tokio::task::spawn_blocking(move || generate_world(&config, seed))
        .await
        .map_err(|e| GalaxyError::BackgroundTask(e.to_string()))?
}
