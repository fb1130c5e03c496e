//! Generation configuration with documented constants
//!
//! All magic numbers of the galaxy, faction and starting-system generators
//! are collected here. Every section deserializes with defaults, so a TOML
//! file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GalaxyError, Result};
use crate::core::types::Vector2D;

/// Complete configuration for one world generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub galaxy: GalaxyConfig,
    pub factions: FactionConfig,
    pub start: StartConfig,
}

/// Star placement, system contents and lane graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    // === DISK ===
    /// Radius of the galactic disk (galaxy units). The centre sits at (R, R).
    pub radius: f32,

    /// Hard cap on the number of stars, centre and core included
    pub max_stars: usize,

    /// Spiral-sampler attempts before generation stops early
    pub max_attempts: usize,

    /// Base separation between disk stars
    ///
    /// Scaled by `0.8 + 0.4 * distance_ratio`, so stars near the centre may
    /// pack slightly tighter than those on the rim.
    pub min_star_distance: f32,

    /// Exponent of the radial density falloff `exp(-k * d / R)`
    pub density_falloff: f32,

    /// Multiplier on the density before the accept/reject draw
    pub density_boost: f32,

    // === SPIRAL ARMS ===
    pub spiral_arms: u32,

    /// Turns of twist applied per unit of distance ratio
    pub arm_tightness: f32,

    /// Angular jitter (radians) at the rim; shrinks toward the centre
    pub arm_spread: f32,

    // === CORE CLUSTER ===
    pub core_star_count: usize,

    /// Core cluster radius as a fraction of the disk radius
    pub core_radius_fraction: f32,

    /// Pairwise separation enforced inside the core cluster
    pub core_min_separation: f32,

    /// Attempts allowed per requested core star
    pub core_attempt_multiplier: usize,

    /// Core type weights are doubled above this star size, halved otherwise
    pub core_size_threshold: f32,

    // === SYSTEMS ===
    pub min_planets: usize,
    pub max_planets: usize,

    // === LANES ===
    /// Only pairs at most this far apart are considered for extra lanes
    pub local_lane_distance: f32,

    /// Extra lanes allowed, as a fraction of the spanning-tree edge count
    pub extra_lane_ratio: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            radius: 3000.0,
            max_stars: 500,
            max_attempts: 5000,
            min_star_distance: 100.0,
            density_falloff: 0.7,
            density_boost: 2.0,

            spiral_arms: 3,
            arm_tightness: 0.5,
            arm_spread: 1.2,

            core_star_count: 20,
            core_radius_fraction: 0.1,
            core_min_separation: 80.0,
            core_attempt_multiplier: 10,
            core_size_threshold: 1.2,

            min_planets: 1,
            max_planets: 5,

            local_lane_distance: 200.0,
            extra_lane_ratio: 0.3,
        }
    }
}

impl GalaxyConfig {
    /// Fixed position of the galactic-centre black hole
    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.radius, self.radius)
    }

    /// Minimum distance a disk star must keep from every other star
    pub fn min_distance_at(&self, distance_ratio: f32) -> f32 {
        self.min_star_distance * (0.8 + 0.4 * distance_ratio)
    }
}

/// Faction count, territory growth and diplomacy weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionConfig {
    pub faction_count: usize,

    /// Random stars inspected when choosing each home system
    pub home_candidate_samples: usize,

    /// Territory target is `(total_stars - 1) / territory_divisor`
    pub territory_divisor: usize,

    // === EXPANSION ===
    pub nearby_radius: f32,
    pub adjacent_radius: f32,
    pub adjacent_weight: f32,
    pub nearby_weight: f32,
    pub avg_distance_weight: f32,
    pub min_distance_weight: f32,

    // === DIPLOMACY ===
    pub diplomatic_weight: f32,
    pub aggressive_weight: f32,
    pub same_type_bonus: f32,

    /// Two factions share a border when any of their systems are this close
    pub border_distance: f32,
    pub border_penalty: f32,
}

impl Default for FactionConfig {
    fn default() -> Self {
        Self {
            faction_count: 3,
            home_candidate_samples: 10,
            territory_divisor: 10,

            nearby_radius: 150.0,
            adjacent_radius: 100.0,
            adjacent_weight: 2000.0,
            nearby_weight: 500.0,
            avg_distance_weight: 2.0,
            min_distance_weight: 3.0,

            diplomatic_weight: 20.0,
            aggressive_weight: 15.0,
            same_type_bonus: 20.0,
            border_distance: 300.0,
            border_penalty: 15.0,
        }
    }
}

/// Player starting-system selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Distance the strict tier keeps from every faction system
    pub min_faction_distance: f32,

    /// Factor applied to `min_faction_distance` in the relaxed tier
    pub relaxed_distance_factor: f32,

    pub min_planets: usize,

    /// The strict tier picks uniformly among this many best-ranked systems
    pub top_candidates: usize,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            min_faction_distance: 300.0,
            relaxed_distance_factor: 0.75,
            min_planets: 2,
            top_candidates: 5,
        }
    }
}

impl WorldConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: WorldConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let galaxy = &self.galaxy;

        if galaxy.radius <= 0.0 {
            return Err(invalid(format!("galaxy.radius ({}) must be positive", galaxy.radius)));
        }

        if galaxy.max_stars == 0 {
            return Err(invalid("galaxy.max_stars must be at least 1".into()));
        }

        if galaxy.spiral_arms == 0 {
            return Err(invalid("galaxy.spiral_arms must be at least 1".into()));
        }

        if galaxy.min_planets == 0 || galaxy.min_planets > galaxy.max_planets {
            return Err(invalid(format!(
                "galaxy.min_planets ({}) must be in 1..=max_planets ({})",
                galaxy.min_planets, galaxy.max_planets
            )));
        }

        if !(0.0..=1.0).contains(&galaxy.core_radius_fraction) {
            return Err(invalid(format!(
                "galaxy.core_radius_fraction ({}) must be within [0, 1]",
                galaxy.core_radius_fraction
            )));
        }

        if galaxy.extra_lane_ratio < 0.0 {
            return Err(invalid("galaxy.extra_lane_ratio must not be negative".into()));
        }

        let factions = &self.factions;

        if factions.faction_count == 0 {
            return Err(invalid("factions.faction_count must be at least 1".into()));
        }

        if factions.territory_divisor == 0 {
            return Err(invalid("factions.territory_divisor must be at least 1".into()));
        }

        if factions.adjacent_radius > factions.nearby_radius {
            return Err(invalid(format!(
                "factions.adjacent_radius ({}) should be <= nearby_radius ({})",
                factions.adjacent_radius, factions.nearby_radius
            )));
        }

        let start = &self.start;

        if start.relaxed_distance_factor <= 0.0 || start.relaxed_distance_factor > 1.0 {
            return Err(invalid(format!(
                "start.relaxed_distance_factor ({}) must be within (0, 1]",
                start.relaxed_distance_factor
            )));
        }

        if start.top_candidates == 0 {
            return Err(invalid("start.top_candidates must be at least 1".into()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> GalaxyError {
    GalaxyError::InvalidConfig(message)
}
