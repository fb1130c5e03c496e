//! Stars and the stellar type table

use serde::{Deserialize, Serialize};

use crate::core::types::{StarId, Vector2D};

/// Stellar classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarType {
    RedDwarf,
    YellowDwarf,
    WhiteDwarf,
    BlueGiant,
    RedGiant,
    Neutron,
    Pulsar,
    BlackHole,
}

impl StarType {
    /// Compact remnants that cannot host a starting colony
    pub fn is_exotic(&self) -> bool {
        matches!(self, Self::Neutron | Self::Pulsar | Self::BlackHole)
    }

    /// Stars named with catalog designations instead of proper names
    pub fn uses_catalog_name(&self) -> bool {
        matches!(self, Self::Neutron | Self::Pulsar)
    }

    pub fn info(&self) -> &'static StarTypeInfo {
        STAR_TYPES
            .iter()
            .find(|info| info.star_type == *self)
            .unwrap_or(&STAR_TYPES[0])
    }
}

/// One entry of the stellar type distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTypeInfo {
    pub star_type: StarType,
    pub probability: f32,
    pub color: &'static str,
    pub size: f32,
}

pub static STAR_TYPES: [StarTypeInfo; 8] = [
    StarTypeInfo { star_type: StarType::RedDwarf, probability: 0.35, color: "#ff6b4a", size: 0.6 },
    StarTypeInfo { star_type: StarType::YellowDwarf, probability: 0.25, color: "#ffe66d", size: 1.0 },
    StarTypeInfo { star_type: StarType::WhiteDwarf, probability: 0.12, color: "#e8f1ff", size: 0.5 },
    StarTypeInfo { star_type: StarType::BlueGiant, probability: 0.08, color: "#6ba4ff", size: 1.8 },
    StarTypeInfo { star_type: StarType::RedGiant, probability: 0.1, color: "#ff4136", size: 1.6 },
    StarTypeInfo { star_type: StarType::Neutron, probability: 0.05, color: "#c9d6ff", size: 0.3 },
    StarTypeInfo { star_type: StarType::Pulsar, probability: 0.03, color: "#9b5de5", size: 0.35 },
    StarTypeInfo { star_type: StarType::BlackHole, probability: 0.02, color: "#1a1a2e", size: 1.3 },
];

/// Name of the black hole at the galactic centre
pub const CENTER_STAR_NAME: &str = "Sagittarius A*";

/// Display size of the central black hole
pub const CENTER_STAR_SIZE: f32 = 3.0;

/// Where in the galaxy a star was generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarRegion {
    Center,
    Core,
    Disk,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub position: Vector2D,
    pub name: String,
    pub star_type: StarType,
    pub size: f32,
    pub color: String,
    pub region: StarRegion,
}

impl Star {
    pub fn distance_to(&self, other: &Star) -> f32 {
        self.position.distance(&other.position)
    }
}

/// Plain weight table over all stellar types
pub fn star_weights() -> Vec<(StarType, f32)> {
    STAR_TYPES.iter().map(|info| (info.star_type, info.probability)).collect()
}

/// Weight table for the core cluster: large stars doubled, small halved.
/// Not renormalised.
pub fn core_star_weights(size_threshold: f32) -> Vec<(StarType, f32)> {
    STAR_TYPES
        .iter()
        .map(|info| {
            let factor = if info.size > size_threshold { 2.0 } else { 0.5 };
            (info.star_type, info.probability * factor)
        })
        .collect()
}
