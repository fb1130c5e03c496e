//! Planetary resources and per-planet-type candidate tables

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::galaxy::planet::PlanetType;
use crate::galaxy::weighted::weighted_choice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Minerals,
    Energy,
    Food,
    Water,
    Gas,
    RareMetals,
    Crystals,
    ExoticMatter,
    DarkMatter,
}

/// Bulk commodities are plentiful; rare resources come in small deposits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    Bulk,
    Rare,
}

impl ResourceType {
    pub fn category(&self) -> ResourceCategory {
        match self {
            Self::Minerals | Self::Energy | Self::Food | Self::Water | Self::Gas => {
                ResourceCategory::Bulk
            }
            Self::RareMetals | Self::Crystals | Self::ExoticMatter | Self::DarkMatter => {
                ResourceCategory::Rare
            }
        }
    }
}

impl ResourceCategory {
    /// Deposit size range
    pub fn amount_range(&self) -> std::ops::Range<f32> {
        match self {
            Self::Bulk => 500.0..2000.0,
            Self::Rare => 50.0..300.0,
        }
    }

    /// Regeneration per tick range
    pub fn regeneration_range(&self) -> std::ops::Range<f32> {
        match self {
            Self::Bulk => 5.0..20.0,
            Self::Rare => 0.5..3.0,
        }
    }
}

/// One entry of a resource candidate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceTypeInfo {
    pub resource_type: ResourceType,
    pub probability: f32,
}

const fn entry(resource_type: ResourceType, probability: f32) -> ResourceTypeInfo {
    ResourceTypeInfo { resource_type, probability }
}

use ResourceType::*;

const TERRAN_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Food, 0.35), entry(Water, 0.3), entry(Minerals, 0.25), entry(RareMetals, 0.1)];
const OCEAN_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Water, 0.45), entry(Food, 0.35), entry(Crystals, 0.2)];
const DESERT_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Minerals, 0.4), entry(Energy, 0.35), entry(RareMetals, 0.15), entry(Crystals, 0.1)];
const ICE_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Water, 0.5), entry(Gas, 0.25), entry(Crystals, 0.15), entry(ExoticMatter, 0.1)];
const VOLCANIC_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Energy, 0.4), entry(Minerals, 0.35), entry(RareMetals, 0.25)];
const BARREN_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Minerals, 0.55), entry(RareMetals, 0.3), entry(DarkMatter, 0.15)];
const GAS_GIANT_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Gas, 0.55), entry(Energy, 0.3), entry(ExoticMatter, 0.1), entry(DarkMatter, 0.05)];
const TOXIC_RESOURCES: &[ResourceTypeInfo] =
    &[entry(Gas, 0.4), entry(Crystals, 0.3), entry(ExoticMatter, 0.2), entry(Minerals, 0.1)];

/// Candidate resources for a planet type
pub fn resource_candidates(planet_type: PlanetType) -> &'static [ResourceTypeInfo] {
    match planet_type {
        PlanetType::Terran => TERRAN_RESOURCES,
        PlanetType::Ocean => OCEAN_RESOURCES,
        PlanetType::Desert => DESERT_RESOURCES,
        PlanetType::Ice => ICE_RESOURCES,
        PlanetType::Volcanic => VOLCANIC_RESOURCES,
        PlanetType::Barren => BARREN_RESOURCES,
        PlanetType::GasGiant => GAS_GIANT_RESOURCES,
        PlanetType::Toxic => TOXIC_RESOURCES,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_type: ResourceType,
    pub amount: f32,
    pub regeneration_rate: f32,
}

impl Resource {
    /// Roll amount and regeneration within the type's category ranges
    pub fn roll<R: Rng + ?Sized>(resource_type: ResourceType, rng: &mut R) -> Self {
        let category = resource_type.category();
        Self {
            resource_type,
            amount: rng.gen_range(category.amount_range()),
            regeneration_rate: rng.gen_range(category.regeneration_range()),
        }
    }
}

/// Draw 1-3 distinct resources for a planet, without replacement
pub fn generate_resources<R: Rng + ?Sized>(planet_type: PlanetType, rng: &mut R) -> Vec<Resource> {
    let mut remaining: Vec<(ResourceType, f32)> = resource_candidates(planet_type)
        .iter()
        .map(|info| (info.resource_type, info.probability))
        .collect();

    let count = rng.gen_range(1..=3).min(remaining.len());
    let mut resources = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(&picked) = weighted_choice(rng, &remaining) else {
            break;
        };
        remaining.retain(|(ty, _)| *ty != picked);
        resources.push(Resource::roll(picked, rng));
    }

    resources
}
