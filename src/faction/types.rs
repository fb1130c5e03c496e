//! Faction - autonomous political entity and its archetype tables

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::types::{FactionId, StarId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub faction_type: FactionType,
    pub traits: FactionTraits,
    pub color: String,
    pub home_system_id: StarId,

    // Always contains home_system_id
    pub controlled_systems: BTreeSet<StarId>,

    // -100 to +100, one entry per other faction
    pub relations: BTreeMap<FactionId, f32>,
}

impl Faction {
    pub fn controls(&self, system: StarId) -> bool {
        self.controlled_systems.contains(&system)
    }

    pub fn relation_with(&self, other: FactionId) -> Option<f32> {
        self.relations.get(&other).copied()
    }

    pub fn stance_toward(&self, other: FactionId) -> Option<RelationStance> {
        self.relation_with(other).map(RelationStance::from_score)
    }

    pub fn territory_size(&self) -> usize {
        self.controlled_systems.len()
    }
}

/// The seven faction archetypes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactionType {
    Corporate,
    Militaristic,
    Theocratic,
    Technocratic,
    Federation,
    Imperial,
    Nomadic,
}

impl FactionType {
    pub const ALL: [FactionType; 7] = [
        Self::Corporate,
        Self::Militaristic,
        Self::Theocratic,
        Self::Technocratic,
        Self::Federation,
        Self::Imperial,
        Self::Nomadic,
    ];

    /// Uniform draw over all archetypes; repeats are allowed
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Additive trait adjustments applied on top of the random base
    pub fn trait_adjustments(&self) -> FactionTraits {
        let zero = FactionTraits::default();
        match self {
            Self::Corporate => FactionTraits { economic: 0.3, diplomatic: 0.2, ..zero },
            Self::Militaristic => FactionTraits { aggressive: 0.3, expansionist: 0.2, ..zero },
            Self::Theocratic => FactionTraits { expansionist: 0.2, diplomatic: -0.1, aggressive: 0.1, ..zero },
            Self::Technocratic => FactionTraits { technological: 0.3, economic: 0.1, ..zero },
            Self::Federation => FactionTraits { diplomatic: 0.3, economic: 0.1, aggressive: -0.2, ..zero },
            Self::Imperial => FactionTraits { expansionist: 0.3, aggressive: 0.1, diplomatic: -0.1, ..zero },
            Self::Nomadic => FactionTraits { aggressive: 0.2, expansionist: 0.1, economic: -0.1, ..zero },
        }
    }

    fn name_parts(&self) -> (&'static [&'static str; 5], &'static [&'static str; 5]) {
        match self {
            Self::Corporate => (
                &["Stellar", "Nova", "Quantum", "Apex", "Helix"],
                &["Consortium", "Syndicate", "Holdings", "Combine", "Trade Union"],
            ),
            Self::Militaristic => (
                &["Iron", "Crimson", "Steel", "Vanguard", "Obsidian"],
                &["Legion", "Armada", "Command", "Hegemony", "Warhost"],
            ),
            Self::Theocratic => (
                &["Holy", "Radiant", "Eternal", "Celestial", "Sacred"],
                &["Covenant", "Order", "Communion", "Ascendancy", "Synod"],
            ),
            Self::Technocratic => (
                &["Cyber", "Logic", "Neural", "Axiom", "Vector"],
                &["Collective", "Directorate", "Institute", "Network", "Assembly"],
            ),
            Self::Federation => (
                &["United", "Free", "Allied", "Galactic", "Common"],
                &["Federation", "Republic", "Alliance", "Commonwealth", "Union"],
            ),
            Self::Imperial => (
                &["Grand", "Royal", "Sovereign", "Imperial", "Golden"],
                &["Empire", "Dominion", "Throne", "Realm", "Dynasty"],
            ),
            Self::Nomadic => (
                &["Wandering", "Drifting", "Void", "Starborn", "Roaming"],
                &["Clans", "Flotilla", "Caravan", "Tribes", "Fleet"],
            ),
        }
    }

    /// Archetype-themed prefix + suffix, e.g. "Iron Legion"
    pub fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let (prefixes, suffixes) = self.name_parts();
        let prefix = prefixes.choose(rng).copied().unwrap_or("Free");
        let suffix = suffixes.choose(rng).copied().unwrap_or("Union");
        format!("{} {}", prefix, suffix)
    }
}

/// Generation-time behavior traits, each in [0, 1]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FactionTraits {
    pub expansionist: f32,
    pub diplomatic: f32,
    pub aggressive: f32,
    pub technological: f32,
    pub economic: f32,
}

impl FactionTraits {
    /// Base values uniform in [0.3, 0.7], archetype adjustments, clamp to [0, 1]
    pub fn generate<R: Rng + ?Sized>(faction_type: FactionType, rng: &mut R) -> Self {
        let adjust = faction_type.trait_adjustments();
        let mut roll = |delta: f32| (rng.gen_range(0.3_f32..=0.7) + delta).clamp(0.0, 1.0);

        Self {
            expansionist: roll(adjust.expansionist),
            diplomatic: roll(adjust.diplomatic),
            aggressive: roll(adjust.aggressive),
            technological: roll(adjust.technological),
            economic: roll(adjust.economic),
        }
    }

    pub fn values(&self) -> [f32; 5] {
        [
            self.expansionist,
            self.diplomatic,
            self.aggressive,
            self.technological,
            self.economic,
        ]
    }
}

/// Display palette; factions prefer colours no one else has taken
pub const FACTION_COLORS: [&str; 10] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c",
    "#fabebe", "#008080",
];

/// Random unused palette colour, or any palette colour once all are taken
pub fn pick_color<R: Rng + ?Sized>(used: &[String], rng: &mut R) -> String {
    let unused: Vec<&str> = FACTION_COLORS
        .iter()
        .copied()
        .filter(|c| !used.iter().any(|u| u.as_str() == *c))
        .collect();

    let pool: &[&str] = if unused.is_empty() { &FACTION_COLORS } else { &unused };
    pool.choose(rng).copied().unwrap_or(FACTION_COLORS[0]).to_string()
}

/// Coarse reading of a relation score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationStance {
    Allied,
    Friendly,
    Neutral,
    Hostile,
    Belligerent,
}

impl RelationStance {
    pub fn from_score(score: f32) -> Self {
        if score >= 50.0 {
            Self::Allied
        } else if score >= 15.0 {
            Self::Friendly
        } else if score > -15.0 {
            Self::Neutral
        } else if score > -50.0 {
            Self::Hostile
        } else {
            Self::Belligerent
        }
    }
}
