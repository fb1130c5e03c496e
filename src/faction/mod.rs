//! Faction generation
//!
//! Places faction home systems far apart, grows each faction's territory
//! greedily from a shared claim registry and seeds diplomatic relations
//! from traits and geography.

pub mod diplomacy;
pub mod expansion;
pub mod generation;
pub mod placement;
pub mod types;

pub use diplomacy::{compute_relations, relation_score};
pub use expansion::{expand_territory, territory_target, ClaimRegistry};
pub use generation::generate_initial_factions;
pub use placement::choose_home_star;
pub use types::{Faction, FactionTraits, FactionType, RelationStance};
