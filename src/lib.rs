//! Galaxy Forge - procedural galaxy, faction and starting-system generation
//!
//! Generation runs in three stages, each fed by the previous one and all
//! drawing from one injected random source:
//!
//! 1. [`galaxy::generate_galaxy`] places stars on a spiral disk, gives each
//!    a planetary system and connects them with hyperspace lanes.
//! 2. [`faction::generate_initial_factions`] seeds factions at well-spaced
//!    home stars and grows non-overlapping territories.
//! 3. [`start::select_starting_system`] picks a habitable system away from
//!    every faction for the player.
//!
//! [`world::generate_world`] runs all three from a seed.

pub mod core;
pub mod faction;
pub mod galaxy;
pub mod start;
pub mod world;
