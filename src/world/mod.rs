//! World pipeline: galaxy, then factions, then the player's start

pub mod output;
pub mod pipeline;

pub use output::{WorldSnapshot, WorldStats};
pub use pipeline::{generate_world, generate_world_in_background, World};
