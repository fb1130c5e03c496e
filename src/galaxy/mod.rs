//! Galaxy generation
//!
//! Places stars with a density-biased spiral sampler, fills each star with
//! a planetary system and joins everything with a connected lane graph.

pub mod generation;
pub mod lanes;
pub mod map;
pub mod naming;
pub mod planet;
pub mod resource;
pub mod sampling;
pub mod star;
pub mod weighted;

pub use generation::generate_galaxy;
pub use lanes::{HyperspaceLane, LaneKind};
pub use map::Galaxy;
pub use naming::{generate_planet_name, generate_star_name};
pub use planet::{Planet, PlanetType, StarSystem};
pub use resource::{Resource, ResourceType};
pub use star::{Star, StarRegion, StarType};
pub use weighted::weighted_choice;
