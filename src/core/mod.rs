pub mod config;
pub mod error;
pub mod types;

pub use config::{FactionConfig, GalaxyConfig, StartConfig, WorldConfig};
pub use error::{GalaxyError, Result};
pub use types::{FactionId, LaneId, PlanetId, StarId, Vector2D};
