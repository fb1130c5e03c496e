//! Galaxy - the generated star map and its read-only queries

use serde::{Deserialize, Serialize};

use crate::core::types::{StarId, GALACTIC_CENTER_ID};
use crate::galaxy::lanes::{is_connected, HyperspaceLane, LaneKind};
use crate::galaxy::planet::StarSystem;
use crate::galaxy::star::{Star, StarRegion};

/// Output of galaxy generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Galaxy {
    pub stars: Vec<Star>,
    pub star_systems: Vec<StarSystem>,
    pub hyperspace_lanes: Vec<HyperspaceLane>,
}

impl Galaxy {
    /// Stars are stored in id order, so lookup is by index
    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(id.0 as usize).filter(|s| s.id == id)
    }

    pub fn system(&self, id: StarId) -> Option<&StarSystem> {
        self.star_systems.get(id.0 as usize).filter(|s| s.id == id)
    }

    pub fn center_star(&self) -> Option<&Star> {
        self.star(GALACTIC_CENTER_ID)
    }

    /// Stars one lane away from `id`
    pub fn lane_neighbors(&self, id: StarId) -> Vec<StarId> {
        self.hyperspace_lanes
            .iter()
            .filter_map(|lane| lane.other_end(id))
            .collect()
    }

    /// True when every star can reach every other star by lane
    pub fn is_connected(&self) -> bool {
        let ids: Vec<StarId> = self.stars.iter().map(|s| s.id).collect();
        is_connected(&ids, &self.hyperspace_lanes)
    }

    pub fn count_region(&self, region: StarRegion) -> usize {
        self.stars.iter().filter(|s| s.region == region).count()
    }

    pub fn count_lanes(&self, kind: LaneKind) -> usize {
        self.hyperspace_lanes.iter().filter(|l| l.kind == kind).count()
    }

    pub fn planet_count(&self) -> usize {
        self.star_systems.iter().map(|s| s.planets.len()).sum()
    }
}
