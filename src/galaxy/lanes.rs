//! Hyperspace lane graph
//!
//! Kruskal's minimum spanning tree guarantees every star is reachable;
//! a budget of extra short lanes then adds local loops so the map is not
//! a pure tree.

use ahash::{AHashMap, AHashSet};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::config::GalaxyConfig;
use crate::core::types::{LaneId, StarId};
use crate::galaxy::star::Star;

/// Why a lane exists
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneKind {
    /// Part of the minimum spanning tree
    Spanning,
    /// Extra short lane added after the tree
    Local,
}

/// Undirected edge between two stars
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HyperspaceLane {
    pub id: LaneId,
    pub from_star_id: StarId,
    pub to_star_id: StarId,
    pub distance: f32,
    pub kind: LaneKind,
}

impl HyperspaceLane {
    pub fn connects(&self, star: StarId) -> bool {
        self.from_star_id == star || self.to_star_id == star
    }

    /// The far end of the lane as seen from `star`
    pub fn other_end(&self, star: StarId) -> Option<StarId> {
        if self.from_star_id == star {
            Some(self.to_star_id)
        } else if self.to_star_id == star {
            Some(self.from_star_id)
        } else {
            None
        }
    }
}

/// Disjoint-set forest over `0..n` with path compression and union by rank
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Compress the walked path onto the root
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`. Returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[derive(Clone, Copy, Debug)]
struct Edge {
    a: usize,
    b: usize,
    distance: f32,
}

/// Every unordered star pair, sorted by ascending distance.
///
/// Ties break on index so the order is identical across runs.
fn candidate_edges(stars: &[Star]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..stars.len())
        .into_par_iter()
        .flat_map_iter(|a| {
            let from = &stars[a];
            stars[a + 1..].iter().enumerate().map(move |(offset, to)| Edge {
                a,
                b: a + 1 + offset,
                distance: from.distance_to(to),
            })
        })
        .collect();

    edges.par_sort_unstable_by_key(|e| (OrderedFloat(e.distance), e.a, e.b));
    edges
}

/// Build the lane set: spanning tree first, then up to
/// `floor(tree_edges * extra_lane_ratio)` local lanes no longer than
/// `local_lane_distance`, shortest first.
pub fn build_lanes(stars: &[Star], config: &GalaxyConfig) -> Vec<HyperspaceLane> {
    if stars.len() < 2 {
        return Vec::new();
    }

    let edges = candidate_edges(stars);
    let mut sets = UnionFind::new(stars.len());
    let mut used: AHashSet<(usize, usize)> = AHashSet::with_capacity(stars.len() * 2);
    let mut lanes = Vec::with_capacity(stars.len() * 2);

    for edge in &edges {
        if sets.union(edge.a, edge.b) {
            used.insert((edge.a, edge.b));
            lanes.push(make_lane(lanes.len(), stars, edge, LaneKind::Spanning));

            if lanes.len() == stars.len() - 1 {
                break;
            }
        }
    }

    let spanning = lanes.len();
    let extra_budget = (spanning as f32 * config.extra_lane_ratio).floor() as usize;

    let local: Vec<Edge> = edges
        .iter()
        .take_while(|e| e.distance <= config.local_lane_distance)
        .filter(|e| !used.contains(&(e.a, e.b)))
        .take(extra_budget)
        .copied()
        .collect();

    for edge in &local {
        lanes.push(make_lane(lanes.len(), stars, edge, LaneKind::Local));
    }

    tracing::debug!(
        "Built {} lanes ({} spanning, {} local of {} allowed)",
        lanes.len(),
        spanning,
        local.len(),
        extra_budget
    );

    lanes
}

fn make_lane(index: usize, stars: &[Star], edge: &Edge, kind: LaneKind) -> HyperspaceLane {
    HyperspaceLane {
        id: LaneId(index as u32),
        from_star_id: stars[edge.a].id,
        to_star_id: stars[edge.b].id,
        distance: edge.distance,
        kind,
    }
}

/// True when `lanes` join every star in `star_ids` into one component.
///
/// Lanes touching unknown ids are ignored.
pub fn is_connected(star_ids: &[StarId], lanes: &[HyperspaceLane]) -> bool {
    if star_ids.len() <= 1 {
        return true;
    }

    let index: AHashMap<StarId, usize> = star_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let mut sets = UnionFind::new(star_ids.len());
    let mut components = star_ids.len();

    for lane in lanes {
        if let (Some(&a), Some(&b)) = (index.get(&lane.from_star_id), index.get(&lane.to_star_id)) {
            if sets.union(a, b) {
                components -= 1;
            }
        }
    }

    components == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vector2D;
    use crate::galaxy::star::{StarRegion, StarType};

    fn star_at(id: u32, x: f32, y: f32) -> Star {
        Star {
            id: StarId(id),
            position: Vector2D::new(x, y),
            name: format!("S{}", id),
            star_type: StarType::RedDwarf,
            size: 0.6,
            color: "#ff6b4a".to_string(),
            region: StarRegion::Disk,
        }
    }

    #[test]
    fn test_union_find() {
        let mut sets = UnionFind::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert!(sets.connected(0, 1));
        assert!(!sets.connected(1, 2));
        assert!(sets.union(1, 3));
        assert!(sets.connected(0, 2));
        assert!(!sets.connected(0, 4));
    }

    #[test]
    fn test_single_star_has_no_lanes() {
        let stars = vec![star_at(0, 0.0, 0.0)];
        assert!(build_lanes(&stars, &GalaxyConfig::default()).is_empty());
        assert!(is_connected(&[StarId(0)], &[]));
    }

    #[test]
    fn test_line_of_stars_forms_chain() {
        // Spacing 250 leaves nothing inside the local-lane radius
        let stars: Vec<Star> = (0..5).map(|i| star_at(i, i as f32 * 250.0, 0.0)).collect();
        let lanes = build_lanes(&stars, &GalaxyConfig::default());

        assert_eq!(lanes.len(), 4);
        assert!(lanes.iter().all(|l| l.kind == LaneKind::Spanning));
        assert!(lanes.iter().all(|l| (l.distance - 250.0).abs() < 1e-3));

        let ids: Vec<StarId> = stars.iter().map(|s| s.id).collect();
        assert!(is_connected(&ids, &lanes));
    }

    #[test]
    fn test_local_lanes_respect_budget() {
        // 4x4 grid with spacing 100: 15 tree edges, many short non-tree edges
        let mut stars = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                stars.push(star_at(stars.len() as u32, x as f32 * 100.0, y as f32 * 100.0));
            }
        }

        let lanes = build_lanes(&stars, &GalaxyConfig::default());
        let spanning = lanes.iter().filter(|l| l.kind == LaneKind::Spanning).count();
        let local = lanes.iter().filter(|l| l.kind == LaneKind::Local).count();

        assert_eq!(spanning, 15);
        assert_eq!(local, (15.0_f32 * 0.3).floor() as usize);
        assert!(lanes.iter().filter(|l| l.kind == LaneKind::Local).all(|l| l.distance <= 200.0));
    }

    #[test]
    fn test_no_duplicate_or_self_lanes() {
        let mut stars = Vec::new();
        for y in 0..6 {
            for x in 0..6 {
                stars.push(star_at(stars.len() as u32, x as f32 * 90.0, y as f32 * 110.0));
            }
        }

        let lanes = build_lanes(&stars, &GalaxyConfig::default());
        let mut seen = std::collections::HashSet::new();
        for lane in &lanes {
            assert_ne!(lane.from_star_id, lane.to_star_id);
            let key = (lane.from_star_id.min(lane.to_star_id), lane.from_star_id.max(lane.to_star_id));
            assert!(seen.insert(key), "duplicate lane {:?}", key);
        }
    }

    #[test]
    fn test_disconnected_detection() {
        let ids = [StarId(0), StarId(1), StarId(2)];
        let lane = HyperspaceLane {
            id: LaneId(0),
            from_star_id: StarId(0),
            to_star_id: StarId(1),
            distance: 10.0,
            kind: LaneKind::Spanning,
        };
        assert!(!is_connected(&ids, &[lane]));
    }

    #[test]
    fn test_other_end() {
        let lane = HyperspaceLane {
            id: LaneId(0),
            from_star_id: StarId(3),
            to_star_id: StarId(8),
            distance: 10.0,
            kind: LaneKind::Local,
        };
        assert_eq!(lane.other_end(StarId(3)), Some(StarId(8)));
        assert_eq!(lane.other_end(StarId(8)), Some(StarId(3)));
        assert_eq!(lane.other_end(StarId(1)), None);
        assert!(lane.connects(StarId(8)));
    }
}
