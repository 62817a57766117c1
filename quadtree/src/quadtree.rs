use crate::config::Config;
use fxhash::FxHashMap;
use geometry::Rectangle;
use smallvec::SmallVec;

mod container;
mod core;
mod insert;
mod maintenance;
mod retrieve;

pub use container::SceneNode;

pub(crate) const ROOT: u32 = 0;

pub(crate) type NodeStack = SmallVec<[u32; 64]>;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Entity {
    pub(crate) value: u32,
    pub(crate) bounds: Rectangle,
}

/// One slot of the node arena. Released slots keep their entity buffer so
/// that reuse after a clear does not allocate.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) bounds: Rectangle,
    pub(crate) depth: u32,
    pub(crate) children: Option<[u32; 4]>,
    pub(crate) entities: Vec<Entity>,
}

impl Node {
    fn new(bounds: Rectangle, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            children: None,
            entities: Vec::new(),
        }
    }

    fn reset(&mut self, bounds: Rectangle, depth: u32) {
        self.bounds = bounds;
        self.depth = depth;
        self.children = None;
        self.entities.clear();
    }
}

/// Region quadtree over `u32` values keyed by their axis-aligned bounds.
///
/// Every value lives at exactly one node: the deepest node reachable through
/// quadrants that fully contain its bounds. Nodes are slots in a flat arena;
/// split allocates from `free_nodes` first and `clear` hands every non-root
/// slot back to it.
pub struct QuadTree {
    nodes: Vec<Node>,
    free_nodes: Vec<u32>,
    owner_map: FxHashMap<u32, u32>,
    config: Config,
}
