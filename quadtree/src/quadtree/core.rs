use super::*;
use crate::error::{validate_bounds, QuadtreeResult};
use crate::quadrant::child_bounds;

impl QuadTree {
    pub fn new(bounding_box: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, Config::default())
    }

    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_bounds(&bounding_box)?;
        let mut nodes = Vec::with_capacity(config.pool_size.max(1));
        nodes.push(Node::new(bounding_box, 0));
        Ok(Self {
            nodes,
            free_nodes: Vec::new(),
            owner_map: FxHashMap::default(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Rectangle {
        self.nodes[ROOT as usize].bounds
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.owner_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner_map.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.owner_map.contains_key(&value)
    }

    pub fn has_children(&self) -> bool {
        self.nodes[ROOT as usize].children.is_some()
    }

    /// True when the tree holds nothing and has not been split.
    pub fn is_prunable(&self) -> bool {
        let root = &self.nodes[ROOT as usize];
        root.children.is_none() && root.entities.is_empty()
    }

    /// Nodes currently linked into the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_nodes.len()
    }

    /// Arena slots waiting on the free-list.
    pub fn free_node_count(&self) -> usize {
        self.free_nodes.len()
    }

    /// Depth of the node holding `value`.
    pub fn depth_of(&self, value: u32) -> Option<u32> {
        self.owner_map
            .get(&value)
            .map(|&node| self.nodes[node as usize].depth)
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            bounding_boxes.push(node.bounds);
            if let Some(children) = node.children {
                stack.extend(children.iter().rev().copied());
            }
        }
    }

    pub(crate) fn alloc_node(&mut self, bounds: Rectangle, depth: u32) -> u32 {
        match self.free_nodes.pop() {
            Some(idx) => {
                self.nodes[idx as usize].reset(bounds, depth);
                idx
            }
            None => {
                self.nodes.push(Node::new(bounds, depth));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    pub(crate) fn release_node(&mut self, node_idx: u32) {
        let node = &mut self.nodes[node_idx as usize];
        node.children = None;
        node.entities.clear();
        self.free_nodes.push(node_idx);
    }

    pub(crate) fn split(&mut self, node_idx: u32) {
        let (bounds, depth) = {
            let node = &self.nodes[node_idx as usize];
            (node.bounds, node.depth)
        };
        log::trace!("splitting quadtree node {} at depth {}", node_idx, depth);
        let mut children = [0u32; 4];
        for (quadrant, child) in children.iter_mut().enumerate() {
            *child = self.alloc_node(child_bounds(&bounds, quadrant), depth + 1);
        }
        self.nodes[node_idx as usize].children = Some(children);
    }
}
