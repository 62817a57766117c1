use super::*;
use crate::error::{validate_bounds, QuadtreeResult};
use crate::quadrant::quadrant_index;

impl QuadTree {
    /// Empties the tree and hands every non-root node back to the free-list.
    /// With `new_bounds`, the root is re-bounded (e.g. for a new level).
    pub fn clear(&mut self, new_bounds: Option<Rectangle>) -> QuadtreeResult<()> {
        if let Some(bounds) = new_bounds {
            validate_bounds(&bounds)?;
            log::debug!("quadtree re-bounded to {:?}", bounds);
        }
        let root_bounds = new_bounds.unwrap_or(self.nodes[ROOT as usize].bounds);

        self.free_nodes.clear();
        for node_idx in (1..self.nodes.len() as u32).rev() {
            self.release_node(node_idx);
        }
        self.nodes[ROOT as usize].reset(root_bounds, 0);
        self.owner_map.clear();
        log::trace!("quadtree cleared, {} nodes pooled", self.free_nodes.len());
        Ok(())
    }

    /// Removes `value`, collapsing any quadrant sets left empty along its path.
    pub fn remove(&mut self, value: u32) -> bool {
        let Some(owner) = self.owner_map.remove(&value) else {
            return false;
        };
        let entities = &mut self.nodes[owner as usize].entities;
        let Some(position) = entities.iter().position(|entity| entity.value == value) else {
            return false;
        };
        let entity = entities.remove(position);

        let mut path = NodeStack::new();
        let mut node_idx = ROOT;
        while node_idx != owner {
            path.push(node_idx);
            let node = &self.nodes[node_idx as usize];
            match (node.children, quadrant_index(&node.bounds, &entity.bounds)) {
                (Some(children), Some(quadrant)) => node_idx = children[quadrant],
                _ => break,
            }
        }
        while let Some(parent) = path.pop() {
            if !self.collapse_if_empty(parent) {
                break;
            }
        }
        true
    }

    // Returns the four children of `node_idx` to the free-list if all of them
    // are empty leaves. The node keeps its straddlers and may end up a leaf
    // over `max_objects_per_node`; the next insert that lands there splits it
    // again.
    fn collapse_if_empty(&mut self, node_idx: u32) -> bool {
        let Some(children) = self.nodes[node_idx as usize].children else {
            return false;
        };
        let prunable = children.iter().all(|&child| {
            let child = &self.nodes[child as usize];
            child.children.is_none() && child.entities.is_empty()
        });
        if !prunable {
            return false;
        }
        for child in children {
            self.release_node(child);
        }
        self.nodes[node_idx as usize].children = None;
        true
    }
}
