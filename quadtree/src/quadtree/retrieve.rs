use super::*;
use crate::quadrant::quadrant_index;
use geometry::Bounded;

impl QuadTree {
    /// Appends every candidate that may overlap `bounds` to `candidates`.
    ///
    /// Never misses an overlapping value; values that merely share a node with
    /// the query are returned as well.
    pub fn retrieve(&self, bounds: &Rectangle, candidates: &mut Vec<u32>) {
        self.retrieve_with(bounds, |value| candidates.push(value));
    }

    pub fn retrieve_object<B: Bounded>(&self, object: &B, candidates: &mut Vec<u32>) {
        self.retrieve(&object.bounds(), candidates);
    }

    pub fn retrieve_with<F>(&self, bounds: &Rectangle, mut f: F)
    where
        F: FnMut(u32),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            for entity in &node.entities {
                f(entity.value);
            }
            if let Some(children) = node.children {
                match quadrant_index(&node.bounds, bounds) {
                    Some(quadrant) => stack.push(children[quadrant]),
                    None => stack.extend(children.iter().rev().copied()),
                }
            }
        }
    }
}
