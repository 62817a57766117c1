use super::*;
use crate::quadrant::quadrant_index;
use geometry::Bounded;

impl QuadTree {
    /// Inserts `value` with the given bounds. Inserting a value that is
    /// already stored moves it.
    pub fn insert(&mut self, value: u32, bounds: Rectangle) {
        if self.owner_map.contains_key(&value) {
            self.remove(value);
        }
        self.insert_into(ROOT, Entity { value, bounds });
    }

    pub fn insert_object<B: Bounded>(&mut self, value: u32, object: &B) {
        self.insert(value, object.bounds());
    }

    /// Alias of [`QuadTree::insert`] for callers updating a moving value.
    pub fn relocate(&mut self, value: u32, bounds: Rectangle) {
        self.insert(value, bounds);
    }

    pub(crate) fn insert_into(&mut self, start: u32, entity: Entity) {
        let mut node_idx = start;
        while let Some(children) = self.nodes[node_idx as usize].children {
            match quadrant_index(&self.nodes[node_idx as usize].bounds, &entity.bounds) {
                Some(quadrant) => node_idx = children[quadrant],
                None => break,
            }
        }

        self.nodes[node_idx as usize].entities.push(entity);
        self.owner_map.insert(entity.value, node_idx);

        let node = &self.nodes[node_idx as usize];
        if node.entities.len() > self.config.max_objects_per_node
            && node.depth < self.config.max_depth
        {
            if node.children.is_none() {
                self.split(node_idx);
            }
            self.redistribute(node_idx);
        }
    }

    // Push every entity of `node_idx` that fits a single child down into it.
    // Straddlers stay put.
    fn redistribute(&mut self, node_idx: u32) {
        let Some(children) = self.nodes[node_idx as usize].children else {
            return;
        };
        let bounds = self.nodes[node_idx as usize].bounds;
        let mut i = 0;
        while i < self.nodes[node_idx as usize].entities.len() {
            let entity = self.nodes[node_idx as usize].entities[i];
            match quadrant_index(&bounds, &entity.bounds) {
                Some(quadrant) => {
                    self.nodes[node_idx as usize].entities.remove(i);
                    self.insert_into(children[quadrant], entity);
                }
                None => i += 1,
            }
        }
    }
}
