use super::*;

/// Minimal scene-graph view consumed by [`QuadTree::insert_container`].
#[derive(Debug, Clone)]
pub enum SceneNode {
    /// A renderable. Only inserted when it carries a physical body.
    Object {
        value: u32,
        bounds: Rectangle,
        has_body: bool,
    },
    /// A nested container; its own bounds are never inserted.
    Container { children: Vec<SceneNode> },
}

impl QuadTree {
    pub fn insert_container(&mut self, children: &[SceneNode]) {
        for child in children {
            match child {
                SceneNode::Object {
                    value,
                    bounds,
                    has_body: true,
                } => self.insert(*value, *bounds),
                SceneNode::Object { .. } => {}
                SceneNode::Container { children } => self.insert_container(children),
            }
        }
    }
}
