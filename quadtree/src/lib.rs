pub mod config;
pub mod error;
pub mod quadrant;
pub mod quadtree;

pub use config::Config;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{QuadTree, SceneNode};
