pub mod body;
pub mod collision_type;
pub mod error;
pub mod response;
pub mod sat;
pub mod world;

pub use body::Body;
pub use collision_type::CollisionType;
pub use error::{CollisionError, CollisionResult};
pub use response::CollisionResponse;
pub use sat::test_shapes;
pub use world::{Collidable, World, WorldConfig};
