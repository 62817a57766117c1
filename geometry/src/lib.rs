pub mod ellipse;
pub mod error;
pub mod line;
pub mod polygon;
pub mod rectangle;
pub mod shapes;
pub mod transform;
pub mod vector;

pub use ellipse::Ellipse;
pub use error::{GeometryError, GeometryResult};
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use shapes::{Bounded, Shape};
pub use transform::Transform2d;
pub use vector::Vector;
