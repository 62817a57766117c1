use std::fmt::Debug;

use crate::ellipse::Ellipse;
use crate::error::GeometryResult;
use crate::line::Line;
use crate::polygon::Polygon;
use crate::rectangle::Rectangle;
use crate::vector::Vector;

/// Anything that can report an axis-aligned bounding rectangle.
pub trait Bounded: Debug {
    fn bounds(&self) -> Rectangle;
}

/// A convex collision shape, positioned relative to its owning body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Line(Line),
    Ellipse(Ellipse),
}

impl Shape {
    pub fn pos(&self) -> Vector {
        match self {
            Shape::Polygon(polygon) => polygon.pos(),
            Shape::Line(line) => line.pos(),
            Shape::Ellipse(ellipse) => ellipse.pos(),
        }
    }

    pub fn bounds(&self) -> Rectangle {
        match self {
            Shape::Polygon(polygon) => polygon.bounds(),
            Shape::Line(line) => line.bounds(),
            Shape::Ellipse(ellipse) => ellipse.bounds(),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        match self {
            Shape::Polygon(polygon) => polygon.translate(dx, dy),
            Shape::Line(line) => line.translate(dx, dy),
            Shape::Ellipse(ellipse) => ellipse.translate(dx, dy),
        }
    }

    pub fn rotate(&mut self, angle: f32) {
        match self {
            Shape::Polygon(polygon) => polygon.rotate(angle),
            Shape::Line(line) => line.rotate(angle),
            Shape::Ellipse(ellipse) => ellipse.rotate(angle),
        }
    }

    pub fn scale(&mut self, x: f32, y: f32) -> GeometryResult<()> {
        match self {
            Shape::Polygon(polygon) => polygon.scale(x, y),
            Shape::Line(line) => line.scale(x, y),
            Shape::Ellipse(ellipse) => ellipse.scale(x, y)?,
        }
        Ok(())
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        match self {
            Shape::Polygon(polygon) => polygon.contains_point(x, y),
            Shape::Line(line) => line.contains_point(x, y),
            Shape::Ellipse(ellipse) => ellipse.contains_point(x, y),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Shape::Ellipse(ellipse)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Polygon(rectangle.to_polygon())
    }
}

impl Bounded for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}

impl Bounded for Polygon {
    fn bounds(&self) -> Rectangle {
        Polygon::bounds(self)
    }
}

impl Bounded for Line {
    fn bounds(&self) -> Rectangle {
        Line::bounds(self)
    }
}

impl Bounded for Ellipse {
    fn bounds(&self) -> Rectangle {
        Ellipse::bounds(self)
    }
}

impl Bounded for Shape {
    fn bounds(&self) -> Rectangle {
        Shape::bounds(self)
    }
}
