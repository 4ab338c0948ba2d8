//! 2D glyph outlines: raw TrueType contours, the path commands they decode
//! into, and the polygon-with-holes `Shape`s handed to the extruder.

use crate::float_types::Real;
use nalgebra::Point2;

pub mod shape;
pub mod tessellate;
pub mod winding;

pub use shape::Shape;

/// A vertex of a glyph outline in font design units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourPoint {
    pub x: Real,
    pub y: Real,
    /// `false` marks a quadratic control point.
    pub on_curve: bool,
}

impl ContourPoint {
    pub const fn new(x: Real, y: Real, on_curve: bool) -> Self {
        ContourPoint { x, y, on_curve }
    }

    pub const fn on(x: Real, y: Real) -> Self {
        Self::new(x, y, true)
    }

    pub const fn off(x: Real, y: Real) -> Self {
        Self::new(x, y, false)
    }

    pub fn position(&self) -> Point2<Real> {
        Point2::new(self.x, self.y)
    }
}

/// One closed outline loop of a glyph. The last point's successor is the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<ContourPoint>,
}

impl Contour {
    pub const fn new(points: Vec<ContourPoint>) -> Self {
        Contour { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Contour {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

impl From<Vec<ContourPoint>> for Contour {
    fn from(points: Vec<ContourPoint>) -> Self {
        Contour::new(points)
    }
}

/// Drawing commands of a single closed glyph path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2<Real>),
    LineTo(Point2<Real>),
    QuadTo { ctrl: Point2<Real>, to: Point2<Real> },
    Close,
}

impl PathCommand {
    /// The anchor the pen rests on after this command, if it moves the pen.
    pub fn end_point(&self) -> Option<Point2<Real>> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}
