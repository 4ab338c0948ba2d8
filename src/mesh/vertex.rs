//! Struct for the `Vertex`s handed out by triangle visitors.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh corner, holding position and its stored vertex normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – the stored vertex normal; it is **copied verbatim** and
    ///   is zero for meshes that carry no normal buffer.
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }
}
