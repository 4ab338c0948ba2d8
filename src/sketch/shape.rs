//! Grouping a glyph's flattened contours into polygon-with-holes shapes.

use crate::float_types::Real;
use crate::sketch::tessellate::{contour_to_path, flatten};
use crate::sketch::winding::is_hole;
use crate::sketch::Contour;
use nalgebra::Point2;

/// An outer ring plus the hole rings cut out of it, in font units.
/// Rings are implicitly closed (no repeated first point).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub outer: Vec<Point2<Real>>,
    pub holes: Vec<Vec<Point2<Real>>>,
}

impl Shape {
    pub const fn new(outer: Vec<Point2<Real>>, holes: Vec<Vec<Point2<Real>>>) -> Self {
        Shape { outer, holes }
    }
}

/// Build the shapes of one glyph.
///
/// Every hole of the glyph is attached to every outer shape. That is right
/// for letterforms with one outer contour, but a glyph made of several
/// disjoint outers (some ligatures) gets each hole on each outer.
pub fn assemble(contours: &[Contour], curve_segments: usize) -> Vec<Shape> {
    let mut outers = Vec::new();
    let mut holes = Vec::new();

    for contour in contours {
        let ring = flatten(&contour_to_path(contour), curve_segments);
        if is_hole(contour) {
            holes.push(ring);
        } else {
            outers.push(ring);
        }
    }

    outers
        .into_iter()
        .map(|outer| Shape::new(outer, holes.clone()))
        .collect()
}
