//! Solid-or-hole classification of raw glyph contours.

use crate::float_types::Real;
use crate::sketch::Contour;

/// TrueType winds outer contours clockwise and holes counter-clockwise
/// (y-up), which makes the sum from [`winding_sum`] strictly positive for
/// holes. Other outline sources must re-check this sign against a known
/// glyph such as "O".
pub const HOLE_SUM_IS_POSITIVE: bool = true;

/// `Σ (prev.x - point.x) * (point.y + prev.y)` over every consecutive pair,
/// wrapping from the last point back to the first.
pub fn winding_sum(contour: &Contour) -> Real {
    let points = &contour.points;
    let Some(last) = points.last() else {
        return 0.0;
    };

    let mut prev = last;
    let mut sum = 0.0;
    for point in points {
        sum += (prev.x - point.x) * (point.y + prev.y);
        prev = point;
    }
    sum
}

/// `true` if the contour cuts a hole, `false` if it bounds solid material.
/// A zero sum counts as an outer boundary.
pub fn is_hole(contour: &Contour) -> bool {
    let sum = winding_sum(contour);
    if HOLE_SUM_IS_POSITIVE { sum > 0.0 } else { sum < 0.0 }
}
