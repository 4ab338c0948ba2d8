//! Scalar type and the point-merging tolerance of outline flattening.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use std::sync::OnceLock;

#[cfg(feature = "f32")]
const DEFAULT_TOLERANCE: Real = 1e-4;
#[cfg(feature = "f64")]
const DEFAULT_TOLERANCE: Real = 1e-6;

static TOLERANCE: OnceLock<Real> = OnceLock::new();

/// Flattened points closer than this to their predecessor are dropped.
///
/// Fixed on first read: the value given to [`set_tolerance`], else
/// `TEXTRUDE_TOLERANCE` as seen at build time, else `1e-6` (`1e-4` for `f32`).
pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("TEXTRUDE_TOLERANCE")
            .and_then(|value| value.trim().parse::<Real>().ok())
            .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
    })
}

/// Choose the tolerance before the first outline is flattened. Returns
/// `false`, leaving the value alone, once it has been fixed.
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE.set(value.max(Real::EPSILON)).is_ok()
}
