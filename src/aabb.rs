use crate::float_types::Real;
use nalgebra::Point3;

/// Axis-aligned bounding box of a vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Box spanning a flat `x, y, z` position buffer, `None` when it holds no
    /// complete vertex.
    pub fn from_positions(positions: &[Real]) -> Option<Self> {
        let mut chunks = positions.chunks_exact(3);
        let first = chunks.next()?;
        let start = Point3::new(first[0], first[1], first[2]);

        Some(chunks.fold(Self::new(start, start), |aabb, p| {
            Self::new(
                Point3::new(aabb.mins.x.min(p[0]), aabb.mins.y.min(p[1]), aabb.mins.z.min(p[2])),
                Point3::new(aabb.maxs.x.max(p[0]), aabb.maxs.y.max(p[1]), aabb.maxs.z.max(p[2])),
            )
        }))
    }

    #[inline]
    pub fn extents(&self) -> nalgebra::Vector3<Real> {
        self.maxs - self.mins
    }
}
