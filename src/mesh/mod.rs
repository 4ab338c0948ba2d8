//! Triangle-soup meshes: one `GlyphMesh` per extruded glyph, concatenated
//! into a single `MergedMesh` for the whole string.

use crate::aabb::Aabb;
use crate::errors::{Error, Result};
use crate::float_types::Real;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

pub mod extrude;
pub mod triangulated;
pub mod vertex;

/// Triangles of a single extruded glyph.
///
/// `positions` and `normals` are flat `x, y, z` buffers of equal length;
/// every three consecutive vertices form one triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphMesh {
    pub positions: Vec<Real>,
    pub normals: Vec<Real>,
}

impl GlyphMesh {
    pub const fn new() -> Self {
        GlyphMesh {
            positions: Vec::new(),
            normals: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append one flat-shaded triangle.
    pub fn push_triangle(&mut self, triangle: [Point3<Real>; 3], normal: Vector3<Real>) {
        for p in triangle {
            self.positions.extend_from_slice(&[p.x, p.y, p.z]);
            self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }

    /// Move all of `other`'s triangles onto the end of this mesh.
    pub fn append(&mut self, other: &mut GlyphMesh) {
        self.positions.append(&mut other.positions);
        self.normals.append(&mut other.normals);
    }
}

/// The whole string as one vertex buffer.
///
/// Without `indices`, faces are groups of three consecutive vertices;
/// with them, faces are groups of three indices into the vertex buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergedMesh {
    pub positions: Vec<Real>,
    pub normals: Option<Vec<Real>>,
    pub indices: Option<Vec<u32>>,
}

impl MergedMesh {
    /// Concatenate glyph meshes in order without welding shared vertices.
    ///
    /// Empty glyph meshes are skipped; if none remain there is nothing to
    /// print and `NoGeometry` is returned. A lone glyph mesh is moved in
    /// as-is.
    pub fn from_glyphs(mut meshes: Vec<GlyphMesh>) -> Result<Self> {
        meshes.retain(|mesh| !mesh.is_empty());

        if meshes.len() == 1 {
            if let Some(mesh) = meshes.pop() {
                return Ok(MergedMesh {
                    positions: mesh.positions,
                    normals: Some(mesh.normals),
                    indices: None,
                });
            }
        }
        if meshes.is_empty() {
            return Err(Error::NoGeometry);
        }

        let len = meshes.iter().map(|mesh| mesh.positions.len()).sum();
        let mut positions = Vec::with_capacity(len);
        let mut normals = Vec::with_capacity(len);
        for mesh in meshes {
            positions.extend(mesh.positions);
            normals.extend(mesh.normals);
        }

        Ok(MergedMesh {
            positions,
            normals: Some(normals),
            indices: None,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Vertex `i` with its stored normal (zero when there is no normal buffer).
    pub fn vertex(&self, i: usize) -> Option<Vertex> {
        let p = self.positions.get(3 * i..3 * i + 3)?;
        let normal = match &self.normals {
            Some(normals) => {
                let n = normals.get(3 * i..3 * i + 3)?;
                Vector3::new(n[0], n[1], n[2])
            },
            None => Vector3::zeros(),
        };
        Some(Vertex::new(Point3::new(p[0], p[1], p[2]), normal))
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_positions(&self.positions)
    }

    /// Shift every vertex by `(x, y, z)`.
    pub fn translate(&mut self, x: Real, y: Real, z: Real) {
        for p in self.positions.chunks_exact_mut(3) {
            p[0] += x;
            p[1] += y;
            p[2] += z;
        }
    }

    /// Presentation centering: translate by `-max / 2` in X and Y, so the
    /// bounding-box maximum ends up at half its former value. Z is untouched.
    pub fn recenter(&mut self) {
        if let Some(aabb) = self.bounding_box() {
            self.translate(-aabb.maxs.x / 2.0, -aabb.maxs.y / 2.0, 0.0);
        }
    }
}

impl From<GlyphMesh> for MergedMesh {
    fn from(mesh: GlyphMesh) -> Self {
        MergedMesh {
            positions: mesh.positions,
            normals: Some(mesh.normals),
            indices: None,
        }
    }
}

/// Concatenate per-glyph meshes into one buffer, see [`MergedMesh::from_glyphs`].
pub fn merge(meshes: Vec<GlyphMesh>) -> Result<MergedMesh> {
    MergedMesh::from_glyphs(meshes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle(offset: Real) -> GlyphMesh {
        let mut mesh = GlyphMesh::new();
        mesh.push_triangle(
            [
                Point3::new(offset, 0.0, 0.0),
                Point3::new(offset + 1.0, 0.0, 0.0),
                Point3::new(offset, 1.0, 0.0),
            ],
            Vector3::z(),
        );
        mesh
    }

    #[test]
    fn empty_merge_is_no_geometry() {
        assert!(matches!(merge(Vec::new()), Err(Error::NoGeometry)));
        assert!(matches!(merge(vec![GlyphMesh::new()]), Err(Error::NoGeometry)));
    }

    #[test]
    fn single_glyph_is_moved_through() {
        let glyph = one_triangle(0.0);
        let expected = glyph.positions.clone();
        let merged = merge(vec![glyph]).expect("one glyph");
        assert_eq!(merged.positions, expected);
        assert_eq!(merged.indices, None);
    }

    #[test]
    fn merge_keeps_order_and_correspondence() {
        let merged = merge(vec![one_triangle(0.0), GlyphMesh::new(), one_triangle(10.0)]).expect("two glyphs");
        assert_eq!(merged.vertex_count(), 6);
        assert_eq!(merged.positions.len(), merged.normals.as_ref().map_or(0, Vec::len));
        let v3 = merged.vertex(3).expect("vertex 3");
        assert_eq!(v3.pos, Point3::new(10.0, 0.0, 0.0));
        assert_eq!(v3.normal, Vector3::z());
        assert!(merged.vertex(6).is_none());
    }

    #[test]
    fn recenter_halves_the_maximum() {
        let mut merged = merge(vec![one_triangle(0.0), one_triangle(10.0)]).expect("two glyphs");
        let before = merged.bounding_box().expect("bbox");
        assert_eq!(before.maxs, Point3::new(11.0, 1.0, 0.0));

        merged.recenter();
        let after = merged.bounding_box().expect("bbox");
        assert_eq!(after.maxs.x, 5.5);
        assert_eq!(after.maxs.y, 0.5);
        assert_eq!(after.mins.x, -5.5);
        assert_eq!(after.mins.y, -0.5);
        assert_eq!(after.maxs.z, before.maxs.z);
    }
}
