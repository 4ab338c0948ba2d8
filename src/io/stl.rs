//! [STL](https://en.wikipedia.org/wiki/STL_(file_format)) export and import.
//!
//! Binary layout, little-endian throughout:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 80 | header |
//! | 80 | 4 | triangle count (`u32`) |
//! | 84 + 50·i | 12 | face normal (3 × `f32`) |
//! | +12 | 36 | vertices v0, v1, v2 (3 × 3 × `f32`) |
//! | +48 | 2 | attribute byte count, always 0 |

use crate::errors::{Error, Result};
use crate::float_types::Real;
use crate::mesh::MergedMesh;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use std::io::{Cursor, Write};

pub const HEADER_LEN: usize = 80;
pub const TRIANGLE_RECORD_LEN: usize = 50;

/// Header text used when the caller does not pick one.
pub const DEFAULT_HEADER: &str = "textrude binary STL";

/// `text` truncated or zero-padded to exactly 80 bytes.
pub fn header_bytes(text: &str) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    let bytes = text.as_bytes();
    let len = bytes.len().min(HEADER_LEN);
    header[..len].copy_from_slice(&bytes[..len]);
    header
}

/// Unit normal of `(v1 - v0) × (v2 - v0)`, or zero for a degenerate triangle.
pub fn face_normal(triangle: &[Point3<Real>; 3]) -> Vector3<Real> {
    let [v0, v1, v2] = triangle;
    (v1 - v0)
        .cross(&(v2 - v0))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

/// Total size of a binary STL holding `triangles` triangles.
pub const fn binary_len(triangles: usize) -> usize {
    HEADER_LEN + 4 + TRIANGLE_RECORD_LEN * triangles
}

#[allow(clippy::unnecessary_cast)]
fn stl_triangle(positions: &[Point3<Real>; 3]) -> stl_io::Triangle {
    let n = face_normal(positions);
    stl_io::Triangle {
        normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
        vertices: positions.map(|p| stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
    }
}

/// Convert a mesh to a **binary STL** byte vector.
///
/// Face normals are recomputed from the vertex positions; stored vertex
/// normals are ignored. Fails with `MalformedMesh` if the buffers do not
/// split into whole triangles, so no truncated file is ever produced.
///
/// ```rust
/// # use textrude::mesh::MergedMesh;
/// # use textrude::io::stl::{to_stl_binary, DEFAULT_HEADER};
/// let mesh = MergedMesh {
///     positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     normals: None,
///     indices: None,
/// };
/// let bytes = to_stl_binary(&mesh, DEFAULT_HEADER)?;
/// assert_eq!(bytes.len(), 80 + 4 + 50);
/// # Ok::<(), textrude::Error>(())
/// ```
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, header: &str) -> Result<Vec<u8>> {
    let count = shape.triangle_count()?;
    // stl_io truncates the count to u32 without checking
    if u32::try_from(count).is_err() {
        return Err(Error::MalformedMesh(format!(
            "{count} triangles do not fit a binary STL"
        )));
    }

    let mut triangles = Vec::with_capacity(count);
    shape.visit_triangles(|tri| triangles.push(stl_triangle(&tri.map(|v| v.pos))))?;

    let mut cursor = Cursor::new(Vec::with_capacity(binary_len(count)));
    stl_io::write_stl(&mut cursor, triangles.iter())?;
    let mut out = cursor.into_inner();

    // stl_io always writes a zeroed header
    if let Some(slot) = out.get_mut(..HEADER_LEN) {
        slot.copy_from_slice(&header_bytes(header));
    }

    debug_assert_eq!(out.len(), binary_len(count));
    log::debug!("encoded {count} triangles into {} STL bytes", out.len());
    Ok(out)
}

/// Encode as binary STL straight into `writer`.
pub fn write_stl_binary<T: Triangulated3D, W: Write>(shape: &T, header: &str, writer: &mut W) -> Result<()> {
    let bytes = to_stl_binary(shape, header)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Convert a mesh to an **ASCII STL** string with the given solid `name`,
/// using the same recomputed face normals as the binary encoder.
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let positions = tri.map(|v| v.pos);
        let n = face_normal(&positions);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in &positions {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    })?;

    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

impl MergedMesh {
    pub fn to_stl_binary(&self, header: &str) -> Result<Vec<u8>> {
        self::to_stl_binary(self, header)
    }

    pub fn to_stl_ascii(&self, name: &str) -> Result<String> {
        self::to_stl_ascii(self, name)
    }

    /// Read a binary or ASCII STL back into a triangle soup. Every vertex
    /// carries a copy of its triangle's stored face normal.
    #[cfg(feature = "stl-io")]
    pub fn from_stl(data: &[u8]) -> Result<MergedMesh> {
        let mut cursor = Cursor::new(data);
        let reader = stl_io::create_stl_reader(&mut cursor)?;

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        for triangle in reader {
            let triangle = triangle?;
            let n = triangle.normal;
            for v in triangle.vertices {
                positions.extend_from_slice(&[v[0] as Real, v[1] as Real, v[2] as Real]);
                normals.extend_from_slice(&[n[0] as Real, n[1] as Real, n[2] as Real]);
            }
        }

        Ok(MergedMesh {
            positions,
            normals: Some(normals),
            indices: None,
        })
    }
}
