//! A trait for any mesh which can be represented by triangles
use crate::errors::Result;
use crate::mesh::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Number of triangles, or `MalformedMesh` when the buffers do not
    /// describe whole triangles.
    fn triangle_count(&self) -> Result<usize>;

    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals, in stored
    /// winding order.
    fn visit_triangles<F>(&self, f: F) -> Result<()>
    where
        F: FnMut([Vertex; 3]);
}
