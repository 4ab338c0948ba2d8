use crate::errors::{Error, Result};
use crate::mesh::vertex::Vertex;
use crate::mesh::{GlyphMesh, MergedMesh};
use crate::triangulated::Triangulated3D;

impl MergedMesh {
    /// Check that the buffers describe whole triangles and return how many.
    fn validate(&self) -> Result<usize> {
        if self.positions.len() % 3 != 0 {
            return Err(Error::MalformedMesh(format!(
                "position buffer holds {} values, not whole x,y,z vertices",
                self.positions.len()
            )));
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.positions.len() {
                return Err(Error::MalformedMesh(format!(
                    "{} normal values for {} position values",
                    normals.len(),
                    self.positions.len()
                )));
            }
        }

        let vertex_count = self.vertex_count();
        match &self.indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(Error::MalformedMesh(format!(
                        "index count {} is not a multiple of 3",
                        indices.len()
                    )));
                }
                if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(Error::MalformedMesh(format!(
                        "index {bad} is out of range (vertex count {vertex_count})"
                    )));
                }
                Ok(indices.len() / 3)
            },
            None => {
                if vertex_count % 3 != 0 {
                    return Err(Error::MalformedMesh(format!(
                        "vertex count {vertex_count} is not a multiple of 3"
                    )));
                }
                Ok(vertex_count / 3)
            },
        }
    }

    fn corner(&self, index: usize) -> Result<Vertex> {
        self.vertex(index).ok_or_else(|| {
            Error::MalformedMesh(format!("vertex {index} is missing from the buffers"))
        })
    }
}

impl Triangulated3D for MergedMesh {
    fn triangle_count(&self) -> Result<usize> {
        self.validate()
    }

    fn visit_triangles<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut([Vertex; 3]),
    {
        let count = self.validate()?;
        match &self.indices {
            Some(indices) => {
                for tri in indices.chunks_exact(3) {
                    f([
                        self.corner(tri[0] as usize)?,
                        self.corner(tri[1] as usize)?,
                        self.corner(tri[2] as usize)?,
                    ]);
                }
            },
            None => {
                for t in 0..count {
                    f([
                        self.corner(3 * t)?,
                        self.corner(3 * t + 1)?,
                        self.corner(3 * t + 2)?,
                    ]);
                }
            },
        }
        Ok(())
    }
}

impl Triangulated3D for GlyphMesh {
    fn triangle_count(&self) -> Result<usize> {
        if self.positions.len() % 9 != 0 || self.normals.len() != self.positions.len() {
            return Err(Error::MalformedMesh(format!(
                "glyph mesh holds {} position and {} normal values",
                self.positions.len(),
                self.normals.len()
            )));
        }
        Ok(self.positions.len() / 9)
    }

    fn visit_triangles<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut([Vertex; 3]),
    {
        self.triangle_count()?;
        let vertices = self
            .positions
            .chunks_exact(3)
            .zip(self.normals.chunks_exact(3))
            .map(|(p, n)| {
                Vertex::new(
                    nalgebra::Point3::new(p[0], p[1], p[2]),
                    nalgebra::Vector3::new(n[0], n[1], n[2]),
                )
            })
            .collect::<Vec<_>>();
        for tri in vertices.chunks_exact(3) {
            f([tri[0], tri[1], tri[2]]);
        }
        Ok(())
    }
}
