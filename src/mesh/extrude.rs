//! Extruding 2D glyph shapes into closed 3D solids.

use crate::float_types::Real;
use crate::mesh::GlyphMesh;
use crate::sketch::Shape;
use geo::{Coord, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Extrusion settings shared by every glyph of a string.
///
/// Design units are scaled by `size / units_per_em` in X and Y; Z runs from
/// `0` (front cap) to `depth` (back cap) and is not rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrusion {
    pub depth: Real,
    pub size: Real,
    pub units_per_em: Real,
}

impl Extrusion {
    pub const fn new(depth: Real, size: Real, units_per_em: Real) -> Self {
        Extrusion {
            depth,
            size,
            units_per_em,
        }
    }

    /// Design units to output units.
    #[inline]
    pub fn scale(&self) -> Real {
        self.size / self.units_per_em
    }

    /// Extrude all shapes of one glyph placed at `offset` (output units)
    /// into a single glyph mesh.
    pub fn glyph(&self, shapes: &[Shape], offset: Vector2<Real>) -> GlyphMesh {
        let mut mesh = GlyphMesh::new();
        for shape in shapes {
            mesh.append(&mut self.shape(shape, offset));
        }
        mesh
    }

    /// Extrude one shape: front cap, back cap, and a wall along every edge of
    /// the outer ring and of each hole ring.
    pub fn shape(&self, shape: &Shape, offset: Vector2<Real>) -> GlyphMesh {
        let mut mesh = GlyphMesh::new();
        let place = |ring: &[Point2<Real>]| -> Vec<Point2<Real>> {
            ring.iter().map(|p| p * self.scale() + offset).collect()
        };

        let mut outer = place(&shape.outer);
        let area = signed_area(&outer);
        if outer.len() < 3 || area == 0.0 {
            log::warn!("skipping degenerate outer ring with {} points", outer.len());
            return mesh;
        }
        if area < 0.0 {
            outer.reverse();
        }

        let holes: Vec<Vec<Point2<Real>>> = shape
            .holes
            .iter()
            .filter(|hole| hole.len() >= 3)
            .map(|hole| {
                let mut ring = place(hole);
                if signed_area(&ring) > 0.0 {
                    ring.reverse();
                }
                ring
            })
            .collect();

        let triangles = triangulate_2d(&outer, &holes);
        log::trace!(
            "shape with {} outer points and {} holes -> {} cap triangles",
            outer.len(),
            holes.len(),
            triangles.len()
        );

        let front_normal = -Vector3::z();
        let back_normal = Vector3::z();
        for [a, b, c] in triangles {
            // force counter-clockwise in XY
            let (b, c) = if orient_2d(a, b, c) < 0.0 { (c, b) } else { (b, c) };
            mesh.push_triangle([lift(a, 0.0), lift(c, 0.0), lift(b, 0.0)], front_normal);
            mesh.push_triangle(
                [lift(a, self.depth), lift(b, self.depth), lift(c, self.depth)],
                back_normal,
            );
        }

        self.walls(&mut mesh, &outer);
        for hole in &holes {
            self.walls(&mut mesh, hole);
        }
        mesh
    }

    /// Quads between the caps along a ring. Outer rings are counter-clockwise
    /// and holes clockwise here, so `(dy, -dx)` faces away from the solid.
    fn walls(&self, mesh: &mut GlyphMesh, ring: &[Point2<Real>]) {
        let n = ring.len();
        for i in 0..n {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            let edge = b - a;
            let len = edge.norm();
            if len == 0.0 {
                continue;
            }
            let normal = Vector3::new(edge.y / len, -edge.x / len, 0.0);

            let (a0, b0) = (lift(a, 0.0), lift(b, 0.0));
            let (a1, b1) = (lift(a, self.depth), lift(b, self.depth));
            mesh.push_triangle([a0, b0, b1], normal);
            mesh.push_triangle([a0, b1, a1], normal);
        }
    }
}

#[inline]
fn lift(p: Point2<Real>, z: Real) -> Point3<Real> {
    Point3::new(p.x, p.y, z)
}

/// Twice the signed area of `abc`, positive when counter-clockwise.
#[inline]
fn orient_2d(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Real {
    (b - a).perp(&(c - a))
}

/// Shoelace area of a closed ring, positive when counter-clockwise.
pub fn signed_area(ring: &[Point2<Real>]) -> Real {
    let n = ring.len();
    let mut twice = 0.0;
    for i in 0..n {
        let (p, q) = (ring[i], ring[(i + 1) % n]);
        twice += p.x * q.y - q.x * p.y;
    }
    twice / 2.0
}

/// Triangulate an outer ring minus its holes in the XY plane.
pub fn triangulate_2d(outer: &[Point2<Real>], holes: &[Vec<Point2<Real>>]) -> Vec<[Point2<Real>; 3]> {
    let to_line_string = |ring: &[Point2<Real>]| -> LineString<Real> {
        LineString::new(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
    };

    let polygon = GeoPolygon::new(
        to_line_string(outer),
        holes.iter().map(|hole| to_line_string(hole)).collect(),
    );

    #[cfg(feature = "earcut")]
    {
        use geo::TriangulateEarcut;
        let triangulation = polygon.earcut_triangles_raw();
        let triangle_indices = triangulation.triangle_indices;
        let vertices = triangulation.vertices;

        let point = |i: usize| Point2::new(vertices[2 * i], vertices[2 * i + 1]);
        triangle_indices
            .chunks_exact(3)
            .map(|tri| [point(tri[0]), point(tri[1]), point(tri[2])])
            .collect()
    }

    #[cfg(feature = "delaunay")]
    {
        use geo::TriangulateSpade;
        let tris = match polygon.constrained_triangulation(Default::default()) {
            Ok(tris) => tris,
            Err(error) => {
                log::warn!("constrained triangulation failed: {error:?}");
                return Vec::new();
            },
        };

        tris.into_iter()
            .map(|triangle| {
                let [a, b, c] = [triangle.0, triangle.1, triangle.2];
                [Point2::new(a.x, a.y), Point2::new(b.x, b.y), Point2::new(c.x, c.y)]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::vertex::Vertex;
    use crate::triangulated::Triangulated3D;

    fn square(x0: Real, y0: Real, x1: Real, y1: Real) -> Vec<Point2<Real>> {
        // clockwise, the way TrueType stores outer contours
        vec![
            Point2::new(x0, y0),
            Point2::new(x0, y1),
            Point2::new(x1, y1),
            Point2::new(x1, y0),
        ]
    }

    fn triangles(mesh: &GlyphMesh) -> Vec<[Vertex; 3]> {
        let mut out = Vec::new();
        mesh.visit_triangles(|tri| out.push(tri)).expect("well formed");
        out
    }

    fn face_normal(tri: &[Vertex; 3]) -> Vector3<Real> {
        (tri[1].pos - tri[0].pos).cross(&(tri[2].pos - tri[0].pos))
    }

    #[test]
    fn square_extrudes_to_twelve_triangles() {
        let extrusion = Extrusion::new(20.0, 1000.0, 1000.0);
        let mesh = extrusion.shape(&Shape::new(square(0.0, 0.0, 10.0, 10.0), Vec::new()), Vector2::zeros());
        assert_eq!(mesh.triangle_count().expect("whole triangles"), 12);
    }

    #[test]
    fn winding_agrees_with_stored_normals() {
        let extrusion = Extrusion::new(5.0, 1000.0, 1000.0);
        let shape = Shape::new(square(0.0, 0.0, 600.0, 600.0), vec![square(150.0, 150.0, 450.0, 450.0)]);
        for tri in triangles(&extrusion.shape(&shape, Vector2::zeros())) {
            let n = face_normal(&tri);
            assert!(n.dot(&tri[0].normal) > 0.0, "face {n:?} against stored {:?}", tri[0].normal);
        }
    }

    #[test]
    fn hole_region_stays_empty() {
        let extrusion = Extrusion::new(5.0, 1000.0, 1000.0);
        let shape = Shape::new(square(0.0, 0.0, 600.0, 600.0), vec![square(150.0, 150.0, 450.0, 450.0).into_iter().rev().collect()]);
        let mesh = extrusion.shape(&shape, Vector2::zeros());

        let front: Vec<_> = triangles(&mesh)
            .into_iter()
            .filter(|tri| tri[0].normal == -Vector3::z())
            .collect();
        let area: Real = front.iter().map(|tri| face_normal(tri).norm() / 2.0).sum();
        assert!((area - (600.0 * 600.0 - 300.0 * 300.0)).abs() < 1e-6);

        for tri in &front {
            let c = (tri[0].pos.coords + tri[1].pos.coords + tri[2].pos.coords) / 3.0;
            let inside_hole = c.x > 150.0 && c.x < 450.0 && c.y > 150.0 && c.y < 450.0;
            assert!(!inside_hole, "cap triangle centred at {c:?} fills the hole");
        }

        // 4 outer + 4 hole edges, two triangles each
        let walls = triangles(&mesh).iter().filter(|tri| tri[0].normal.z == 0.0).count();
        assert_eq!(walls, 16);
    }

    #[test]
    fn scales_in_plane_and_translates() {
        let extrusion = Extrusion::new(3.0, 72.0, 1000.0);
        let mesh = extrusion.shape(&Shape::new(square(0.0, 0.0, 1000.0, 500.0), Vec::new()), Vector2::new(100.0, -10.0));
        let aabb = crate::aabb::Aabb::from_positions(&mesh.positions).expect("bbox");
        assert!((aabb.mins.x - 100.0).abs() < 1e-9);
        assert!((aabb.maxs.x - 172.0).abs() < 1e-9);
        assert!((aabb.mins.y + 10.0).abs() < 1e-9);
        assert!((aabb.maxs.y - 26.0).abs() < 1e-9);
        assert_eq!(aabb.mins.z, 0.0);
        assert_eq!(aabb.maxs.z, 3.0);
    }

    #[test]
    fn degenerate_outer_yields_nothing() {
        let extrusion = Extrusion::new(3.0, 72.0, 1000.0);
        let line = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(20.0, 0.0)];
        assert!(extrusion.shape(&Shape::new(line, Vec::new()), Vector2::zeros()).is_empty());
    }
}
