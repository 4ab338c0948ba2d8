//! Test support library
//! Provides float helpers and small in-memory TrueType fonts built with
//! `write-fonts`, so the integration tests need no font files on disk.

#![allow(dead_code)]

use textrude::float_types::Real;
use textrude::mesh::MergedMesh;
use write_fonts::FontBuilder;
use write_fonts::read::tables::glyf::{Anchor, CurvePoint, Transform};
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{
    Bbox, Component, ComponentFlags, CompositeGlyph, Contour, GlyfLocaBuilder, Glyph, SimpleGlyph,
};
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::loca::LocaFormat;
use write_fonts::tables::maxp::Maxp;
use write_fonts::types::{F2Dot14, FWord, GlyphId, GlyphId16};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Returns the bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]` of a mesh.
pub fn bounding_box(mesh: &MergedMesh) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in mesh.positions.chunks_exact(3) {
        for axis in 0..3 {
            bb[axis] = bb[axis].min(p[axis]);
            bb[axis + 3] = bb[axis + 3].max(p[axis]);
        }
    }
    bb
}

/// Triangles of `mesh` whose stored normal is `(0, 0, z)`, as position triples.
pub fn cap_triangles(mesh: &MergedMesh, z: Real) -> Vec<[[Real; 3]; 3]> {
    let normals = mesh.normals.as_ref().expect("mesh has normals");
    mesh.positions
        .chunks_exact(9)
        .zip(normals.chunks_exact(9))
        .filter(|(_, n)| n[0] == 0.0 && n[1] == 0.0 && n[2] == z)
        .map(|(p, _)| {
            [
                [p[0], p[1], p[2]],
                [p[3], p[4], p[5]],
                [p[6], p[7], p[8]],
            ]
        })
        .collect()
}

/// Unsigned XY area of a set of triangles.
pub fn xy_area(triangles: &[[[Real; 3]; 3]]) -> Real {
    triangles
        .iter()
        .map(|[a, b, c]| ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / 2.0)
        .sum()
}

/// One contour point in design units: `(x, y, on_curve)`.
pub type Point = (i16, i16, bool);

/// A glyph to place in a test font. Glyph ids are assigned in order,
/// starting at 1; glyph 0 is always an empty `.notdef`.
#[derive(Clone, Debug)]
pub struct TestGlyph {
    pub ch: char,
    pub advance: u16,
    pub glyph: Glyph,
}

impl TestGlyph {
    pub fn new(ch: char, advance: u16, contours: Vec<Vec<Point>>) -> Self {
        let glyph = if contours.is_empty() {
            Glyph::Empty
        } else {
            let contours: Vec<Contour> = contours
                .into_iter()
                .map(|points| {
                    points
                        .into_iter()
                        .map(|(x, y, on)| CurvePoint::new(x, y, on))
                        .collect::<Vec<_>>()
                        .into()
                })
                .collect();
            let mut simple = SimpleGlyph {
                bbox: Bbox::default(),
                contours,
                instructions: Vec::new(),
            };
            simple.recompute_bounding_box();
            Glyph::Simple(simple)
        };
        TestGlyph {
            ch,
            advance,
            glyph,
        }
    }

    /// A composite of glyph `base` under the 2x2 `matrix` `[xx, yx, xy, yy]`,
    /// shifted by `offset`.
    pub fn component(ch: char, advance: u16, base: u16, offset: (i16, i16), matrix: [f32; 4]) -> Self {
        let [xx, yx, xy, yy] = matrix.map(F2Dot14::from_f32);
        Self::composite(
            ch,
            advance,
            base,
            Anchor::Offset {
                x: offset.0,
                y: offset.1,
            },
            Transform { xx, yx, xy, yy },
        )
    }

    /// A composite of glyph `base` anchored by matching point numbers.
    pub fn point_matched(ch: char, advance: u16, base: u16) -> Self {
        Self::composite(
            ch,
            advance,
            base,
            Anchor::Point { base: 0, component: 0 },
            identity(),
        )
    }

    fn composite(ch: char, advance: u16, base: u16, anchor: Anchor, transform: Transform) -> Self {
        let component = Component::new(
            GlyphId16::new(base),
            anchor,
            transform,
            ComponentFlags::default(),
        );
        TestGlyph {
            ch,
            advance,
            glyph: Glyph::Composite(CompositeGlyph::new(component, Bbox::default())),
        }
    }
}

fn identity() -> Transform {
    let [xx, yx, xy, yy] = [1.0, 0.0, 0.0, 1.0].map(F2Dot14::from_f32);
    Transform { xx, yx, xy, yy }
}

/// Clockwise rectangle, the orientation TrueType uses for outer contours.
pub fn outer_rect(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<Point> {
    vec![(x0, y0, true), (x0, y1, true), (x1, y1, true), (x1, y0, true)]
}

/// Counter-clockwise rectangle, a hole.
pub fn hole_rect(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<Point> {
    vec![(x0, y0, true), (x1, y0, true), (x1, y1, true), (x0, y1, true)]
}

pub const UNITS_PER_EM: u16 = 1000;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;

/// `A` and `B` are plain 500 x 700 boxes advancing 600, `O` is a 600 x 700
/// box with a 400 x 500 hole advancing 700 and `' '` is empty.
pub fn block_font() -> Vec<u8> {
    build_font(&[
        TestGlyph::new('A', 600, vec![outer_rect(0, 0, 500, 700)]),
        TestGlyph::new('B', 600, vec![outer_rect(0, 0, 500, 700)]),
        TestGlyph::new('O', 700, vec![outer_rect(0, 0, 600, 700), hole_rect(100, 100, 500, 600)]),
        TestGlyph::new(' ', 250, vec![]),
    ])
}

/// How [`build_font_with`] lays out the font.
#[derive(Clone, Copy, Debug)]
pub struct FontShape {
    /// Write `glyf` and `loca`. Without them the font has no TrueType outlines.
    pub outlines: bool,
    /// Replace the `head.indexToLocFormat` the `loca` builder picked.
    pub index_to_loc_format: Option<i16>,
}

impl Default for FontShape {
    fn default() -> Self {
        FontShape {
            outlines: true,
            index_to_loc_format: None,
        }
    }
}

/// A TrueType file with `cmap`, `glyf`, `head`, `hhea`, `hmtx`, `loca` and `maxp`.
pub fn build_font(glyphs: &[TestGlyph]) -> Vec<u8> {
    build_font_with(glyphs, FontShape::default())
}

pub fn build_font_with(glyphs: &[TestGlyph], shape: FontShape) -> Vec<u8> {
    let num_glyphs = (glyphs.len() + 1) as u16;

    let mut glyf_loca = GlyfLocaBuilder::new();
    glyf_loca.add_glyph(&Glyph::Empty).expect(".notdef");
    let mut metrics = vec![LongMetric::new(500, 0)];
    for glyph in glyphs {
        glyf_loca.add_glyph(&glyph.glyph).expect("glyph encodes");
        metrics.push(LongMetric::new(glyph.advance, 0));
    }
    let (glyf, loca, loca_format) = glyf_loca.build();

    let mut head = Head::default();
    head.units_per_em = UNITS_PER_EM;
    head.index_to_loc_format = shape.index_to_loc_format.unwrap_or(match loca_format {
        LocaFormat::Short => 0,
        LocaFormat::Long => 1,
    });

    let mut hhea = Hhea::default();
    hhea.ascender = FWord::new(ASCENDER);
    hhea.descender = FWord::new(DESCENDER);
    hhea.number_of_long_metrics = num_glyphs;

    let mut maxp = Maxp::default();
    maxp.num_glyphs = num_glyphs;

    let hmtx = Hmtx::new(metrics, Vec::new());

    let cmap = Cmap::from_mappings(
        glyphs
            .iter()
            .enumerate()
            .map(|(i, glyph)| (glyph.ch, GlyphId::new(i as u32 + 1))),
    )
    .expect("one glyph per character");

    let mut font = FontBuilder::new();
    font.add_table(&cmap).expect("cmap");
    font.add_table(&head).expect("head");
    font.add_table(&hhea).expect("hhea");
    font.add_table(&hmtx).expect("hmtx");
    font.add_table(&maxp).expect("maxp");
    if shape.outlines {
        font.add_table(&glyf).expect("glyf");
        font.add_table(&loca).expect("loca");
    }
    font.build()
}
