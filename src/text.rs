//! Text to solid: lay out a string glyph by glyph, extrude every glyph and
//! merge the results into one mesh.

use crate::errors::Result;
use crate::float_types::Real;
use crate::font::Font;
use crate::mesh::extrude::Extrusion;
use crate::mesh::{GlyphMesh, MergedMesh};
use crate::sketch::shape::assemble;
use nalgebra::Vector2;

/// Extra horizontal spacing added after each glyph, in output units.
#[derive(Debug, Clone, PartialEq)]
pub enum Kerning {
    /// The same offset after every glyph.
    Constant(Real),
    /// One offset per glyph, left to right; zero once exhausted.
    Sequence(Vec<Real>),
}

impl Default for Kerning {
    fn default() -> Self {
        Kerning::Constant(0.0)
    }
}

impl From<Real> for Kerning {
    fn from(value: Real) -> Self {
        Kerning::Constant(value)
    }
}

impl From<Vec<Real>> for Kerning {
    fn from(values: Vec<Real>) -> Self {
        Kerning::Sequence(values)
    }
}

impl Kerning {
    /// A fresh cursor over the per-glyph offsets. The kerning values
    /// themselves are never consumed, so every string starts from the first.
    pub const fn offsets(&self) -> KerningOffsets<'_> {
        KerningOffsets {
            kerning: self,
            index: 0,
        }
    }
}

/// Endless iterator of kerning offsets, see [`Kerning::offsets`].
#[derive(Debug, Clone)]
pub struct KerningOffsets<'a> {
    kerning: &'a Kerning,
    index: usize,
}

impl Iterator for KerningOffsets<'_> {
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        let value = match self.kerning {
            Kerning::Constant(value) => *value,
            Kerning::Sequence(values) => values.get(self.index).copied().unwrap_or(0.0),
        };
        self.index = self.index.saturating_add(1);
        Some(value)
    }
}

/// Parameters of one text-to-mesh run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Font size; one em becomes this many output units.
    pub size: Real,
    /// Extrusion depth along +Z.
    pub depth: Real,
    pub kerning: Kerning,
    /// Straight pieces per quadratic curve.
    pub curve_segments: usize,
    /// Shift the finished mesh by `-max / 2` in X and Y.
    pub center: bool,
    /// Multiplier on the font's line height for `'\n'`.
    pub line_spacing: Real,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            size: 72.0,
            depth: 20.0,
            kerning: Kerning::default(),
            curve_segments: 12,
            center: true,
            line_spacing: 1.0,
        }
    }
}

impl TextOptions {
    pub fn new(size: Real, depth: Real) -> Self {
        TextOptions {
            size,
            depth,
            ..Default::default()
        }
    }

    pub fn with_kerning(mut self, kerning: impl Into<Kerning>) -> Self {
        self.kerning = kerning.into();
        self
    }

    pub const fn with_curve_segments(mut self, curve_segments: usize) -> Self {
        self.curve_segments = curve_segments;
        self
    }

    pub const fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub const fn with_line_spacing(mut self, line_spacing: Real) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

/// Extrude every glyph of `text` at its pen position.
///
/// Glyphs without outlines (spaces, empty `.notdef`) produce no mesh but
/// still advance the pen and consume a kerning offset. A newline returns
/// the pen to x = 0 one line lower and consumes nothing.
pub fn glyph_meshes(font: &Font<'_>, text: &str, options: &TextOptions) -> Result<Vec<GlyphMesh>> {
    let extrusion = Extrusion::new(options.depth, options.size, font.units_per_em() as Real);
    let scale = extrusion.scale();
    let line_height = font.line_height() as Real * scale * options.line_spacing;

    let mut kerning = options.kerning.offsets();
    let mut pen = Vector2::<Real>::zeros();
    let mut meshes = Vec::new();

    for ch in text.chars() {
        if ch == '\n' {
            pen.x = 0.0;
            pen.y -= line_height;
            continue;
        }

        let glyph = font.glyph_id(ch);
        let contours = font.contours(glyph)?;
        let shapes = assemble(&contours, options.curve_segments);
        let mesh = extrusion.glyph(&shapes, pen);
        log::debug!(
            "glyph {:?} ({ch:?}): {} contours, {} shapes, {} vertices at x = {}",
            glyph.0,
            contours.len(),
            shapes.len(),
            mesh.vertex_count(),
            pen.x
        );
        if !mesh.is_empty() {
            meshes.push(mesh);
        }

        pen.x += font.advance(glyph) as Real * scale + kerning.next().unwrap_or(0.0);
    }

    Ok(meshes)
}

/// Run the whole pipeline: layout, extrusion, merge and, if
/// `options.center` is set, the `-max / 2` re-centering.
///
/// Fails with `NoGeometry` when no glyph of `text` has an outline.
pub fn text_mesh(font: &Font<'_>, text: &str, options: &TextOptions) -> Result<MergedMesh> {
    let meshes = glyph_meshes(font, text, options)?;
    let glyph_count = meshes.len();
    let mut mesh = MergedMesh::from_glyphs(meshes)?;
    if options.center {
        mesh.recenter();
    }
    log::debug!(
        "{text:?}: {glyph_count} glyph meshes merged into {} vertices",
        mesh.vertex_count()
    );
    Ok(mesh)
}
