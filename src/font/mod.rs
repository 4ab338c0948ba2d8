//! Parsed fonts and the caller-owned font cache.

use crate::errors::{Error, Result};
use crate::sketch::Contour;
use hashbrown::HashMap;
use read_fonts::{FontRef, TableProvider};
use ttf_parser::{Face, GlyphId};

pub mod glyf;

use glyf::GlyfTable;

/// A TrueType face borrowed from its font bytes.
///
/// Metrics and character mapping come from `ttf-parser`; contours come from
/// `read-fonts` so on/off-curve flags survive.
pub struct Font<'a> {
    face: Face<'a>,
    outlines: Option<GlyfTable<'a>>,
}

impl<'a> Font<'a> {
    /// Parse face `index` of a font file or collection.
    pub fn from_bytes(data: &'a [u8], index: u32) -> Result<Self> {
        let face = Face::parse(data, index)?;

        let outlines = match FontRef::from_index(data, index) {
            Ok(outline_font) => match (outline_font.glyf(), outline_font.loca(None)) {
                (Ok(glyf), Ok(loca)) => Some(GlyfTable::new(glyf, loca, face.number_of_glyphs())),
                _ => None,
            },
            Err(error) => {
                log::warn!("could not read outline tables: {error}");
                None
            },
        };

        log::debug!(
            "parsed font: {} glyphs, {} units per em, glyf outlines: {}",
            face.number_of_glyphs(),
            face.units_per_em(),
            outlines.is_some()
        );
        Ok(Font { face, outlines })
    }

    /// The underlying `ttf-parser` face.
    pub const fn face(&self) -> &Face<'a> {
        &self.face
    }

    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Glyph for `ch`, falling back to `.notdef` (glyph 0) when the font
    /// does not map it.
    pub fn glyph_id(&self, ch: char) -> GlyphId {
        self.face.glyph_index(ch).unwrap_or_else(|| {
            log::warn!("font has no glyph for {ch:?}, using .notdef");
            GlyphId(0)
        })
    }

    /// Horizontal advance in design units.
    pub fn advance(&self, glyph: GlyphId) -> u16 {
        self.face.glyph_hor_advance(glyph).unwrap_or(0)
    }

    /// Baseline-to-baseline distance in design units.
    pub fn line_height(&self) -> i32 {
        self.face.ascender() as i32 - self.face.descender() as i32 + self.face.line_gap() as i32
    }

    /// Raw contours of `glyph` in design units.
    pub fn contours(&self, glyph: GlyphId) -> Result<Vec<Contour>> {
        match &self.outlines {
            Some(table) => table.contours(glyph.0),
            None => Err(Error::UnsupportedOutline(
                "font has no glyf table (CFF outlines are not supported)".to_string(),
            )),
        }
    }
}

/// Font bytes keyed by whatever identifier the caller resolves fonts by
/// (a URL, a file path, a family name). The caller owns its lifetime; the
/// pipeline only ever sees the resolved [`Font`].
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    fonts: HashMap<String, Vec<u8>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register font bytes, returning whatever was stored under `id` before.
    pub fn insert(&mut self, id: impl Into<String>, data: Vec<u8>) -> Option<Vec<u8>> {
        self.fonts.insert(id.into(), data)
    }

    pub fn remove(&mut self, id: &str) -> Option<Vec<u8>> {
        self.fonts.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fonts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolve `id` to a parsed font. Parsing borrows the cached bytes and
    /// does not copy them.
    pub fn font(&self, id: &str) -> Result<Font<'_>> {
        let data = self
            .fonts
            .get(id)
            .ok_or_else(|| Error::FontNotFound(id.to_string()))?;
        Font::from_bytes(data, 0)
    }
}
