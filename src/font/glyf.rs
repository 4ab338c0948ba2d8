//! Glyph outlines with their on/off-curve points.
//!
//! `ttf-parser` only hands out resolved drawing commands, but the winding
//! classification needs the stored points, so outlines are read through
//! `read-fonts`. Composite glyphs are flattened here.

use crate::errors::{Error, Result};
use crate::float_types::Real;
use crate::sketch::{Contour, ContourPoint};
use read_fonts::tables::glyf::{Anchor, CompositeGlyphFlags, Glyf, Glyph, SimpleGlyph};
use read_fonts::tables::loca::Loca;
use read_fonts::types::GlyphId;

/// Deepest composite nesting we follow before calling the glyph malformed.
pub const MAX_COMPONENT_DEPTH: usize = 16;

fn malformed(glyph: u16, reason: impl ToString) -> Error {
    Error::MalformedGlyph {
        glyph,
        reason: reason.to_string(),
    }
}

/// Affine map `x' = a·x + c·y + dx`, `y' = b·x + d·y + dy` applied to a
/// composite component.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    a: Real,
    b: Real,
    c: Real,
    d: Real,
    dx: Real,
    dy: Real,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    fn apply(&self, p: &ContourPoint) -> ContourPoint {
        ContourPoint::new(
            self.a * p.x + self.c * p.y + self.dx,
            self.b * p.x + self.d * p.y + self.dy,
            p.on_curve,
        )
    }

    fn determinant(&self) -> Real {
        self.a * self.d - self.b * self.c
    }

    /// `self ∘ inner`: apply `inner` first.
    fn then(&self, inner: &Transform) -> Transform {
        Transform {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            dx: self.a * inner.dx + self.c * inner.dy + self.dx,
            dy: self.b * inner.dx + self.d * inner.dy + self.dy,
        }
    }
}

/// The `glyf` table together with the `loca` offsets that index it.
#[derive(Clone)]
pub struct GlyfTable<'a> {
    glyf: Glyf<'a>,
    loca: Loca<'a>,
    num_glyphs: u16,
}

impl<'a> GlyfTable<'a> {
    pub const fn new(glyf: Glyf<'a>, loca: Loca<'a>, num_glyphs: u16) -> Self {
        GlyfTable { glyf, loca, num_glyphs }
    }

    /// All contours of `glyph` in design units, with composite glyphs
    /// flattened into their transformed components.
    pub fn contours(&self, glyph: u16) -> Result<Vec<Contour>> {
        let mut contours = Vec::new();
        self.collect(glyph, Transform::IDENTITY, 0, &mut contours)?;
        Ok(contours)
    }

    fn collect(&self, glyph: u16, transform: Transform, depth: usize, out: &mut Vec<Contour>) -> Result<()> {
        if depth > MAX_COMPONENT_DEPTH {
            return Err(malformed(glyph, "composite glyphs nest too deeply"));
        }
        if glyph >= self.num_glyphs {
            return Err(malformed(glyph, "glyph id is out of range"));
        }

        let record = self
            .loca
            .get_glyf(GlyphId::new(glyph as u32), &self.glyf)
            .map_err(|e| malformed(glyph, e))?;

        match record {
            None => Ok(()),
            Some(Glyph::Simple(simple)) => {
                let mirrored = transform.determinant() < 0.0;
                out.extend(simple_contours(glyph, &simple)?.into_iter().map(|contour| {
                    let mut points: Vec<ContourPoint> =
                        contour.points.iter().map(|p| transform.apply(p)).collect();
                    // a mirroring transform flips the winding
                    if mirrored {
                        points.reverse();
                    }
                    Contour::new(points)
                }));
                Ok(())
            },
            Some(Glyph::Composite(composite)) => {
                for component in composite.components() {
                    let base = component.glyph.to_u16();
                    let Anchor::Offset { x, y } = component.anchor else {
                        return Err(Error::UnsupportedOutline(format!(
                            "glyph {glyph} positions component {base} by point matching"
                        )));
                    };

                    let m = component.transform;
                    #[allow(clippy::unnecessary_cast)]
                    let mut local = Transform {
                        a: m.xx.to_f32() as Real,
                        b: m.yx.to_f32() as Real,
                        c: m.xy.to_f32() as Real,
                        d: m.yy.to_f32() as Real,
                        dx: x as Real,
                        dy: y as Real,
                    };
                    if component.flags.contains(CompositeGlyphFlags::SCALED_COMPONENT_OFFSET) {
                        let (dx, dy) = (local.dx, local.dy);
                        local.dx = local.a * dx + local.c * dy;
                        local.dy = local.b * dx + local.d * dy;
                    }

                    self.collect(base, transform.then(&local), depth + 1, out)?;
                }
                Ok(())
            },
        }
    }
}

/// Split the point stream of a simple glyph at its contour end points.
fn simple_contours(glyph: u16, simple: &SimpleGlyph<'_>) -> Result<Vec<Contour>> {
    let mut points = simple.points();
    let mut contours = Vec::new();
    let mut start = 0;

    for end in simple.end_pts_of_contours() {
        let end = end.get() as usize + 1;
        if end <= start {
            return Err(malformed(glyph, "contour end points are not increasing"));
        }
        let contour: Vec<ContourPoint> = points
            .by_ref()
            .take(end - start)
            .map(|p| ContourPoint::new(p.x as Real, p.y as Real, p.on_curve))
            .collect();
        if contour.len() != end - start {
            return Err(malformed(glyph, "point data is truncated"));
        }
        contours.push(Contour::new(contour));
        start = end;
    }
    Ok(contours)
}
