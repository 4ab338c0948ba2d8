//! Turn a line of **TrueType text** into a printable solid: glyph contours are
//! decoded, classified into outlines and holes, triangulated, extruded along
//! Z, merged into one triangle soup and exported as binary STL.
//!
//! ```text
//! font bytes -> Contour -> Shape -> GlyphMesh -> MergedMesh -> STL bytes
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **earcut**: use `geo`s `earcutr` feature for triangulation
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import via `stl_io`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **delaunay**: use `geo`s `spade` feature for triangulation, this conflicts with earcut
//!
//! # Example
//! ```no_run
//! use textrude::font::FontLibrary;
//! use textrude::text::{TextOptions, text_mesh};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut fonts = FontLibrary::new();
//! fonts.insert("sans", std::fs::read("DejaVuSans.ttf")?);
//! let font = fonts.font("sans")?;
//! let mesh = text_mesh(&font, "Hello", &TextOptions::new(72.0, 20.0))?;
//! std::fs::write("hello.stl", mesh.to_stl_binary("hello")?)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod font;
pub mod io;
pub mod mesh;
pub mod sketch;
pub mod text;
pub mod triangulated;

#[cfg(any(all(feature = "delaunay", feature = "earcut"), not(any(feature = "delaunay", feature = "earcut"))))]
compile_error!("Either 'delaunay' or 'earcut' feature must be specified, but not both");

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{Error, Result};
pub use font::{Font, FontLibrary};
pub use mesh::{GlyphMesh, MergedMesh};
pub use text::{Kerning, TextOptions, text_mesh};
