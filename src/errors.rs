//! Pipeline errors

/// Everything that can stop text from becoming a mesh or a mesh from
/// becoming a file.
///
/// Degenerate (zero-area) triangles are deliberately absent: the encoder
/// writes a zero normal for them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// (FontNotFound) The font cache has nothing under this identifier
    #[error("(FontNotFound) No font is registered under `{0}`")]
    FontNotFound(String),
    /// (FontParse) The font bytes are not a readable TrueType/OpenType face
    #[error("(FontParse) Could not parse font: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),
    /// (UnsupportedOutline) The glyph outlines use an encoding we cannot decode
    #[error("(UnsupportedOutline) {0}")]
    UnsupportedOutline(String),
    /// (MalformedGlyph) Glyph data is truncated or points outside its table
    #[error("(MalformedGlyph) Glyph {glyph} is malformed: {reason}")]
    MalformedGlyph { glyph: u16, reason: String },
    /// (NoGeometry) The text produced no renderable glyph meshes
    #[error("(NoGeometry) The text produced no renderable geometry")]
    NoGeometry,
    /// (MalformedMesh) Vertex or index counts do not describe whole triangles
    #[error("(MalformedMesh) {0}")]
    MalformedMesh(String),
    /// (Io) Error bubbled up while reading or writing mesh files
    #[error("(Io) {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
