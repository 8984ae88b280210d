//! Elasto Mania level decoder
//!
//! Decodes Across (`POT06`) and Elasto Mania (`POT14`) level files into a
//! common [`Level`] model and renders them as SVG.

pub mod codec;
pub mod error;
pub mod level;
pub mod renderer;

pub use error::{Error, Result};
pub use codec::{decode_level, LevelFormat};
pub use level::{
    Clip, Gravity, Level, LevelObject, ObjectKind,
    Picture, PictureKind, Polygon, Vertex,
};
pub use renderer::{render_svg, RenderOptions, Svg, Viewport};

/// Decode a level file of either format
pub fn decode(data: &[u8]) -> Result<Level> {
    decode_level(data)
}

/// Decode a level file and render it as SVG with default options
pub fn render(data: &[u8]) -> Result<String> {
    Ok(render_svg(&decode_level(data)?))
}
