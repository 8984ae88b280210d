pub mod reader;
pub mod format;
pub mod compact;
pub mod extended;
#[cfg(test)]
pub mod writer;
#[cfg(test)]
pub mod fixtures;

pub use reader::BinaryReader;
pub use format::LevelFormat;

use tracing::{debug, warn};

use crate::error::Result;
use crate::level::{Level, Vertex};

/// Added to polygon and object counts before they are stored as `f64`
pub const COUNT_MAGIC: f64 = 0.4643643;

/// Added to picture counts before they are stored as `f64`
pub const PICTURE_COUNT_MAGIC: f64 = 0.2345672;

/// Decode a level of either format
pub fn decode_level(data: &[u8]) -> Result<Level> {
    let format = LevelFormat::detect(data)?;
    debug!(format = format.name(), len = data.len(), "decoding level");
    format.decode(data).inspect_err(|e| {
        warn!(format = format.name(), offset = ?e.offset(), "level decode failed: {e}");
    })
}

/// Read a vertex count followed by that many vertices
fn read_vertices(reader: &mut BinaryReader) -> Result<Vec<Vertex>> {
    let count = reader.read_len_i32()?;
    let mut vertices = Vec::with_capacity(count.min(reader.remaining() / 16));
    for _ in 0..count {
        vertices.push(reader.read_vertex()?);
    }
    Ok(vertices)
}
