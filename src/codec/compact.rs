//! Across (`POT06`) level layout.
//!
//! Only the name, polygons and objects are read. The bytes between the
//! signature and the name, and between the name and the polygon count, are
//! not interpreted.

use tracing::{debug, trace};

use crate::error::Result;
use crate::level::{Gravity, Level, LevelObject, ObjectKind, Polygon};

use super::{read_vertices, BinaryReader, LevelFormat, COUNT_MAGIC};

pub const NAME_OFFSET: usize = 41;
pub const NAME_LEN: usize = 14;
pub const POLYGON_COUNT_OFFSET: usize = 100;

/// Size of one object record: x, y, type
const OBJECT_LEN: usize = 8 + 8 + 4;

pub fn decode(data: &[u8]) -> Result<Level> {
    let name = BinaryReader::at(data, NAME_OFFSET)?.read_fixed_string(NAME_LEN)?;

    let mut reader = BinaryReader::at(data, POLYGON_COUNT_OFFSET)?;
    let polygon_count = reader.read_count(COUNT_MAGIC)?;
    debug!(polygon_count, "across polygons");
    let mut polygons = Vec::with_capacity(polygon_count.min(reader.remaining() / 4));
    for i in 0..polygon_count {
        let vertices = read_vertices(&mut reader)?;
        trace!(i, vertices = vertices.len(), "polygon");
        polygons.push(Polygon { is_grass: false, vertices });
    }

    let object_count = reader.read_count(COUNT_MAGIC)?;
    debug!(object_count, "across objects");
    let mut objects = Vec::with_capacity(object_count.min(reader.remaining() / OBJECT_LEN));
    for _ in 0..object_count {
        let x = reader.read_f64_le()?;
        let y = reader.read_f64_le()?;
        let kind = object_kind(reader.read_i32_le()?);
        objects.push(LevelObject { x, y, kind });
    }

    Ok(Level {
        format: LevelFormat::Compact,
        name,
        link: None,
        integrity: None,
        lgr: None,
        foreground: None,
        background: None,
        polygons,
        objects,
        pictures: Vec::new(),
    })
}

/// Across stores no apple payload, and unknown codes become starts.
fn object_kind(code: i32) -> ObjectKind {
    match code {
        1 => ObjectKind::Flower,
        2 => ObjectKind::Apple { gravity: Gravity::Normal, animation: 1 },
        3 => ObjectKind::Killer,
        _ => ObjectKind::Start,
    }
}
