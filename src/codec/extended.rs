//! Elasto Mania (`POT14`) level layout.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::level::{Clip, Gravity, Level, LevelObject, ObjectKind, Picture, PictureKind, Polygon};

use super::{read_vertices, BinaryReader, LevelFormat, COUNT_MAGIC, PICTURE_COUNT_MAGIC};

/// Signature plus two bytes of the link number that are not read
pub const HEADER_OFFSET: usize = 7;
pub const NAME_LEN: usize = 51;
pub const LGR_LEN: usize = 16;
/// Width of foreground/background names and picture name fields
pub const TEXTURE_NAME_LEN: usize = 10;
/// Encrypted single/multi player best times, skipped unread
pub const TOP10_LEN: usize = 688;

pub const END_OF_DATA_MARKER: u32 = 0x0067_103A;
pub const END_OF_FILE_MARKER: u32 = 0x0084_5D52;

const OBJECT_LEN: usize = 8 + 8 + 4 + 4 + 4;
const PICTURE_LEN: usize = 3 * TEXTURE_NAME_LEN + 8 + 8 + 4 + 4;

pub fn decode(data: &[u8]) -> Result<Level> {
    let mut reader = BinaryReader::at(data, HEADER_OFFSET)?;

    let link = reader.read_u32_le()?;
    let mut integrity = [0.0; 4];
    for sum in &mut integrity {
        *sum = reader.read_f64_le()?;
    }

    let name = reader.read_fixed_string(NAME_LEN)?;
    let lgr = reader.read_fixed_string(LGR_LEN)?;
    let foreground = reader.read_fixed_string(TEXTURE_NAME_LEN)?;
    let background = reader.read_fixed_string(TEXTURE_NAME_LEN)?;
    debug!(%name, link, %lgr, "elma header");

    let polygons = read_polygons(&mut reader)?;
    let objects = read_objects(&mut reader)?;
    let pictures = read_pictures(&mut reader)?;

    reader.expect_marker(END_OF_DATA_MARKER)?;
    reader.skip(TOP10_LEN)?;
    reader.expect_marker(END_OF_FILE_MARKER)?;

    Ok(Level {
        format: LevelFormat::Extended,
        name,
        link: Some(link),
        integrity: Some(integrity),
        lgr: Some(lgr),
        foreground: Some(foreground),
        background: Some(background),
        polygons,
        objects,
        pictures,
    })
}

fn read_polygons(reader: &mut BinaryReader) -> Result<Vec<Polygon>> {
    let count = reader.read_count(COUNT_MAGIC)?;
    debug!(count, "elma polygons");
    let mut polygons = Vec::with_capacity(count.min(reader.remaining() / 8));
    for i in 0..count {
        let is_grass = reader.read_flag()?;
        let vertices = read_vertices(reader)?;
        trace!(i, is_grass, vertices = vertices.len(), "polygon");
        polygons.push(Polygon { is_grass, vertices });
    }
    Ok(polygons)
}

fn read_objects(reader: &mut BinaryReader) -> Result<Vec<LevelObject>> {
    let count = reader.read_count(COUNT_MAGIC)?;
    debug!(count, "elma objects");
    let mut objects = Vec::with_capacity(count.min(reader.remaining() / OBJECT_LEN));
    for _ in 0..count {
        let x = reader.read_f64_le()?;
        let y = reader.read_f64_le()?;
        let code_offset = reader.position();
        let code = reader.read_i32_le()?;
        let gravity_offset = reader.position();
        let gravity = reader.read_i32_le()?;
        let animation = reader.read_i32_le()?;

        let kind = match code {
            1 => ObjectKind::Flower,
            2 => ObjectKind::Apple {
                gravity: Gravity::from_code(gravity).ok_or(Error::InvalidEnum {
                    offset: gravity_offset,
                    field: "gravity",
                    value: gravity,
                })?,
                animation: animation.saturating_add(1),
            },
            3 => ObjectKind::Killer,
            4 => ObjectKind::Start,
            _ => {
                return Err(Error::InvalidEnum {
                    offset: code_offset,
                    field: "object type",
                    value: code,
                })
            }
        };
        objects.push(LevelObject { x, y, kind });
    }
    Ok(objects)
}

fn read_pictures(reader: &mut BinaryReader) -> Result<Vec<Picture>> {
    let count = reader.read_count(PICTURE_COUNT_MAGIC)?;
    debug!(count, "elma pictures");
    let mut pictures = Vec::with_capacity(count.min(reader.remaining() / PICTURE_LEN));
    for _ in 0..count {
        let name = reader.read_fixed_string(TEXTURE_NAME_LEN)?;
        let texture = reader.read_fixed_string(TEXTURE_NAME_LEN)?;
        let mask = reader.read_fixed_string(TEXTURE_NAME_LEN)?;
        let x = reader.read_f64_le()?;
        let y = reader.read_f64_le()?;
        let distance = reader.read_i32_le()?;
        let clip = reader.read_enum("clip", Clip::from_code)?;
        pictures.push(Picture {
            kind: PictureKind::from_fields(name, texture, mask),
            x,
            y,
            distance,
            clip,
        });
    }
    Ok(pictures)
}
