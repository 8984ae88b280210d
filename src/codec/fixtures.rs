//! Level buffers assembled field by field for tests.

use super::writer::BinaryWriter;
use super::{compact, extended, COUNT_MAGIC, PICTURE_COUNT_MAGIC};

#[derive(Debug, Clone, Copy)]
pub struct RawObject {
    pub x: f64,
    pub y: f64,
    pub code: i32,
    pub gravity: i32,
    pub animation: i32,
}

impl RawObject {
    pub fn new(x: f64, y: f64, code: i32) -> Self {
        Self { x, y, code, gravity: 0, animation: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct RawPicture {
    pub name: &'static str,
    pub texture: &'static str,
    pub mask: &'static str,
    pub x: f64,
    pub y: f64,
    pub distance: i32,
    pub clip: i32,
}

impl RawPicture {
    pub fn named(name: &'static str, x: f64, y: f64) -> Self {
        Self { name, texture: "", mask: "", x, y, distance: 500, clip: 1 }
    }
}

pub struct CompactFixture {
    pub name: &'static str,
    pub polygons: Vec<Vec<(f64, f64)>>,
    pub objects: Vec<RawObject>,
}

impl CompactFixture {
    /// One triangle and one start object at (5, 5)
    pub fn triangle_with_start() -> Self {
        Self {
            name: "Triangle",
            polygons: vec![vec![(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]],
            objects: vec![RawObject::new(5.0, 5.0, 4)],
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut w = BinaryWriter::new();
        w.write_bytes(b"POT06");
        w.pad_to(compact::NAME_OFFSET);
        w.write_fixed_string(self.name, compact::NAME_LEN);
        w.pad_to(compact::POLYGON_COUNT_OFFSET);

        w.write_count(self.polygons.len(), COUNT_MAGIC);
        for polygon in &self.polygons {
            write_vertices(&mut w, polygon);
        }

        w.write_count(self.objects.len(), COUNT_MAGIC);
        for object in &self.objects {
            w.write_f64_le(object.x);
            w.write_f64_le(object.y);
            w.write_i32_le(object.code);
        }
        w.into_vec()
    }
}

pub struct ExtendedFixture {
    pub link: u32,
    pub integrity: [f64; 4],
    pub name: &'static str,
    pub lgr: &'static str,
    pub foreground: &'static str,
    pub background: &'static str,
    pub polygons: Vec<(bool, Vec<(f64, f64)>)>,
    pub objects: Vec<RawObject>,
    pub pictures: Vec<RawPicture>,
    /// Overrides the encoded picture count when set
    pub picture_count_raw: Option<f64>,
    pub end_of_data: u32,
    pub end_of_file: u32,
}

impl Default for ExtendedFixture {
    fn default() -> Self {
        Self {
            link: 0x2A4F_91C3,
            integrity: [1250.5, -730.25, 4410.0, 6010.75],
            name: "Warm Up",
            lgr: "default",
            foreground: "ground",
            background: "sky",
            polygons: vec![(
                false,
                vec![(-10.0, -5.0), (10.0, -5.0), (10.0, 5.0), (-10.0, 5.0)],
            )],
            objects: vec![RawObject::new(-8.0, 3.0, 4), RawObject::new(8.0, 3.0, 1)],
            pictures: Vec::new(),
            picture_count_raw: None,
            end_of_data: extended::END_OF_DATA_MARKER,
            end_of_file: extended::END_OF_FILE_MARKER,
        }
    }
}

impl ExtendedFixture {
    pub fn build(&self) -> Vec<u8> {
        let mut w = BinaryWriter::new();
        w.write_bytes(b"POT14");
        w.pad_to(extended::HEADER_OFFSET);
        w.write_u32_le(self.link);
        for sum in self.integrity {
            w.write_f64_le(sum);
        }
        w.write_fixed_string(self.name, extended::NAME_LEN);
        w.write_fixed_string(self.lgr, extended::LGR_LEN);
        w.write_fixed_string(self.foreground, extended::TEXTURE_NAME_LEN);
        w.write_fixed_string(self.background, extended::TEXTURE_NAME_LEN);

        w.write_count(self.polygons.len(), COUNT_MAGIC);
        for (grass, vertices) in &self.polygons {
            w.write_i32_le(i32::from(*grass));
            write_vertices(&mut w, vertices);
        }

        w.write_count(self.objects.len(), COUNT_MAGIC);
        for object in &self.objects {
            w.write_f64_le(object.x);
            w.write_f64_le(object.y);
            w.write_i32_le(object.code);
            w.write_i32_le(object.gravity);
            w.write_i32_le(object.animation);
        }

        match self.picture_count_raw {
            Some(raw) => w.write_f64_le(raw),
            None => w.write_count(self.pictures.len(), PICTURE_COUNT_MAGIC),
        }
        for picture in &self.pictures {
            w.write_fixed_string(picture.name, extended::TEXTURE_NAME_LEN);
            w.write_fixed_string(picture.texture, extended::TEXTURE_NAME_LEN);
            w.write_fixed_string(picture.mask, extended::TEXTURE_NAME_LEN);
            w.write_f64_le(picture.x);
            w.write_f64_le(picture.y);
            w.write_i32_le(picture.distance);
            w.write_i32_le(picture.clip);
        }

        w.write_u32_le(self.end_of_data);
        // Top10 tables are encrypted on disk; any content must be accepted
        w.write_bytes(&[0xA5; extended::TOP10_LEN]);
        w.write_u32_le(self.end_of_file);
        w.into_vec()
    }

    /// Offsets of the end-of-data and end-of-file markers in a built buffer
    pub fn marker_offsets(data: &[u8]) -> (usize, usize) {
        let eof = data.len() - 4;
        (eof - extended::TOP10_LEN - 4, eof)
    }
}

fn write_vertices(w: &mut BinaryWriter, vertices: &[(f64, f64)]) {
    w.write_i32_le(vertices.len() as i32);
    for &(x, y) in vertices {
        w.write_f64_le(x);
        w.write_f64_le(y);
    }
}
