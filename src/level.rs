//! Decoded level model shared by both on-disk formats.

use serde::Serialize;

use crate::codec::LevelFormat;

/// A decoded level
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[serde(skip)]
    pub format: LevelFormat,
    pub name: String,
    /// Level link/identity value (extended format only)
    #[serde(rename = "integrityHash", skip_serializing_if = "Option::is_none")]
    pub link: Option<u32>,
    /// Opaque integrity sums (extended format only), not serialized
    #[serde(skip)]
    pub integrity: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lgr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub polygons: Vec<Polygon>,
    pub objects: Vec<LevelObject>,
    pub pictures: Vec<Picture>,
}

impl Level {
    pub fn format(&self) -> LevelFormat {
        self.format
    }

    /// Polygons that take part in collision and fill (grass excluded)
    pub fn solid_polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter().filter(|p| !p.is_grass)
    }

    pub fn count_objects(&self, pred: impl Fn(&ObjectKind) -> bool) -> usize {
        self.objects.iter().filter(|o| pred(&o.kind)).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    /// Grass polygons are decorative and never filled
    #[serde(rename = "isDecoration")]
    pub is_grass: bool,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelObject {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

impl LevelObject {
    pub fn position(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectKind {
    /// Level exit
    Flower,
    Apple {
        gravity: Gravity,
        /// Stored animation index plus one
        animation: i32,
    },
    Killer,
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[repr(i32)]
pub enum Gravity {
    #[default]
    Normal = 0,
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl Gravity {
    pub fn from_code(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Normal),
            1 => Some(Self::Up),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            4 => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picture {
    #[serde(flatten)]
    pub kind: PictureKind,
    pub x: f64,
    pub y: f64,
    /// Render depth; lower values are drawn in front
    pub distance: i32,
    pub clip: Clip,
}

impl Picture {
    pub fn position(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }
}

/// A picture is either a named sprite or a texture drawn through a mask
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PictureKind {
    Named { name: String },
    Textured { texture: String, mask: String },
}

impl PictureKind {
    /// Build from the three raw text fields; a non-empty name wins
    pub fn from_fields(name: String, texture: String, mask: String) -> Self {
        if name.is_empty() {
            Self::Textured { texture, mask }
        } else {
            Self::Named { name }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[repr(i32)]
pub enum Clip {
    #[default]
    Undefined = 0,
    Ground = 1,
    Sky = 2,
}

impl Clip {
    pub fn from_code(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Undefined),
            1 => Some(Self::Ground),
            2 => Some(Self::Sky),
            _ => None,
        }
    }
}
