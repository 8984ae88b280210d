use crate::error::{Error, Result};
use crate::level::Level;

use super::{compact, extended};

/// On-disk level layouts, identified by their 5-byte signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelFormat {
    /// Across levels (`POT06`)
    Compact,
    /// Elasto Mania levels (`POT14`)
    Extended,
}

impl LevelFormat {
    pub const SIGNATURE_LEN: usize = 5;

    pub fn signature(self) -> &'static [u8; 5] {
        match self {
            Self::Compact => b"POT06",
            Self::Extended => b"POT14",
        }
    }

    pub fn detect(data: &[u8]) -> Result<Self> {
        let head = &data[..data.len().min(Self::SIGNATURE_LEN)];
        match head {
            b"POT06" => Ok(Self::Compact),
            b"POT14" => Ok(Self::Extended),
            _ => Err(Error::UnrecognizedFormat {
                signature: String::from_utf8_lossy(head).into_owned(),
            }),
        }
    }

    pub fn decode(self, data: &[u8]) -> Result<Level> {
        match self {
            Self::Compact => compact::decode(data),
            Self::Extended => extended::decode(data),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Compact => "across",
            Self::Extended => "elma",
        }
    }
}
