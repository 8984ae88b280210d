/// Level decoding failure, with the byte offset of the offending field
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unrecognized level format: {signature:?}")]
    UnrecognizedFormat { signature: String },

    #[error("truncated buffer at offset {offset}: need {need} bytes, have {have}")]
    TruncatedBuffer { offset: usize, need: usize, have: usize },

    #[error("malformed count at offset {offset}: {value}")]
    MalformedCount { offset: usize, value: f64 },

    #[error("invalid {field} value {value} at offset {offset}")]
    InvalidEnum { offset: usize, field: &'static str, value: i32 },

    #[error("integrity marker mismatch at offset {offset}: expected {expected:#010x}, got {actual:#010x}")]
    IntegrityMarkerMismatch { offset: usize, expected: u32, actual: u32 },
}

impl Error {
    /// Byte offset of the field that failed to decode, if there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedFormat { .. } => None,
            Self::TruncatedBuffer { offset, .. }
            | Self::MalformedCount { offset, .. }
            | Self::InvalidEnum { offset, .. }
            | Self::IntegrityMarkerMismatch { offset, .. } => Some(*offset),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
