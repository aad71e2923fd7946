use thiserror::Error;

use super::metadata::ECLevel;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // QR builder
    #[error("payload needs {bits} bits but data capacity is {capacity} bits")]
    PayloadTooLarge { bits: usize, capacity: usize },
    #[error("unsupported configuration: version {version}, ec level {ec_level:?}")]
    UnsupportedConfiguration { version: usize, ec_level: ECLevel },
    #[error("invalid masking pattern: {0}")]
    InvalidMaskPattern(u8),
    #[error("module left unset at ({row}, {col})")]
    UnsetModule { row: usize, col: usize },

    // Bit stream
    #[error("bit index {index} out of range for stream of {len} bits")]
    BitIndexOutOfRange { index: usize, len: usize },

    // Galois field
    #[error("log of zero is undefined in GF(256)")]
    LogOfZero,
}

pub type QRResult<T> = Result<T, QRError>;
