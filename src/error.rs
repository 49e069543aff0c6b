use thiserror::Error;

use crate::models::ECLevel;

/// Errors returned by QR generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Payload does not fit the largest allowed version at level L
    #[error("payload of {length} bytes exceeds the {capacity}-byte capacity")]
    DataTooLong {
        /// Payload length in bytes
        length: usize,
        /// Largest payload that would have fit
        capacity: usize,
    },
    /// Requested version lies outside 1-4
    #[error("QR version {0} is not supported (expected 1-4)")]
    UnsupportedVersion(u8),
    /// Requested level is not L and the strict level policy is active
    #[error("error correction level {0:?} is not supported (only L)")]
    UnsupportedLevel(ECLevel),
}

/// Result alias for generation
pub type Result<T> = std::result::Result<T, QrError>;
