/// Version selection from payload length (level L)
use crate::encoder::tables::byte_capacity;
use crate::error::{QrError, Result};
use crate::models::Version;

/// Picks the smallest version that holds a payload at level L
pub struct VersionSelector;

impl VersionSelector {
    /// Smallest version whose byte capacity holds `length` bytes
    pub fn select(length: usize) -> Result<Version> {
        Self::select_from(length, Version::MIN)
    }

    /// Like [`select`](Self::select), starting the scan at `min_version`
    pub fn select_from(length: usize, min_version: Version) -> Result<Version> {
        min_version
            .up_to_max()
            .find(|&version| length <= byte_capacity(version))
            .ok_or(QrError::DataTooLong {
                length,
                capacity: byte_capacity(Version::MAX),
            })
    }
}
