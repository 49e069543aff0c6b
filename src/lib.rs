//! RustQR Gen - deterministic QR code matrix generation
//!
//! A pure Rust QR code encoder: turns a short byte payload into the module
//! grid of a standards-compliant QR symbol (Model 2, versions 1-4, error
//! correction level L, byte mode). Rendering is left to the caller.
//!
//! ```
//! use rust_qr_gen::{ECLevel, Module, generate};
//!
//! let qr = generate(b"A", ECLevel::L).unwrap();
//! assert_eq!(qr.module_count(), 21);
//! assert_eq!(qr.get(0, 0), Module::Dark);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Generation options and environment defaults
pub mod config;
/// QR code encoding modules (error correction, placement, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrMatrix, ModuleGrid, BitMatrix, Version, etc.)
pub mod models;

pub use config::{EncodeOptions, LevelPolicy};
pub use error::{QrError, Result};
pub use models::{ECLevel, MaskPattern, Module, QrMatrix, Version};

use encoder::qr_encoder::QrEncoder;
use rayon::prelude::*;

/// Generate a QR symbol for `payload` at the requested error correction level.
///
/// The result depends only on `payload` and `level`: the smallest fitting
/// version is chosen and all eight masks are scored. Only level L is
/// implemented; other levels are encoded at L with a logged warning.
/// Environment settings do not apply here, see [`generate_with_options`].
///
/// # Errors
/// [`QrError::DataTooLong`] when the payload exceeds 78 bytes.
pub fn generate(payload: &[u8], level: ECLevel) -> Result<QrMatrix> {
    generate_with_options(payload, &EncodeOptions::fixed(level))
}

/// Generate a QR symbol with explicit options (level policy, minimum
/// version, forced mask).
///
/// Options built with [`EncodeOptions::new`] or `Default` pick up
/// `QR_STRICT_LEVEL` and `QR_MIN_VERSION` from the environment.
pub fn generate_with_options(payload: &[u8], options: &EncodeOptions) -> Result<QrMatrix> {
    QrEncoder::encode(payload, options)
}

/// Generate symbols for many payloads in parallel.
///
/// Results are returned in input order; each payload is encoded exactly as
/// [`generate`] would.
pub fn generate_batch<P>(payloads: &[P], level: ECLevel) -> Vec<Result<QrMatrix>>
where
    P: AsRef<[u8]> + Sync,
{
    let options = EncodeOptions::fixed(level);
    payloads
        .par_iter()
        .map(|payload| generate_with_options(payload.as_ref(), &options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> EncodeOptions {
        EncodeOptions::new(ECLevel::L)
            .with_level_policy(LevelPolicy::Normalize)
            .with_min_version(1)
    }

    #[test]
    fn test_generate_single_byte() {
        let qr = generate_with_options(b"A", &options()).unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.module_count(), 21);
        assert!(qr.modules().is_complete());
    }

    #[test]
    fn test_generate_too_long() {
        let payload = [b'x'; 80];
        assert_eq!(
            generate_with_options(&payload, &options()),
            Err(QrError::DataTooLong {
                length: 80,
                capacity: 78
            })
        );
    }

    #[test]
    fn test_generate_picks_smallest_version() {
        let fixed = EncodeOptions::fixed(ECLevel::H);
        assert_eq!(fixed.min_version, 1);
        assert_eq!(fixed.level_policy, LevelPolicy::Normalize);
        assert_eq!(fixed.mask, None);

        // Unaffected by whatever the environment defaults are
        let qr = generate(b"A", ECLevel::L).unwrap();
        assert_eq!(qr.module_count(), 21);
        assert_eq!(generate(b"A", ECLevel::H).unwrap(), qr);
    }

    #[test]
    fn test_out_of_range_reads_light() {
        let qr = generate_with_options(b"A", &options()).unwrap();
        assert_eq!(qr.get(21, 0), Module::Light);
        assert_eq!(qr.get(0, 1000), Module::Light);
    }

    #[test]
    fn test_rows() {
        let qr = generate_with_options(b"rows", &options()).unwrap();
        let rows: Vec<&[Module]> = qr.rows().collect();
        assert_eq!(rows.len(), 21);
        assert!(rows.iter().all(|r| r.len() == 21));
        assert_eq!(rows[3][4], qr.get(4, 3));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let payloads: Vec<Vec<u8>> = (0..24).map(|i| vec![b'a' + i as u8; i * 4]).collect();
        let batch = generate_batch(&payloads, ECLevel::L);
        assert_eq!(batch.len(), payloads.len());
        for (payload, result) in payloads.iter().zip(&batch) {
            assert_eq!(result, &generate(payload, ECLevel::L));
        }
        // 80+ byte payloads fail in place
        assert!(batch[20].is_err());
    }
}
