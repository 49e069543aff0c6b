//! QR code encoding modules
//!
//! This module contains the generation pipeline, leaves first:
//! - GF(256) arithmetic and Reed-Solomon error correction
//! - Version selection and byte-mode bit stream construction
//! - Block interleaving
//! - Function patterns, zigzag data placement, masking and format information

/// Byte-mode bit stream construction
pub mod bitstream;
/// Format information (EC level + mask) encoding
pub mod format;
/// Function pattern placement (finder/timing/alignment/dark module/format areas)
pub mod function_patterns;
/// GF(256) log/exp tables
pub mod gf256;
/// Block splitting and codeword interleaving
pub mod interleave;
/// Mask patterns, penalty scoring and mask selection
pub mod mask;
/// Zigzag data module placement
pub mod placement;
/// Main QR encoder that orchestrates the generation pipeline
pub mod qr_encoder;
/// Reed-Solomon ECC generation
pub mod reed_solomon;
/// ISO 18004 tables (capacities, ECC blocks, alignment centres)
pub mod tables;
/// Version selection from payload length
pub mod version;
