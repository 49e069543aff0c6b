/// Main QR encoder - wires the generation pipeline together
use log::{debug, warn};

use crate::config::{EncodeOptions, LevelPolicy};
use crate::encoder::bitstream::BitStreamBuilder;
use crate::encoder::format::FormatInfoEncoder;
use crate::encoder::function_patterns::MatrixBuilder;
use crate::encoder::interleave::BlockInterleaver;
use crate::encoder::mask::{MaskSelector, apply_mask};
use crate::encoder::placement::{DataModule, DataPlacer};
use crate::encoder::tables::ec_block_info;
use crate::encoder::version::VersionSelector;
use crate::error::{QrError, Result};
use crate::models::{BitMatrix, ECLevel, MaskPattern, ModuleGrid, QrMatrix, Version};

/// A symbol with data placed but no mask or format information yet
#[derive(Debug, Clone)]
pub struct PreparedSymbol {
    /// Smallest version that fits the payload
    pub version: Version,
    /// Level written to the format information (always L)
    pub ec_level: ECLevel,
    /// Data codewords before error correction
    pub data_codewords: Vec<u8>,
    /// Interleaved data + ECC codewords as placed in the grid
    pub codewords: Vec<u8>,
    /// Unmasked grid; format strips still hold their light placeholder
    pub grid: ModuleGrid,
    /// Function pattern and format cells
    pub reserved: BitMatrix,
    /// Data cells in placement order with their unmasked values
    pub data_modules: Vec<DataModule>,
}

/// Main QR encoder that runs the generation pipeline for one payload
pub struct QrEncoder;

impl QrEncoder {
    /// Generate a complete symbol for `payload`
    pub fn encode(payload: &[u8], options: &EncodeOptions) -> Result<QrMatrix> {
        let prepared = Self::prepare(payload, options)?;
        Ok(Self::finish(prepared, options.mask))
    }

    /// Run every stage up to and including data placement
    pub fn prepare(payload: &[u8], options: &EncodeOptions) -> Result<PreparedSymbol> {
        let ec_level = Self::resolve_level(options)?;
        let min_version = Version::new(options.min_version)
            .ok_or(QrError::UnsupportedVersion(options.min_version))?;
        let version = VersionSelector::select_from(payload.len(), min_version)?;
        debug!(
            "encoding {} bytes as version {} ({}x{})",
            payload.len(),
            version.number(),
            version.size(),
            version.size()
        );

        let data_codewords = BitStreamBuilder::build(payload, version);
        let codewords = BlockInterleaver::encode(&data_codewords, &ec_block_info(version));

        let (mut grid, reserved) = MatrixBuilder::new(version).into_parts();
        let data_modules = DataPlacer::place(&mut grid, &reserved, &codewords);

        Ok(PreparedSymbol {
            version,
            ec_level,
            data_codewords,
            codewords,
            grid,
            reserved,
            data_modules,
        })
    }

    /// Commit a mask (scored when `mask` is `None`) and write format information
    pub fn finish(prepared: PreparedSymbol, mask: Option<MaskPattern>) -> QrMatrix {
        let PreparedSymbol {
            version,
            ec_level,
            mut grid,
            data_modules,
            ..
        } = prepared;

        let mask = match mask {
            Some(forced) => {
                debug!("using forced mask {}", forced.id());
                apply_mask(&mut grid, &data_modules, forced);
                forced
            }
            None => MaskSelector::select(&mut grid, &data_modules),
        };

        let format = FormatInfoEncoder::format_bits(ec_level, mask);
        FormatInfoEncoder::write(&mut grid, format);
        debug!("format word 0b{:015b}", format);

        QrMatrix::new(version, ec_level, mask, grid)
    }

    fn resolve_level(options: &EncodeOptions) -> Result<ECLevel> {
        match (options.level, options.level_policy) {
            (ECLevel::L, _) => Ok(ECLevel::L),
            (level, LevelPolicy::Strict) => Err(QrError::UnsupportedLevel(level)),
            (level, LevelPolicy::Normalize) => {
                warn!(
                    "error correction level {:?} is not supported, encoding at level L",
                    level
                );
                Ok(ECLevel::L)
            }
        }
    }
}
