use crate::models::Version;

/// Codeword layout of one version at level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// ECC codewords in each block
    pub ecc_per_block: usize,
    /// Data codewords summed over all blocks
    pub data_codewords: usize,
}

impl EcBlockInfo {
    /// Data plus ECC codewords
    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.num_blocks * self.ecc_per_block
    }
}

// Level L columns of the ISO 18004 capacity tables. Index: [version]
const DATA_CODEWORDS: [usize; 5] = [0, 19, 34, 55, 80];
const ECC_CODEWORDS_PER_BLOCK: [usize; 5] = [0, 7, 10, 15, 20];
const NUM_ERROR_CORRECTION_BLOCKS: [usize; 5] = [0, 1, 1, 1, 1];

const ALIGNMENT_CENTERS: [&[usize]; 5] = [&[], &[], &[6, 18], &[6, 22], &[6, 26]];

/// Byte-mode header: 4-bit mode indicator + 8-bit character count
pub const BYTE_MODE_HEADER_BITS: usize = 12;

/// Block layout of `version` at level L
pub fn ec_block_info(version: Version) -> EcBlockInfo {
    let v = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[v],
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[v],
        data_codewords: DATA_CODEWORDS[v],
    }
}

/// Largest byte-mode payload that fits `version` at level L
pub fn byte_capacity(version: Version) -> usize {
    (ec_block_info(version).data_codewords * 8 - BYTE_MODE_HEADER_BITS) / 8
}

/// Alignment pattern centre coordinates (used for both axes)
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_CENTERS[version.number() as usize]
}

/// Modules available for codewords once all function patterns are placed,
/// including the remainder bits that do not form a whole codeword
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        // one alignment pattern for versions 2-6
        result -= 25;
    }
    result
}
