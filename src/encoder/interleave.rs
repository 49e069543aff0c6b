/// Block splitting, ECC computation and codeword interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::EcBlockInfo;

/// One error correction block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccBlock {
    /// Data codewords
    pub data: Vec<u8>,
    /// Reed-Solomon codewords for `data`
    pub ecc: Vec<u8>,
}

/// Splits data into blocks and interleaves data and ECC codewords
pub struct BlockInterleaver;

impl BlockInterleaver {
    /// Split data codewords into blocks (short blocks first) and compute ECC for each
    pub fn split_blocks(data: &[u8], info: &EcBlockInfo) -> Vec<EccBlock> {
        assert_eq!(data.len(), info.data_codewords, "data codeword count mismatch");
        let num_blocks = info.num_blocks;
        let total = info.total_codewords();
        let num_short_blocks = num_blocks - total % num_blocks;
        let short_block_len = total / num_blocks - info.ecc_per_block;
        let rs = ReedSolomonEncoder::new(info.ecc_per_block);

        let mut rest = data;
        (0..num_blocks)
            .map(|i| {
                let len = short_block_len + usize::from(i >= num_short_blocks);
                let (block, tail) = rest.split_at(len);
                rest = tail;
                EccBlock {
                    data: block.to_vec(),
                    ecc: rs.encode(block),
                }
            })
            .collect()
    }

    /// Data codewords column-wise across blocks, then ECC codewords column-wise
    pub fn interleave(blocks: &[EccBlock]) -> Vec<u8> {
        let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
        let mut result = Vec::with_capacity(total);
        Self::zip_columns(blocks.iter().map(|b| b.data.as_slice()), &mut result);
        Self::zip_columns(blocks.iter().map(|b| b.ecc.as_slice()), &mut result);
        result
    }

    /// Convenience: split, encode and interleave in one step
    pub fn encode(data: &[u8], info: &EcBlockInfo) -> Vec<u8> {
        Self::interleave(&Self::split_blocks(data, info))
    }

    fn zip_columns<'a>(rows: impl Iterator<Item = &'a [u8]> + Clone, out: &mut Vec<u8>) {
        let width = rows.clone().map(<[u8]>::len).max().unwrap_or(0);
        for col in 0..width {
            out.extend(rows.clone().filter_map(|row| row.get(col).copied()));
        }
    }
}
