/// Data bit stream construction (byte mode)
use crate::encoder::tables::ec_block_info;
use crate::models::Version;

const MODE_BYTE: u32 = 0b0100;
const CHAR_COUNT_BITS: u8 = 8;
const PAD_BYTES: [u32; 2] = [0xEC, 0x11];

/// Append-only bit buffer, most significant bit first
#[derive(Debug, Default)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Append the low `count` bits of `value`, high bit first
    pub fn append_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32 && (count == 32 || value >> count == 0));
        for i in (0..count).rev() {
            let bit = (value >> i) & 1 != 0;
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            if bit {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Written bytes; a partial last byte is zero-padded
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builds the data codewords for a byte-mode payload
pub struct BitStreamBuilder;

impl BitStreamBuilder {
    /// Encode `payload` into exactly the data-codeword capacity of `version`.
    ///
    /// `version` must come from the version selector so the payload fits.
    pub fn build(payload: &[u8], version: Version) -> Vec<u8> {
        let capacity_bits = ec_block_info(version).data_codewords * 8;
        let mut bb = BitBuffer::with_capacity(capacity_bits);

        bb.append_bits(MODE_BYTE, 4);
        bb.append_bits(payload.len() as u32, CHAR_COUNT_BITS);
        for &byte in payload {
            bb.append_bits(byte.into(), 8);
        }
        debug_assert!(bb.len() <= capacity_bits, "payload exceeds version capacity");

        // Terminator, clipped to the remaining capacity
        let terminator = capacity_bits.saturating_sub(bb.len()).min(4);
        bb.append_bits(0, terminator as u8);
        let boundary = bb.len().wrapping_neg() & 7;
        bb.append_bits(0, boundary as u8);

        for &pad in PAD_BYTES.iter().cycle() {
            if bb.len() >= capacity_bits {
                break;
            }
            bb.append_bits(pad, 8);
        }

        let mut bytes = bb.into_bytes();
        bytes.truncate(capacity_bits / 8);
        bytes
    }
}

/// Expand codewords into bits, most significant bit first
pub fn bits_msb_first(codewords: &[u8]) -> impl Iterator<Item = bool> + '_ {
    codewords
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 != 0))
}
