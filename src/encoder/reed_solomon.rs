/// Reed-Solomon error correction coding for QR codes
/// Generator polynomial for `e` ECC codewords has roots alpha^0 .. alpha^(e-1)
use std::sync::OnceLock;

use crate::encoder::gf256::Gf256;

/// Largest ECC block length in the QR tables
pub const MAX_ECC_LEN: usize = 30;

static GENERATORS: [OnceLock<Vec<u8>>; MAX_ECC_LEN + 1] =
    [const { OnceLock::new() }; MAX_ECC_LEN + 1];

/// Generator polynomial for `ecc_len` codewords, highest degree first (leading 1).
///
/// Built on first use and shared for the rest of the process.
pub fn generator_polynomial(ecc_len: usize) -> &'static [u8] {
    assert!(
        (1..=MAX_ECC_LEN).contains(&ecc_len),
        "ECC length out of range"
    );
    GENERATORS[ecc_len].get_or_init(|| build_generator(ecc_len))
}

fn build_generator(ecc_len: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..ecc_len {
        // Multiply by (x - alpha^i); subtraction is XOR
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= Gf256::mul(coeff, root);
        }
        poly = next;
    }
    poly
}

/// Reed-Solomon encoder for one block length
pub struct ReedSolomonEncoder {
    generator: &'static [u8],
}

impl ReedSolomonEncoder {
    /// Encoder producing `ecc_len` codewords
    pub fn new(ecc_len: usize) -> Self {
        Self {
            generator: generator_polynomial(ecc_len),
        }
    }

    /// Number of ECC codewords produced
    pub fn ecc_len(&self) -> usize {
        self.generator.len() - 1
    }

    /// ECC codewords for `data`: remainder of data * x^e divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(data.len() + self.ecc_len());
        buf.extend_from_slice(data);
        buf.resize(data.len() + self.ecc_len(), 0);

        for i in 0..data.len() {
            let factor = buf[i];
            if factor == 0 {
                continue;
            }
            for (j, &coeff) in self.generator.iter().enumerate() {
                buf[i + j] ^= Gf256::mul(coeff, factor);
            }
        }

        buf.split_off(data.len())
    }
}
