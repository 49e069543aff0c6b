/// GF(256) arithmetic for Reed-Solomon encoding
/// QR codes use primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 with generator alpha = 2
use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    /// alpha^i, duplicated past 255 so log sums need no modulo
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// Field multiplication
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// alpha^power
    pub fn exp(power: usize) -> u8 {
        tables().exp[power % 255]
    }

    /// Discrete log base alpha; `None` for zero
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            return None;
        }
        Some(tables().log[a as usize])
    }
}
