/// Format information encoding (EC level + mask, BCH(15,5))
use crate::models::{ECLevel, MaskPattern, Module, ModuleGrid};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
/// XOR mask keeping the format word from being all zeros
const FORMAT_MASK: u32 = 0b101_0100_0001_0010;

/// Builds, writes and reads the 15-bit format information
pub struct FormatInfoEncoder;

impl FormatInfoEncoder {
    /// 15-bit format word for `level` and `mask`
    pub fn format_bits(level: ECLevel, mask: MaskPattern) -> u16 {
        let data = (u32::from(level.format_bits()) << 3) | u32::from(mask.id());
        let shifted = data << 10;
        ((shifted | bch_remainder(shifted)) ^ FORMAT_MASK) as u16
    }

    /// Write both copies of `bits` into the reserved format strips
    pub fn write(grid: &mut ModuleGrid, bits: u16) {
        let size = grid.size();
        for i in 0..15 {
            let module = Module::from_bit((bits >> i) & 1 != 0);
            let ((x1, y1), (x2, y2)) = format_cells(size, i);
            grid.set(x1, y1, module);
            grid.set(x2, y2, module);
        }
    }

    /// Read back the (first, second) copies of the format word
    pub fn read(grid: &ModuleGrid) -> (u16, u16) {
        let size = grid.size();
        let mut first = 0u16;
        let mut second = 0u16;
        for i in 0..15 {
            let ((x1, y1), (x2, y2)) = format_cells(size, i);
            first |= u16::from(grid.get(x1, y1).is_dark()) << i;
            second |= u16::from(grid.get(x2, y2).is_dark()) << i;
        }
        (first, second)
    }

    /// Level and mask from a format word, or `None` if the BCH check fails
    pub fn decode(bits: u16) -> Option<(ECLevel, MaskPattern)> {
        let unmasked = u32::from(bits) ^ FORMAT_MASK;
        if bch_remainder(unmasked & !0x3FF) != unmasked & 0x3FF {
            return None;
        }
        let data = (unmasked >> 10) as u8;
        Some((ECLevel::from_bits(data >> 3), MaskPattern::from_bits(data)))
    }
}

/// Remainder of a 15-bit value (data in bits 14..10) divided by the generator
fn bch_remainder(value: u32) -> u32 {
    let mut rem = value;
    for bit in (10..15).rev() {
        if (rem >> bit) & 1 != 0 {
            rem ^= FORMAT_GENERATOR << (bit - 10);
        }
    }
    rem & 0x3FF
}

/// Cells holding format bit `i`: (copy around the top-left finder, split copy)
fn format_cells(size: usize, i: usize) -> ((usize, usize), (usize, usize)) {
    let first = match i {
        0..=5 => (8, i),
        6 => (8, 7),
        7 => (8, 8),
        8 => (7, 8),
        _ => (14 - i, 8),
    };
    let second = if i < 8 {
        (size - 1 - i, 8)
    } else {
        (8, size - 15 + i)
    };
    (first, second)
}
