/// Data module placement following the QR zigzag pattern
use crate::encoder::bitstream::bits_msb_first;
use crate::models::{BitMatrix, Module, ModuleGrid};

/// A module written by data placement, in visit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataModule {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
    /// Unmasked value
    pub value: Module,
}

/// Zigzag placement of codeword bits into data modules
pub struct DataPlacer;

impl DataPlacer {
    /// Write `codewords` into every unreserved module and return the visited modules.
    ///
    /// Column pairs run right to left, skipping the timing column, with the
    /// vertical direction alternating (upward first). Modules left over after
    /// the stream is exhausted (remainder bits) are light.
    pub fn place(grid: &mut ModuleGrid, reserved: &BitMatrix, codewords: &[u8]) -> Vec<DataModule> {
        let dimension = grid.size();
        let mut bits = bits_msb_first(codewords);
        let mut placed = Vec::with_capacity(dimension * dimension - reserved.count_ones());

        Self::walk(dimension, reserved, |x, y| {
            let value = Module::from_bit(bits.next().unwrap_or(false));
            grid.set(x, y, value);
            placed.push(DataModule { x, y, value });
        });

        debug_assert!(bits.next().is_none(), "codewords exceed symbol capacity");
        placed
    }

    /// Visit unreserved modules in placement order
    pub fn walk(dimension: usize, reserved: &BitMatrix, mut visit: impl FnMut(usize, usize)) {
        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for c in [col, col - 1] {
                    let c = c as usize;
                    if !reserved.get(c, row) {
                        visit(c, row);
                    }
                }
            }

            upward = !upward;
            col -= 2;
        }
    }
}
