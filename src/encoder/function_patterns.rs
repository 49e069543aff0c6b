use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{BitMatrix, Module, ModuleGrid, Version};

/// Builds the module grid with every function pattern in place.
///
/// The reserved mask marks finder patterns with their separators, timing
/// patterns, alignment patterns, the dark module and the format areas.
/// Everything else is left unset for data placement.
pub struct MatrixBuilder {
    version: Version,
    grid: ModuleGrid,
    reserved: BitMatrix,
}

impl MatrixBuilder {
    /// Grid for `version` with every function pattern placed
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut builder = Self {
            version,
            grid: ModuleGrid::new(size),
            reserved: BitMatrix::new(size),
        };

        builder.place_finder(0, 0);
        builder.place_finder(size - 7, 0);
        builder.place_finder(0, size - 7);
        builder.place_timing();
        builder.place_alignment();
        builder.place_dark_module();
        builder.reserve_format_areas();
        builder
    }

    /// Version being built
    pub fn version(&self) -> Version {
        self.version
    }

    /// Grid with function patterns; data modules still unset
    pub fn grid(&self) -> &ModuleGrid {
        &self.grid
    }

    /// Function and format cells
    pub fn reserved(&self) -> &BitMatrix {
        &self.reserved
    }

    /// Split into (grid, reserved mask)
    pub fn into_parts(self) -> (ModuleGrid, BitMatrix) {
        (self.grid, self.reserved)
    }

    /// Modules left for data after all function patterns
    pub fn data_modules_count(&self) -> usize {
        let size = self.grid.size();
        size * size - self.reserved.count_ones()
    }

    fn put(&mut self, x: usize, y: usize, module: Module) {
        self.grid.set(x, y, module);
        self.reserved.set(x, y, true);
    }

    /// 7x7 finder with its top-left corner at (x, y), plus the light separator
    fn place_finder(&mut self, x: usize, y: usize) {
        for dy in 0..7 {
            for dx in 0..7 {
                let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
                let center = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                self.put(x + dx, y + dy, Module::from_bit(ring || center));
            }
        }

        let size = self.grid.size() as isize;
        for dy in -1..=7isize {
            for dx in -1..=7isize {
                if (0..7).contains(&dx) && (0..7).contains(&dy) {
                    continue;
                }
                let (sx, sy) = (x as isize + dx, y as isize + dy);
                if !(0..size).contains(&sx) || !(0..size).contains(&sy) {
                    continue;
                }
                let (sx, sy) = (sx as usize, sy as usize);
                if !self.grid.get(sx, sy).is_set() {
                    self.put(sx, sy, Module::Light);
                }
            }
        }
    }

    /// Row 6 and column 6 between the finder separators, dark on even indices
    fn place_timing(&mut self) {
        let size = self.grid.size();
        for i in 8..size - 8 {
            let module = Module::from_bit(i % 2 == 0);
            self.put(i, 6, module);
            self.put(6, i, module);
        }
    }

    fn place_alignment(&mut self) {
        let centers = alignment_pattern_positions(self.version);
        for &cy in centers {
            for &cx in centers {
                // Overlaps a finder pattern
                if self.reserved.get(cx, cy) {
                    continue;
                }
                for dy in -2..=2isize {
                    for dx in -2..=2isize {
                        let dark = dx.abs().max(dy.abs()) != 1;
                        let x = (cx as isize + dx) as usize;
                        let y = (cy as isize + dy) as usize;
                        self.put(x, y, Module::from_bit(dark));
                    }
                }
            }
        }
    }

    fn place_dark_module(&mut self) {
        let y = 4 * self.version.number() as usize + 9;
        self.put(8, y, Module::Dark);
    }

    /// Reserve both format strips with a light placeholder
    fn reserve_format_areas(&mut self) {
        let size = self.grid.size();
        for i in 0..9 {
            if i != 6 {
                self.put(i, 8, Module::Light);
                self.put(8, i, Module::Light);
            }
        }
        for i in 0..8 {
            self.put(size - 1 - i, 8, Module::Light);
        }
        for i in 0..7 {
            self.put(8, size - 1 - i, Module::Light);
        }
    }
}
