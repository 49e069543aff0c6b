use super::{Module, ModuleGrid};

/// QR code version supported by the generator (1-4, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(4);

    /// Create a version, or `None` outside 1-4
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions from `self` up to `Version::MAX`, ascending
    pub fn up_to_max(self) -> impl Iterator<Item = Version> {
        (self.0..=Self::MAX.0).map(Version)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Two-bit level indicator used in format information
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Get error correction level from format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }
}

/// Mask pattern (0-7), predicates over column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (x + y) % 2 == 0
    Pattern0 = 0,
    /// y % 2 == 0
    Pattern1 = 1,
    /// x % 3 == 0
    Pattern2 = 2,
    /// (x + y) % 3 == 0
    Pattern3 = 3,
    /// (y/2 + x/3) % 2 == 0
    Pattern4 = 4,
    /// (x*y)%2 + (x*y)%3 == 0
    Pattern5 = 5,
    /// ((x*y)%2 + (x*y)%3) % 2 == 0
    Pattern6 = 6,
    /// ((x+y)%2 + (x*y)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in ascending id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// Numeric id (0-7)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Check if the module at column `x`, row `y` is inverted by this mask
    pub fn is_masked(self, x: usize, y: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (x + y) % 2 == 0,
            MaskPattern::Pattern1 => y % 2 == 0,
            MaskPattern::Pattern2 => x % 3 == 0,
            MaskPattern::Pattern3 => (x + y) % 3 == 0,
            MaskPattern::Pattern4 => (y / 2 + x / 3) % 2 == 0,
            MaskPattern::Pattern5 => (x * y) % 2 + (x * y) % 3 == 0,
            MaskPattern::Pattern6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
        }
    }
}

/// A generated QR symbol: read-only view over the finished module grid.
///
/// Every module is either [`Module::Light`] or [`Module::Dark`]. Quiet zone,
/// scaling and colours are left to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    version: Version,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
    modules: ModuleGrid,
}

impl QrMatrix {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask_pattern: MaskPattern,
        modules: ModuleGrid,
    ) -> Self {
        debug_assert!(modules.is_complete(), "finished symbol has unset modules");
        debug_assert_eq!(modules.size(), version.size());
        Self {
            version,
            ec_level,
            mask_pattern,
            modules,
        }
    }

    /// Modules per side (21, 25, 29 or 33)
    pub fn module_count(&self) -> u32 {
        self.modules.size() as u32
    }

    /// Module at column `x`, row `y`. Coordinates outside the symbol read as
    /// light, matching the quiet zone around it.
    pub fn get(&self, x: u32, y: u32) -> Module {
        match self.modules.get(x as usize, y as usize) {
            Module::Unset => Module::Light,
            module => module,
        }
    }

    /// Convenience for renderers: true for dark modules
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_dark()
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Module]> {
        (0..self.modules.size()).map(|y| self.modules.row(y))
    }

    /// Selected version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level encoded in the format information
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Committed mask pattern
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Underlying module grid
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }
}
