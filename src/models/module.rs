/// State of a single module (cell) in a QR symbol under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Module {
    /// Not yet assigned by any pipeline stage
    #[default]
    Unset,
    /// Light (white) module
    Light,
    /// Dark (black) module
    Dark,
}

impl Module {
    /// Build a module from a bit (true = dark)
    pub fn from_bit(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// True for dark modules only
    pub fn is_dark(self) -> bool {
        self == Module::Dark
    }

    /// True once a stage has assigned a colour
    pub fn is_set(self) -> bool {
        self != Module::Unset
    }

    /// XOR the module colour with `flip`. Unset modules stay unset.
    pub fn xor(self, flip: bool) -> Self {
        match self {
            Module::Unset => Module::Unset,
            m if flip => Module::from_bit(!m.is_dark()),
            m => m,
        }
    }
}

/// Square grid of tri-state modules, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<Module>,
}

impl ModuleGrid {
    /// Create a `size` x `size` grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y); out-of-range coordinates read as unset
    pub fn get(&self, x: usize, y: usize) -> Module {
        if x >= self.size || y >= self.size {
            return Module::Unset;
        }
        self.modules[y * self.size + x]
    }

    /// Set module at (x, y); out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.modules[y * self.size + x] = module;
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[Module] {
        &self.modules[y * self.size..(y + 1) * self.size]
    }

    /// All modules, row-major
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// True when no module is left unset
    pub fn is_complete(&self) -> bool {
        self.modules.iter().all(|m| m.is_set())
    }
}
