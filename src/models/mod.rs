/// Compact bit matrix for reserved-module masks
pub mod matrix;
/// Tri-state modules and the working grid
pub mod module;
/// Version, EC level, mask pattern and the finished symbol
pub mod qr_code;

pub use matrix::BitMatrix;
pub use module::{Module, ModuleGrid};
pub use qr_code::{ECLevel, MaskPattern, QrMatrix, Version};
