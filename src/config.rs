use std::sync::OnceLock;

use crate::models::{ECLevel, MaskPattern, Version};

fn parse_u8(raw: Option<String>, default: u8) -> u8 {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_bool_u8(raw: Option<String>, default: bool) -> bool {
    raw.and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static STRICT_LEVEL: OnceLock<bool> = OnceLock::new();

pub(crate) fn strict_level() -> bool {
    *STRICT_LEVEL.get_or_init(|| parse_bool_u8(std::env::var("QR_STRICT_LEVEL").ok(), false))
}

static MIN_VERSION: OnceLock<u8> = OnceLock::new();

pub(crate) fn min_version() -> u8 {
    *MIN_VERSION.get_or_init(|| {
        parse_u8(std::env::var("QR_MIN_VERSION").ok(), Version::MIN.number())
    })
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// What to do when a level other than L is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPolicy {
    /// Encode at level L and log a warning
    Normalize,
    /// Reject with [`crate::QrError::UnsupportedLevel`]
    Strict,
}

/// Per-call generation options.
///
/// `Default` picks up the process-wide environment settings:
/// `QR_STRICT_LEVEL=1` selects [`LevelPolicy::Strict`] and `QR_MIN_VERSION`
/// sets the smallest version considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested error correction level
    pub level: ECLevel,
    /// Handling of levels other than L
    pub level_policy: LevelPolicy,
    /// Smallest version the selector may pick (1-4)
    pub min_version: u8,
    /// Force a mask instead of scoring all eight
    pub mask: Option<MaskPattern>,
}

impl EncodeOptions {
    /// Options for `level` that ignore the environment: every version from 1
    /// up is considered, other levels are normalized to L, masks are scored.
    pub fn fixed(level: ECLevel) -> Self {
        Self {
            level,
            level_policy: LevelPolicy::Normalize,
            min_version: Version::MIN.number(),
            mask: None,
        }
    }

    /// Options for `level` with environment defaults for everything else
    pub fn new(level: ECLevel) -> Self {
        Self {
            level,
            level_policy: if strict_level() {
                LevelPolicy::Strict
            } else {
                LevelPolicy::Normalize
            },
            min_version: min_version(),
            mask: None,
        }
    }

    /// Override the level policy
    pub fn with_level_policy(mut self, policy: LevelPolicy) -> Self {
        self.level_policy = policy;
        self
    }

    /// Override the smallest version considered
    pub fn with_min_version(mut self, version: u8) -> Self {
        self.min_version = version;
        self
    }

    /// Commit `mask` without penalty scoring
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::new(ECLevel::L)
    }
}
