// Error types for strict hex parsing

use thiserror::Error;

/// Why a strict hex color parse was rejected.
///
/// The lenient decoder never produces these; it falls back to opaque black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty hex color")]
    Empty,

    /// Digit count (in bytes, after an optional `#`) is not 3, 6 or 8
    #[error("invalid hex color length: {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digit {ch:?} at byte {index}")]
    InvalidHexChar { ch: char, index: usize },
}
