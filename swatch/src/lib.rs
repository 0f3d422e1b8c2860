//! swatch: hex color codec and preset palette
//!
//! Colors are four 8-bit channels. They are built from hex strings with the
//! lenient [`decode`] (never fails, falls back to opaque black) or the strict
//! [`parse_strict`], and formatted back with [`encode`].

#![no_std]
extern crate alloc;

pub mod colors;
pub mod error;
pub mod hex;
pub mod presets;
#[cfg(feature = "serde")]
mod serde_impl;

pub use colors::Color;
pub use error::ColorError;
pub use hex::{decode, decode_optional, encode, parse_strict, HexForm, MAX_ENCODED_LEN};
pub use presets::{presets, Presets, PRESET_COUNT};
