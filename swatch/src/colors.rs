//! Color value type
//!
//! A color is four 8-bit channels. Values are plain `Copy` data, so they are
//! passed around by value and never mutated after construction.

use core::fmt;

/// Four 8-bit channels, equivalent to a packed `0xAARRGGBB` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black. Also what lenient decoding falls back to.
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Fully transparent black
    pub const CLEAR: Color = Color::new_rgba(0, 0, 0, 0);

    /// Create a new color from RGB components (alpha defaults to 255)
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA components
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`
    pub const fn to_argb(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Build a color from fractional channels in `0.0..=1.0`.
    ///
    /// Each channel is clamped, scaled by 255 and truncated, so `0.5` becomes
    /// `127`, not `128`. NaN maps to 0.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
            a: unit_to_byte(a),
        }
    }

    /// Channels as fractions of 255, in `[r, g, b, a]` order
    pub fn to_unit(&self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        ]
    }

    /// Integer RGB channels with a fractional alpha.
    ///
    /// Out-of-range channels are clamped to `0..=255`; alpha goes through the
    /// same truncating conversion as [`Color::from_unit`].
    pub fn from_components(r: i32, g: i32, b: i32, alpha: f64) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
            a: unit_to_byte(alpha),
        }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Convert color to RGB tuple
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert color to RGBA tuple
    pub const fn to_rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.write_hex(false))
    }
}

fn unit_to_byte(value: f64) -> u8 {
    // `as` truncates toward zero and saturates; NaN becomes 0
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
