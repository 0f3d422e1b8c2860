//! Hex color codec
//!
//! Three input widths are recognized once everything that is not a letter or
//! digit has been stripped:
//!
//! | digits | layout     | alpha        |
//! |--------|------------|--------------|
//! | 3      | `RGB`      | 255          |
//! | 6      | `RRGGBB`   | 255          |
//! | 8      | `AARRGGBB` | leading byte |
//!
//! Encoding writes `#RRGGBB`, or `#RRGGBBAA` when alpha is not 255. The
//! 8-digit forms therefore disagree on where alpha goes: decoding reads it
//! first, encoding writes it last. Existing persisted strings depend on both
//! orders, so neither side is normalized.

use alloc::string::String;
use core::fmt::Write;
use core::str::FromStr;

use crate::colors::Color;
use crate::error::ColorError;

/// Longest encoded form: `#RRGGBBAA`
pub const MAX_ENCODED_LEN: usize = 9;

/// Recognized hex digit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexForm {
    /// `RGB`, each nibble doubled
    Short,
    /// `RRGGBB`
    Rgb,
    /// `AARRGGBB`
    Argb,
}

impl HexForm {
    pub const fn from_digit_count(digits: usize) -> Option<Self> {
        match digits {
            3 => Some(HexForm::Short),
            6 => Some(HexForm::Rgb),
            8 => Some(HexForm::Argb),
            _ => None,
        }
    }

    /// Form `decode` would use for `input`, or `None` if it falls back to black
    pub fn detect(input: &str) -> Option<Self> {
        Self::from_digit_count(alphanumerics(input).count())
    }

    pub const fn digits(self) -> usize {
        match self {
            HexForm::Short => 3,
            HexForm::Rgb => 6,
            HexForm::Argb => 8,
        }
    }

    /// Split a scanned integer into channels for this layout
    const fn unpack(self, value: u64) -> Color {
        match self {
            HexForm::Short => Color::new(
                ((value >> 8) & 0xF) as u8 * 17,
                ((value >> 4) & 0xF) as u8 * 17,
                (value & 0xF) as u8 * 17,
            ),
            HexForm::Rgb => Color::new(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            ),
            HexForm::Argb => Color::new_rgba(
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
                ((value >> 24) & 0xFF) as u8,
            ),
        }
    }
}

/// Decode a hex color, never failing.
///
/// Non-alphanumeric characters are dropped first, so `"#FF0000"`,
/// `" ff-00-00 "` and `"FF0000"` all decode to red. The remaining text is
/// scanned as hexadecimal up to the first non-hex character; if nothing
/// scans the value is 0. A digit count other than 3, 6 or 8 yields opaque
/// black.
///
/// Width is the number of alphanumeric Unicode scalar values, not grapheme
/// clusters. Combining marks such as U+0301 are not alphanumeric and are
/// stripped, so `"e\u{301}"` counts as one digit; a cluster made of several
/// alphanumeric scalars (decomposed Hangul, for one) counts each of them.
///
/// # Examples
/// ```
/// use swatch::{decode, Color};
///
/// assert_eq!(decode("#FF0000"), Color::new(255, 0, 0));
/// assert_eq!(decode("F00"), Color::new(255, 0, 0));
/// assert_eq!(decode("not a color"), Color::BLACK);
/// ```
pub fn decode(input: &str) -> Color {
    let digits = alphanumerics(input).count();
    let Some(form) = HexForm::from_digit_count(digits) else {
        log::debug!(
            "hex color {:?} has {} digits, using opaque black",
            input,
            digits
        );
        return Color::BLACK;
    };

    form.unpack(scan_hex(alphanumerics(input)))
}

/// `None` passes through untouched; anything else goes to [`decode`].
pub fn decode_optional(input: Option<&str>) -> Option<Color> {
    input.map(decode)
}

/// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is not 255 or
/// `force_alpha` is set. Digits are uppercase.
pub fn encode(color: Color, force_alpha: bool) -> String {
    String::from(color.write_hex(force_alpha).as_str())
}

/// Strict counterpart of [`decode`].
///
/// Accepts one optional leading `#` followed by exactly 3, 6 or 8 ASCII hex
/// digits, with the same channel layouts as `decode`. Usable in const
/// contexts.
pub const fn parse_strict(hex: &str) -> Result<Color, ColorError> {
    let bytes = hex.as_bytes();
    let start = if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else {
        0
    };

    let len = bytes.len() - start;
    let form = match HexForm::from_digit_count(len) {
        Some(form) => form,
        None if len == 0 => return Err(ColorError::Empty),
        None => return Err(ColorError::InvalidLength(len)),
    };

    let mut value: u64 = 0;
    let mut i = start;
    while i < bytes.len() {
        let digit = match hex_digit(bytes[i]) {
            Some(d) => d,
            None => {
                let ch = if bytes[i].is_ascii() {
                    bytes[i] as char
                } else {
                    char::REPLACEMENT_CHARACTER
                };
                return Err(ColorError::InvalidHexChar { ch, index: i });
            }
        };
        value = (value << 4) | digit as u64;
        i += 1;
    }

    Ok(form.unpack(value))
}

impl Color {
    /// Strict parse, see [`parse_strict`]
    ///
    /// # Examples
    /// ```
    /// use swatch::Color;
    ///
    /// const RED: Color = match Color::from_hex("#F00") {
    ///     Ok(color) => color,
    ///     Err(_) => panic!("invalid hex color"),
    /// };
    /// assert_eq!(RED, Color::new(255, 0, 0));
    /// ```
    pub const fn from_hex(hex: &str) -> Result<Self, ColorError> {
        parse_strict(hex)
    }

    /// Lenient parse, see [`decode`]
    pub fn from_hex_lenient(hex: &str) -> Self {
        decode(hex)
    }

    pub fn from_hex_optional(hex: Option<&str>) -> Option<Self> {
        decode_optional(hex)
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise
    pub fn to_hex(&self) -> String {
        encode(*self, false)
    }

    /// Always `#RRGGBBAA`
    pub fn to_hex_with_alpha(&self) -> String {
        encode(*self, true)
    }

    /// Same text as [`encode`], without allocating
    pub fn write_hex(&self, force_alpha: bool) -> heapless::String<MAX_ENCODED_LEN> {
        let mut out = heapless::String::new();
        // Capacity fits the longest form, so the write cannot fail
        let _ = if self.a == 255 && !force_alpha {
            write!(out, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                out,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        };
        out
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict(s)
    }
}

fn alphanumerics(input: &str) -> impl Iterator<Item = char> + Clone + '_ {
    input.chars().filter(|c| c.is_alphanumeric())
}

/// Read an optional `0x` prefix and then leading hex digits, saturating on
/// overflow. Stops quietly at the first non-hex character.
fn scan_hex<I>(mut chars: I) -> u64
where
    I: Iterator<Item = char> + Clone,
{
    let mut lookahead = chars.clone();
    if lookahead.next() == Some('0')
        && matches!(lookahead.next(), Some('x' | 'X'))
        && lookahead.clone().next().is_some_and(|c| c.is_ascii_hexdigit())
    {
        chars = lookahead;
    }

    let mut value: u64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(16) else {
            log::trace!("hex scan stopped at {:?}", c);
            break;
        };
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .unwrap_or(u64::MAX);
    }
    value
}

/// Parse a single hex digit (0-9, A-F)
const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}
