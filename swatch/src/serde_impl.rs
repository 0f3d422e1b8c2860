//! `serde` support: colors travel as hex strings.
//!
//! Opaque colors serialize as `#RRGGBB`. Translucent ones serialize as
//! `#AARRGGBB`, the 8-digit order the decoder reads, so a value survives a
//! round trip. Deserialization goes through the lenient decoder and accepts
//! any string.

use core::fmt;
use core::fmt::Write;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::colors::Color;
use crate::hex::{decode, MAX_ENCODED_LEN};

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_opaque() {
            return serializer.serialize_str(&self.write_hex(false));
        }
        let mut out = heapless::String::<MAX_ENCODED_LEN>::new();
        // "#AARRGGBB" fills the buffer exactly
        let _ = write!(out, "#{:08X}", self.to_argb());
        serializer.serialize_str(&out)
    }
}

struct HexVisitor;

impl<'de> Visitor<'de> for HexVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
        Ok(decode(v))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}
