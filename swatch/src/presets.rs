//! Named preset colors
//!
//! Brand colors and a grayscale ramp, decoded once on first use and shared
//! for the rest of the process.
//!
//! Primary Blue: #007AFF
//! Primary Green: #34C759
//! Primary Red: #FF3B30
//! Primary Orange: #FF9500
//! Primary Purple: #AF52DE
//! Light Gray: #F2F2F7
//! Medium Gray: #C7C7CC
//! Dark Gray: #8E8E93

use spin::Lazy;

use crate::colors::Color;
use crate::hex::decode;

/// Preset table containing all named colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presets {
    // Brand colors
    pub primary_blue: Color,
    pub primary_green: Color,
    pub primary_red: Color,
    pub primary_orange: Color,
    pub primary_purple: Color,

    // Grayscale
    pub light_gray: Color,
    pub medium_gray: Color,
    pub dark_gray: Color,
}

/// Number of named presets
pub const PRESET_COUNT: usize = 8;

static PRESETS: Lazy<Presets> = Lazy::new(build);

fn build() -> Presets {
    log::debug!("decoding {} color presets", PRESET_COUNT);
    Presets {
        primary_blue: decode("#007AFF"),
        primary_green: decode("#34C759"),
        primary_red: decode("#FF3B30"),
        primary_orange: decode("#FF9500"),
        primary_purple: decode("#AF52DE"),

        light_gray: decode("#F2F2F7"),
        medium_gray: decode("#C7C7CC"),
        dark_gray: decode("#8E8E93"),
    }
}

/// The process-wide preset table
pub fn presets() -> &'static Presets {
    &PRESETS
}

impl Presets {
    /// Preset names in declaration order
    pub const NAMES: [&'static str; PRESET_COUNT] = [
        "primaryBlue",
        "primaryGreen",
        "primaryRed",
        "primaryOrange",
        "primaryPurple",
        "lightGray",
        "mediumGray",
        "darkGray",
    ];

    /// Look up a preset by camelCase (`primaryBlue`) or snake_case
    /// (`primary_blue`) name
    pub fn get(&self, name: &str) -> Option<Color> {
        match name {
            "primaryBlue" | "primary_blue" => Some(self.primary_blue),
            "primaryGreen" | "primary_green" => Some(self.primary_green),
            "primaryRed" | "primary_red" => Some(self.primary_red),
            "primaryOrange" | "primary_orange" => Some(self.primary_orange),
            "primaryPurple" | "primary_purple" => Some(self.primary_purple),
            "lightGray" | "light_gray" => Some(self.light_gray),
            "mediumGray" | "medium_gray" => Some(self.medium_gray),
            "darkGray" | "dark_gray" => Some(self.dark_gray),
            _ => None,
        }
    }

    /// Brand colors: blue, green, red, orange, purple
    pub const fn brand(&self) -> [Color; 5] {
        [
            self.primary_blue,
            self.primary_green,
            self.primary_red,
            self.primary_orange,
            self.primary_purple,
        ]
    }

    /// Grays from light to dark
    pub const fn grayscale(&self) -> [Color; 3] {
        [self.light_gray, self.medium_gray, self.dark_gray]
    }

    /// `(name, color)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Color)> {
        let [b0, b1, b2, b3, b4] = self.brand();
        let [g0, g1, g2] = self.grayscale();
        Self::NAMES
            .into_iter()
            .zip([b0, b1, b2, b3, b4, g0, g1, g2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colors() {
        let p = presets();
        assert_eq!(p.primary_blue, Color::new(0x00, 0x7A, 0xFF));
        assert_eq!(p.primary_green, Color::new(0x34, 0xC7, 0x59));
        assert_eq!(p.primary_red, Color::new(0xFF, 0x3B, 0x30));
        assert_eq!(p.primary_orange, Color::new(0xFF, 0x95, 0x00));
        assert_eq!(p.primary_purple, Color::new(0xAF, 0x52, 0xDE));
    }

    #[test]
    fn test_grayscale_colors() {
        let p = presets();
        assert_eq!(p.light_gray, Color::new(0xF2, 0xF2, 0xF7));
        assert_eq!(p.medium_gray, Color::new(0xC7, 0xC7, 0xCC));
        assert_eq!(p.dark_gray, Color::new(0x8E, 0x8E, 0x93));
    }

    #[test]
    fn test_get() {
        let p = presets();
        assert_eq!(p.get("primaryBlue"), Some(p.primary_blue));
        assert_eq!(p.get("primary_blue"), Some(p.primary_blue));
        assert_eq!(p.get("darkGray"), Some(p.dark_gray));
        assert_eq!(p.get("PrimaryBlue"), None);
        assert_eq!(p.get("invalid"), None);
    }

    #[test]
    fn test_iter_matches_get() {
        let p = presets();
        let mut count = 0;
        for (name, color) in p.iter() {
            assert_eq!(p.get(name), Some(color), "{name}");
            count += 1;
        }
        assert_eq!(count, PRESET_COUNT);
    }

    #[test]
    fn test_single_instance() {
        assert!(core::ptr::eq(presets(), presets()));
    }
}
