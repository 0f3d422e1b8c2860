//! Preset table tests
//!
//! These tests verify that the preset table holds the brand and grayscale
//! values it is documented with, and that lookups agree with the fields.

use swatch::{decode, presets, Color, Presets, PRESET_COUNT};

#[test]
fn test_brand_colors() {
    let p = presets();
    assert_eq!(
        p.primary_blue,
        Color::from_hex("#007AFF").unwrap(),
        "primary blue mismatch"
    );
    assert_eq!(
        p.primary_green,
        Color::from_hex("#34C759").unwrap(),
        "primary green mismatch"
    );
    assert_eq!(
        p.primary_red,
        Color::from_hex("#FF3B30").unwrap(),
        "primary red mismatch"
    );
    assert_eq!(
        p.primary_orange,
        Color::from_hex("#FF9500").unwrap(),
        "primary orange mismatch"
    );
    assert_eq!(
        p.primary_purple,
        Color::from_hex("#AF52DE").unwrap(),
        "primary purple mismatch"
    );
}

#[test]
fn test_grayscale_colors() {
    let p = presets();
    assert_eq!(p.light_gray, decode("#F2F2F7"), "light gray mismatch");
    assert_eq!(p.medium_gray, decode("#C7C7CC"), "medium gray mismatch");
    assert_eq!(p.dark_gray, decode("#8E8E93"), "dark gray mismatch");
}

#[test]
fn test_primary_blue_channels() {
    let blue = presets().primary_blue;
    assert_eq!(blue.r, 0x00, "red component mismatch");
    assert_eq!(blue.g, 0x7A, "green component mismatch");
    assert_eq!(blue.b, 0xFF, "blue component mismatch");
    assert_eq!(blue.a, 255, "presets are opaque");
}

#[test]
fn test_grayscale_ramp_darkens() {
    let [light, medium, dark] = presets().grayscale();
    assert!(light.r > medium.r && medium.r > dark.r);
    assert!(light.b > medium.b && medium.b > dark.b);
}

#[test]
fn test_lookup_by_name() {
    let p = presets();
    for name in Presets::NAMES {
        assert!(p.get(name).is_some(), "missing preset {name}");
    }
    assert_eq!(p.get("primaryOrange"), p.get("primary_orange"));
    assert_eq!(p.get("adaptiveBackground"), None);
}

#[test]
fn test_presets_encode_to_their_literals() {
    let expected = [
        "#007AFF", "#34C759", "#FF3B30", "#FF9500", "#AF52DE", "#F2F2F7", "#C7C7CC", "#8E8E93",
    ];
    let encoded: Vec<String> = presets().iter().map(|(_, c)| c.to_hex()).collect();
    assert_eq!(encoded.len(), PRESET_COUNT);
    assert_eq!(encoded, expected);
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| presets() as *const Presets as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}
