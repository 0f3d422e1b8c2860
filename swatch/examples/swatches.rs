//! Swatches Example
//!
//! Shows how screens build colors from hex literals, handle optional
//! input, use presets and format colors back to hex.

use swatch::{decode, presets, Color};

fn print_swatch(label: &str, color: Color) {
    let (r, g, b, a) = color.to_rgba();
    println!("{label:<16} {:<10} rgba({r}, {g}, {b}, {a})", color.to_hex());
}

fn main() {
    env_logger::init();

    // From hex literals
    print_swatch("red", decode("#FF0000"));
    print_swatch("blue", decode("0066CC"));
    print_swatch("green+alpha", decode("#00FF00AA"));

    // Optional input
    match Color::from_hex_optional(Some("#FF5733")) {
        Some(color) => print_swatch("optional", color),
        None => println!("optional         (none)"),
    }

    // Integer channels with fractional alpha
    print_swatch("custom", Color::from_components(255, 100, 50, 1.0));

    // Presets
    for (name, color) in presets().iter() {
        print_swatch(name, color);
    }

    println!("Red color hex: {}", Color::new(255, 0, 0));
}
