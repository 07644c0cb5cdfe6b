// src/utilities/color.rs
//
// Hex color strings from config.toml into nannou colors

use nannou::color::{rgb8, Rgb8};
use regex::Regex;
use std::sync::OnceLock;

use crate::config::ConfigError;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")
            .expect("hex color pattern is valid")
    })
}

/// Parses `#RRGGBB`.
pub fn parse_hex_color(hex: &str) -> Result<Rgb8, ConfigError> {
    let caps = hex_pattern()
        .captures(hex.trim())
        .ok_or_else(|| ConfigError::InvalidColor(hex.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&caps[i], 16).map_err(|_| ConfigError::InvalidColor(hex.to_string()))
    };
    Ok(rgb8(channel(1)?, channel(2)?, channel(3)?))
}
