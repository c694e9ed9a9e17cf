// SPDX-License-Identifier: MIT OR Apache-2.0
//! Custom serialization helpers for [Color] as `#rrggbb` / `#rrggbbaa` strings.
//!
//! Use with `#[serde(with = "dashkit_theme::serde_color")]`, or
//! [option] for `Option<Color>` fields.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let c = color.components;
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b, a) = (byte(c[0]), byte(c[1]), byte(c[2]), byte(c[3]));
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> ThemeResult<Color> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(ThemeError::invalid_color(value, "non-ascii characters"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ThemeError::invalid_color(value, "invalid hex digit"))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(ThemeError::invalid_color(
            value,
            "hex color must be 6 or 8 characters",
        )),
    }
}

/// Serde helpers for `Option<Color>` fields.
pub mod option {
    use super::*;

    /// Serialize an optional color.
    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(color) => serializer.serialize_some(&to_hex(*color)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional color.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Option::<String>::deserialize(deserializer)?
            .map(|hex| parse_hex_color(&hex).map_err(Error::custom))
            .transpose()
    }
}
