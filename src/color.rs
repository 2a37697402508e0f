//! Color helpers.
//!
//! Colors are plain [`Vec3`] values with RGB channels in 0.0-1.0, the same
//! representation the renderer receives in the color buffer.

use glam::Vec3;

/// Linearly interpolate between two colors, per channel.
///
/// Returns exactly `a` at `t = 0.0` and exactly `b` at `t = 1.0`. No clamping
/// is done; callers keep `t` within 0.0-1.0.
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Parse a `#rrggbb` (or `rrggbb`) hex string into an RGB color.
///
/// Shorthand `#rgb` is accepted as well. Returns `None` for anything else.
///
/// ```ignore
/// let orange = color::from_hex("#ff6030").unwrap();
/// ```
pub fn from_hex(hex: &str) -> Option<Vec3> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let (r, g, b) = match digits.len() {
        6 => (
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        ),
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
            (expand(0).ok()?, expand(1).ok()?, expand(2).ok()?)
        }
        _ => return None,
    };

    Some(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

/// Format an RGB color as a lowercase `#rrggbb` string.
///
/// Channels are clamped to 0.0-1.0 and rounded to the nearest byte.
pub fn to_hex(color: Vec3) -> String {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", to_u8(color.x), to_u8(color.y), to_u8(color.z))
}

/// Serde adapter storing a [`Vec3`] color as a hex string.
///
/// Use with `#[serde(with = "crate::color::hex")]`.
pub(crate) mod hex {
    use glam::Vec3;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::from_hex(&s).ok_or_else(|| de::Error::custom(format!("invalid hex color '{}'", s)))
    }
}
