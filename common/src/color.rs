use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color value as stored in category palettes.
///
/// Accepted notations are hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) and plain CSS
/// color names (`red`, `navy`). The value is trimmed and lowercased on parse,
/// so `#AABBCC` and `#aabbcc` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color value is empty")]
    Empty,

    #[error("invalid hex color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidHex(String),

    #[error("invalid color name '{0}'")]
    InvalidName(String),
}

impl Color {
    /// Hex color `#rrggbb` from its channels.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_hex(&self) -> bool {
        self.0.starts_with('#')
    }

    /// Red, green and blue channels for hex colors. Named colors return `None`.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let digits = self.0.strip_prefix('#')?;
        let channel = |index: usize| -> Option<u8> {
            match digits.len() {
                3 => {
                    let nibble = u8::from_str_radix(digits.get(index..=index)?, 16).ok()?;
                    Some(nibble * 17)
                }
                6 | 8 => u8::from_str_radix(digits.get(index * 2..index * 2 + 2)?, 16).ok(),
                _ => None,
            }
        };
        Some([channel(0)?, channel(1)?, channel(2)?])
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = normalized.strip_prefix('#') {
            let valid_len = matches!(digits.len(), 3 | 6 | 8);
            if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidHex(raw.to_string()));
            }
        } else if !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ColorParseError::InvalidName(raw.to_string()));
        }

        Ok(Self(normalized))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
