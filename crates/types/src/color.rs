use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

/// An ARGB color with every channel in `0.0..=1.0`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.to_bits().hash(state);
        self.g.to_bits().hash(state);
        self.b.to_bits().hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Splits a packed `0xAARRGGBB` value into channels.
    pub fn from_argb(value: u32) -> Self {
        let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
        Self {
            a: channel(24),
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Decodes a hex color code. A leading `#` is optional.
    ///
    /// Short codes are completed first: `RGB` becomes `FFRRGGBB`, `ARGB`
    /// becomes `AARRGGBB` and `RRGGBB` gets an opaque alpha. Other lengths are
    /// read as written. The longest hex prefix is then scanned; anything that
    /// does not scan reads as zero and overlong values saturate.
    pub fn from_hex_code(code: &str) -> Self {
        let code = code.trim();
        let code = code.strip_prefix('#').unwrap_or(code);
        let completed = complete_hex_code(code);
        let digits: String = completed.chars().take_while(char::is_ascii_hexdigit).collect();
        let value = if digits.is_empty() {
            0
        } else {
            u32::from_str_radix(&digits, 16).unwrap_or(u32::MAX)
        };
        Self::from_argb(value)
    }
}

fn complete_hex_code(code: &str) -> String {
    let doubled = || code.chars().flat_map(|c| [c, c]).collect::<String>();
    match code.chars().count() {
        3 => format!("FF{}", doubled()),
        4 => doubled(),
        6 => format!("FF{code}"),
        _ => code.to_string(),
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: f32, g: f32, b: f32, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => {
                if s.trim().is_empty() {
                    return Err(de::Error::custom("empty color code"));
                }
                Ok(Self::from_hex_code(&s))
            }
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}
