use crate::foundation::core::Rgba8Premul;
use serde::{Deserialize, Serialize};

/// Fill color in straight (non-premultiplied) RGBA8.
///
/// Deserializes from `"rgb(r,g,b)"`, `"rgba(r,g,b,a)"` (CSS alpha in `0..=1`), `"#RRGGBB"`,
/// `"#RRGGBBAA"`, `[r,g,b]`, `[r,g,b,a]` or `{ "r", "g", "b", "a"? }`. Serializes as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FlowColor {
    /// The default flow blue, `rgb(107,185,240)`.
    pub const DEFAULT: Self = Self::rgb(107, 185, 240);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for FlowColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::str::FromStr for FlowColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s);
        }
        if let Some(args) = strip_fn(s, "rgba") {
            return parse_rgb_args(args, true);
        }
        if let Some(args) = strip_fn(s, "rgb") {
            return parse_rgb_args(args, false);
        }
        parse_hex(s)
    }
}

impl Serialize for FlowColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FlowColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn strip_fn<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Result<FlowColor, String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!(
            "expected {expected} comma-separated components, got {}",
            parts.len()
        ));
    }

    fn channel(s: &str) -> Result<u8, String> {
        s.parse::<u8>()
            .map_err(|_| format!("invalid color channel \"{s}\" (expected 0..=255)"))
    }

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a: f64 = parts[3]
            .parse()
            .map_err(|_| format!("invalid alpha \"{}\"", parts[3]))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(format!("alpha {a} out of range 0..=1"));
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Ok(FlowColor::rgba(r, g, b, a))
}

fn parse_hex(s: &str) -> Result<FlowColor, String> {
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(FlowColor::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(FlowColor::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("color must be rgb(...), rgba(...), #RRGGBB or #RRGGBBAA".to_owned()),
    }
}
