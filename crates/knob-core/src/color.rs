use std::fmt;

/// Packed `0xRRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Parses `#rgb`, `#rrggbb`, or the same without the leading `#`.
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        u32::from_str_radix(&expanded, 16).ok().map(Rgb)
    }

    pub fn components(self) -> (u8, u8, u8) {
        let v = self.0;
        ((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    pub fn from_components(r: u8, g: u8, b: u8) -> Rgb {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Linear blend; `amount = 0` is `self`, `1` is `other`.
    pub fn mix(self, other: Rgb, amount: f64) -> Rgb {
        let (ar, ag, ab) = self.components();
        let (br, bg, bb) = other.components();
        let lerp = |a: u8, b: u8| ((1.0 - amount) * a as f64 + amount * b as f64).round() as u8;
        Rgb::from_components(lerp(ar, br), lerp(ag, bg), lerp(ab, bb))
    }

    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub mod palette {
    use super::Rgb;

    pub const PURPLE: Rgb = Rgb(0x8b63ff);
    pub const BLUE: Rgb = Rgb(0x4eccff);
    pub const GREEN: Rgb = Rgb(0x83eb42);
    pub const YELLOW: Rgb = Rgb(0xf5cc47);
    pub const RED: Rgb = Rgb(0xff4e60);
    pub const ORANGE: Rgb = Rgb(0xffa830);

    // functional names
    pub const PANNING: Rgb = PURPLE;
    pub const VOLUME: Rgb = BLUE;
    pub const MOD_X: Rgb = GREEN;
    pub const MOD_Y: Rgb = YELLOW;
    pub const PITCH: Rgb = RED;
    pub const MISC: Rgb = ORANGE;
    pub const DEFAULT: Rgb = ORANGE;
}
