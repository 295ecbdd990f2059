use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::util::stable_unit;

pub const CATEGORY_SATURATION: f64 = 0.45;
pub const CATEGORY_BRIGHTNESS: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const LIGHT_BLUE: Self = Self::new(173, 216, 230);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Hue in degrees, saturation and brightness in `[0, 1]`.
pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let brightness = brightness.clamp(0.0, 1.0);

    let chroma = brightness * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = brightness - chroma;

    let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Picks the fill color of each category node.
pub trait ColorPolicy {
    fn color_for(&mut self, index: usize, label: &str) -> Rgb;
}

pub struct RandomHue {
    rng: StdRng,
}

impl RandomHue {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorPolicy for RandomHue {
    fn color_for(&mut self, _index: usize, _label: &str) -> Rgb {
        let hue = self.rng.random_range(0.0..360.0);
        hsb(hue, CATEGORY_SATURATION, CATEGORY_BRIGHTNESS)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LabelHue;

impl ColorPolicy for LabelHue {
    fn color_for(&mut self, _index: usize, label: &str) -> Rgb {
        hsb(
            stable_unit(label) * 360.0,
            CATEGORY_SATURATION,
            CATEGORY_BRIGHTNESS,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }
}

impl ColorPolicy for Palette {
    fn color_for(&mut self, index: usize, _label: &str) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::new(0, 0, 0);
        }
        self.colors[index % self.colors.len()]
    }
}
