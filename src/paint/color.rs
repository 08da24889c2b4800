use std::fmt;

use rand::Rng;

use crate::foundation::core::Span;

/// Opaque 24-bit sRGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_packed(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Transform origin in percent of the element box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pivot {
    pub x_pct: u8,
    pub y_pct: u8,
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x_pct, self.y_pct)
    }
}

/// Uniform over the full 24-bit space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_packed(rng.gen_range(0..=0x00ff_ffff))
}

/// Uniform in `range`; the default policy uses `[0.4, 1.0)` so nothing is invisible.
pub fn random_opacity<R: Rng + ?Sized>(rng: &mut R, range: Span<f64>) -> f64 {
    range.sample(rng)
}

/// Both components uniform in `[0, 100)`.
pub fn random_pivot<R: Rng + ?Sized>(rng: &mut R) -> Pivot {
    Pivot {
        x_pct: rng.gen_range(0..100),
        y_pct: rng.gen_range(0..100),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
