//! Sidebar colours
//!
//! The host owns the real theme; this module only turns its sidebar
//! background into the handful of derived shades the sidebar paints with.

use serde::{Deserialize, Serialize};

/// An RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Darken by `factor` percent, toolkit style: 140 divides the HSV value
    /// by 1.4, factors below 100 lighten instead.
    pub fn darker(&self, factor: u32) -> Color {
        if factor == 0 {
            return *self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        let v = v * 100.0 / factor as f32;
        Color::from_hsv(h, s, v, self.a)
    }

    /// Lighten by `factor` percent; value overflow past 1.0 bleeds into
    /// reduced saturation so bright colours still move towards white.
    pub fn lighter(&self, factor: u32) -> Color {
        if factor == 0 {
            return *self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, mut v) = self.to_hsv();
        v = v * factor as f32 / 100.0;
        if v > 1.0 {
            s = (s - (v - 1.0)).max(0.0);
            v = 1.0;
        }
        Color::from_hsv(h, s, v, self.a)
    }

    fn to_hsv(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };
        (h, s, max)
    }

    fn from_hsv(h: f32, s: f32, v: f32, a: u8) -> Color {
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 / 60 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgba(to_u8(r), to_u8(g), to_u8(b), a)
    }
}

/// Shades used when painting the sidebar buttons and drop placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarTheme {
    /// Slot and idle button background
    pub background: Color,
    /// Checked button and hover background
    pub highlight: Color,
    /// Drop placeholder fill
    pub placeholder: Color,
}

impl SidebarTheme {
    pub fn from_background(background: Color) -> Self {
        Self {
            background,
            highlight: background.darker(140),
            placeholder: background.darker(40),
        }
    }
}

impl Default for SidebarTheme {
    fn default() -> Self {
        Self::from_background(Color::rgb(0x2a, 0x2a, 0x2a))
    }
}
