use egui::Color32;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An RGB color with a separate opacity.
///
/// Channels are stored as floats in `0.0..=255.0` so that repeated
/// darkening does not accumulate rounding error. Every operation returns a
/// new value; a `Color` is never changed in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    alpha: f32,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 255.0);
    pub const GREY: Self = Self::opaque(128.0, 128.0, 128.0);
    pub const LIGHT_GREY: Self = Self::opaque(211.0, 211.0, 211.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create an opaque color, clamping each channel to `0..=255`.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::opaque(r.clamp(0.0, 255.0), g.clamp(0.0, 255.0), b.clamp(0.0, 255.0))
    }

    pub fn r(&self) -> f32 {
        self.r
    }

    pub fn g(&self) -> f32 {
        self.g
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Scale the HSL lightness by `1 - amount`, keeping hue, saturation and alpha.
    pub fn darken(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        let l = l * (1.0 - amount.clamp(0.0, 1.0));
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self {
            r,
            g,
            b,
            alpha: self.alpha,
        }
    }

    /// Scale the opacity by `1 - amount`.
    pub fn fade(&self, amount: f32) -> Self {
        Self {
            alpha: self.alpha * (1.0 - amount.clamp(0.0, 1.0)),
            ..*self
        }
    }

    /// Relative luminance in `0.0..=1.0` using Rec. 709 weights.
    pub fn luminance(&self) -> f32 {
        (0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b) / 255.0
    }

    pub fn to_color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.alpha * 255.0).round() as u8,
        )
    }

    fn to_hsl(&self) -> (f32, f32, f32) {
        let (r, g, b) = (self.r / 255.0, self.g / 255.0, self.b / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (h * 60.0, s, l)
    }
}

impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        color.to_color32()
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r + m) * 255.0).clamp(0.0, 255.0),
        ((g + m) * 255.0).clamp(0.0, 255.0),
        ((b + m) * 255.0).clamp(0.0, 255.0),
    )
}

/// Source of colors for newly committed rectangles.
pub trait Palette {
    fn next_color(&mut self) -> Color;
}

/// Three independent uniform channels in `0..255`.
#[derive(Debug, Default)]
pub struct RandomPalette;

impl Palette for RandomPalette {
    fn next_color(&mut self) -> Color {
        let mut rng = rand::thread_rng();
        Color::from_rgb(
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
            rng.gen_range(0.0..255.0),
        )
    }
}
