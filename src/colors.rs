//! RGBA8 color type and the packed ARGB8888 format the device stores.

use std::ops::{Mul, MulAssign};

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const WIREFRAME: Color = Color::rgb(0, 255, 0);
pub const VERTEX: Color = Color::rgb(255, 0, 0);

/// A color with 8-bit red, green, blue and alpha channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs into `0xAARRGGBB`, the layout of the device's pixel buffer.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channel-wise linear interpolation, alpha included.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let channel = |a: u8, b: u8| {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            channel(self.a, other.a),
        )
    }

    /// Average of both colors' RGB channels; alpha is opaque.
    pub fn blend_average(self, other: Color) -> Color {
        let avg = |a: u8, b: u8| ((a as u16 + b as u16) >> 1) as u8;
        Color::rgb(avg(self.r, other.r), avg(self.g, other.g), avg(self.b, other.b))
    }

    /// Multiplies RGB channels as if both were in [0, 1].
    pub fn blend_multiply(self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) >> 8) as u8;
        Color::rgb(mul(self.r, other.r), mul(self.g, other.g), mul(self.b, other.b))
    }

    /// Adds RGB channels, saturating at 255.
    pub fn blend_add(self, other: Color) -> Color {
        Color::rgb(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

/// Scales the RGB channels by an intensity, clamped to 0..=255.
/// Alpha is left as-is.
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, intensity: f32) -> Self::Output {
        let scale = |c: u8| (c as f32 * intensity).clamp(0.0, 255.0) as u8;
        Color::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, intensity: f32) {
        *self = *self * intensity;
    }
}
