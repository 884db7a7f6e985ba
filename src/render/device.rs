//! Pixel surface with a parallel depth buffer.
//!
//! The [`Device`] owns a packed ARGB8888 color buffer and an `f32` depth
//! buffer of the same dimensions, both row-major with
//! `index = x + y * width`.
//!
//! # Depth Buffer
//!
//! The depth buffer stores the projected z of the closest surface drawn so
//! far. Smaller values are closer to the camera. [`Device::clear`] resets
//! every cell to `f32::INFINITY` so the first write to a pixel always passes.

use crate::colors::Color;
use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

const DEPTH_CLEAR: f32 = f32::INFINITY;

pub struct Device {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Device {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![Color::BLACK.to_argb(); size],
            depth_buffer: vec![DEPTH_CLEAR; size],
            width,
            height,
        }
    }

    /// Wraps a pixel surface supplied by the caller (a window, an image).
    ///
    /// The depth buffer is allocated to match.
    pub fn from_pixels(pixels: Vec<u32>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            color_buffer: pixels,
            depth_buffer: vec![DEPTH_CLEAR; expected],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(x as usize + y as usize * self.width as usize)
        } else {
            None
        }
    }

    /// Fills every pixel with `color` and resets every depth cell.
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
        self.depth_buffer.fill(DEPTH_CLEAR);
    }

    /// Writes a pixel ignoring the depth buffer.
    ///
    /// Out-of-range coordinates are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color.to_argb();
        }
    }

    /// Writes a pixel if it passes the depth test.
    ///
    /// The write is discarded only when the stored depth is strictly less
    /// than `depth`; equal depths overwrite. Returns whether the pixel was
    /// written. Out-of-range coordinates are ignored.
    #[inline]
    pub fn put_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if self.depth_buffer[idx] < depth {
            return false;
        }
        self.depth_buffer[idx] = depth;
        self.color_buffer[idx] = color.to_argb();
        true
    }

    /// Clips against the viewport, then performs a depth-tested write.
    ///
    /// All rasterizer output goes through here.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32, depth: f32, color: Color) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.put_pixel_with_depth(x, y, depth, color)
    }

    /// Maps `v` through `transform` and then from normalized device
    /// coordinates to pixel coordinates.
    ///
    /// Screen Y grows downward, so NDC Y is flipped. Z passes through
    /// unchanged for depth testing.
    pub fn project(&self, v: Vec3, transform: &Mat4) -> Vec3 {
        let ndc = transform.transform_point(v);
        let half_width = self.width as f32 / 2.0;
        let half_height = self.height as f32 / 2.0;
        Vec3::new(
            half_width * ndc.x + half_width,
            -half_height * ndc.y + half_height,
            ndc.z,
        )
    }

    /// Get the packed ARGB color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.color_buffer
    }

    /// Returns the color buffer as bytes (native-endian ARGB8888).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }
}
