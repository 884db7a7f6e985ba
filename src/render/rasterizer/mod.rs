//! Triangle rasterization.
//!
//! The frame driver turns mesh faces into [`Triangle`]s of [`ScreenVertex`]
//! values and hands them to a [`Rasterizer`], which lights them and fills
//! them into the [`Device`].
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: vertical sort, winding classification and
//!   per-scanline edge interpolation

mod scanline;
mod shading;

pub use scanline::ScanlineRasterizer;
pub use shading::{shade_triangle, ShadingMode};

use super::device::Device;
use crate::colors::Color;
use crate::math::vec3::Vec3;

/// A vertex after projection, ready for rasterization.
///
/// Each pipeline stage has its own field: `screen` is only meaningful to the
/// scanline code, `world` and `normal` only to lighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    /// Pixel x, pixel y and projected depth.
    pub screen: Vec3,
    /// World-space position.
    pub world: Vec3,
    /// World-space unit normal.
    pub normal: Vec3,
    pub color: Color,
}

impl ScreenVertex {
    pub fn new(screen: Vec3, world: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            screen,
            world,
            normal,
            color,
        }
    }
}

/// A triangle ready for rasterization, vertices in submitted winding order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [ScreenVertex; 3],
}

impl Triangle {
    pub fn new(v1: ScreenVertex, v2: ScreenVertex, v3: ScreenVertex) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Unit normal from the world-space positions, winding v1 -> v2 -> v3.
    pub fn world_normal(&self) -> Vec3 {
        let [v1, v2, v3] = &self.vertices;
        (v2.world - v1.world).cross(v3.world - v1.world).normalize()
    }

    pub fn world_centroid(&self) -> Vec3 {
        let [v1, v2, v3] = &self.vertices;
        (v1.world + v2.world + v3.world) / 3.0
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are lit and filled into a device.
pub trait Rasterizer {
    /// Fill a triangle into the device.
    ///
    /// # Arguments
    /// * `triangle` - The triangle to rasterize
    /// * `device` - The device to draw into
    fn fill_triangle(&self, triangle: &Triangle, device: &mut Device);
}
