//! Rendering backend: the pixel [`Device`], 2D drawing helpers and the
//! triangle rasterizer.

pub mod device;
pub mod draw2d;
pub mod rasterizer;

pub use device::Device;
pub use rasterizer::{
    shade_triangle, Rasterizer, ScanlineRasterizer, ScreenVertex, ShadingMode, Triangle,
};
