//! A CPU-based software-rendered 3D graphics engine.
//!
//! This crate renders indexed triangle meshes into a plain pixel buffer with a
//! depth buffer, lighting and scanline rasterization. All rendering is done on
//! the CPU; presenting the buffer is left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use rusterize::prelude::*;
//!
//! let mut engine = Engine::new(800, 600, RenderConfig::default());
//! let mesh = Mesh::cube();
//! let projection = Projection::perspective_fov(45.0, 800.0 / 600.0, 1.0, 100.0);
//! let view = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO).view_matrix()?;
//! engine.render(&mesh, &projection.matrix(), &view);
//! let frame: &[u8] = engine.frame_buffer();
//! # Ok::<(), rusterize::RenderError>(())
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod render;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use colors::Color;
pub use config::{RenderConfig, RenderMode};
pub use engine::{Engine, FrameStats};
pub use error::{RenderError, Result};
pub use mesh::{Face, Mesh, Vertex};
pub use projection::Projection;
pub use render::{Device, ShadingMode};
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rusterize::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;

    // Engine
    pub use crate::config::{RenderConfig, RenderMode};
    pub use crate::engine::{Engine, FrameStats};
    pub use crate::render::ShadingMode;

    // Scene
    pub use crate::colors::Color;
    pub use crate::light::PointLight;
    pub use crate::mesh::{Face, Mesh, Vertex};

    // Projection
    pub use crate::projection::{Frustum, Projection};

    // Transform
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Errors
    pub use crate::error::{RenderError, Result};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{Device, Rasterizer, ScanlineRasterizer, ScreenVertex, Triangle};
}
