//! Projection parameters.
//!
//! The [`Projection`] enum is the single source of truth for how view space
//! is squashed into the normalized device cube. Both variants are described
//! by a [`Frustum`]: the box (orthographic) or the near-plane rectangle
//! (perspective) in view-space units.

use crate::math::mat4::Mat4;

/// View-volume bounds. For a perspective projection the side bounds are
/// measured on the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Symmetric frustum from a vertical field of view in degrees.
    pub fn from_fov(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let half_height = (fov_y_degrees.to_radians() * 0.5).tan() * near;
        let half_width = half_height * aspect_ratio;
        Self::new(-half_width, half_width, -half_height, half_height, near, far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective(Frustum),
    Orthographic(Frustum),
}

impl Default for Projection {
    fn default() -> Self {
        Self::perspective_fov(45.0, 4.0 / 3.0, 1.0, 100.0)
    }
}

impl Projection {
    /// Perspective projection from a vertical field of view in degrees.
    ///
    /// # Arguments
    /// * `fov_y_degrees` - Vertical field of view
    /// * `aspect_ratio` - Width divided by height
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    pub fn perspective_fov(fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Projection::Perspective(Frustum::from_fov(fov_y_degrees, aspect_ratio, near, far))
    }

    pub fn frustum(&self) -> &Frustum {
        match self {
            Projection::Perspective(f) | Projection::Orthographic(f) => f,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective(f) => {
                Mat4::perspective(f.left, f.right, f.bottom, f.top, f.near, f.far)
            }
            Projection::Orthographic(f) => {
                Mat4::orthographic(f.left, f.right, f.bottom, f.top, f.near, f.far)
            }
        }
    }
}
