//! Look-at camera.
//!
//! # Coordinate System
//!
//! Right-handed, matching [`Mat4::look_at`]:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer; the camera looks down -Z

use crate::error::{RenderError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// A camera defined by where it stands, what it looks at and which way is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO)
    }
}

impl Camera {
    /// Creates a camera at `position` looking toward `target` with world +Y up.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::UP,
        }
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Builds the view matrix.
    ///
    /// Fails with `DegenerateGeometry` when the camera sits on its target or
    /// looks straight along `up`; no orthonormal basis exists then.
    pub fn view_matrix(&self) -> Result<Mat4> {
        let forward = (self.position - self.target)
            .try_normalize()
            .ok_or(RenderError::DegenerateGeometry("camera position equals target"))?;
        self.up
            .cross(forward)
            .try_normalize()
            .ok_or(RenderError::DegenerateGeometry("camera up is parallel to view direction"))?;
        Ok(Mat4::look_at(self.position, self.target, self.up))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert_eq!(camera.forward(), Vec3::new(0.0, 0.0, -1.0));

        let view = camera.view_matrix().unwrap();
        let eye = view.transform_point(camera.position);
        assert_relative_eq!(eye.magnitude(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_cameras_are_rejected() {
        let on_target = Camera::new(Vec3::ONE, Vec3::ONE);
        assert!(matches!(
            on_target.view_matrix(),
            Err(RenderError::DegenerateGeometry(_))
        ));

        let straight_down = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        assert!(straight_down.view_matrix().is_err());
    }
}
