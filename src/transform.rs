//! Object placement in world space.
//!
//! Provides a [`Transform`] struct with a fluent API for managing position
//! and rotation (yaw/pitch/roll Euler angles).

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A world-space placement: position plus Euler rotation.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(5.0, 2.0, 0.0)
///     .rotate_y(0.1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3, // Euler angles in radians: x=pitch, y=yaw, z=roll
}

impl Transform {
    /// Create a new transform at the origin with no rotation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Moves the object by `delta` in world units.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position += delta;
        self
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Set the rotation (Euler angles in radians).
    pub fn set_rotation(&mut self, rotation: Vec3) -> &mut Self {
        self.rotation = rotation;
        self
    }

    /// Adds `delta` to each Euler angle.
    pub fn rotate(&mut self, delta: Vec3) -> &mut Self {
        self.rotation += delta;
        self
    }

    /// Rotate around the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    /// Rotate around the Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    /// Rotation-only matrix: Yaw * (Pitch * Roll).
    ///
    /// Normals go through this one; they are directions and must not pick up
    /// the translation.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::yaw_pitch_roll(self.rotation.y, self.rotation.x, self.rotation.z)
    }

    /// Generate the world matrix.
    ///
    /// Order: Translation * Rotation (the object spins about its own origin,
    /// then moves into place).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.position) * self.rotation_matrix()
    }
}
