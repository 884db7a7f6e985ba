//! 4x4 transformation matrix, row-major storage, column vectors.
//!
//! # Convention
//! - Storage is `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Right-handed: the camera looks down -Z and projection matrices follow
//!   the OpenGL layout
//!
//! # Example
//! ```ignore
//! let world = Mat4::translation(position) * Mat4::yaw_pitch_roll(yaw, pitch, roll);
//! let transform = projection * (view * world);
//! let ndc = transform.transform_point(vertex);
//! ```

use std::fmt;
use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        data: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Mat4 = Mat4 {
        data: [[0.0; 4]; 4],
    };

    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column; the homogeneous row stays
    /// `(0, 0, 0, 1)`.
    pub fn translation(position: Vec3) -> Self {
        Self::translation_xyz(position.x, position.y, position.z)
    }

    pub fn translation_xyz(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.data[0][3] = x;
        m.data[1][3] = y;
        m.data[2][3] = z;
        m
    }

    /// Creates a rotation matrix around the X axis (right-hand rule).
    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[1][1] = c;
        m.data[2][2] = c;
        m.data[2][1] = s;
        m.data[1][2] = -s;
        m
    }

    /// Creates a rotation matrix around the Y axis (right-hand rule).
    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0][0] = c;
        m.data[2][2] = c;
        m.data[0][2] = s;
        m.data[2][0] = -s;
        m
    }

    /// Creates a rotation matrix around the Z axis (right-hand rule).
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0][0] = c;
        m.data[1][1] = c;
        m.data[1][0] = s;
        m.data[0][1] = -s;
        m
    }

    /// Builds a rotation from yaw (Y), pitch (X) and roll (Z).
    ///
    /// Order: Yaw * (Pitch * Roll), so roll is applied first, then pitch,
    /// then yaw.
    pub fn yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self::rotation_y(yaw) * (Self::rotation_x(pitch) * Self::rotation_z(roll))
    }

    /// Creates a right-handed view matrix.
    ///
    /// The camera looks down its local -Z axis, so the forward basis vector is
    /// `eye - at`. The rows hold the camera basis and the last column moves
    /// `eye` to the origin.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `at` - The point the camera is looking at.
    /// * `up` - The world up direction.
    pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Self {
        let z_axis = (eye - at).normalize();
        let x_axis = up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);
        let neg_eye = -eye;

        Self::new([
            [x_axis.x, x_axis.y, x_axis.z, neg_eye.dot(x_axis)],
            [y_axis.x, y_axis.y, y_axis.z, neg_eye.dot(y_axis)],
            [z_axis.x, z_axis.y, z_axis.z, neg_eye.dot(z_axis)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// OpenGL-style orthographic projection mapping the box onto the
    /// `[-1, 1]` cube.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut m = Self::ZERO;
        m.data[0][0] = 2.0 / (right - left);
        m.data[1][1] = 2.0 / (top - bottom);
        m.data[2][2] = -2.0 / (far - near);
        m.data[0][3] = -(right + left) / (right - left);
        m.data[1][3] = -(top + bottom) / (top - bottom);
        m.data[2][3] = -(far + near) / (far - near);
        m.data[3][3] = 1.0;
        m
    }

    /// OpenGL-style perspective projection from explicit frustum bounds at the
    /// near plane.
    pub fn perspective(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut m = Self::ZERO;
        m.data[0][0] = (2.0 * near) / (right - left);
        m.data[1][1] = (2.0 * near) / (top - bottom);
        m.data[0][2] = (right + left) / (right - left);
        m.data[1][2] = (top + bottom) / (top - bottom);
        m.data[2][2] = -(far + near) / (far - near);
        m.data[3][2] = -1.0;
        m.data[2][3] = (-2.0 * far * near) / (far - near);
        m
    }

    /// Symmetric perspective projection from a vertical field of view in
    /// degrees.
    pub fn perspective_fov(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let half_height = (fov_degrees.to_radians() * 0.5).tan() * near;
        let half_width = half_height * aspect_ratio;
        Self::perspective(-half_width, half_width, -half_height, half_height, near, far)
    }

    /// Returns the translation column.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.data[0][3], self.data[1][3], self.data[2][3])
    }

    /// Overwrites the translation column, leaving the rest untouched.
    pub fn set_position(&mut self, position: Vec3) {
        self.data[0][3] = position.x;
        self.data[1][3] = position.y;
        self.data[2][3] = position.z;
        self.data[3][3] = 1.0;
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                result.data[col][row] = self.data[row][col];
            }
        }
        result
    }

    /// Computes the inverse of the matrix using Gauss-Jordan elimination with
    /// partial pivoting.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Mat4> {
        let mut m = self.data;
        let mut inv = Self::IDENTITY.data;

        for col in 0..4 {
            let pivot = (col..4).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
            if m[pivot][col].abs() < f32::EPSILON {
                return None;
            }
            m.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / m[col][col];
            for k in 0..4 {
                m[col][k] *= scale;
                inv[col][k] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = m[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    m[row][k] -= factor * m[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Some(Mat4::new(inv))
    }

    /// Transforms a point: promotes to w=1, applies the full matrix and
    /// performs the perspective divide.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from(v)).to_vec3_perspective()
    }

    /// Transforms a direction (normal, axis): only the upper 3x3 block is
    /// applied, so translation and w play no part.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::direction(v.x, v.y, v.z)).to_vec3()
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Set element at [row][col].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row][col] = value;
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, value) in out.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| Vec4::new(self.data[r][0], self.data[r][1], self.data[r][2], self.data[r][3]);
        Vec4::new(row(0).dot(v), row(1).dot(v), row(2).dot(v), row(3).dot(v))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{:>10.4} {:>10.4} {:>10.4} {:>10.4}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
