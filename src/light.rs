//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A point light radiating equally in all directions from a world position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 10.0, 10.0))
    }
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Lambertian intensity at a world-space surface point.
    ///
    /// Returns `max(0, normal . normalize(light - point))`, in [0.0, 1.0] for
    /// a unit normal. A point sitting exactly on the light gets zero.
    pub fn intensity(&self, point: Vec3, normal: Vec3) -> f32 {
        match (self.position - point).try_normalize() {
            Some(to_light) => normal.dot(to_light).max(0.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Light straight above a surface facing up
        let light = PointLight::new(Vec3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(light.intensity(Vec3::ZERO, Vec3::UP), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_no_illumination() {
        // Surface facing away from the light
        let light = PointLight::new(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(light.intensity(Vec3::ZERO, -Vec3::UP), 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        // Light at 45 degrees above the surface
        let light = PointLight::new(Vec3::new(5.0, 5.0, 0.0));
        let intensity = light.intensity(Vec3::ZERO, Vec3::UP);
        // cos(45) ≈ 0.707
        assert!((intensity - 0.707).abs() < 0.01);
    }

    #[test]
    fn test_point_on_light() {
        let light = PointLight::default();
        assert_eq!(light.intensity(light.position, Vec3::UP), 0.0);
    }
}
