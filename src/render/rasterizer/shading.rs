//! Per-triangle lighting.
//!
//! Lighting runs once per triangle, in world space, before the rasterizer
//! reorders vertices, so the face normal still follows the submitted winding.
//! The result is one lit color per vertex; the scanline code only ever
//! interpolates colors.

use super::Triangle;
use crate::colors::Color;
use crate::light::PointLight;

/// How vertex colors are scaled by the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    /// Vertex colors are used as-is.
    Unlit,
    /// One intensity, from the face normal at the centroid, for all three
    /// vertices.
    Flat,
    /// Per-vertex intensity from the shared face normal and each vertex's
    /// world position.
    FaceNormalPerVertex,
    /// Per-vertex intensity from each vertex's own smoothed normal.
    #[default]
    Gouraud,
}

impl std::fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShadingMode::Unlit => write!(f, "Unlit"),
            ShadingMode::Flat => write!(f, "Flat"),
            ShadingMode::FaceNormalPerVertex => write!(f, "FaceNormalPerVertex"),
            ShadingMode::Gouraud => write!(f, "Gouraud"),
        }
    }
}

/// Returns the lit colors of the triangle's vertices, in submitted order.
pub fn shade_triangle(triangle: &Triangle, light: &PointLight, mode: ShadingMode) -> [Color; 3] {
    let vertices = triangle.vertices;
    match mode {
        ShadingMode::Unlit => vertices.map(|v| v.color),
        ShadingMode::Flat => {
            let intensity = light.intensity(triangle.world_centroid(), triangle.world_normal());
            vertices.map(|v| v.color * intensity)
        }
        ShadingMode::FaceNormalPerVertex => {
            let normal = triangle.world_normal();
            vertices.map(|v| v.color * light.intensity(v.world, normal))
        }
        ShadingMode::Gouraud => vertices.map(|v| v.color * light.intensity(v.world, v.normal)),
    }
}
