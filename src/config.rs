//! Render settings handed to [`Engine::new`](crate::engine::Engine::new).

use crate::colors::{self, Color};
use crate::light::PointLight;
use crate::render::ShadingMode;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Wireframe only
    Wireframe,
    /// Wireframe + vertices
    WireframeVertices,
    /// Filled + wireframe
    FilledWireframe,
    /// Filled + wireframe + vertices
    FilledWireframeVertices,
    /// Filled only
    #[default]
    Filled,
}

impl RenderMode {
    pub fn draws_filled(self) -> bool {
        matches!(
            self,
            RenderMode::Filled | RenderMode::FilledWireframe | RenderMode::FilledWireframeVertices
        )
    }

    pub fn draws_wireframe(self) -> bool {
        self != RenderMode::Filled
    }

    pub fn draws_vertices(self) -> bool {
        matches!(
            self,
            RenderMode::WireframeVertices | RenderMode::FilledWireframeVertices
        )
    }
}

/// Everything that stays fixed across the frames of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub shading_mode: ShadingMode,
    pub render_mode: RenderMode,
    pub light: PointLight,
    pub clear_color: Color,
    pub wireframe_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shading_mode: ShadingMode::default(),
            render_mode: RenderMode::default(),
            light: PointLight::default(),
            clear_color: colors::BACKGROUND,
            wireframe_color: colors::WIREFRAME,
        }
    }
}
