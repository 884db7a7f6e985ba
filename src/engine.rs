//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the [`Device`] and drives one frame at a time: mesh faces are taken from
//! model space to world space (for lighting) and to screen space (for
//! rasterization), then handed to the rasterizer.

use log::{trace, warn};

use crate::colors;
use crate::config::{RenderConfig, RenderMode};
use crate::light::PointLight;
use crate::math::mat4::Mat4;
use crate::mesh::Mesh;
use crate::render::{Device, Rasterizer, ScanlineRasterizer, ScreenVertex, ShadingMode, Triangle};

/// Size of the square drawn over each vertex in the vertex render modes.
const VERTEX_MARKER_SIZE: i32 = 4;

/// What happened during one [`Engine::render`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Faces handed to the rasterizer.
    pub faces_submitted: usize,
    /// Faces dropped because they referenced a missing vertex.
    pub faces_skipped: usize,
}

pub struct Engine {
    device: Device,
    rasterizer: ScanlineRasterizer,
    config: RenderConfig,
}

impl Engine {
    pub fn new(width: u32, height: u32, config: RenderConfig) -> Self {
        Self {
            device: Device::new(width, height),
            rasterizer: ScanlineRasterizer::new(config.light, config.shading_mode),
            config,
        }
    }

    /// Renders onto a caller-supplied surface instead of a fresh one.
    pub fn with_device(device: Device, config: RenderConfig) -> Self {
        Self {
            device,
            rasterizer: ScanlineRasterizer::new(config.light, config.shading_mode),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.config.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.config.render_mode
    }

    pub fn set_shading_mode(&mut self, mode: ShadingMode) {
        self.config.shading_mode = mode;
        self.rasterizer = ScanlineRasterizer::new(self.config.light, mode);
    }

    pub fn shading_mode(&self) -> ShadingMode {
        self.config.shading_mode
    }

    pub fn set_light(&mut self, light: PointLight) {
        self.config.light = light;
        self.rasterizer = ScanlineRasterizer::new(light, self.config.shading_mode);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.device = Device::new(width, height);
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut Device {
        &mut self.device
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.device.as_bytes()
    }

    /// Clears the device and draws `mesh` as seen through `view` and
    /// `projection`.
    pub fn render(&mut self, mesh: &Mesh, projection: &Mat4, view: &Mat4) -> FrameStats {
        self.device.clear(self.config.clear_color);
        let stats = self.draw_mesh(mesh, projection, view);
        trace!(
            "frame: {} faces submitted, {} skipped",
            stats.faces_submitted,
            stats.faces_skipped
        );
        stats
    }

    /// Draws `mesh` on top of whatever the device already holds.
    ///
    /// Faces with an out-of-range vertex index are skipped and reported; the
    /// rest of the mesh still renders.
    pub fn draw_mesh(&mut self, mesh: &Mesh, projection: &Mat4, view: &Mat4) -> FrameStats {
        let world = mesh.world_matrix();
        let rotation = mesh.rotation_matrix();
        let transform = *projection * (*view * world);

        let mode = self.config.render_mode;
        let mut stats = FrameStats::default();

        for face_index in 0..mesh.face_count() {
            let vertices = match mesh.face_vertices(face_index) {
                Ok(vertices) => vertices,
                Err(err) => {
                    warn!("mesh '{}': skipping face: {}", mesh.name(), err);
                    stats.faces_skipped += 1;
                    continue;
                }
            };

            let [v1, v2, v3] = vertices.map(|v| {
                ScreenVertex::new(
                    self.device.project(v.position, &transform),
                    world.transform_point(v.position),
                    rotation.transform_direction(v.normal).normalize(),
                    v.color,
                )
            });
            let triangle = Triangle::new(v1, v2, v3);

            if mode.draws_filled() {
                self.rasterizer.fill_triangle(&triangle, &mut self.device);
            }
            if mode.draws_wireframe() {
                self.device
                    .draw_triangle_wireframe(&triangle, self.config.wireframe_color);
            }
            if mode.draws_vertices() {
                for vertex in &triangle.vertices {
                    self.device
                        .draw_marker(vertex.screen, VERTEX_MARKER_SIZE, colors::VERTEX);
                }
            }
            stats.faces_submitted += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::colors::Color;
    use crate::math::vec3::Vec3;
    use crate::mesh::Face;
    use crate::projection::Projection;
    use approx::assert_relative_eq;

    const WIDTH: u32 = 64;
    const HEIGHT: u32 = 48;

    fn matrices() -> (Mat4, Mat4) {
        let projection =
            Projection::perspective_fov(45.0, WIDTH as f32 / HEIGHT as f32, 1.0, 100.0).matrix();
        let view = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO)
            .view_matrix()
            .unwrap();
        (projection, view)
    }

    fn engine(render_mode: RenderMode) -> Engine {
        let config = RenderConfig {
            render_mode,
            ..RenderConfig::default()
        };
        Engine::new(WIDTH, HEIGHT, config)
    }

    fn count(device: &Device, color: Color) -> usize {
        device.pixels().iter().filter(|&&p| p == color.to_argb()).count()
    }

    #[test]
    fn cube_front_face_covers_the_center() {
        let (projection, view) = matrices();
        let mut engine = engine(RenderMode::Filled);
        let stats = engine.render(&Mesh::cube(), &projection, &view);

        assert_eq!(
            stats,
            FrameStats {
                faces_submitted: 12,
                faces_skipped: 0
            }
        );

        // The front face sits 4 units in front of the camera.
        let depth = engine.device().depth(32, 24).unwrap();
        assert_relative_eq!(depth, 0.515_151_5, epsilon = 1e-3);

        // Corners of the screen stay clear.
        assert_eq!(engine.device().depth(0, 0), Some(f32::INFINITY));
        assert_eq!(engine.device().depth(63, 47), Some(f32::INFINITY));
    }

    #[test]
    fn unlit_cube_shows_vertex_colors() {
        let (projection, view) = matrices();
        let mut engine = engine(RenderMode::Filled);
        engine.set_shading_mode(ShadingMode::Unlit);
        engine.render(&Mesh::cube(), &projection, &view);

        let center = engine.device().pixel(32, 24).unwrap();
        assert_ne!(center, colors::BACKGROUND.to_argb());
    }

    #[test]
    fn invalid_faces_are_skipped_and_the_rest_renders() {
        let (projection, view) = matrices();
        let mut mesh = Mesh::cube();
        mesh.faces_mut()[4].c = 99;

        let mut engine = engine(RenderMode::Filled);
        let stats = engine.render(&mesh, &projection, &view);

        assert_eq!(stats.faces_submitted, 11);
        assert_eq!(stats.faces_skipped, 1);
        assert!(engine.device().depth(32, 24).unwrap().is_finite());
    }

    #[test]
    fn render_clears_the_previous_frame() {
        let (projection, view) = matrices();
        let mut mesh = Mesh::cube();
        let mut engine = engine(RenderMode::Filled);
        engine.render(&mesh, &projection, &view);

        mesh.transform_mut().set_position_xyz(100.0, 0.0, 0.0);
        engine.render(&mesh, &projection, &view);

        let background = count(engine.device(), colors::BACKGROUND);
        assert_eq!(background, (WIDTH * HEIGHT) as usize);
    }

    #[test]
    fn wireframe_mode_draws_only_edges() {
        let (projection, view) = matrices();
        let mut engine = engine(RenderMode::Wireframe);
        engine.render(&Mesh::cube(), &projection, &view);

        let wire = count(engine.device(), colors::WIREFRAME);
        let background = count(engine.device(), colors::BACKGROUND);
        assert!(wire > 0);
        assert_eq!(wire + background, (WIDTH * HEIGHT) as usize);

        let mut filled = self::engine(RenderMode::Filled);
        filled.render(&Mesh::cube(), &projection, &view);
        assert_eq!(count(filled.device(), colors::WIREFRAME), 0);
    }

    #[test]
    fn rotation_turns_the_cube() {
        let (projection, view) = matrices();
        let mut mesh = Mesh::cube();
        let mut engine = engine(RenderMode::Filled);
        engine.render(&mesh, &projection, &view);
        let still = engine.device().depth(32, 24).unwrap();

        // An edge now points at the camera, so the center is closer.
        mesh.transform_mut().rotate_y(std::f32::consts::FRAC_PI_4);
        engine.render(&mesh, &projection, &view);
        let turned = engine.device().depth(32, 24).unwrap();
        assert!(turned < still);
    }

    #[test]
    fn far_off_vertices_do_not_break_the_frame() {
        let vertices = vec![
            Vec3::new(-1.0e12, 0.0, 0.0).into(),
            Vec3::new(0.5, 0.0, 0.0).into(),
            Vec3::new(0.0, 0.5, 0.0).into(),
        ];
        let mesh = Mesh::new("sliver", vertices, vec![Face::new(0, 1, 2)]).unwrap();

        let mut engine = engine(RenderMode::FilledWireframeVertices);
        let stats = engine.render(&mesh, &Mat4::IDENTITY, &Mat4::IDENTITY);

        assert_eq!(stats.faces_submitted, 1);
        // The two on-screen vertices still get their markers.
        assert_eq!(engine.device().pixel(48, 24), Some(colors::VERTEX.to_argb()));
        assert_eq!(engine.device().pixel(32, 12), Some(colors::VERTEX.to_argb()));
    }

    #[test]
    fn with_device_draws_into_the_given_surface() {
        let (projection, view) = matrices();
        let device = Device::from_pixels(vec![0; (WIDTH * HEIGHT) as usize], WIDTH, HEIGHT).unwrap();
        let mut engine = Engine::with_device(device, RenderConfig::default());
        engine.render(&Mesh::cube(), &projection, &view);
        assert_eq!(engine.frame_buffer().len(), (WIDTH * HEIGHT * 4) as usize);
    }
}
