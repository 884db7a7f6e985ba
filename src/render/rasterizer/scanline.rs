//! Scanline-based triangle rasterization.
//!
//! This module fills whole triangles one horizontal line at a time, without
//! splitting them into flat-top and flat-bottom halves. Every scanline is
//! bounded by two edges of the triangle, and everything (x, depth, color) is
//! found by linear interpolation along those edges and then across the line.
//!
//! # Algorithm Overview
//!
//! 1. **Light** the three vertices in world space (see [`shade_triangle`])
//! 2. **Sort vertices** by screen Y so that `v1.y <= v2.y <= v3.y`
//! 3. **Classify** the triangle by which side of the long edge v1 -> v3 the
//!    middle vertex v2 lies on
//! 4. **Rasterize** each scanline between the two edges bounding it
//!
//! # Edge Selection
//!
//! The long edge v1 -> v3 bounds every scanline on one side. The other side
//! is v1 -> v2 above the middle vertex and v2 -> v3 below it:
//!
//! ```text
//!        v1                    v1
//!        |\                    /|
//!        | \  v2 right    v2  / |   v2 left
//!        |  \ of v1->v3    \ /  |   of v1->v3
//!        |  / v2            /   |
//!        | /               / \  |
//!        |/                    \|
//!        v3                    v3
//! ```
//!
//! The side test is the 2D cross product
//!
//! ```text
//! direction = (v2.x - v1.x) * (v3.y - v1.y) - (v3.x - v1.x) * (v2.y - v1.y)
//! ```
//!
//! which is positive when v2 lies to the right of v1 -> v3.
//!
//! # Interpolation
//!
//! For a scanline at `y` and an edge `start -> end`:
//!
//! ```text
//! gradient = (y - start.y) / (end.y - start.y)     (1 for a horizontal edge)
//! x = lerp(start.x, end.x, gradient)
//! ```
//!
//! Depth and color are interpolated the same way, first along both edges and
//! then across the span `[start_x, end_x)`. The half-open span keeps two
//! triangles that share an edge from drawing the pixels on it twice.

use super::shading::{shade_triangle, ShadingMode};
use super::{Rasterizer, Triangle};
use crate::colors::Color;
use crate::light::PointLight;
use crate::math::vec3::Vec3;
use crate::render::device::Device;

/// A lit vertex as seen by the scanline loop: screen position plus color.
#[derive(Clone, Copy, Debug)]
struct RasterVertex {
    position: Vec3,
    color: Color,
}

#[inline]
fn lerp(min: f32, max: f32, gradient: f32) -> f32 {
    min + (max - min) * gradient
}

/// Scanline triangle rasterizer.
///
/// Holds the lighting setup for the frame; rasterizing a triangle does not
/// change it.
///
/// # Characteristics
///
/// - **Cache-friendly**: Processes pixels in row order
/// - **No culling**: both windings are filled
/// - **Depth tested**: every pixel goes through [`Device::draw_point`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer {
    light: PointLight,
    shading: ShadingMode,
}

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer lighting triangles with `light`.
    pub fn new(light: PointLight, shading: ShadingMode) -> Self {
        Self { light, shading }
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    /// Sorts three vertices by Y coordinate (ascending: top to bottom in
    /// screen space).
    ///
    /// Compare-swap (2,3), then (1,2), then (2,3) again: three comparisons
    /// fully sort three elements. After sorting: `v1.y <= v2.y <= v3.y`.
    fn sort_vertices(v1: &mut RasterVertex, v2: &mut RasterVertex, v3: &mut RasterVertex) {
        if v2.position.y > v3.position.y {
            std::mem::swap(v2, v3);
        }
        if v1.position.y > v2.position.y {
            std::mem::swap(v1, v2);
        }
        if v2.position.y > v3.position.y {
            std::mem::swap(v2, v3);
        }
    }

    /// Which side of the line `start -> end` the point `p` is on.
    ///
    /// Positive for "right", negative for "left", zero on the line.
    #[inline]
    fn vertex_direction(p: Vec3, start: Vec3, end: Vec3) -> f32 {
        (p.x - start.x) * (end.y - start.y) - (end.x - start.x) * (p.y - start.y)
    }

    /// How far along `start -> end` the scanline `y` is, in [0, 1].
    ///
    /// A horizontal edge has no vertical extent and counts as fully crossed.
    #[inline]
    fn edge_gradient(y: f32, start: Vec3, end: Vec3) -> f32 {
        if start.y == end.y {
            1.0
        } else {
            ((y - start.y) / (end.y - start.y)).clamp(0.0, 1.0)
        }
    }

    /// Draws one scanline between edge `a -> b` and edge `c -> d`.
    ///
    /// Both edges must have their vertices sorted by Y.
    fn draw_scanline(
        device: &mut Device,
        y: i32,
        a: &RasterVertex,
        b: &RasterVertex,
        c: &RasterVertex,
        d: &RasterVertex,
    ) {
        let yf = y as f32;
        let gradient_1 = Self::edge_gradient(yf, a.position, b.position);
        let gradient_2 = Self::edge_gradient(yf, c.position, d.position);

        let mut start_x = lerp(a.position.x, b.position.x, gradient_1);
        let mut end_x = lerp(c.position.x, d.position.x, gradient_2);

        let mut z1 = lerp(a.position.z, b.position.z, gradient_1);
        let mut z2 = lerp(c.position.z, d.position.z, gradient_2);

        let mut c1 = a.color.lerp(b.color, gradient_1);
        let mut c2 = c.color.lerp(d.color, gradient_2);

        // Always walk left to right
        if start_x > end_x {
            std::mem::swap(&mut start_x, &mut end_x);
            std::mem::swap(&mut z1, &mut z2);
            std::mem::swap(&mut c1, &mut c2);
        }

        // Span ends stay in f32: unclipped edges can lie far outside i32.
        let start = start_x.round();
        let end = end_x.round();
        if start.is_nan() || end.is_nan() || start >= end {
            return;
        }
        let span = end - start;

        // Pixels outside the viewport would be clipped by draw_point anyway;
        // skipping them keeps huge off-screen spans cheap.
        let first = start.max(0.0) as i32;
        let last = end.min(device.width() as f32) as i32;

        for x in first..last {
            let gradient_x = (x as f32 - start) / span;
            let z = lerp(z1, z2, gradient_x);
            let color = c1.lerp(c2, gradient_x);
            device.draw_point(x, y, z, color);
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Lights and fills a triangle using the scanline algorithm.
    ///
    /// Degenerate triangles (zero height or zero area) draw nothing.
    fn fill_triangle(&self, triangle: &Triangle, device: &mut Device) {
        // Lighting uses the submitted order so the face normal keeps its winding
        let colors = shade_triangle(triangle, &self.light, self.shading);

        let [mut v1, mut v2, mut v3] = [0, 1, 2].map(|i| RasterVertex {
            position: triangle.vertices[i].screen,
            color: colors[i],
        });

        Self::sort_vertices(&mut v1, &mut v2, &mut v3);

        if v1.position.y == v3.position.y {
            return;
        }

        let direction = Self::vertex_direction(v2.position, v1.position, v3.position);
        if direction == 0.0 {
            return;
        }

        let y_start = (v1.position.y.round() as i32).max(0);
        let y_end = (v3.position.y.round() as i32).min(device.height() as i32 - 1);

        for y in y_start..=y_end {
            let upper = (y as f32) < v2.position.y;
            match (direction > 0.0, upper) {
                // v2 right of v1 -> v3: the long edge is on the left
                (true, true) => Self::draw_scanline(device, y, &v1, &v3, &v1, &v2),
                (true, false) => Self::draw_scanline(device, y, &v1, &v3, &v2, &v3),
                // v2 left of v1 -> v3: the long edge is on the right
                (false, true) => Self::draw_scanline(device, y, &v1, &v2, &v1, &v3),
                (false, false) => Self::draw_scanline(device, y, &v2, &v3, &v1, &v3),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::rasterizer::ScreenVertex;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn unlit() -> ScanlineRasterizer {
        ScanlineRasterizer::new(PointLight::default(), ShadingMode::Unlit)
    }

    fn flat_triangle(points: [(f32, f32); 3], depth: f32, color: Color) -> Triangle {
        let [a, b, c] = points.map(|(x, y)| {
            ScreenVertex::new(Vec3::new(x, y, depth), Vec3::ZERO, Vec3::BACK, color)
        });
        Triangle::new(a, b, c)
    }

    fn drawn(device: &Device) -> Vec<(i32, i32)> {
        let background = Color::BLACK.to_argb();
        let mut pixels = Vec::new();
        for y in 0..device.height() as i32 {
            for x in 0..device.width() as i32 {
                if device.pixel(x, y) != Some(background) {
                    pixels.push((x, y));
                }
            }
        }
        pixels
    }

    #[test]
    fn fills_inside_and_nothing_outside() {
        let mut device = Device::new(16, 16);
        let tri = flat_triangle([(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)], 0.0, RED);
        unlit().fill_triangle(&tri, &mut device);

        for y in -2..16 {
            for x in -2..16 {
                let (xf, yf) = (x as f32, y as f32);
                let is_drawn = device.pixel(x, y) == Some(RED.to_argb());
                let inside = yf >= 0.0 && yf <= 10.0 && xf >= 0.5 * yf + 1.0 && xf < 10.0 - 0.5 * yf - 1.0;
                let outside = yf < 0.0 || yf > 10.0 || xf < 0.5 * yf - 1.0 || xf >= 10.0 - 0.5 * yf + 1.0;
                if inside {
                    assert!(is_drawn, "({}, {}) should be filled", x, y);
                }
                if outside {
                    assert!(!is_drawn, "({}, {}) should be empty", x, y);
                }
            }
        }
    }

    #[test]
    fn quad_halves_tile_without_gaps_or_overlap() {
        let lower = flat_triangle([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], 0.0, RED);
        let upper = flat_triangle([(0.0, 0.0), (10.0, 10.0), (0.0, 10.0)], 0.0, BLUE);

        let mut a = Device::new(12, 12);
        let mut b = Device::new(12, 12);
        unlit().fill_triangle(&lower, &mut a);
        unlit().fill_triangle(&upper, &mut b);

        let a_pixels = drawn(&a);
        let b_pixels = drawn(&b);
        assert!(a_pixels.iter().all(|p| !b_pixels.contains(p)), "shared edge drawn twice");

        let mut union: Vec<_> = a_pixels.into_iter().chain(b_pixels).collect();
        union.sort();
        let mut square: Vec<_> = (0..10).flat_map(|x| (0..10).map(move |y| (x, y))).collect();
        square.sort();
        assert_eq!(union, square);
    }

    #[test]
    fn both_windings_fill_the_same_pixels() {
        let mut cw = Device::new(20, 20);
        let mut ccw = Device::new(20, 20);
        unlit().fill_triangle(&flat_triangle([(2.0, 1.0), (17.0, 6.0), (6.0, 18.0)], 0.0, RED), &mut cw);
        unlit().fill_triangle(&flat_triangle([(2.0, 1.0), (6.0, 18.0), (17.0, 6.0)], 0.0, RED), &mut ccw);

        let pixels = drawn(&cw);
        assert!(!pixels.is_empty());
        assert_eq!(pixels, drawn(&ccw));
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let points = [(3.0, 2.0), (15.0, 9.0), (7.0, 16.0)];
        let mut reference = Device::new(20, 20);
        unlit().fill_triangle(&flat_triangle(points, 0.0, RED), &mut reference);

        for rotated in [[points[1], points[2], points[0]], [points[2], points[0], points[1]]] {
            let mut device = Device::new(20, 20);
            unlit().fill_triangle(&flat_triangle(rotated, 0.0, RED), &mut device);
            assert_eq!(drawn(&device), drawn(&reference));
        }
    }

    #[test]
    fn zero_height_and_zero_area_draw_nothing() {
        let mut device = Device::new(16, 16);
        unlit().fill_triangle(&flat_triangle([(1.0, 5.0), (8.0, 5.0), (14.0, 5.0)], 0.0, RED), &mut device);
        unlit().fill_triangle(&flat_triangle([(1.0, 1.0), (5.0, 5.0), (9.0, 9.0)], 0.0, RED), &mut device);
        unlit().fill_triangle(&flat_triangle([(4.0, 4.0), (4.0, 4.0), (4.0, 4.0)], 0.0, RED), &mut device);
        assert!(drawn(&device).is_empty());
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_draw_order() {
        let near = flat_triangle([(0.0, 0.0), (20.0, 0.0), (10.0, 20.0)], 0.2, RED);
        let far = flat_triangle([(0.0, 0.0), (20.0, 0.0), (10.0, 20.0)], 0.8, BLUE);

        for order in [[&near, &far], [&far, &near]] {
            let mut device = Device::new(24, 24);
            for tri in order {
                unlit().fill_triangle(tri, &mut device);
            }
            assert_eq!(device.pixel(10, 5), Some(RED.to_argb()));
            assert_eq!(device.depth(10, 5), Some(0.2));
        }
    }

    #[test]
    fn depth_is_interpolated_across_the_triangle() {
        let mut device = Device::new(32, 32);
        let tri = Triangle::new(
            ScreenVertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, Vec3::BACK, RED),
            ScreenVertex::new(Vec3::new(30.0, 0.0, 1.0), Vec3::ZERO, Vec3::BACK, RED),
            ScreenVertex::new(Vec3::new(0.0, 30.0, 0.0), Vec3::ZERO, Vec3::BACK, RED),
        );
        unlit().fill_triangle(&tri, &mut device);

        let left = device.depth(1, 2).unwrap();
        let right = device.depth(20, 2).unwrap();
        assert!(left < right);
        assert!((0.0..=1.0).contains(&left));
        assert!((0.0..=1.0).contains(&right));
    }

    #[test]
    fn colors_are_interpolated_from_vertices() {
        let mut device = Device::new(64, 64);
        let tri = Triangle::new(
            ScreenVertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, Vec3::BACK, RED),
            ScreenVertex::new(Vec3::new(60.0, 0.0, 0.0), Vec3::ZERO, Vec3::BACK, GREEN),
            ScreenVertex::new(Vec3::new(0.0, 60.0, 0.0), Vec3::ZERO, Vec3::BACK, BLUE),
        );
        unlit().fill_triangle(&tri, &mut device);

        let near_red = Color::from_argb(device.pixel(2, 2).unwrap());
        assert!(near_red.r > 200 && near_red.g < 30 && near_red.b < 30);

        let near_green = Color::from_argb(device.pixel(55, 1).unwrap());
        assert!(near_green.g > near_green.r && near_green.g > near_green.b);

        let near_blue = Color::from_argb(device.pixel(1, 55).unwrap());
        assert!(near_blue.b > near_blue.r && near_blue.b > near_blue.g);
    }

    #[test]
    fn off_screen_vertices_are_clipped_per_pixel() {
        let mut device = Device::new(8, 6);
        let tri = flat_triangle([(-100.0, -100.0), (300.0, -100.0), (-100.0, 300.0)], 0.0, RED);
        unlit().fill_triangle(&tri, &mut device);
        assert_eq!(drawn(&device).len(), 8 * 6);
    }

    #[test]
    fn edges_beyond_integer_range_still_fill() {
        let mut device = Device::new(16, 16);
        let tri = flat_triangle([(-3.0e9, 0.0), (3.0e9, 0.0), (5.0, 10.0)], 0.0, RED);
        unlit().fill_triangle(&tri, &mut device);

        // Row 5 spans roughly -1.5e9..1.5e9, so it covers the whole width.
        assert!((0..16).all(|x| device.pixel(x, 5) == Some(RED.to_argb())));
        assert!((0..16).all(|x| device.pixel(x, 12) != Some(RED.to_argb())));
    }

    #[test]
    fn lighting_scales_fill_color() {
        // Screen-space triangle whose world-space face looks straight at the light.
        let light = PointLight::new(Vec3::new(0.0, 0.0, 100.0));
        let world = [
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let screen = [
            Vec3::new(0.0, 20.0, 0.0),
            Vec3::new(20.0, 20.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ];
        let tri = Triangle::new(
            ScreenVertex::new(screen[0], world[0], Vec3::BACK, Color::WHITE),
            ScreenVertex::new(screen[1], world[1], Vec3::BACK, Color::WHITE),
            ScreenVertex::new(screen[2], world[2], Vec3::BACK, Color::WHITE),
        );

        let mut lit = Device::new(24, 24);
        ScanlineRasterizer::new(light, ShadingMode::Flat).fill_triangle(&tri, &mut lit);
        let center = Color::from_argb(lit.pixel(10, 12).unwrap());
        assert!(center.r > 250);

        let mut dark = Device::new(24, 24);
        let behind = PointLight::new(Vec3::new(0.0, 0.0, -100.0));
        ScanlineRasterizer::new(behind, ShadingMode::Flat).fill_triangle(&tri, &mut dark);
        // Unlit faces still win the depth test, they are just black.
        assert_eq!(dark.depth(10, 12), Some(0.0));
        assert_eq!(dark.pixel(10, 12), Some(Color::BLACK.to_argb()));
    }
}
