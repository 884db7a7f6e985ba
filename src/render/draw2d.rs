//! 2D drawing primitives on top of [`Device`]: lines, rectangles, circles
//! and triangle wireframes.
//!
//! Everything here is clipped to the viewport. Only the wireframe overlay
//! takes part in depth testing; the rest are plain overlays.

use super::device::Device;
use super::rasterizer::Triangle;
use crate::colors::Color;
use crate::math::vec3::Vec3;

/// Depth bias so wireframes render slightly in front of filled triangles.
const WIREFRAME_DEPTH_BIAS: f32 = 0.0001;

/// Screen coordinates further than this from the origin are not walked.
/// Vertices behind the camera project to huge or non-finite values.
const MAX_COORDINATE: f32 = 32768.0;

const MAX_PIXEL: i32 = MAX_COORDINATE as i32;

#[inline]
fn in_range(v: i32) -> bool {
    (-MAX_PIXEL..=MAX_PIXEL).contains(&v)
}

#[inline]
fn to_pixel(v: f32) -> Option<i32> {
    if v.is_finite() && v.abs() <= MAX_COORDINATE {
        Some(v as i32)
    } else {
        None
    }
}

impl Device {
    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Both endpoints are included. Pixels ignore the depth buffer. Lines
    /// with an endpoint beyond the drawable coordinate range are skipped.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.walk_line(x0, y0, x1, y1, |device, x, y, _| device.put_pixel(x, y, color));
    }

    /// Draws a depth-tested line, interpolating depth from `z0` to `z1`.
    pub fn draw_line_with_depth(
        &mut self,
        (x0, y0, z0): (i32, i32, f32),
        (x1, y1, z1): (i32, i32, f32),
        color: Color,
    ) {
        self.walk_line(x0, y0, x1, y1, |device, x, y, t| {
            let depth = z0 + (z1 - z0) * t - WIREFRAME_DEPTH_BIAS;
            device.draw_point(x, y, depth, color);
        });
    }

    /// Visits every pixel of the line from (x0, y0) to (x1, y1), passing the
    /// fraction of the line covered so far.
    ///
    /// The error term tracks how far the current pixel is from the ideal
    /// line. For each step along the major axis it decides whether to also
    /// step along the minor axis; when both conditions hold the step is
    /// diagonal.
    fn walk_line<F>(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
    where
        F: FnMut(&mut Self, i32, i32, f32),
    {
        if ![x0, y0, x1, y1].into_iter().all(in_range) {
            return;
        }
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let steps = dx.max(dy);
        if steps == 0 {
            plot(self, x0, y0, 0.0);
            return;
        }

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = x0;
        let mut y = y0;
        let mut step = 0;

        loop {
            plot(self, x, y, step as f32 / steps as f32);

            if x == x1 && y == y1 {
                break;
            }
            step += 1;

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Outlines a triangle in screen space with depth-tested lines.
    ///
    /// Edges with an endpoint far outside the screen are skipped.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: Color) {
        let [p0, p1, p2] = triangle.vertices.map(|v| v.screen);
        for (a, b) in [(p0, p1), (p1, p2), (p2, p0)] {
            let (Some(ax), Some(ay), Some(bx), Some(by)) =
                (to_pixel(a.x), to_pixel(a.y), to_pixel(b.x), to_pixel(b.y))
            else {
                continue;
            };
            self.draw_line_with_depth((ax, ay, a.z), (bx, by, b.z), color);
        }
    }

    /// Fills the `width` x `height` rectangle with its top-left corner at
    /// (x, y), clipped to the viewport.
    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let top = y.max(0);
        let bottom = y.saturating_add(height).min(self.height() as i32);
        let right = x.saturating_add(width).saturating_sub(1);
        for row in top..bottom {
            self.fill_span(x, right, row, color);
        }
    }

    /// Draws a `size` x `size` square centered on a screen-space point.
    ///
    /// Points that are not finite or lie far off screen draw nothing.
    pub fn draw_marker(&mut self, point: Vec3, size: i32, color: Color) {
        let (Some(x), Some(y)) = (to_pixel(point.x), to_pixel(point.y)) else {
            return;
        };
        let half = size / 2;
        self.draw_rect(x.saturating_sub(half), y.saturating_sub(half), size, size, color);
    }

    pub fn draw_grid(&mut self, spacing: i32, color: Color) {
        if spacing <= 0 {
            return;
        }
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if x % spacing == 0 || y % spacing == 0 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Outlines a circle with the midpoint algorithm.
    ///
    /// All eight octants are drawn at once until x passes y.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if !(in_range(cx) && in_range(cy) && (0..=MAX_PIXEL).contains(&radius)) {
            return;
        }
        let mut determinant = 3 - 2 * radius;
        let mut x = 0;
        let mut y = radius;

        while x <= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy + y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy + x),
                (cx - y, cy - x),
            ] {
                self.put_pixel(px, py, color);
            }

            if determinant < 0 {
                determinant += 4 * x + 6;
            } else {
                determinant += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Fills a circle, drawing horizontal spans between the midpoint
    /// algorithm's octant points.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if !(in_range(cx) && in_range(cy) && (0..=MAX_PIXEL).contains(&radius)) {
            return;
        }
        let mut determinant = 3 - 2 * radius;
        let mut x = 0;
        let mut y = radius;

        while x <= y {
            self.fill_span(cx - x, cx + x, cy + y, color);
            self.fill_span(cx - x, cx + x, cy - y, color);
            self.fill_span(cx - y, cx + y, cy + x, color);
            self.fill_span(cx - y, cx + y, cy - x, color);

            if determinant < 0 {
                determinant += 4 * x + 6;
            } else {
                determinant += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Writes the inclusive span `[sx, ex]` on row `y`, clipped.
    fn fill_span(&mut self, sx: i32, ex: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let sx = sx.max(0);
        let ex = ex.min(self.width() as i32 - 1);
        for x in sx..=ex {
            self.put_pixel(x, y, color);
        }
    }
}
