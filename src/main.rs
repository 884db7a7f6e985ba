use std::error::Error;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use log::info;
use rusterize::prelude::*;

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const FRAME_COUNT: u32 = 60;
const ROTATION_PER_FRAME: f32 = 0.02;

fn snapshot(device: &rusterize::Device) -> RgbaImage {
    RgbaImage::from_fn(device.width(), device.height(), |x, y| {
        let argb = device.pixel(x as i32, y as i32).unwrap_or(0);
        let color = Color::from_argb(argb);
        Rgba([color.r, color.g, color.b, color.a])
    })
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frame.png"));

    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT, RenderConfig::default());
    let mut mesh = Mesh::cube();

    let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let view = camera.view_matrix()?;
    let projection = Projection::perspective_fov(
        45.0,
        WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        1.0,
        100.0,
    )
    .matrix();

    for _ in 0..FRAME_COUNT {
        mesh.transform_mut()
            .rotate_x(ROTATION_PER_FRAME)
            .rotate_y(ROTATION_PER_FRAME);
        engine.render(&mesh, &projection, &view);
    }

    snapshot(engine.device()).save(&output)?;
    info!(
        "rendered {} frames of '{}' to {}",
        FRAME_COUNT,
        mesh.name(),
        output.display()
    );

    Ok(())
}
