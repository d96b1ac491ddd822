//! Renders the demo cube/ground scene with hard shadows to a PNG.
//!
//! Usage: cube_shadow [width] [height]

use anyhow::{Context, Result};
use beam_core::demo;
use beam_renderer::{render_frame, Camera, Framebuffer, RenderContext, TriangleScene, Vec3};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: u32 = match args.next() {
        Some(arg) => arg.parse().context("invalid width")?,
        None => 800,
    };
    let height: u32 = match args.next() {
        Some(arg) => arg.parse().context("invalid height")?,
        None => 600,
    };

    // Build and commit the scene
    let scene = demo::build_scene();
    let start = Instant::now();
    let device = TriangleScene::build(&scene).context("failed to commit scene")?;
    println!(
        "Committed {} triangles in {:?}",
        scene.triangle_count(),
        start.elapsed()
    );

    let camera = Camera::from_basis(
        Vec3::new(4.18, 2.806, -1.19),
        Vec3::new(-0.09, 0.0, -0.99),
        Vec3::new(-0.437, 0.89, 0.04),
        Vec3::new(-92.36, -342.51, 266.0),
    );

    let ctx = RenderContext {
        device: &device,
        attributes: scene.attributes(),
        camera: &camera,
        light: demo::light(),
    };

    // Render
    let mut framebuffer = Framebuffer::new(width, height);
    let start = Instant::now();
    render_frame(&ctx, &mut framebuffer);
    println!("Rendered {}x{} in {:?}", width, height, start.elapsed());

    // Hand off to the display path (a PNG here)
    let filename = "cube_shadow.png";
    image::save_buffer(
        filename,
        &framebuffer.to_rgba_bytes(),
        width,
        height,
        image::ColorType::Rgba8,
    )
    .context("failed to write image")?;
    println!("Saved to {}", filename);

    Ok(())
}
