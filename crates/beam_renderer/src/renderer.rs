//! Frame orchestration: tile dispatch, ray generation, shading.
//!
//! Tiles render independently and in parallel using rayon; workers drain
//! contiguous sub-ranges of tile indices, and the parallel iterator's
//! implicit join is the only synchronization point per frame. Each tile
//! task fills a stack-resident ray batch, resolves nearest hits for the
//! whole batch, then shades and writes its pixels.

use rayon::prelude::*;

use beam_core::{DirectionalLight, SceneAttributes};

use crate::camera::Camera;
use crate::framebuffer::{pack_bgr, Framebuffer, TileWriter};
use crate::intersect::Intersector;
use crate::ray::Ray;
use crate::shade::shade;
use crate::tile::{TileGrid, TILE_PIXELS, TILE_SIZE_X, TILE_SIZE_Y};

/// Everything a tile task needs, borrowed for the duration of one frame.
///
/// The scene behind `device` and the attribute arrays are read-only while
/// a frame renders; only the framebuffer is written.
pub struct RenderContext<'a> {
    /// The committed intersection backend
    pub device: &'a dyn Intersector,
    /// Scene color attributes, indexed by hit-record ids
    pub attributes: &'a SceneAttributes,
    /// Primary ray generator
    pub camera: &'a Camera,
    /// The single directional light
    pub light: DirectionalLight,
}

/// Render one frame into the framebuffer.
///
/// Returns after every tile has completed; tiles themselves finish in no
/// particular order.
pub fn render_frame(ctx: &RenderContext<'_>, framebuffer: &mut Framebuffer) {
    let grid = TileGrid::new(
        framebuffer.width(),
        framebuffer.height(),
        TILE_SIZE_X,
        TILE_SIZE_Y,
    );
    log::debug!(
        "rendering {}x{} in {} tiles",
        framebuffer.width(),
        framebuffer.height(),
        grid.tile_count()
    );

    let writer = framebuffer.tile_writer();

    (0..grid.tile_count())
        .into_par_iter()
        .for_each(|index| render_tile(ctx, &grid, index, &writer));
}

/// Render the tile at `index` into its pixel rectangle.
///
/// The fill and shade passes traverse the rectangle in the same row-major
/// order, so batch slot N refers to the same pixel in both.
fn render_tile(ctx: &RenderContext<'_>, grid: &TileGrid, index: usize, writer: &TileWriter<'_>) {
    let rect = grid.tile_rect(index);

    let mut rays = [Ray::default(); TILE_PIXELS];

    // Generate the batch of primary rays
    let mut n = 0;
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            rays[n] = ctx.camera.primary_ray(x, y);
            n += 1;
        }
    }

    ctx.device.resolve_nearest(&mut rays[..n]);

    // Shade the batch
    let mut n = 0;
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            let color = shade(&rays[n], ctx.attributes, ctx.light, ctx.device);
            n += 1;
            writer.write(x, y, pack_bgr(color));
        }
    }
}
