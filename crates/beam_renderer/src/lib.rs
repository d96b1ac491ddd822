//! BEAM Renderer - tile-parallel CPU ray casting
//!
//! Renders a static triangle scene into a packed-pixel framebuffer: one
//! primary ray per pixel, nearest-hit resolution over a tile's ray batch,
//! one hard shadow ray per hit, flat face-color shading under a single
//! directional light. Tiles are independent work units dispatched across
//! rayon's thread pool.

mod camera;
mod framebuffer;
mod intersect;
mod ray;
mod renderer;
mod shade;
mod tile;

pub use camera::Camera;
pub use framebuffer::{pack_bgr, Framebuffer};
pub use intersect::{DeviceError, Intersector, TriangleScene};
pub use ray::{Ray, INVALID_ID, RAY_FAR};
pub use renderer::{render_frame, RenderContext};
pub use shade::{shade, SHADOW_BIAS};
pub use tile::{TileGrid, TileRect, TILE_PIXELS, TILE_SIZE_X, TILE_SIZE_Y};

/// Re-export scene types and common math from the companion crates
pub use beam_core::{DirectionalLight, Scene, SceneAttributes, TriangleMesh};
pub use beam_math::Vec3;
