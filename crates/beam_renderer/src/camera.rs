//! Camera for primary ray generation.
//!
//! The camera is a fixed origin plus a per-pixel direction basis: pixel
//! `(x, y)` maps to `normalize(x*u + y*v + w)`. One deterministic,
//! non-jittered sample per pixel.

use beam_math::Vec3;

use crate::ray::{Ray, RAY_FAR};

/// Camera generating one primary ray per pixel.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    position: Vec3,
    basis_u: Vec3,
    basis_v: Vec3,
    basis_w: Vec3,
}

impl Camera {
    /// Create a camera from its position and pixel-direction basis.
    pub fn from_basis(position: Vec3, basis_u: Vec3, basis_v: Vec3, basis_w: Vec3) -> Self {
        Self {
            position,
            basis_u,
            basis_v,
            basis_w,
        }
    }

    /// Get the camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Generate the primary ray for pixel (x, y).
    ///
    /// The ray identifier is the wrapping product `x*y`; it is diagnostic
    /// only and not unique.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let dir =
            (x as f32 * self.basis_u + y as f32 * self.basis_v + self.basis_w).normalize();
        Ray::new(self.position, dir, 0.0, RAY_FAR, x.wrapping_mul(y))
    }
}
