//! Ray record for the tile renderer.
//!
//! One fixed-layout record carries both the query (origin, direction,
//! distance range) and the result slots an intersector overwrites on a
//! hit, in the layout intersection engines consume directly.

use beam_math::Vec3;

/// Reserved id meaning "no geometry" / "no instance".
pub const INVALID_ID: u32 = u32::MAX;

/// Far-distance sentinel for rays with unbounded reach.
pub const RAY_FAR: f32 = 1.0e6;

/// A ray query plus its resolved-hit slots.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin
    pub org: Vec3,
    /// Start of the valid distance range
    pub tnear: f32,

    /// Ray direction (unit length for primary rays)
    pub dir: Vec3,
    /// Time slot, reserved
    pub time: f32,

    /// End of the valid distance range; overwritten with the hit
    /// distance when a hit is recorded
    pub tfar: f32,
    /// Validity mask
    pub mask: u32,
    /// Caller-chosen identifier, diagnostic only
    pub id: u32,
    /// Flags slot, reserved
    pub flags: u32,

    /// Unnormalized geometric normal at the hit
    pub ng: Vec3,
    /// Barycentric hit coordinate u
    pub u: f32,
    /// Barycentric hit coordinate v
    pub v: f32,
    /// Triangle index within the hit geometry
    pub prim_id: u32,
    /// Id of the hit geometry; `INVALID_ID` until a hit is recorded
    pub geom_id: u32,
    /// Id of the hit instance; `INVALID_ID` without instancing
    pub inst_id: u32,
}

impl Ray {
    /// Create a ray over the distance range `[tnear, tfar]` with all hit
    /// slots cleared.
    pub fn new(org: Vec3, dir: Vec3, tnear: f32, tfar: f32, id: u32) -> Self {
        debug_assert!(tnear <= tfar);
        Self {
            org,
            tnear,
            dir,
            time: 0.0,
            tfar,
            mask: u32::MAX,
            id,
            flags: 0,
            ng: Vec3::ZERO,
            u: 0.0,
            v: 0.0,
            prim_id: INVALID_ID,
            geom_id: INVALID_ID,
            inst_id: INVALID_ID,
        }
    }

    /// Whether a hit has been recorded on this ray.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.geom_id != INVALID_ID
    }

    /// The hit position `org + tfar * dir`. Meaningful only after a hit
    /// has been recorded.
    #[inline]
    pub fn hit_point(&self) -> Vec3 {
        self.org + self.tfar * self.dir
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z, 0.0, RAY_FAR, 0)
    }
}
