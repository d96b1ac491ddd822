// Re-export glam for convenience
pub use glam::*;

// BEAM math types
mod interval;
pub use interval::Interval;
