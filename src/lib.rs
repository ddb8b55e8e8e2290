//! Polyarena - bouncing convex polygons in a rectangular arena
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (motion, wall reflection, contact resolution)
//! - `renderer`: Drawing contract and vertex generation
//! - `settings`: Data-driven configuration
//! - `error`: Crate error type
//! - `logging`: env_logger setup for binaries

pub mod error;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Default arena dimensions (arena units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Default number of past positions kept per actor
    pub const TRAIL_LENGTH: usize = 20;

    /// Upper bound on half-step backtracks while clearing one contact
    pub const MAX_BACKTRACK_STEPS: u32 = 1024;

    /// Speed change applied to each side of a collision
    pub const SPEED_EXCHANGE: f32 = 1.0;

    /// Segments used to approximate a circle actor's outline
    pub const CIRCLE_SEGMENTS: usize = 24;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Per-frame displacement for a heading (degrees) and speed
#[inline]
pub fn heading_to_velocity(degrees: f32, speed: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(speed * radians.cos(), speed * radians.sin())
}
