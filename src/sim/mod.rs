//! Frame-driven simulation module
//!
//! All motion and contact logic lives here. This module must stay
//! deterministic and single-threaded:
//! - One advance per actor per frame
//! - Stable iteration order (by actor id)
//! - Seeded RNG only
//! - No rendering dependencies

pub mod actor;
pub mod region;
pub mod scene;
pub mod tick;

pub use actor::{Actor, ActorKind, Extents, Heading, rectangle, regular_polygon};
pub use region::{Region, contains_point};
pub use scene::{RngState, Scene};
pub use tick::{
    AdvanceReport, ArenaBounds, ContactEvent, FrameReport, StepConfig, Wall, advance, tick,
};
