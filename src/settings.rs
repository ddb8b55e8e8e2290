//! Simulation settings
//!
//! Persisted as JSON next to the binary or wherever `--settings` points.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, MAX_BACKTRACK_STEPS, TRAIL_LENGTH};
use crate::error::{Error, Result};
use crate::sim::StepConfig;

/// Simulation settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Population ===
    /// Random actors spawned at startup
    pub actor_count: usize,
    /// Seed for spawning
    pub seed: u64,

    // === Motion ===
    /// Past positions kept per actor (0 disables trails)
    pub trail_length: usize,
    /// Cap on half-step backtracks when clearing a contact
    pub max_backtrack_steps: u32,

    // === Drawing ===
    /// Stroke each actor's bounding box and anchor
    pub show_outlines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            actor_count: 12,
            seed: 0x5eed,

            trail_length: TRAIL_LENGTH,
            max_backtrack_steps: MAX_BACKTRACK_STEPS,

            show_outlines: false,
        }
    }
}

impl Settings {
    /// Motion tunables for `sim::advance`
    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            trail_length: self.trail_length,
            max_backtrack_steps: self.max_backtrack_steps,
        }
    }

    /// Reject arenas that cannot hold anything
    pub fn validate(&self) -> Result<()> {
        if !(self.arena_width.is_finite() && self.arena_width > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "arena_width must be positive, got {}",
                self.arena_width
            )));
        }
        if !(self.arena_height.is_finite() && self.arena_height > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "arena_height must be positive, got {}",
                self.arena_height
            )));
        }
        if self.max_backtrack_steps == 0 {
            return Err(Error::InvalidSettings(
                "max_backtrack_steps must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from a JSON file; missing fields take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
