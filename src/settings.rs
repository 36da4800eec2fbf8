//! Game settings
//!
//! Tuning knobs for a run, loadable from a JSON file so hazard pressure and
//! collision forgiveness can be adjusted without a rebuild.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::COLLISION_MARGIN;

/// Per-run tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Bounding-box shrink for hazard collisions, in [0, 1). Larger values
    /// are more forgiving.
    pub collision_margin: f32,
    /// Total hazards on the board. The first three pin one hazard (and one
    /// gem) to each lane; the rest spawn in random lanes.
    pub hazard_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collision_margin: COLLISION_MARGIN,
            hazard_count: 9,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is absent or malformed
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Collision margin clamped to its valid range
    pub fn effective_margin(&self) -> f32 {
        self.collision_margin.clamp(0.0, 0.99)
    }
}
