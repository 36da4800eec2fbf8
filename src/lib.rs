//! Lane Hopper - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, collisions, game state)
//! - `render`: Back-to-front frame drawing against a pluggable surface
//! - `input`: Keyboard adapter mapping raw key codes to game actions
//! - `settings`: Data-driven tuning knobs

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Pixel width of one grid cell
    pub const CELL_WIDTH: f32 = 101.0;
    /// Pixel height of one grid row (rows overlap, so this is shorter than the tile art)
    pub const CELL_HEIGHT: f32 = 83.0;
    /// Upward shift that seats the hazard sprite's transparent padding on its lane
    pub const HAZARD_SPRITE_OFFSET: f32 = 22.0;

    /// Grid extents, in cells
    pub const GRID_COLS: i32 = 5;
    pub const GRID_ROWS: i32 = 6;
    /// Stepping onto this row wins the round
    pub const GOAL_ROW: i32 = 0;
    /// The player spawns on this row
    pub const START_ROW: i32 = GRID_ROWS - 1;
    /// First paved lane; hazards occupy lanes FIRST_LANE..FIRST_LANE + LANE_COUNT
    pub const FIRST_LANE: i32 = 1;
    pub const LANE_COUNT: i32 = 3;

    /// Hazards wrap once x passes this boundary (one cell past the right edge)
    pub const HAZARD_RIGHT_BOUND: f32 = GRID_COLS as f32;
    /// Wrapped hazards reappear between this many cells off the left edge (inclusive)
    pub const SPAWN_BACKOFF_MIN: i32 = 1;
    pub const SPAWN_BACKOFF_MAX: i32 = 10;
    /// Hazard speed range, cells per second
    pub const HAZARD_MIN_SPEED: f32 = 1.0;
    pub const HAZARD_MAX_SPEED: f32 = 3.0;

    /// Default bounding-box shrink discounting transparent sprite padding
    pub const COLLISION_MARGIN: f32 = 0.1;
}

/// Convert a grid position to the pixel position of its cell's top-left corner
#[inline]
pub fn grid_to_pixel(x: f32, y: f32) -> Vec2 {
    Vec2::new(x * consts::CELL_WIDTH, y * consts::CELL_HEIGHT)
}
