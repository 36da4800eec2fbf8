//! Game state and entity types
//!
//! Everything that changes over a round lives here. Entities are plain
//! structs with inherent update/reset methods; there is no entity hierarchy
//! and no module-level state. All randomness (spawn columns, lane picks,
//! speeds, wraparound backoff) draws from the seeded RNG owned by
//! [`GameState`] so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::anchors_overlap;
use crate::consts::*;
use crate::settings::Settings;

/// Player round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Accepting movement input
    Alive,
    /// Reached the goal row
    Win,
    /// Hit by a hazard
    Dead,
}

/// Semantic movement token, as produced by the keyboard adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// The player's movement rectangle, in cells (all bounds inclusive)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    /// Reaching this row is the win condition, not a clamp
    pub top_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 0,
            top_y: GOAL_ROW,
            max_x: GRID_COLS - 1,
            max_y: START_ROW,
        }
    }
}

fn spawn_x(rng: &mut Pcg32) -> f32 {
    -(rng.random_range(SPAWN_BACKOFF_MIN..=SPAWN_BACKOFF_MAX) as f32)
}

fn random_speed(rng: &mut Pcg32) -> f32 {
    rng.random_range(HAZARD_MIN_SPEED..HAZARD_MAX_SPEED)
}

/// A hazard crossing its lane at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    /// Horizontal position in cells (fractional while crossing)
    pub x: f32,
    /// Lane index; never changes after creation
    pub y: i32,
    /// Cells per second
    pub speed: f32,
}

impl Hazard {
    /// Spawn in the given lane, off the left edge at a random backoff
    pub fn new(rng: &mut Pcg32, lane: i32) -> Self {
        Self {
            x: spawn_x(rng),
            y: lane,
            speed: random_speed(rng),
        }
    }

    /// Spawn in a random lane
    pub fn with_random_lane(rng: &mut Pcg32) -> Self {
        let lane = rng.random_range(FIRST_LANE..FIRST_LANE + LANE_COUNT);
        Self::new(rng, lane)
    }

    /// Advance along the lane; past `right_bound`, re-enter off the left edge
    /// at a fresh random backoff so the lanes don't re-synchronize.
    pub fn update(&mut self, rng: &mut Pcg32, dt: f32, right_bound: f32) {
        self.x += dt * self.speed;
        if self.x > right_bound {
            self.x = spawn_x(rng);
        }
    }

    /// Mark an alive player dead if the shrunk bounding boxes overlap.
    /// Repositioning is left to the restart action.
    pub fn check_collision(&self, player: &mut Player, margin: f32) {
        if player.status != PlayerStatus::Alive {
            return;
        }
        if anchors_overlap(
            (player.x as f32, player.y as f32),
            (self.x, self.y as f32),
            margin,
        ) {
            player.status = PlayerStatus::Dead;
        }
    }

    /// Re-randomize position and speed for a new round; the lane is kept
    pub fn reset(&mut self, rng: &mut Pcg32) {
        self.x = spawn_x(rng);
        self.speed = random_speed(rng);
    }

    pub fn sprite(&self) -> &'static str {
        "images/enemy-bug.png"
    }
}

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Pending one-cell displacement, consumed by the next update
    pub dx: i32,
    pub dy: i32,
    pub status: PlayerStatus,
    pub score: u32,
}

impl Player {
    /// Spawn at a random column on the start row
    pub fn new(rng: &mut Pcg32, bounds: Bounds) -> Self {
        Self {
            x: rng.random_range(bounds.min_x..=bounds.max_x),
            y: bounds.max_y,
            dx: 0,
            dy: 0,
            status: PlayerStatus::Alive,
            score: 0,
        }
    }

    /// Apply the pending displacement, clamp to the grid, and detect a win.
    ///
    /// The top row is deliberately not clamped: stepping onto it IS the win.
    /// Standing there on later frames re-assigns the same status and nothing
    /// else. Pending displacement is consumed whether or not it moved the
    /// player.
    pub fn update(&mut self, bounds: Bounds) {
        self.x += self.dx;
        if self.x < bounds.min_x {
            self.x = bounds.min_x;
        }
        if self.x > bounds.max_x {
            self.x = bounds.max_x;
        }
        self.dx = 0;

        self.y += self.dy;
        if self.y > bounds.max_y {
            self.y = bounds.max_y;
        }
        if self.y == bounds.top_y {
            self.status = PlayerStatus::Win;
        }
        self.dy = 0;
    }

    /// Queue a one-cell step. Ignored unless alive. A second press before the
    /// next update replaces the pending step; there is no queue and no
    /// diagonal movement.
    pub fn handle_input(&mut self, dir: Direction) {
        if self.status != PlayerStatus::Alive {
            return;
        }
        match dir {
            Direction::Left => self.dx = -1,
            Direction::Up => self.dy = -1,
            Direction::Right => self.dx = 1,
            Direction::Down => self.dy = 1,
        }
    }

    /// Return to a random column on the start row with a clean slate
    pub fn reset(&mut self, rng: &mut Pcg32, bounds: Bounds) {
        self.x = rng.random_range(bounds.min_x..=bounds.max_x);
        self.y = bounds.max_y;
        self.dx = 0;
        self.dy = 0;
        self.status = PlayerStatus::Alive;
        self.score = 0;
    }

    pub fn sprite(&self) -> &'static str {
        "images/char-boy.png"
    }
}

/// Gem variants; the score value equals the variant number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GemKind {
    Blue = 1,
    Green = 2,
    Orange = 3,
}

impl GemKind {
    /// Points granted on pickup
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn sprite(self) -> &'static str {
        match self {
            GemKind::Blue => "images/gem-blue.png",
            GemKind::Green => "images/gem-green.png",
            GemKind::Orange => "images/gem-orange.png",
        }
    }
}

/// A stationary collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gem {
    pub kind: GemKind,
    pub x: i32,
    pub y: i32,
    pub collected: bool,
}

impl Gem {
    /// Place in the given row at a random column
    pub fn new(rng: &mut Pcg32, kind: GemKind, row: i32, bounds: Bounds) -> Self {
        Self {
            kind,
            x: rng.random_range(bounds.min_x..=bounds.max_x),
            y: row,
            collected: false,
        }
    }

    /// Grant the gem's value to an alive player standing on it. Once
    /// collected, the gem stays inert until the next reset.
    pub fn check_collision(&mut self, player: &mut Player) {
        if self.collected || player.status != PlayerStatus::Alive {
            return;
        }
        if anchors_overlap(
            (self.x as f32, self.y as f32),
            (player.x as f32, player.y as f32),
            0.0,
        ) {
            player.score += self.kind.value();
            self.collected = true;
        }
    }

    /// Relocate to a random column in the same row and clear the collected flag
    pub fn reset(&mut self, rng: &mut Pcg32, bounds: Bounds) {
        self.x = rng.random_range(bounds.min_x..=bounds.max_x);
        self.collected = false;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Every random draw (spawns, wraps, resets) comes from this stream
    pub rng: Pcg32,
    pub bounds: Bounds,
    /// Bounding-box shrink used for hazard collision checks
    pub collision_margin: f32,
    pub hazards: Vec<Hazard>,
    pub gems: Vec<Gem>,
    pub player: Player,
}

impl GameState {
    /// Create a state with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Build the fixed initial population.
    ///
    /// The first hazards pin one to each lane, each paired with a gem so
    /// crossing that lane is worth something; the remainder land in random
    /// lanes (more hazards, harder game).
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Bounds::default();

        let mut hazards = Vec::with_capacity(settings.hazard_count);
        let mut gems = Vec::with_capacity(LANE_COUNT as usize);
        for i in 0..settings.hazard_count {
            if (i as i32) < LANE_COUNT {
                let lane = FIRST_LANE + i as i32;
                let kind = match i {
                    0 => GemKind::Blue,
                    1 => GemKind::Green,
                    _ => GemKind::Orange,
                };
                hazards.push(Hazard::new(&mut rng, lane));
                gems.push(Gem::new(&mut rng, kind, lane, bounds));
            } else {
                hazards.push(Hazard::with_random_lane(&mut rng));
            }
        }
        let player = Player::new(&mut rng, bounds);

        Self {
            seed,
            rng,
            bounds,
            collision_margin: settings.effective_margin(),
            hazards,
            gems,
            player,
        }
    }

    /// Full-round reset: re-randomize every hazard and gem, respawn the player
    pub fn restart_round(&mut self) {
        for hazard in &mut self.hazards {
            hazard.reset(&mut self.rng);
        }
        for gem in &mut self.gems {
            gem.reset(&mut self.rng, self.bounds);
        }
        self.player.reset(&mut self.rng, self.bounds);
    }
}
