//! Keyboard adapter
//!
//! Translates raw key codes from the embedding into semantic game actions.
//! Arrow keys queue a one-cell step; Enter restarts a finished round. The
//! adapter only ever writes pending displacement or triggers a reset, both of
//! which the next frame's update consumes.

use crate::sim::{Direction, GameState, PlayerStatus};

/// Raw key codes as delivered by the embedding surface
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_ENTER: u32 = 13;

/// A decoded input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Queue a one-cell step for the player
    Step(Direction),
    /// Restart the round (only honored once the round has ended)
    Restart,
}

/// Decode a raw key code; unrecognized keys produce no event
pub fn decode_key(code: u32) -> Option<InputEvent> {
    match code {
        KEY_LEFT => Some(InputEvent::Step(Direction::Left)),
        KEY_UP => Some(InputEvent::Step(Direction::Up)),
        KEY_RIGHT => Some(InputEvent::Step(Direction::Right)),
        KEY_DOWN => Some(InputEvent::Step(Direction::Down)),
        KEY_ENTER => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Route an event into the game state.
///
/// Steps go to the player, which ignores them unless alive. Restart is
/// honored only after a win or death and re-randomizes the whole round:
/// every hazard, every gem, and the player.
pub fn apply(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Step(dir) => state.player.handle_input(dir),
        InputEvent::Restart => {
            if state.player.status != PlayerStatus::Alive {
                log::info!("round restarted (final score {})", state.player.score);
                state.restart_round();
            }
        }
    }
}

/// Decode and route a raw key code in one call
pub fn handle_key(state: &mut GameState, code: u32) {
    if let Some(event) = decode_key(code) {
        apply(state, event);
    }
}
