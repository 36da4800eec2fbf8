//! Lane Hopper entry point
//!
//! Runs a headless demo: a scripted player repeatedly tries to cross the
//! board while the simulation ticks at 60 Hz. Wire `render::draw_frame` to a
//! real drawing surface for an interactive build.

use std::path::Path;

use lane_hopper::Settings;
use lane_hopper::input::{self, InputEvent};
use lane_hopper::sim::{Direction, GameState, PlayerStatus, tick};

const DEMO_DT: f32 = 1.0 / 60.0;
const DEMO_ROUNDS: u32 = 5;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::with_settings(seed, &settings);
    log::info!(
        "Lane Hopper starting: seed {seed}, {} hazards",
        state.hazards.len()
    );

    let mut rounds = 0;
    let mut frame = 0u32;
    while rounds < DEMO_ROUNDS {
        // Press up every half second; the player either crosses or gets hit
        if frame % 30 == 0 {
            input::apply(&mut state, InputEvent::Step(Direction::Up));
        }
        tick(&mut state, DEMO_DT);

        match state.player.status {
            PlayerStatus::Alive => {}
            PlayerStatus::Win => {
                log::info!("round won with score {}", state.player.score);
                rounds += 1;
                input::apply(&mut state, InputEvent::Restart);
            }
            PlayerStatus::Dead => {
                log::info!("squashed on lane {} after frame {frame}", state.player.y);
                rounds += 1;
                input::apply(&mut state, InputEvent::Restart);
            }
        }
        frame += 1;
    }

    // Final snapshot for inspection; the state serializes whole, RNG included
    match serde_json::to_string(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("state snapshot failed: {err}"),
    }
}
