//! Headless demo driver: runs the default round at a fixed 60 Hz with
//! scripted input and logs the gameplay events it produces.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chomp::game::Game;
use chomp::systems::components::InputState;

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 60 * 30;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let mut game = Game::new()?;
    info!(
        columns = game.grid().columns(),
        rows = game.grid().rows(),
        pellets = game.pellets_remaining(),
        "round started"
    );

    for frame in 0..FRAMES {
        // Sweep through the four directions, two seconds each.
        let mut input = InputState::default();
        match (frame / 120) % 4 {
            0 => input.right = true,
            1 => input.down = true,
            2 => input.left = true,
            _ => input.up = true,
        }
        game.set_input(input);

        for event in game.step(FRAME_DT) {
            info!(?event, frame, "event");
        }
        if let Some(outcome) = game.outcome() {
            info!(?outcome, frame, "round over");
            break;
        }
    }

    info!(
        score = game.score(),
        pellets_left = game.pellets_remaining(),
        position = ?game.player_position(),
        "simulation finished"
    );
    Ok(())
}
