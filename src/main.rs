//! Fruit Dash headless demo
//!
//! Drives a seeded session through the frame driver with a small scripted
//! input at 60 FPS, prints the outcome, and exercises the leaderboard client
//! when `FRUIT_DASH_API` points at a backend.

use fruit_dash::consts::GAME_DURATION;
use fruit_dash::input::{Key, KeyState};
use fruit_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use fruit_dash::{ApiClient, FrameDriver, HighScores};

const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42u64);
    log::info!("Fruit Dash demo starting with seed {seed}");

    let mut state = GameState::new(seed);
    state.session.start();

    let mut driver = FrameDriver::new();
    driver.start(0.0);

    let mut now = 0.0f64;
    let mut collected = 0u32;
    let mut hits = 0u32;
    while state.session.phase == GamePhase::Playing {
        now += FRAME_DT;
        let input = scripted_input(state.session.elapsed());
        driver.frame(
            now,
            |dt| {
                for event in tick(&mut state, &input, dt) {
                    match event {
                        GameEvent::Collected { kind, points, .. } => {
                            collected += 1;
                            log::debug!("collected {kind:?} for {points}");
                        }
                        GameEvent::Damaged { .. } => hits += 1,
                        GameEvent::Jumped { .. } => {}
                        GameEvent::GameOver => log::info!("game over"),
                    }
                }
            },
            || {},
        );
    }
    driver.stop();

    println!(
        "Run finished: score {} | {} fruit collected | {} spike hits | survived {:.1}s",
        state.session.score,
        collected,
        hits,
        GAME_DURATION - state.session.time_remaining
    );

    if let Ok(base_url) = std::env::var("FRUIT_DASH_API") {
        let client = ApiClient::new(base_url);
        let board = HighScores::from_entries(client.fetch_high_scores());
        match board.potential_rank(state.session.score) {
            Some(rank) => {
                let accepted = client.submit_score("demo", state.session.score);
                println!("Leaderboard rank #{rank}, submitted: {accepted}");
            }
            None => println!(
                "Score {} doesn't make the top {} (best: {:?})",
                state.session.score,
                fruit_dash::highscores::MAX_HIGH_SCORES,
                board.top_score()
            ),
        }
    }
}

/// A canned play pattern: sweep back and forth under the pipes, hopping
/// every couple of seconds.
fn scripted_input(elapsed: f32) -> TickInput {
    let mut keys = KeyState::new();
    if elapsed % 8.0 < 4.0 {
        keys.press(Key::ArrowRight);
    } else {
        keys.press(Key::ArrowLeft);
    }
    if elapsed % 2.0 < 0.25 {
        keys.press(Key::Space);
    }
    keys.tick_input()
}
