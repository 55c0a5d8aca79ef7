use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::config::Validate;
use crate::highscore::HighScoreStore;
use crate::log;
use crate::render::{GameRenderer, ScoreDisplay, render_frame};

use super::game_state::SnakeGameState;
use super::input::direction_for_key_code;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::types::{SessionPhase, TickOutcome};

/// Shared handle to one game session: the mutable state, the capabilities
/// the host provided, and the handle of the currently scheduled tick task.
#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    renderer: Arc<Mutex<Box<dyn GameRenderer + Send>>>,
    display: Arc<Mutex<Box<dyn ScoreDisplay + Send>>>,
    store: Arc<dyn HighScoreStore>,
    tick_task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SnakeSessionState {
    /// Builds an idle session. The stored high score is read once here;
    /// an absent or unreadable store counts as 0.
    pub fn create(
        settings: &SessionSettings,
        seed: u64,
        renderer: impl GameRenderer + Send + 'static,
        mut display: impl ScoreDisplay + Send + 'static,
        store: impl HighScoreStore + 'static,
    ) -> Result<Self, String> {
        settings.validate()?;

        let mut rng = SessionRng::new(seed);
        let mut game_state = SnakeGameState::new(settings, &mut rng);

        game_state.high_score = match store.get_high_score() {
            Ok(value) => value,
            Err(e) => {
                log!("Failed to read stored high score: {}", e);
                0
            }
        };
        display.set_high_score(game_state.high_score);

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            renderer: Arc::new(Mutex::new(Box::new(renderer))),
            display: Arc::new(Mutex::new(Box::new(display))),
            store: Arc::new(store),
            tick_task: Arc::new(Mutex::new(None)),
        })
    }

    pub async fn phase(&self) -> SessionPhase {
        self.game_state.lock().await.phase
    }

    pub async fn score(&self) -> u32 {
        self.game_state.lock().await.score
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// (Re)starts the session: cancels any outstanding tick so at most one
    /// tick chain exists, resets the run state, renders the opening frame
    /// and spawns a fresh tick chain. The first tick fires immediately.
    pub async fn start(state: &SnakeSessionState) {
        if let Some(task) = state.tick_task.lock().await.take() {
            task.abort();
        }

        {
            let mut game_state = state.game_state.lock().await;
            {
                let mut rng = state.rng.lock().await;
                game_state.reset(&mut rng);
            }

            let mut display = state.display.lock().await;
            display.set_score(0);
            display.set_high_score(game_state.high_score);
            display.hide_game_over();
            drop(display);

            let mut renderer = state.renderer.lock().await;
            render_frame(renderer.as_mut(), &game_state);
        }

        let seed = state.rng.lock().await.seed();
        log!("Run started (seed {})", seed);

        let task = tokio::spawn(Self::run(state.clone()));
        *state.tick_task.lock().await = Some(task);
    }

    /// Feeds one key event into the session. Everything that makes the event
    /// a no-op (unknown code, session not running, per-tick change already
    /// accepted, reversal, same direction) is swallowed here.
    pub async fn handle_key(state: &SnakeSessionState, key_code: u32) {
        let Some(direction) = direction_for_key_code(key_code) else {
            return;
        };

        let mut game_state = state.game_state.lock().await;
        game_state.try_change_direction(direction);
    }

    async fn run(state: SnakeSessionState) {
        loop {
            let Some(delay_ms) = Self::step(&state).await else {
                break;
            };
            sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    /// One tick. Returns the delay before the next tick, or `None` when the
    /// chain must stop (collision, or the session was stopped under us).
    async fn step(state: &SnakeSessionState) -> Option<u64> {
        let mut game_state = state.game_state.lock().await;
        if game_state.phase != SessionPhase::Running {
            return None;
        }

        let outcome = {
            let mut rng = state.rng.lock().await;
            game_state.advance(&mut rng)
        };

        match outcome {
            TickOutcome::Collided(reason) => {
                game_state.end();
                log!("Run over ({:?}), final score {}", reason, game_state.score);

                let mut display = state.display.lock().await;
                display.show_game_over(game_state.score);
                drop(display);

                persist_high_score(state.store.as_ref(), game_state.score);
                return None;
            }
            TickOutcome::Ate => {
                let head = game_state.snake.head();
                log!("Ate food at ({}, {}), score {}", head.x, head.y, game_state.score);

                let mut display = state.display.lock().await;
                display.set_score(game_state.score);
                display.set_high_score(game_state.high_score);
            }
            TickOutcome::Continued => {}
        }

        let mut renderer = state.renderer.lock().await;
        render_frame(renderer.as_mut(), &game_state);

        Some(game_state.tick_delay_ms)
    }
}

fn persist_high_score(store: &dyn HighScoreStore, score: u32) {
    let stored = match store.get_high_score() {
        Ok(value) => value,
        Err(e) => {
            log!("Failed to read stored high score: {}", e);
            0
        }
    };

    if score > stored
        && let Err(e) = store.set_high_score(score)
    {
        log!("Failed to persist high score: {}", e);
    }
}
