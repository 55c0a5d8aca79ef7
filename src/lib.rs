pub mod config;
pub mod game;
pub mod highscore;
pub mod logger;
pub mod render;

pub use game::{
    DeathReason, Direction, Grid, Point, SessionPhase, SessionRng, SessionSettings, Snake,
    SnakeGameState, SnakeSession, SnakeSessionState, TickOutcome,
};
pub use highscore::{FileHighScoreStore, HighScoreError, HighScoreStore, MemoryHighScoreStore};
pub use render::{CellRole, GameRenderer, ScoreDisplay, render_frame};
