pub mod food;
pub mod game_state;
pub mod grid;
pub mod input;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod snake;
pub mod types;

pub use food::place_food;
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use input::direction_for_key_code;
pub use session::{SnakeSession, SnakeSessionState};
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use snake::Snake;
pub use types::{DeathReason, Direction, Point, SessionPhase, TickOutcome};
