use super::food::place_food;
use super::grid::Grid;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, Point, SessionPhase, TickOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub phase: SessionPhase,
    pub grid: Grid,
    pub snake: Snake,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub tick_delay_ms: u64,
    pub settings: SessionSettings,
}

impl SnakeGameState {
    pub fn new(settings: &SessionSettings, rng: &mut SessionRng) -> Self {
        let grid = Grid::from_canvas(settings.canvas_size_px, settings.cell_size_px);
        let snake = initial_snake(&grid, settings.initial_snake_length);
        let food = place_food(&snake, &grid, rng);

        Self {
            phase: SessionPhase::Idle,
            grid,
            snake,
            food,
            score: 0,
            high_score: 0,
            tick_delay_ms: settings.initial_tick_delay_ms,
            settings: settings.clone(),
        }
    }

    /// Begins a fresh run: score, pacing, snake and food all return to their
    /// starting values. The high score survives resets.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = initial_snake(&self.grid, self.settings.initial_snake_length);
        self.food = place_food(&self.snake, &self.grid, rng);
        self.score = 0;
        self.tick_delay_ms = self.settings.initial_tick_delay_ms;
        self.phase = SessionPhase::Running;
    }

    pub fn end(&mut self) {
        self.phase = SessionPhase::Ended;
    }

    pub fn try_change_direction(&mut self, direction: Direction) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.snake.try_turn(direction)
    }

    /// One simulation step: consume the pending direction, move the head,
    /// check collisions, handle eating. On a collision the state is left
    /// untouched, so the colliding position is never committed or rendered.
    pub fn advance(&mut self, rng: &mut SessionRng) -> TickOutcome {
        self.snake.apply_pending_direction();

        let next_head = self.snake.head().step(self.snake.direction);

        if !self.grid.contains(next_head) {
            return TickOutcome::Collided(DeathReason::WallCollision);
        }
        // The tail cell still counts even though it would be vacated this
        // tick: moving into it is a collision.
        if self.snake.occupies(next_head) {
            return TickOutcome::Collided(DeathReason::SelfCollision);
        }

        if next_head == self.food {
            self.snake.advance_to(next_head, true);
            self.score += self.settings.food_reward;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            self.tick_delay_ms = self
                .tick_delay_ms
                .saturating_sub(self.settings.speed_step_ms)
                .max(self.settings.min_tick_delay_ms);
            self.food = place_food(&self.snake, &self.grid, rng);
            TickOutcome::Ate
        } else {
            self.snake.advance_to(next_head, false);
            TickOutcome::Continued
        }
    }
}

fn initial_snake(grid: &Grid, length: usize) -> Snake {
    let center = Point::new(grid.size() / 2, grid.size() / 2);
    Snake::new(center, Direction::Right, length)
}
