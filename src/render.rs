use crate::game::SnakeGameState;
use crate::game::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRole {
    Head,
    Body,
    Food,
}

/// Drawing backend the host provides. Coordinates are grid cells; pixel math
/// belongs to the implementation. The convention drawn by the reference
/// frontends: head and body as filled+stroked squares, food as a
/// filled+stroked circle inscribed at ~80% of the cell.
pub trait GameRenderer {
    fn clear(&mut self);
    fn draw_cell(&mut self, cell: Point, role: CellRole);
}

/// Score surface the host provides: live score and high score, and an
/// end-of-game message that carries the final score.
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
    fn set_high_score(&mut self, high_score: u32);
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
}

/// Redraws the whole frame: background, food, then the snake head-first.
pub fn render_frame(renderer: &mut dyn GameRenderer, state: &SnakeGameState) {
    renderer.clear();
    renderer.draw_cell(state.food, CellRole::Food);

    for (index, segment) in state.snake.body.iter().enumerate() {
        let role = if index == 0 {
            CellRole::Head
        } else {
            CellRole::Body
        };
        renderer.draw_cell(*segment, role);
    }
}
