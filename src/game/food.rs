use super::grid::Grid;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::Point;

/// Picks a random free cell by rejection sampling: draw uniform in-bounds
/// cells until one misses the snake. Does not terminate on a board the snake
/// fills completely; a run ends by collision long before that.
pub fn place_food(snake: &Snake, grid: &Grid, rng: &mut SessionRng) -> Point {
    loop {
        let cell = Point::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );

        if !snake.occupies(cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Direction;

    #[test]
    fn test_food_never_lands_on_snake() {
        let grid = Grid::new(10);
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right, 3);
        for i in 0..4 {
            snake.advance_to(Point::new(6 + i, 5), true);
        }
        let mut rng = SessionRng::new(7);

        for _ in 0..500 {
            let food = place_food(&snake, &grid, &mut rng);
            assert!(grid.contains(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn test_same_seed_same_placement() {
        let grid = Grid::new(20);
        let snake = Snake::new(Point::new(10, 10), Direction::Right, 3);

        let mut rng_a = SessionRng::new(42);
        let mut rng_b = SessionRng::new(42);
        assert_eq!(
            place_food(&snake, &grid, &mut rng_a),
            place_food(&snake, &grid, &mut rng_b)
        );
    }
}
