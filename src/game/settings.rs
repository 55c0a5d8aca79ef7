use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Board geometry and pacing for a session. The board side length is
/// `canvas_size_px / cell_size_px` cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub canvas_size_px: u32,
    pub cell_size_px: u32,
    pub initial_tick_delay_ms: u64,
    pub min_tick_delay_ms: u64,
    pub speed_step_ms: u64,
    pub food_reward: u32,
    pub initial_snake_length: usize,
}

impl SessionSettings {
    pub fn tile_count(&self) -> u32 {
        self.canvas_size_px / self.cell_size_px
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            canvas_size_px: 400,
            cell_size_px: 20,
            initial_tick_delay_ms: 150,
            min_tick_delay_ms: 50,
            speed_step_ms: 2,
            food_reward: 10,
            initial_snake_length: 3,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size_px == 0 {
            return Err("cell_size_px must be greater than 0".to_string());
        }
        if self.canvas_size_px % self.cell_size_px != 0 {
            return Err("canvas_size_px must be a multiple of cell_size_px".to_string());
        }
        let tile_count = self.tile_count();
        if !(10..=100).contains(&tile_count) {
            return Err("board must be between 10 and 100 cells per side".to_string());
        }
        if self.min_tick_delay_ms < 10 {
            return Err("min_tick_delay_ms must be at least 10".to_string());
        }
        if self.initial_tick_delay_ms < self.min_tick_delay_ms {
            return Err("initial_tick_delay_ms must not be below min_tick_delay_ms".to_string());
        }
        if self.initial_tick_delay_ms > 5000 {
            return Err("initial_tick_delay_ms must not exceed 5000".to_string());
        }
        if self.food_reward == 0 {
            return Err("food_reward must be greater than 0".to_string());
        }
        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }
        if self.initial_snake_length > (tile_count / 2) as usize {
            return Err("initial_snake_length must fit between board center and edge".to_string());
        }
        Ok(())
    }
}
