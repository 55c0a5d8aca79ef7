use super::types::Direction;

// Browser keyCode values: arrow keys and WASD.
pub const LEFT_KEY: u32 = 37;
pub const UP_KEY: u32 = 38;
pub const RIGHT_KEY: u32 = 39;
pub const DOWN_KEY: u32 = 40;
pub const A_KEY: u32 = 65;
pub const W_KEY: u32 = 87;
pub const S_KEY: u32 = 83;
pub const D_KEY: u32 = 68;

/// Maps a key code to a direction. Unrecognized codes map to `None` and are
/// ignored by the caller.
pub fn direction_for_key_code(key_code: u32) -> Option<Direction> {
    match key_code {
        LEFT_KEY | A_KEY => Some(Direction::Left),
        UP_KEY | W_KEY => Some(Direction::Up),
        RIGHT_KEY | D_KEY => Some(Direction::Right),
        DOWN_KEY | S_KEY => Some(Direction::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(direction_for_key_code(LEFT_KEY), Some(Direction::Left));
        assert_eq!(direction_for_key_code(UP_KEY), Some(Direction::Up));
        assert_eq!(direction_for_key_code(RIGHT_KEY), Some(Direction::Right));
        assert_eq!(direction_for_key_code(DOWN_KEY), Some(Direction::Down));
    }

    #[test]
    fn test_wasd_maps_to_directions() {
        assert_eq!(direction_for_key_code(A_KEY), Some(Direction::Left));
        assert_eq!(direction_for_key_code(W_KEY), Some(Direction::Up));
        assert_eq!(direction_for_key_code(D_KEY), Some(Direction::Right));
        assert_eq!(direction_for_key_code(S_KEY), Some(Direction::Down));
    }

    #[test]
    fn test_unrecognized_key_maps_to_none() {
        assert_eq!(direction_for_key_code(13), None);
        assert_eq!(direction_for_key_code(32), None);
        assert_eq!(direction_for_key_code(0), None);
    }
}
