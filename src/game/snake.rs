use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body, head first. `body_set` mirrors `body` for O(1) occupancy
/// checks. `pending_direction` holds the direction accepted since the last
/// tick; while it is `Some`, further direction changes are ignored, which
/// caps accepted changes at one per tick.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Builds a snake with `length` segments trailing behind `head`, opposite
    /// to the travel direction.
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();

        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for i in 0..length as i32 {
            let segment = Point::new(head.x - i * dx, head.y - i * dy);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn occupies(&self, cell: Point) -> bool {
        self.body_set.contains(&cell)
    }

    /// Accepts at most one direction change per tick. Reversals and changes
    /// to the current direction are ignored.
    pub fn try_turn(&mut self, direction: Direction) -> bool {
        if self.pending_direction.is_some() {
            return false;
        }
        if direction == self.direction || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Prepends the new head. Unless growing, the tail cell is dropped so the
    /// length stays constant.
    pub fn advance_to(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);

        if !grow {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
        }
    }
}
