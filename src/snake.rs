use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn offset(self, (x, y): Coords) -> Coords {
        match self {
            Up => (x, y - 1),
            Down => (x, y + 1),
            Left => (x - 1, y),
            Right => (x + 1, y),
        }
    }
}

/// The snake's body, head at the front and tail at the back.
///
/// Never empty. Cells are only added by [`Snake::advance`], and only removed
/// by it too, so the length changes solely through [`Snake::grow`].
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
    grow_next_move: bool,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_front(head);
        Snake { body, grow_next_move: false }
    }

    /// Builds a snake from explicit segments, head first.
    #[cfg(test)]
    pub fn from_segments(segments: &[Coords]) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Snake { body: segments.iter().copied().collect(), grow_next_move: false }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    /// Every segment except the head.
    pub fn tail(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter().skip(1)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Moves one cell in `direction` and returns the new head.
    ///
    /// The head may land outside the board; callers check for collisions
    /// afterwards.
    pub fn advance(&mut self, direction: Direction) -> Coords {
        let new_head = direction.offset(self.head());
        self.body.push_front(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop_back();
        }

        new_head
    }

    /// Keeps the tail in place on the next advance.
    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.tail().any(|&cell| cell == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite(), Up);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite(), Left);
    }

    #[test]
    fn offsets_move_one_cell() {
        assert_eq!(Up.offset((5, 5)), (5, 4));
        assert_eq!(Down.offset((5, 5)), (5, 6));
        assert_eq!(Left.offset((5, 5)), (4, 5));
        assert_eq!(Right.offset((5, 5)), (6, 5));
    }

    #[test]
    fn advance_translates_without_growing() {
        let mut snake = Snake::from_segments(&[(5, 5), (4, 5), (3, 5)]);

        assert_eq!(snake.advance(Down), (5, 6));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.cells().copied().collect::<Vec<_>>(), vec![(5, 6), (5, 5), (4, 5)]);
    }

    #[test]
    fn grow_skips_exactly_one_trim() {
        let mut snake = Snake::new((10, 10));
        snake.grow();

        snake.advance(Right);
        assert_eq!(snake.len(), 2);

        snake.advance(Right);
        snake.advance(Right);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), (13, 10));
    }

    #[test]
    fn advance_does_not_bounds_check() {
        let mut snake = Snake::new((0, 0));
        assert_eq!(snake.advance(Left), (-1, 0));
        assert_eq!(snake.advance(Up), (-1, -1));
    }

    #[test]
    fn reversing_into_the_neck_hits_itself() {
        let mut snake = Snake::from_segments(&[(10, 10), (10, 11), (10, 12)]);
        assert!(!snake.hits_itself());

        assert_eq!(snake.advance(Down), (10, 11));
        assert!(snake.hits_itself());
    }

    #[test]
    fn single_segment_never_hits_itself() {
        let mut snake = Snake::new((3, 3));
        for dir in [Up, Left, Down, Right].iter() {
            snake.advance(*dir);
            assert!(!snake.hits_itself());
        }
    }
}
