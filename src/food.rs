use rand::Rng;

use crate::board::Board;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Coords,
}

impl Food {
    pub fn spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Self {
        Food { pos: board.random_interior(rng) }
    }

    #[cfg(test)]
    pub fn at(pos: Coords) -> Self {
        Food { pos }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    /// Moves the food to a new random interior cell. The snake's body is not
    /// consulted, so the food can land underneath it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        self.pos = board.random_interior(rng);
    }
}
