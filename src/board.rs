use rand::Rng;

use crate::Coords;

/// Playing field geometry. The outermost ring of cells is the border; the
/// snake lives in `1..=width-2` x `1..=height-2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Smallest side length that still leaves one interior cell.
    pub const MIN_SIDE: i32 = 3;

    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width >= Self::MIN_SIDE && height >= Self::MIN_SIDE);
        Board { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn is_border(&self, (x, y): Coords) -> bool {
        x <= 0 || x >= self.width - 1 || y <= 0 || y >= self.height - 1
    }

    pub fn random_interior<R: Rng + ?Sized>(&self, rng: &mut R) -> Coords {
        let x = rng.gen_range(1..=self.width - 2);
        let y = rng.gen_range(1..=self.height - 2);
        (x, y)
    }
}
