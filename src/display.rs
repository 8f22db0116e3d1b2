use std::time::Duration;

use anyhow::Result;

use crate::board::Board;
use crate::snake::{Direction, Snake};
use crate::Coords;

/// Whatever the game is shown on and steered from.
pub trait Display {
    /// Draws the border, the snake and the food. Called once per tick, before
    /// input is polled.
    fn render(&mut self, board: &Board, snake: &Snake, food: Coords) -> Result<()>;

    /// Waits up to `timeout` for a directional key.
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<Direction>>;

    /// Shows the final score once the game has ended.
    fn report_game_over(&mut self, score: u32) -> Result<()>;
}
