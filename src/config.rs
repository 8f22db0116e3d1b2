use std::time::Duration;

use anyhow::{ensure, Result};

use crate::board::Board;

pub const TICK_INTERVAL_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub tick: Duration,
    /// Seed for food placement; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 40,
            height: 20,
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32, seed: Option<u64>) -> Result<Self> {
        let config = GameConfig { width, height, seed, ..Default::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= Board::MIN_SIDE && self.height >= Board::MIN_SIDE,
            "board must be at least {0}x{0}, got {1}x{2}",
            Board::MIN_SIDE,
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.width, self.height)
    }
}
