use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::display::Display;
use crate::food::Food;
use crate::input;
use crate::snake::{Snake, Direction::{self, *}};
use crate::Coords;

pub const SCORE_PER_FOOD: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved { new_head: Coords, ate_food: bool },
    Crashed(Collision),
    /// The game had already ended; nothing changed.
    Finished,
}

/// Everything that changes during a game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub direction: Direction,
    pub phase: Phase,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

pub fn check_collision(snake: &Snake, board: &Board) -> Option<Collision> {
    if board.is_border(snake.head()) {
        Some(Collision::Wall)
    } else if snake.hits_itself() {
        Some(Collision::SelfCollision)
    } else {
        None
    }
}

/// Eats the food if the head is on it: scores, moves the food elsewhere and
/// makes the snake one segment longer on its next move.
pub fn check_food<R: Rng + ?Sized>(
    snake: &mut Snake,
    food: &mut Food,
    score: &mut u32,
    board: &Board,
    rng: &mut R,
) -> bool {
    if snake.head() != food.pos() {
        return false;
    }

    *score += SCORE_PER_FOOD;
    food.relocate(board, rng);
    snake.grow();
    true
}

pub struct GameEngine {
    board: Board,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameEngine { board: config.board(), rng }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.board.center());
        let food = Food::spawn(&self.board, &mut self.rng);

        GameState { snake, food, score: 0, direction: Right, phase: Phase::Running }
    }

    pub fn step(&mut self, state: &mut GameState, requested: Option<Direction>) -> StepResult {
        if state.is_over() {
            return StepResult::Finished;
        }

        if let Some(dir) = input::resolve(requested, state.direction) {
            if dir != state.direction {
                debug!(from = ?state.direction, to = ?dir, "turn");
            }
            state.direction = dir;
        }

        let new_head = state.snake.advance(state.direction);

        if let Some(collision) = check_collision(&state.snake, &self.board) {
            state.phase = Phase::GameOver;
            info!(?collision, head = ?new_head, score = state.score, "snake crashed");
            return StepResult::Crashed(collision);
        }

        let ate_food = check_food(
            &mut state.snake,
            &mut state.food,
            &mut state.score,
            &self.board,
            &mut self.rng,
        );
        if ate_food {
            debug!(score = state.score, next_food = ?state.food.pos(), "food eaten");
        }

        StepResult::Moved { new_head, ate_food }
    }
}

/// Runs one game to completion on `display` and returns the final score.
///
/// Each iteration renders, waits for input and steps the engine, then sleeps
/// out whatever is left of `tick` so early key presses don't speed the snake up.
/// The only way out is a collision: raw mode delivers Ctrl+C as an ordinary
/// key, which is ignored like any other non-directional key.
pub fn play<D: Display>(engine: &mut GameEngine, display: &mut D, tick: Duration) -> Result<u32> {
    let mut state = engine.reset();
    info!(head = ?state.snake.head(), food = ?state.food.pos(), "game started");

    let mut ticks: u64 = 0;
    while !state.is_over() {
        let started = Instant::now();

        display.render(engine.board(), &state.snake, state.food.pos())?;
        let requested = display.poll_input(tick)?;
        ticks += 1;
        match engine.step(&mut state, requested) {
            StepResult::Moved { new_head, ate_food } => {
                trace!(tick = ticks, ?new_head, ate_food, "moved")
            }
            StepResult::Crashed(collision) => trace!(tick = ticks, ?collision, "crashed"),
            StepResult::Finished => {}
        }

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            sleep(rest);
        }
    }

    info!(score = state.score, ticks, length = state.snake.len(), "game over");
    display.report_game_over(state.score)?;
    Ok(state.score)
}
