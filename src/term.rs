use crate::{Coords, TermInt};
use crate::board::Board;
use crate::display::Display;
use crate::input::key_direction;
use crate::snake::{Direction, Snake};
use std::{convert::TryFrom, io::{Stdout, Write, stdout}, time::{Duration, Instant}};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use tracing::warn;

const BORDER_CHAR: char = '#';
const SNAKE_CHAR: char = 'O';
const FOOD_CHAR: char = '*';

/// Crossterm-backed [`Display`]. The board is drawn from the top-left corner
/// of the alternate screen.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout: stdout(), screen, active: false })
    }

    pub fn setup(&mut self, board: &Board) -> Result<()> {
        let (need_w, need_h) = (board.width(), board.height());
        if need_w > self.width as i32 || need_h > self.height as i32 {
            bail!(
                "terminal is {}x{} but the board needs {}x{}",
                self.width,
                self.height,
                need_w,
                need_h
            );
        }

        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        self.clear()
    }

    /// Puts the terminal back the way it was found. Safe to call repeatedly.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw: Step = Box::new(|| {
            terminal::disable_raw_mode().context("Error disabling raw mode")
        });
        let screen: Step = Box::new(|| {
            let mut out = stdout();
            execute!(out, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
                .context("Error leaving alt screen")
        });
        run_all(vec![raw, screen])
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
            .context("Error drawing")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

impl Display for TermManager {
    fn render(&mut self, board: &Board, snake: &Snake, food: Coords) -> Result<()> {
        let frame = draw_frame((self.width, self.height), board, snake, food);

        // Only touch the cells that changed since the last frame
        let width = self.width as usize;
        for i in 0..frame.len() {
            if frame[i] != self.screen[i] {
                self.print_at(((i % width) as TermInt, (i / width) as TermInt), frame[i])?;
            }
        }

        self.screen = frame;
        self.flush()
    }

    fn poll_input(&mut self, timeout: Duration) -> Result<Option<Direction>> {
        let deadline = Instant::now() + timeout;

        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !poll(left).context("Error polling events")? {
                return Ok(None);
            }

            if let Event::Key(ev) = read().context("Error reading event")? {
                if let Some(dir) = key_direction(&ev) {
                    return Ok(Some(dir));
                }
            }
        }
    }

    fn report_game_over(&mut self, score: u32) -> Result<()> {
        self.restore()?;
        println!("Game Over! Your score: {}", score);
        Ok(())
    }
}

type Step<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

/// Runs every step even when an earlier one fails, and returns the first error.
fn run_all(steps: Vec<Step<'_>>) -> Result<()> {
    let mut first = Ok(());
    for step in steps {
        let res = step();
        if first.is_ok() {
            first = res;
        }
    }
    first
}

/// Lays out one full frame as a row-major grid of `cols` x `rows` characters.
/// Cells that fall outside the grid are dropped.
fn draw_frame(
    (cols, rows): (TermInt, TermInt),
    board: &Board,
    snake: &Snake,
    food: Coords,
) -> Vec<char> {
    let mut frame = vec![' '; cols as usize * rows as usize];
    let mut put = |(x, y): Coords, ch: char| {
        if let (Ok(x), Ok(y)) = (TermInt::try_from(x), TermInt::try_from(y)) {
            if x < cols && y < rows {
                frame[cols as usize * y as usize + x as usize] = ch;
            }
        }
    };

    let (end_x, end_y) = (board.width() - 1, board.height() - 1);
    for x in 0..=end_x {
        put((x, 0), BORDER_CHAR);
        put((x, end_y), BORDER_CHAR);
    }
    for y in 0..=end_y {
        put((0, y), BORDER_CHAR);
        put((end_x, y), BORDER_CHAR);
    }

    for &cell in snake.cells() {
        put(cell, SNAKE_CHAR);
    }
    put(food, FOOD_CHAR);

    frame
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore terminal: {:#}", e);
        }
    }
}
