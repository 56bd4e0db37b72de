//! Crossterm observer that animates a search in the terminal.

use std::error::Error;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{self, Color, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use stepstar_core::Point;
use stepstar_search::{Observer, Outcome, SearchEngine, StepResult};

use crate::frame::{Frame, Tile};

/// Background colour of each tile.
fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Open => Color::White,
        Tile::Wall => Color::Black,
        Tile::Frontier => Color::Blue,
        Tile::Current => Color::Green,
        Tile::Path => Color::Yellow,
    }
}

/// Whether `ev` asks to quit (q, Esc or Ctrl-C).
fn is_quit(ev: &Event) -> bool {
    match ev {
        Event::Key(KeyEvent {
            code, modifiers, kind, ..
        }) if *kind != KeyEventKind::Release => {
            matches!(code, KeyCode::Char('q') | KeyCode::Esc)
                || (*code == KeyCode::Char('c')
                    && modifiers.contains(event::KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

/// Renders every step to the alternate screen, two columns per cell.
///
/// The terminal is restored when the observer is dropped.
pub struct TerminalObserver {
    out: Stdout,
    delay: Duration,
    hold: bool,
    prev: Option<Frame>,
    quit: bool,
}

impl TerminalObserver {
    /// Enter raw mode and the alternate screen.
    ///
    /// `delay` is the pause after each step; `hold` keeps the final frame on
    /// screen until a key is pressed.
    pub fn new(delay: Duration, hold: bool) -> Result<Self, Box<dyn Error>> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        out.flush()?;
        Ok(Self {
            out,
            delay,
            hold,
            prev: None,
            quit: false,
        })
    }

    fn draw(&mut self, frame: Frame, status: &str) -> Result<(), Box<dyn Error>> {
        for (p, tile) in frame.diff(self.prev.as_ref()) {
            queue!(
                self.out,
                cursor::MoveTo((p.x * 2) as u16, p.y as u16),
                SetBackgroundColor(tile_color(tile)),
                style::Print("  ")
            )?;
        }
        queue!(
            self.out,
            style::ResetColor,
            cursor::MoveTo(0, frame.rows as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Grey),
            style::Print(status),
            style::ResetColor
        )?;
        self.out.flush()?;
        self.prev = Some(frame);
        Ok(())
    }

    /// Wait up to `timeout` for input, remembering a quit request.
    fn pump(&mut self, timeout: Duration) -> Result<(), Box<dyn Error>> {
        if event::poll(timeout)? {
            while event::poll(Duration::ZERO)? {
                if is_quit(&event::read()?) {
                    self.quit = true;
                }
            }
        }
        Ok(())
    }
}

impl Observer for TerminalObserver {
    fn observe(&mut self, engine: &SearchEngine, step: &StepResult) -> Result<(), Box<dyn Error>> {
        let current = step
            .current
            .map_or_else(|| "-".to_string(), |p: Point| p.to_string());
        let status = format!(
            "step {}  current {current}  frontier {}  {}  [q] quit",
            step.step,
            step.frontier.len(),
            step.state
        );
        self.draw(Frame::capture(engine, None), &status)?;
        self.pump(self.delay)
    }

    fn finished(&mut self, engine: &SearchEngine, outcome: &Outcome) -> Result<(), Box<dyn Error>> {
        let status = match outcome {
            Outcome::Found { path, cost, steps } => format!(
                "path of {} cells, cost {cost}, {steps} steps  [any key] exit",
                path.len()
            ),
            Outcome::NoPath { steps } => format!("no path after {steps} steps  [any key] exit"),
            Outcome::Interrupted { steps } => format!("stopped after {steps} steps"),
        };
        self.draw(Frame::capture(engine, outcome.path()), &status)?;
        if self.hold && !self.quit && !matches!(outcome, Outcome::Interrupted { .. }) {
            loop {
                if let Event::Key(_) = event::read()? {
                    break;
                }
            }
        }
        Ok(())
    }

    fn should_stop(&self) -> bool {
        self.quit
    }
}

impl Drop for TerminalObserver {
    fn drop(&mut self) {
        let _ = queue!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}
