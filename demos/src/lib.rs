//! Drivers for the `stepstar` binary: argument parsing, a crossterm
//! renderer and a headless logging observer.

pub mod cli;
pub mod frame;
pub mod progress;
pub mod term;

pub use cli::{Args, TieBreakArg};
pub use frame::{Frame, Tile};
pub use progress::LogObserver;
pub use term::TerminalObserver;
