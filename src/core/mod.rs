//! Core Connect Four engine (no_std compatible)
//!
//! Board, win detection and per-game bookkeeping. Nothing here performs I/O,
//! so the engine can be driven by any front end.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod starter;
pub mod win;

pub use board::Board;
pub use common::{BoardError, Cell, Player};
pub use config::*;
pub use game::{Game, GameStatus};
pub use starter::StarterSeed;
pub use win::WinDetector;
