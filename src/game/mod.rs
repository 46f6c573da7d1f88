//! Core Connect Four game logic: the occupancy board, players and seats, and
//! the engine that enforces turns and detects wins and ties.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_DIMENSION};
pub use engine::{Direction, GameEngine, GameStatus, MoveResult, Run, RUN_LENGTH};
pub use player::{Player, Seat};
