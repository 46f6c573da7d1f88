//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built on
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, turn and outcome engine
//! - [`ui`]: Terminal UI: keyboard-driven game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

pub use error::{ConfigError, GameError};
pub use game::{GameEngine, GameStatus, MoveResult, Player};
