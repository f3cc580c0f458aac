//! # Grid Games
//!
//! Rules engines for tic-tac-toe and Connect Four with full move history and
//! time travel, plus a terminal front end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Shared machinery: the [`game::Rules`] trait, history of board
//!   snapshots, and the immutable [`game::GameSession`]
//! - [`tic_tac_toe`]: 3x3 board and full-board line scan
//! - [`connect_four`]: 7x6 gravity board and win detection anchored on the last disc
//! - [`ui`]: Terminal UI: board views, history panel, game selector
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod connect_four;
pub mod error;
pub mod game;
pub mod tic_tac_toe;
pub mod ui;

pub use error::{ConfigError, HistoryError, InvalidMove};
