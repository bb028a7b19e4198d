//! Five-in-a-row on an 8x8 board
//!
//! Two players alternate dropping stones on an 8x8 grid; the first to
//! line up five in a row (horizontally, vertically or diagonally) wins,
//! and a full board with no five is a draw. Either seat can be taken by
//! a human or by the computer, which plays through a simple advisor.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards, positions and notation
//! - [`rules`]: Move validation and five-in-a-row detection
//! - [`advisor`]: Move suggestions (win, block, otherwise random)
//! - [`session`]: Turn order, player roles and game status
//! - [`save`]: Plain-text save files
//! - [`render`]: Text rendering of the board
//! - [`console`]: Terminal front-end
//! - [`ui`]: egui front-end
//! - [`cli`]: Command-line options
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Advisor, GameSession, GameStatus, Pos};
//!
//! let mut session = GameSession::new("Ada", "C").unwrap();
//! let mut advisor = Advisor::seeded(42);
//!
//! // Human plays d4, then the computer answers
//! session.play(Pos::new(3, 3)).unwrap();
//! if session.is_computer_turn() {
//!     let reply = session.play_computer(&mut advisor).unwrap();
//!     println!("computer plays {}", reply.pos);
//! }
//!
//! assert_eq!(session.board().stone_count(), 2);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

pub mod advisor;
pub mod board;
pub mod cli;
pub mod console;
pub mod error;
pub mod render;
pub mod rules;
pub mod save;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use advisor::{Advisor, Suggestion, SuggestionKind};
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use error::{GameError, Result};
pub use save::SavedGame;
pub use session::{Controller, GameSession, GameStatus, PlayerInfo};
