//! Boardroom Core - game engine
//!
//! Owns the roster, the day clock, the task catalogs, and the dice, and
//! orchestrates everything the menu can ask for: solo rounds, team rounds,
//! promotion attempts, and day advancement. Every outcome comes back as a
//! typed report value; rendering is the binary's job.
//!
//! # Example
//!
//! ```rust
//! use boardroom_core::prelude::*;
//!
//! let mut game = Game::seeded(42);
//! game.add_character("Ada").unwrap();
//!
//! let report = game.attempt_task(0, 0).unwrap();
//! assert!(report.resolution.xp_awarded > 0);
//!
//! let day = game.advance_day();
//! assert_eq!(day.day, 2);
//! ```

pub mod engine;
pub mod error;
pub mod reports;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::Game;
    pub use crate::error::GameError;
    pub use crate::reports::*;
}
