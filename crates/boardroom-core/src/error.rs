//! Engine error taxonomy.
//!
//! Every failure here is some flavor of invalid selection. Operations
//! return these instead of touching any state, and the menu loop prints
//! the message and re-prompts.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No team members yet.
    EmptyRoster,
    /// Roster index out of range (0-based).
    NoSuchCharacter(usize),
    /// Task index out of range (0-based).
    NoSuchTask(usize),
    /// Name is empty or collides with a prompt sentinel.
    ReservedName(String),
    /// Every requested team member was filtered out.
    NoParticipants,
    /// The character's daily activity budget is spent.
    NoActivityLeft(String),
    /// Experience has not crossed the current rank's threshold.
    NotEligible(String),
    /// Fellows have nowhere left to climb.
    AtTopOfLadder(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyRoster => write!(f, "no team members yet — add someone first"),
            GameError::NoSuchCharacter(index) => {
                write!(f, "no team member at position {}", index + 1)
            }
            GameError::NoSuchTask(index) => write!(f, "no task at position {}", index + 1),
            GameError::ReservedName(name) => {
                write!(f, "'{}' is not a usable name", name)
            }
            GameError::NoParticipants => {
                write!(f, "nobody on that list can participate today")
            }
            GameError::NoActivityLeft(name) => {
                write!(f, "{} has no activities left today", name)
            }
            GameError::NotEligible(name) => {
                write!(f, "{} is not eligible for promotion yet", name)
            }
            GameError::AtTopOfLadder(name) => {
                write!(f, "{} is already a Fellow", name)
            }
        }
    }
}

impl std::error::Error for GameError {}
