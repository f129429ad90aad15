//! The job ladder: seven ordered ranks from Intern to Fellow.
//!
//! Each non-terminal rank carries the cumulative experience that unlocks a
//! promotion attempt out of it. All per-rank data lives in one table
//! indexed by rank rather than scattered across match arms.

use serde::{Deserialize, Serialize};

/// Job ranks, lowest to highest. `Fellow` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum JobLevel {
    Intern,
    JuniorEngineer,
    Engineer,
    SeniorEngineer,
    PrincipalEngineer,
    DistinguishedEngineer,
    Fellow,
}

/// Rank → (title, promotion-unlock experience). `None` means nowhere to go.
const LADDER: [(&str, Option<u32>); 7] = [
    ("Intern", Some(200)),
    ("Junior Engineer", Some(500)),
    ("Engineer", Some(1000)),
    ("Senior Engineer", Some(2000)),
    ("Principal Engineer", Some(4000)),
    ("Distinguished Engineer", Some(8000)),
    ("Fellow", None),
];

impl JobLevel {
    /// All ranks, lowest to highest.
    pub const ALL: [JobLevel; 7] = [
        JobLevel::Intern,
        JobLevel::JuniorEngineer,
        JobLevel::Engineer,
        JobLevel::SeniorEngineer,
        JobLevel::PrincipalEngineer,
        JobLevel::DistinguishedEngineer,
        JobLevel::Fellow,
    ];

    /// Business-card title.
    pub fn title(self) -> &'static str {
        LADDER[self as usize].0
    }

    /// Cumulative experience that unlocks a promotion attempt out of this
    /// rank. `None` for the terminal rank.
    pub fn experience_threshold(self) -> Option<u32> {
        LADDER[self as usize].1
    }

    /// The rank directly above, if any.
    pub fn next(self) -> Option<JobLevel> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// Whether there is no rank above this one.
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}
