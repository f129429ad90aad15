//! Typed outcomes handed to the presentation layer.
//!
//! The engine never prints. Everything worth telling the player comes
//! back through these values, in the order it happened.

use serde::Serialize;

use boardroom_logic::career::JobLevel;
use boardroom_logic::character::{DayTick, ProgressEvent};
use boardroom_logic::resolve::{PromotionRoll, TaskResolution};

/// One character's attempt inside a solo or team round.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptReport {
    pub character: String,
    pub task: String,
    pub resolution: TaskResolution,
    /// Level-ups and promotion unlocks triggered by this attempt,
    /// including any team synergy payout.
    pub events: Vec<ProgressEvent>,
}

/// Why a requested character sat a team round out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    OutOfActivities,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedMember {
    pub character: String,
    pub reason: SkipReason,
}

/// A full team round: every participant rolls independently with the same
/// team bonus.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub task: String,
    pub team_bonus: i32,
    pub attempts: Vec<AttemptReport>,
    pub skipped: Vec<SkippedMember>,
    /// XP paid to every participant when a multi-member round had at
    /// least one success; 0 otherwise.
    pub synergy_xp: u32,
}

/// Day rollover across the roster.
#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    /// The day just started.
    pub day: u32,
    /// Members whose skills rusted overnight, with the per-skill detail.
    pub decay: Vec<(String, DayTick)>,
}

/// A promotion attempt, including rank movement when it landed.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionReport {
    pub character: String,
    pub task: String,
    pub outcome: PromotionRoll,
    /// Set only when the attempt landed.
    pub new_rank: Option<JobLevel>,
    pub events: Vec<ProgressEvent>,
}
