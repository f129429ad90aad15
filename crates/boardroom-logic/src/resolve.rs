//! Task and promotion resolution math.
//!
//! Everything here is deterministic: the d20 comes in as an argument (or a
//! closure the function invokes only when a roll is actually due). The
//! engine owns the RNG and applies the results to characters.

use serde::Serialize;

use crate::skills::{Skill, SkillSet};
use crate::tasks::{MeetingTask, PromotionTask};

/// Sides on the task die.
pub const DICE_SIDES: i32 = 20;

/// Teammates beyond the first that still count toward the bonus.
const TEAM_BONUS_CAP: i32 = 4;
/// Score bonus per counted teammate.
const TEAM_BONUS_PER_MATE: i32 = 2;

/// XP paid to every participant, per teammate beyond the first, when a
/// multi-member attempt lands.
pub const SYNERGY_XP_PER_MATE: u32 = 5;

/// XP grants attached to promotion outcomes.
pub const PROMOTION_SUCCESS_XP: u32 = 100;
pub const PROMOTION_FAILURE_XP: u32 = 50;
pub const PROMOTION_CONSOLATION_XP: u32 = 25;

/// Flat score bonus for working together: +2 per extra teammate, capped
/// at +8. A solo attempt gets nothing.
pub fn team_bonus(participants: usize) -> i32 {
    if participants == 0 {
        return 0;
    }
    TEAM_BONUS_PER_MATE * (participants as i32 - 1).min(TEAM_BONUS_CAP)
}

/// Outcome of one character's attempt at a meeting task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResolution {
    pub roll: i32,
    pub skill_value: i32,
    pub team_bonus: i32,
    pub total: i32,
    pub difficulty: i32,
    pub success: bool,
    /// XP actually awarded: the full reward on success, a third on failure.
    pub xp_awarded: u32,
    /// Skill points actually awarded to the task's required skill.
    pub skill_awarded: i32,
}

/// Resolve one attempt. Success iff `roll + skill + team bonus` meets the
/// difficulty. A failed attempt still teaches something: a third of the
/// XP, no skill points.
pub fn resolve_task(
    roll: i32,
    skill_value: i32,
    team_bonus: i32,
    task: &MeetingTask,
) -> TaskResolution {
    let total = roll + skill_value + team_bonus;
    let success = total >= task.difficulty;
    TaskResolution {
        roll,
        skill_value,
        team_bonus,
        total,
        difficulty: task.difficulty,
        success,
        xp_awarded: if success {
            task.xp_reward
        } else {
            task.xp_reward / 3
        },
        skill_awarded: if success { task.skill_reward } else { 0 },
    }
}

/// Outcome of putting a promotion packet in front of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PromotionRoll {
    /// Skill minimums unmet; the panel never convened and no die was
    /// thrown. `missing` holds (skill, required, current).
    RequirementsUnmet {
        missing: Vec<(Skill, i32, i32)>,
        xp_awarded: u32,
    },
    /// Rolled and made it.
    Success {
        roll: i32,
        skill_total: i32,
        total: i32,
        difficulty: i32,
        xp_awarded: u32,
    },
    /// Rolled and fell short. Rank and eligibility are untouched.
    Failure {
        roll: i32,
        skill_total: i32,
        total: i32,
        difficulty: i32,
        xp_awarded: u32,
    },
}

/// Check the packet's minimums, then resolve the roll.
///
/// The die is drawn via `roll` only after every minimum is met; the score
/// adds the *current* values of the required skills, which may exceed the
/// minimums.
pub fn resolve_promotion(
    skills: &SkillSet,
    task: &PromotionTask,
    roll: impl FnOnce() -> i32,
) -> PromotionRoll {
    let missing: Vec<(Skill, i32, i32)> = task
        .requirements
        .iter()
        .filter(|&&(skill, min)| skills.get(skill) < min)
        .map(|&(skill, min)| (skill, min, skills.get(skill)))
        .collect();
    if !missing.is_empty() {
        return PromotionRoll::RequirementsUnmet {
            missing,
            xp_awarded: PROMOTION_CONSOLATION_XP,
        };
    }

    let skill_total: i32 = task
        .requirements
        .iter()
        .map(|&(skill, _)| skills.get(skill))
        .sum();
    let roll = roll();
    let total = roll + skill_total;
    if total >= task.difficulty {
        PromotionRoll::Success {
            roll,
            skill_total,
            total,
            difficulty: task.difficulty,
            xp_awarded: PROMOTION_SUCCESS_XP,
        }
    } else {
        PromotionRoll::Failure {
            roll,
            skill_total,
            total,
            difficulty: task.difficulty,
            xp_awarded: PROMOTION_FAILURE_XP,
        }
    }
}
