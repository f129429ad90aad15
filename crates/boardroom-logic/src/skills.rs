//! Skill categories, the per-character skill map, and the level curve.
//!
//! The five meeting skills are seeded at 1 when a character is created.
//! They grow through task rewards and promotion bonuses, and rust after a
//! week without activity — but never below the floor of 1.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// All meeting skills a character can train.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Skill {
    Leadership,
    Communication,
    ProblemSolving,
    Teamwork,
    Presentation,
}

impl Skill {
    /// All skills in display order.
    pub const ALL: [Skill; 5] = [
        Skill::Leadership,
        Skill::Communication,
        Skill::ProblemSolving,
        Skill::Teamwork,
        Skill::Presentation,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Skill::Leadership => "Leadership",
            Skill::Communication => "Communication",
            Skill::ProblemSolving => "Problem Solving",
            Skill::Teamwork => "Teamwork",
            Skill::Presentation => "Presentation",
        }
    }
}

/// Value every skill starts at, and the floor decay never goes below.
pub const SKILL_FLOOR: i32 = 1;

/// Experience per derived character level.
pub const XP_PER_LEVEL: u32 = 100;

/// Derived character level for a cumulative experience total.
///
/// Monotonic in `experience`; the level is never stored independently of
/// the experience that produced it.
pub fn level_for_experience(experience: u32) -> u32 {
    1 + experience / XP_PER_LEVEL
}

/// Per-character skill values.
///
/// Backed by an ordered map so enumeration order is stable for display.
/// Looking up a skill the character does not have yields 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    values: BTreeMap<Skill, i32>,
}

impl SkillSet {
    /// The starting loadout: every skill present at the floor value.
    pub fn starting() -> Self {
        Self {
            values: Skill::ALL.iter().map(|&s| (s, SKILL_FLOOR)).collect(),
        }
    }

    /// Current value, or 0 for a skill not in the set.
    pub fn get(&self, skill: Skill) -> i32 {
        self.values.get(&skill).copied().unwrap_or(0)
    }

    /// Add points to a skill, creating the entry if absent.
    /// Returns the new value.
    pub fn improve(&mut self, skill: Skill, points: i32) -> i32 {
        let value = self.values.entry(skill).or_insert(0);
        *value += points;
        *value
    }

    /// Raise every skill in the set by `points`.
    pub fn raise_all(&mut self, points: i32) {
        for value in self.values.values_mut() {
            *value += points;
        }
    }

    /// One step of rust: every skill above the floor loses a point.
    /// Returns the affected skills with their new values.
    pub fn decay_one_step(&mut self) -> Vec<(Skill, i32)> {
        let mut decayed = Vec::new();
        for (&skill, value) in self.values.iter_mut() {
            if *value > SKILL_FLOOR {
                *value -= 1;
                decayed.push((skill, *value));
            }
        }
        decayed
    }

    /// Iterate over (skill, value) in stable display order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        self.values.iter().map(|(&s, &v)| (s, v))
    }
}
