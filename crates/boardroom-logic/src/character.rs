//! Character state and progression.
//!
//! A character is the unit of play: a named bundle of skills, cumulative
//! experience, a per-day activity budget, and a position on the job ladder.
//! The derived level is never written directly — it is recomputed from
//! experience inside [`Character::gain_experience`].

use serde::{Deserialize, Serialize};

use crate::career::JobLevel;
use crate::skills::{level_for_experience, Skill, SkillSet};

/// Activities available to each character at the start of a day.
pub const ACTIVITIES_PER_DAY: u32 = 3;

/// Days without any activity before skills start to rust.
pub const DECAY_AFTER_DAYS: u32 = 7;

/// Notable progression changes produced while gaining experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    /// The derived level rose to this value.
    LevelUp { level: u32 },
    /// Experience crossed the current rank's threshold; a promotion
    /// attempt is now on the table.
    PromotionUnlocked { rank: JobLevel },
}

/// What happened to one character during a day rollover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTick {
    /// Skills that rusted, with their new values.
    pub decayed: Vec<(Skill, i32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    name: String,
    skills: SkillSet,
    experience: u32,
    level: u32,
    activities_left: u32,
    days_since_activity: u32,
    job_level: JobLevel,
    eligible_for_promotion: bool,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: SkillSet::starting(),
            experience: 0,
            level: 1,
            activities_left: ACTIVITIES_PER_DAY,
            days_since_activity: 0,
            job_level: JobLevel::Intern,
            eligible_for_promotion: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn job_level(&self) -> JobLevel {
        self.job_level
    }

    pub fn eligible_for_promotion(&self) -> bool {
        self.eligible_for_promotion
    }

    pub fn activities_left(&self) -> u32 {
        self.activities_left
    }

    pub fn days_since_activity(&self) -> u32 {
        self.days_since_activity
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Current value of one skill (0 if the character lacks it).
    pub fn skill(&self, skill: Skill) -> i32 {
        self.skills.get(skill)
    }

    /// Add experience and recompute the derived level.
    ///
    /// Promotion eligibility is a one-way latch checked here on every
    /// call: once experience crosses the current rank's threshold the
    /// flag stays set until a promotion lands, regardless of later decay
    /// (experience itself never decreases).
    pub fn gain_experience(&mut self, amount: u32) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        self.experience += amount;
        let new_level = level_for_experience(self.experience);
        if new_level > self.level {
            self.level = new_level;
            events.push(ProgressEvent::LevelUp { level: new_level });
        }
        if !self.eligible_for_promotion {
            if let Some(threshold) = self.job_level.experience_threshold() {
                if self.experience >= threshold {
                    self.eligible_for_promotion = true;
                    events.push(ProgressEvent::PromotionUnlocked {
                        rank: self.job_level,
                    });
                }
            }
        }
        events
    }

    /// Add points to a skill, creating it if absent. Returns the new value.
    pub fn improve_skill(&mut self, skill: Skill, points: i32) -> i32 {
        self.skills.improve(skill, points)
    }

    /// Promotion bonus: every skill the character has goes up by `points`.
    pub fn raise_all_skills(&mut self, points: i32) {
        self.skills.raise_all(points);
    }

    pub fn can_do_activity(&self) -> bool {
        self.activities_left > 0
    }

    /// Spend one activity. Returns false (and changes nothing) when the
    /// daily budget is exhausted.
    pub fn use_activity(&mut self) -> bool {
        if self.activities_left == 0 {
            return false;
        }
        self.activities_left -= 1;
        self.days_since_activity = 0;
        true
    }

    /// Day rollover: refill the activity budget and advance the inactivity
    /// counter. Once the counter reaches a week, every skill above the
    /// floor rusts by one point per day until the character does something.
    pub fn new_day(&mut self) -> DayTick {
        self.activities_left = ACTIVITIES_PER_DAY;
        self.days_since_activity += 1;
        let decayed = if self.days_since_activity >= DECAY_AFTER_DAYS {
            self.skills.decay_one_step()
        } else {
            Vec::new()
        };
        DayTick { decayed }
    }

    /// Move up one rank and clear the eligibility latch. Returns the new
    /// rank, or `None` when already a Fellow.
    pub fn promote(&mut self) -> Option<JobLevel> {
        let next = self.job_level.next()?;
        self.job_level = next;
        self.eligible_for_promotion = false;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_character_defaults() {
        let c = Character::new("Ada");
        assert_eq!(c.name(), "Ada");
        assert_eq!(c.experience(), 0);
        assert_eq!(c.level(), 1);
        assert_eq!(c.activities_left(), ACTIVITIES_PER_DAY);
        assert_eq!(c.days_since_activity(), 0);
        assert_eq!(c.job_level(), JobLevel::Intern);
        assert!(!c.eligible_for_promotion());
        for skill in Skill::ALL {
            assert_eq!(c.skill(skill), 1);
        }
    }

    #[test]
    fn level_up_reported_once_per_level() {
        let mut c = Character::new("Ada");
        assert!(c.gain_experience(99).is_empty());
        let events = c.gain_experience(1);
        assert_eq!(events, vec![ProgressEvent::LevelUp { level: 2 }]);
        assert_eq!(c.level(), 2);
        // No level event while still inside level 2.
        assert!(c.gain_experience(50).is_empty());
    }

    #[test]
    fn big_grant_skips_levels() {
        let mut c = Character::new("Ada");
        let events = c.gain_experience(350);
        assert!(events.contains(&ProgressEvent::LevelUp { level: 4 }));
        assert_eq!(c.level(), 4);
    }

    #[test]
    fn eligibility_latches_at_threshold() {
        let mut c = Character::new("Ada");
        assert!(c.gain_experience(199).is_empty());
        let events = c.gain_experience(1);
        assert!(events.contains(&ProgressEvent::PromotionUnlocked {
            rank: JobLevel::Intern
        }));
        assert!(c.eligible_for_promotion());
        // Latch: no repeat event on further gains.
        let again = c.gain_experience(500);
        assert!(!again
            .iter()
            .any(|e| matches!(e, ProgressEvent::PromotionUnlocked { .. })));
        assert!(c.eligible_for_promotion());
    }

    #[test]
    fn activity_budget() {
        let mut c = Character::new("Ada");
        assert!(c.use_activity());
        assert!(c.use_activity());
        assert!(c.use_activity());
        assert!(!c.can_do_activity());
        assert!(!c.use_activity());
        assert_eq!(c.activities_left(), 0);
        c.new_day();
        assert_eq!(c.activities_left(), ACTIVITIES_PER_DAY);
    }

    #[test]
    fn activity_resets_inactivity_counter() {
        let mut c = Character::new("Ada");
        c.new_day();
        c.new_day();
        assert_eq!(c.days_since_activity(), 2);
        c.use_activity();
        assert_eq!(c.days_since_activity(), 0);
    }

    #[test]
    fn decay_triggers_on_day_seven_not_six() {
        let mut c = Character::new("Ada");
        c.improve_skill(Skill::Leadership, 4); // now 5
        for _ in 0..6 {
            assert!(c.new_day().decayed.is_empty());
        }
        let tick = c.new_day();
        assert_eq!(tick.decayed, vec![(Skill::Leadership, 4)]);
        // Each further idle day rusts another point.
        let tick = c.new_day();
        assert_eq!(tick.decayed, vec![(Skill::Leadership, 3)]);
    }

    #[test]
    fn decay_never_goes_below_floor() {
        let mut c = Character::new("Ada");
        c.improve_skill(Skill::Teamwork, 1); // now 2
        for _ in 0..20 {
            c.new_day();
        }
        assert_eq!(c.skill(Skill::Teamwork), 1);
        assert_eq!(c.skill(Skill::Leadership), 1);
    }

    #[test]
    fn promote_climbs_and_clears_latch() {
        let mut c = Character::new("Ada");
        c.gain_experience(200);
        assert!(c.eligible_for_promotion());
        assert_eq!(c.promote(), Some(JobLevel::JuniorEngineer));
        assert!(!c.eligible_for_promotion());
        assert_eq!(c.job_level(), JobLevel::JuniorEngineer);
    }

    #[test]
    fn promotion_bonus_can_relatch_eligibility() {
        let mut c = Character::new("Ada");
        // Already past the *next* rank's threshold when the promotion lands.
        c.gain_experience(450);
        c.promote();
        let events = c.gain_experience(100); // 550 >= 500
        assert!(events.contains(&ProgressEvent::PromotionUnlocked {
            rank: JobLevel::JuniorEngineer
        }));
    }

    #[test]
    fn fellow_never_latches() {
        let mut c = Character::new("Ada");
        while c.promote().is_some() {}
        assert_eq!(c.job_level(), JobLevel::Fellow);
        let events = c.gain_experience(100_000);
        assert!(!events
            .iter()
            .any(|e| matches!(e, ProgressEvent::PromotionUnlocked { .. })));
        assert!(!c.eligible_for_promotion());
        assert_eq!(c.promote(), None);
    }
}
