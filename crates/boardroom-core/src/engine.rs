//! The game engine: roster, day clock, catalogs, and dice.
//!
//! `Game` is the single owner of all mutable state. The menu loop calls
//! one method per player action and renders the returned report; nothing
//! in here writes to the terminal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use boardroom_logic::character::Character;
use boardroom_logic::resolve::{
    resolve_promotion, resolve_task, team_bonus, PromotionRoll, DICE_SIDES, SYNERGY_XP_PER_MATE,
};
use boardroom_logic::tasks::{
    meeting_task_catalog, promotion_task_catalog, promotion_task_for, MeetingTask, PromotionTask,
};

use crate::error::GameError;
use crate::reports::{
    AttemptReport, DayReport, PromotionReport, SkipReason, SkippedMember, TeamReport,
};

/// Names the roster prompt treats as "never mind".
const RESERVED_NAMES: [&str; 2] = ["cancel", "exit"];

pub struct Game {
    roster: Vec<Character>,
    tasks: Vec<MeetingTask>,
    promotions: Vec<PromotionTask>,
    rng: StdRng,
    day: u32,
}

impl Game {
    /// New game with dice seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// New game with a fixed dice seed, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            roster: Vec::new(),
            tasks: meeting_task_catalog(),
            promotions: promotion_task_catalog(),
            rng,
            day: 1,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Roster in display order (insertion order).
    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    pub fn tasks(&self) -> &[MeetingTask] {
        &self.tasks
    }

    pub fn promotion_tasks(&self) -> &[PromotionTask] {
        &self.promotions
    }

    pub fn character(&self, index: usize) -> Result<&Character, GameError> {
        self.roster
            .get(index)
            .ok_or(GameError::NoSuchCharacter(index))
    }

    /// Add a member with default stats. Names the prompts use as back-out
    /// sentinels are rejected; duplicate names are allowed.
    pub fn add_character(&mut self, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() || RESERVED_NAMES.iter().any(|r| name.eq_ignore_ascii_case(r)) {
            return Err(GameError::ReservedName(name.to_string()));
        }
        log::info!("{} joined the meeting group", name);
        self.roster.push(Character::new(name));
        Ok(())
    }

    /// Remove by 0-based index, returning the departing member.
    pub fn remove_character(&mut self, index: usize) -> Result<Character, GameError> {
        if index >= self.roster.len() {
            return Err(GameError::NoSuchCharacter(index));
        }
        let gone = self.roster.remove(index);
        log::info!("{} left the meeting group", gone.name());
        Ok(gone)
    }

    /// Advance the day clock: refill every budget, tick inactivity
    /// counters, rust idle skills. Members never interact here.
    pub fn advance_day(&mut self) -> DayReport {
        self.day += 1;
        let mut decay = Vec::new();
        for member in &mut self.roster {
            let tick = member.new_day();
            if !tick.decayed.is_empty() {
                decay.push((member.name().to_string(), tick));
            }
        }
        log::debug!("day {} begins, {} member(s) rusted", self.day, decay.len());
        DayReport {
            day: self.day,
            decay,
        }
    }

    /// Solo attempt: no team bonus, no synergy payout.
    pub fn attempt_task(
        &mut self,
        char_index: usize,
        task_index: usize,
    ) -> Result<AttemptReport, GameError> {
        if self.roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let task = self
            .tasks
            .get(task_index)
            .cloned()
            .ok_or(GameError::NoSuchTask(task_index))?;
        let member = self
            .roster
            .get_mut(char_index)
            .ok_or(GameError::NoSuchCharacter(char_index))?;
        if !member.can_do_activity() {
            return Err(GameError::NoActivityLeft(member.name().to_string()));
        }
        Ok(run_attempt(member, &task, 0, &mut self.rng))
    }

    /// Team attempt over pre-parsed indices (already de-duplicated and
    /// ascending, see [`boardroom_logic::selection::parse_selection`]).
    ///
    /// Members out of activities are skipped with a reason instead of
    /// failing the round. Every participant rolls independently with the
    /// same team bonus; when more than one participated and at least one
    /// succeeded, everyone at the table gets the synergy payout.
    pub fn attempt_team_task(
        &mut self,
        indices: &[usize],
        task_index: usize,
    ) -> Result<TeamReport, GameError> {
        if self.roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let task = self
            .tasks
            .get(task_index)
            .cloned()
            .ok_or(GameError::NoSuchTask(task_index))?;

        // Filter before anything is consumed: an exhausted member never
        // reaches the table, and a bad index aborts with no side effects.
        let mut participants = Vec::new();
        let mut skipped = Vec::new();
        for &index in indices {
            let member = self
                .roster
                .get(index)
                .ok_or(GameError::NoSuchCharacter(index))?;
            if member.can_do_activity() {
                participants.push(index);
            } else {
                skipped.push(SkippedMember {
                    character: member.name().to_string(),
                    reason: SkipReason::OutOfActivities,
                });
            }
        }
        if participants.is_empty() {
            return Err(GameError::NoParticipants);
        }

        let bonus = team_bonus(participants.len());
        let mut attempts = Vec::new();
        for &index in &participants {
            let member = &mut self.roster[index];
            attempts.push(run_attempt(member, &task, bonus, &mut self.rng));
        }

        let mut synergy_xp = 0;
        if participants.len() > 1 && attempts.iter().any(|a| a.resolution.success) {
            synergy_xp = SYNERGY_XP_PER_MATE * (participants.len() as u32 - 1);
            for (slot, &index) in participants.iter().enumerate() {
                let events = self.roster[index].gain_experience(synergy_xp);
                attempts[slot].events.extend(events);
            }
            log::debug!(
                "team synergy on '{}': {} xp to each of {} members",
                task.name,
                synergy_xp,
                participants.len()
            );
        }

        Ok(TeamReport {
            task: task.name.to_string(),
            team_bonus: bonus,
            attempts,
            skipped,
            synergy_xp,
        })
    }

    /// Put a promotion packet in front of the panel. Costs an activity
    /// whatever the outcome; Fellows have nowhere left to climb.
    pub fn attempt_promotion(&mut self, char_index: usize) -> Result<PromotionReport, GameError> {
        let member = self
            .roster
            .get_mut(char_index)
            .ok_or(GameError::NoSuchCharacter(char_index))?;
        let task = match promotion_task_for(&self.promotions, member.job_level()) {
            Some(task) => task.clone(),
            None => return Err(GameError::AtTopOfLadder(member.name().to_string())),
        };
        if !member.eligible_for_promotion() {
            return Err(GameError::NotEligible(member.name().to_string()));
        }
        if !member.can_do_activity() {
            return Err(GameError::NoActivityLeft(member.name().to_string()));
        }

        member.use_activity();
        let rng = &mut self.rng;
        let outcome = resolve_promotion(member.skills(), &task, || rng.gen_range(1..=DICE_SIDES));

        let mut new_rank = None;
        let events = match &outcome {
            PromotionRoll::Success { xp_awarded, .. } => {
                new_rank = member.promote();
                member.raise_all_skills(1);
                let events = member.gain_experience(*xp_awarded);
                log::info!(
                    "{} promoted to {}",
                    member.name(),
                    member.job_level().title()
                );
                events
            }
            PromotionRoll::Failure { xp_awarded, .. }
            | PromotionRoll::RequirementsUnmet { xp_awarded, .. } => {
                member.gain_experience(*xp_awarded)
            }
        };

        Ok(PromotionReport {
            character: member.name().to_string(),
            task: task.name.to_string(),
            outcome,
            new_rank,
            events,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Spend the activity, throw the die, apply rewards. The activity goes
/// before the roll: callers have already filtered exhausted members.
fn run_attempt(
    member: &mut Character,
    task: &MeetingTask,
    bonus: i32,
    rng: &mut impl Rng,
) -> AttemptReport {
    member.use_activity();
    let roll = rng.gen_range(1..=DICE_SIDES);
    let resolution = resolve_task(roll, member.skill(task.required_skill), bonus, task);
    let events = member.gain_experience(resolution.xp_awarded);
    if resolution.skill_awarded > 0 {
        member.improve_skill(task.required_skill, resolution.skill_awarded);
    }
    AttemptReport {
        character: member.name().to_string(),
        task: task.name.to_string(),
        resolution,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_logic::career::JobLevel;
    use boardroom_logic::character::ACTIVITIES_PER_DAY;
    use boardroom_logic::skills::Skill;

    // Index of "Document Decisions": difficulty 5, so a member with the
    // required skill at 5 succeeds on any roll (1 + 5 >= 5).
    const EASY_TASK: usize = 6;

    fn easy_task_game(members: usize) -> Game {
        let mut game = Game::seeded(7);
        for i in 0..members {
            game.add_character(&format!("Member{i}")).unwrap();
            // Communication 1 + 4 = 5: success regardless of the die.
            game.roster[i].improve_skill(Skill::Communication, 4);
        }
        game
    }

    #[test]
    fn add_rejects_reserved_and_empty_names() {
        let mut game = Game::seeded(1);
        assert!(matches!(
            game.add_character("   "),
            Err(GameError::ReservedName(_))
        ));
        assert!(matches!(
            game.add_character("cancel"),
            Err(GameError::ReservedName(_))
        ));
        assert!(matches!(
            game.add_character("EXIT"),
            Err(GameError::ReservedName(_))
        ));
        assert!(game.add_character("  Ada  ").is_ok());
        assert_eq!(game.roster()[0].name(), "Ada");
    }

    #[test]
    fn remove_keeps_display_order() {
        let mut game = Game::seeded(1);
        for name in ["Ada", "Grace", "Edsger"] {
            game.add_character(name).unwrap();
        }
        let gone = game.remove_character(1).unwrap();
        assert_eq!(gone.name(), "Grace");
        let names: Vec<&str> = game.roster().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Ada", "Edsger"]);
        assert!(matches!(
            game.remove_character(5),
            Err(GameError::NoSuchCharacter(5))
        ));
    }

    #[test]
    fn day_clock_refills_budgets() {
        let mut game = easy_task_game(1);
        game.attempt_task(0, EASY_TASK).unwrap();
        assert_eq!(game.roster()[0].activities_left(), ACTIVITIES_PER_DAY - 1);
        let report = game.advance_day();
        assert_eq!(report.day, 2);
        assert_eq!(game.roster()[0].activities_left(), ACTIVITIES_PER_DAY);
    }

    #[test]
    fn solo_attempt_applies_rewards() {
        let mut game = easy_task_game(1);
        let report = game.attempt_task(0, EASY_TASK).unwrap();
        assert!(report.resolution.success);
        assert_eq!(report.resolution.team_bonus, 0);
        assert_eq!(game.roster()[0].experience(), 12);
        assert_eq!(game.roster()[0].skill(Skill::Communication), 6);
    }

    #[test]
    fn exhausted_member_is_rejected_before_the_roll() {
        let mut game = easy_task_game(1);
        for _ in 0..ACTIVITIES_PER_DAY {
            game.attempt_task(0, EASY_TASK).unwrap();
        }
        let xp = game.roster()[0].experience();
        assert!(matches!(
            game.attempt_task(0, EASY_TASK),
            Err(GameError::NoActivityLeft(_))
        ));
        // Nothing was consumed or awarded.
        assert_eq!(game.roster()[0].experience(), xp);
    }

    #[test]
    fn invalid_indices_have_no_side_effects() {
        let mut game = easy_task_game(1);
        assert!(matches!(
            game.attempt_task(3, EASY_TASK),
            Err(GameError::NoSuchCharacter(3))
        ));
        assert!(matches!(
            game.attempt_task(0, 99),
            Err(GameError::NoSuchTask(99))
        ));
        assert!(matches!(
            game.attempt_team_task(&[0, 9], EASY_TASK),
            Err(GameError::NoSuchCharacter(9))
        ));
        assert_eq!(game.roster()[0].activities_left(), ACTIVITIES_PER_DAY);
        assert_eq!(game.roster()[0].experience(), 0);

        let empty = Game::seeded(1).attempt_task(0, 0);
        assert!(matches!(empty, Err(GameError::EmptyRoster)));
    }

    #[test]
    fn team_round_pays_bonus_and_synergy() {
        let mut game = easy_task_game(3);
        let report = game.attempt_team_task(&[0, 1, 2], EASY_TASK).unwrap();
        assert_eq!(report.team_bonus, 4);
        assert_eq!(report.attempts.len(), 3);
        assert!(report.skipped.is_empty());
        // All guaranteed successes, so the synergy payout fires.
        assert_eq!(report.synergy_xp, 10);
        for member in game.roster() {
            assert_eq!(member.experience(), 12 + 10);
            assert_eq!(member.activities_left(), ACTIVITIES_PER_DAY - 1);
        }
    }

    #[test]
    fn solo_sized_team_gets_no_synergy() {
        let mut game = easy_task_game(1);
        let report = game.attempt_team_task(&[0], EASY_TASK).unwrap();
        assert_eq!(report.team_bonus, 0);
        assert_eq!(report.synergy_xp, 0);
        assert_eq!(game.roster()[0].experience(), 12);
    }

    #[test]
    fn exhausted_members_sit_team_rounds_out() {
        let mut game = easy_task_game(2);
        for _ in 0..ACTIVITIES_PER_DAY {
            game.attempt_task(0, EASY_TASK).unwrap();
        }
        let report = game.attempt_team_task(&[0, 1], EASY_TASK).unwrap();
        // Member0 sat out, so this was effectively solo: no bonus.
        assert_eq!(report.attempts.len(), 1);
        assert_eq!(report.attempts[0].character, "Member1");
        assert_eq!(report.team_bonus, 0);
        assert_eq!(report.synergy_xp, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::OutOfActivities);

        // Everyone exhausted: the round aborts.
        for _ in 0..ACTIVITIES_PER_DAY - 1 {
            game.attempt_task(1, EASY_TASK).unwrap();
        }
        assert!(matches!(
            game.attempt_team_task(&[0, 1], EASY_TASK),
            Err(GameError::NoParticipants)
        ));
    }

    #[test]
    fn promotion_needs_eligibility() {
        let mut game = easy_task_game(1);
        assert!(matches!(
            game.attempt_promotion(0),
            Err(GameError::NotEligible(_))
        ));
    }

    #[test]
    fn promotion_success_moves_the_rank() {
        let mut game = Game::seeded(11);
        game.add_character("Ada").unwrap();
        game.roster[0].gain_experience(200);
        // Far past the minimums: 1 + (12 + 12) >= 12 on any roll.
        game.roster[0].improve_skill(Skill::Communication, 11);
        game.roster[0].improve_skill(Skill::Teamwork, 11);
        let before_leadership = game.roster()[0].skill(Skill::Leadership);

        let report = game.attempt_promotion(0).unwrap();
        assert!(matches!(report.outcome, PromotionRoll::Success { .. }));
        assert_eq!(report.new_rank, Some(JobLevel::JuniorEngineer));
        let ada = &game.roster()[0];
        assert_eq!(ada.job_level(), JobLevel::JuniorEngineer);
        assert!(!ada.eligible_for_promotion());
        assert_eq!(ada.experience(), 300);
        // Promotion bonus touches every skill, not just the required ones.
        assert_eq!(ada.skill(Skill::Leadership), before_leadership + 1);
        assert_eq!(ada.activities_left(), ACTIVITIES_PER_DAY - 1);
    }

    #[test]
    fn promotion_with_unmet_minimums_costs_the_activity() {
        let mut game = Game::seeded(3);
        game.add_character("Ada").unwrap();
        game.roster[0].gain_experience(200);

        let report = game.attempt_promotion(0).unwrap();
        assert!(matches!(
            report.outcome,
            PromotionRoll::RequirementsUnmet { .. }
        ));
        assert_eq!(report.new_rank, None);
        let ada = &game.roster()[0];
        assert_eq!(ada.experience(), 225);
        assert_eq!(ada.job_level(), JobLevel::Intern);
        assert!(ada.eligible_for_promotion());
        assert_eq!(ada.activities_left(), ACTIVITIES_PER_DAY - 1);
    }

    #[test]
    fn fellow_cannot_attempt_promotion() {
        let mut game = Game::seeded(3);
        game.add_character("Ada").unwrap();
        while game.roster[0].promote().is_some() {}
        assert!(matches!(
            game.attempt_promotion(0),
            Err(GameError::AtTopOfLadder(_))
        ));
    }

    #[test]
    fn decay_shows_up_in_the_day_report() {
        let mut game = Game::seeded(5);
        game.add_character("Trained").unwrap();
        game.add_character("Fresh").unwrap();
        game.roster[0].improve_skill(Skill::Leadership, 4);

        // Both idle for a week, but only trained skills rust.
        for _ in 0..6 {
            assert!(game.advance_day().decay.is_empty());
        }
        let report = game.advance_day();
        assert_eq!(report.decay.len(), 1);
        let (name, tick) = &report.decay[0];
        assert_eq!(name, "Trained");
        assert_eq!(tick.decayed, vec![(Skill::Leadership, 4)]);
    }
}
