//! Boardroom Headless Validation Harness
//!
//! Sweeps the pure rules and drives a seeded engine session without a
//! terminal. Runs entirely in-process — no prompts, no rendering.
//!
//! Usage:
//!   cargo run -p boardroom-simtest
//!   cargo run -p boardroom-simtest -- --verbose

use boardroom_core::prelude::*;
use boardroom_logic::career::JobLevel;
use boardroom_logic::character::{Character, ACTIVITIES_PER_DAY, DECAY_AFTER_DAYS};
use boardroom_logic::resolve::{resolve_promotion, resolve_task, team_bonus, PromotionRoll};
use boardroom_logic::selection::parse_selection;
use boardroom_logic::skills::{level_for_experience, Skill};
use boardroom_logic::tasks::{meeting_task_catalog, promotion_task_catalog, promotion_task_for};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Boardroom Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog shape
    results.extend(validate_catalogs());

    // 2. Level curve sweep
    results.extend(validate_level_curve());

    // 3. Team bonus table
    results.extend(validate_team_bonus());

    // 4. Resolution sweep over every task and every roll
    results.extend(validate_resolution_sweep());

    // 5. Decay schedule
    results.extend(validate_decay_schedule());

    // 6. Promotion ladder walk with loaded dice
    results.extend(validate_ladder_walk());

    // 7. Selection parsing
    results.extend(validate_selection_parsing());

    // 8. Seeded end-to-end engine session
    results.extend(validate_engine_session());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalogs ─────────────────────────────────────────────────────────

fn validate_catalogs() -> Vec<TestResult> {
    println!("--- Catalogs ---");
    let mut results = Vec::new();

    let tasks = meeting_task_catalog();
    results.push(check(
        "meeting_catalog_size",
        tasks.len() == 8,
        format!("{} meeting tasks", tasks.len()),
    ));
    results.push(check(
        "meeting_rewards_positive",
        tasks
            .iter()
            .all(|t| t.difficulty > 0 && t.xp_reward > 0 && t.skill_reward > 0),
        "difficulty and rewards all positive".into(),
    ));

    let packets = promotion_task_catalog();
    results.push(check(
        "promotion_catalog_size",
        packets.len() == 6,
        format!("{} promotion packets", packets.len()),
    ));
    let covered = JobLevel::ALL
        .iter()
        .all(|&rank| promotion_task_for(&packets, rank).is_some() != rank.is_terminal());
    results.push(check(
        "one_packet_per_non_terminal_rank",
        covered,
        "every rank below Fellow has exactly its packet".into(),
    ));
    // A max roll on exactly-minimum skills must clear every packet, or
    // the ladder can dead-end.
    let clearable = packets.iter().all(|p| {
        let minimum_total: i32 = p.requirements.iter().map(|&(_, min)| min).sum();
        20 + minimum_total >= p.difficulty
    });
    results.push(check(
        "every_packet_clearable_at_minimums",
        clearable,
        "20 + minimum skills >= difficulty for all packets".into(),
    ));

    results
}

// ── 2. Level curve ──────────────────────────────────────────────────────

fn validate_level_curve() -> Vec<TestResult> {
    println!("--- Level Curve ---");
    let mut results = Vec::new();

    let mut monotonic = true;
    let mut formula = true;
    let mut last = 0;
    for xp in 0..5000u32 {
        let level = level_for_experience(xp);
        if level < last {
            monotonic = false;
        }
        if level != 1 + xp / 100 {
            formula = false;
        }
        last = level;
    }
    results.push(check(
        "level_formula",
        formula,
        "level == 1 + xp/100 across 0..5000".into(),
    ));
    results.push(check(
        "level_monotonic",
        monotonic,
        "level never decreases as xp grows".into(),
    ));
    results
}

// ── 3. Team bonus ───────────────────────────────────────────────────────

fn validate_team_bonus() -> Vec<TestResult> {
    println!("--- Team Bonus ---");
    let expected = [(1, 0), (2, 2), (3, 4), (4, 6), (5, 8), (6, 8), (10, 8)];
    let ok = expected.iter().all(|&(n, b)| team_bonus(n) == b);
    vec![check(
        "team_bonus_table",
        ok,
        "+2 per extra member, capped at +8".into(),
    )]
}

// ── 4. Resolution sweep ─────────────────────────────────────────────────

fn validate_resolution_sweep() -> Vec<TestResult> {
    println!("--- Resolution Sweep ---");
    let mut results = Vec::new();

    let mut threshold_ok = true;
    let mut reward_ok = true;
    for task in &meeting_task_catalog() {
        for roll in 1..=20 {
            for skill in [0, 1, 5, 12] {
                for bonus in [0, 2, 8] {
                    let r = resolve_task(roll, skill, bonus, task);
                    if r.success != (roll + skill + bonus >= task.difficulty) {
                        threshold_ok = false;
                    }
                    let expect_xp = if r.success {
                        task.xp_reward
                    } else {
                        task.xp_reward / 3
                    };
                    let expect_skill = if r.success { task.skill_reward } else { 0 };
                    if r.xp_awarded != expect_xp || r.skill_awarded != expect_skill {
                        reward_ok = false;
                    }
                }
            }
        }
    }
    results.push(check(
        "success_threshold",
        threshold_ok,
        "success iff roll + skill + bonus >= difficulty".into(),
    ));
    results.push(check(
        "reward_rules",
        reward_ok,
        "full reward on success, a third of the XP on failure".into(),
    ));
    results
}

// ── 5. Decay schedule ───────────────────────────────────────────────────

fn validate_decay_schedule() -> Vec<TestResult> {
    println!("--- Decay Schedule ---");
    let mut results = Vec::new();

    let mut c = Character::new("Idle");
    c.improve_skill(Skill::Leadership, 4); // 5
    let mut early_decay = false;
    for _ in 1..DECAY_AFTER_DAYS {
        if !c.new_day().decayed.is_empty() {
            early_decay = true;
        }
    }
    let on_time = c.new_day().decayed == vec![(Skill::Leadership, 4)];
    results.push(check(
        "decay_waits_a_week",
        !early_decay && on_time,
        format!("first rust lands on day {DECAY_AFTER_DAYS}"),
    ));

    for _ in 0..30 {
        c.new_day();
    }
    let floored = Skill::ALL.iter().all(|&s| c.skill(s) == 1);
    results.push(check(
        "decay_floor",
        floored,
        "a month idle leaves every skill at 1".into(),
    ));

    // An activity every few days keeps the counter below a week.
    let mut active = Character::new("Busy");
    active.improve_skill(Skill::Teamwork, 4);
    let mut rusted = false;
    for day in 0..30 {
        if day % 3 == 0 {
            active.use_activity();
        }
        if !active.new_day().decayed.is_empty() {
            rusted = true;
        }
    }
    results.push(check(
        "activity_resets_decay_clock",
        !rusted && active.skill(Skill::Teamwork) == 5,
        "regular activity preserves trained skills".into(),
    ));

    results
}

// ── 6. Promotion ladder walk ────────────────────────────────────────────

fn validate_ladder_walk() -> Vec<TestResult> {
    println!("--- Promotion Ladder ---");
    let mut results = Vec::new();

    let packets = promotion_task_catalog();
    let mut c = Character::new("Climber");
    let mut promotions = 0;
    while !c.job_level().is_terminal() {
        let threshold = match c.job_level().experience_threshold() {
            Some(t) => t,
            None => break,
        };
        if c.experience() < threshold {
            c.gain_experience(threshold - c.experience());
        }
        if !c.eligible_for_promotion() {
            results.push(check(
                "eligibility_latch",
                false,
                format!("no latch at {:?} threshold", c.job_level()),
            ));
            return results;
        }
        let packet = match promotion_task_for(&packets, c.job_level()) {
            Some(p) => p,
            None => break,
        };
        for &(skill, min) in packet.requirements {
            if c.skill(skill) < min {
                c.improve_skill(skill, min - c.skill(skill));
            }
        }
        match resolve_promotion(c.skills(), packet, || 20) {
            PromotionRoll::Success { xp_awarded, .. } => {
                c.promote();
                c.raise_all_skills(1);
                c.gain_experience(xp_awarded);
                promotions += 1;
            }
            other => {
                results.push(check(
                    "ladder_walk",
                    false,
                    format!("loaded die failed at {:?}: {:?}", c.job_level(), other),
                ));
                return results;
            }
        }
    }
    results.push(check(
        "ladder_walk",
        c.job_level() == JobLevel::Fellow && promotions == 6,
        format!("{promotions} promotions to {:?}", c.job_level()),
    ));
    results.push(check(
        "fellow_latch_stays_clear",
        {
            c.gain_experience(50_000);
            !c.eligible_for_promotion()
        },
        "no eligibility past the top of the ladder".into(),
    ));
    results
}

// ── 7. Selection parsing ────────────────────────────────────────────────

fn validate_selection_parsing() -> Vec<TestResult> {
    println!("--- Selection Parsing ---");
    let cases: [(&str, usize, &[usize]); 5] = [
        ("1, 3 4", 5, &[0, 2, 3]),
        ("4 1 4 2 1", 5, &[0, 1, 3]),
        ("0 1 9 banana 2", 3, &[0, 1]),
        ("", 3, &[]),
        ("2 2 2", 1, &[]),
    ];
    let ok = cases
        .iter()
        .all(|&(input, len, expected)| parse_selection(input, len) == expected);
    vec![check(
        "selection_parsing",
        ok,
        "sorted, de-duplicated, in-range, garbage dropped".into(),
    )]
}

// ── 8. Seeded engine session ────────────────────────────────────────────

fn validate_engine_session() -> Vec<TestResult> {
    println!("--- Engine Session ---");
    let mut results = Vec::new();

    let mut game = Game::seeded(1234);
    for name in ["Ada", "Grace", "Edsger"] {
        if game.add_character(name).is_err() {
            results.push(check("roster_setup", false, format!("could not add {name}")));
            return results;
        }
    }
    results.push(check(
        "reserved_names_rejected",
        game.add_character("cancel").is_err() && game.add_character("").is_err(),
        "'cancel' and empty names bounce".into(),
    ));

    // Solo round: XP always moves whatever the die said.
    let solo = game.attempt_task(0, 0);
    let solo_ok = match &solo {
        Ok(report) => report.resolution.xp_awarded > 0,
        Err(_) => false,
    };
    results.push(check(
        "solo_round_pays_something",
        solo_ok && game.roster()[0].experience() > 0,
        "success or failure, the attempt teaches".into(),
    ));
    results.push(check(
        "solo_round_costs_activity",
        game.roster()[0].activities_left() == ACTIVITIES_PER_DAY - 1,
        "one activity spent".into(),
    ));

    // Team round over everyone.
    let team = game.attempt_team_task(&[0, 1, 2], 3);
    let team_ok = match &team {
        Ok(report) => report.team_bonus == 4 && report.attempts.len() == 3,
        Err(_) => false,
    };
    results.push(check(
        "team_round_shape",
        team_ok,
        "three participants, +4 team bonus".into(),
    ));

    // Day rollover refills budgets for the whole roster.
    let report = game.advance_day();
    results.push(check(
        "day_advances",
        report.day == 2
            && game
                .roster()
                .iter()
                .all(|m| m.activities_left() == ACTIVITIES_PER_DAY),
        "day 2, all budgets refilled".into(),
    ));

    // Promotion gate: nobody is near the threshold yet.
    results.push(check(
        "promotion_gated",
        matches!(game.attempt_promotion(0), Err(GameError::NotEligible(_))),
        "attempt rejected before the threshold".into(),
    ));

    // Same seed, same session → identical dice.
    let replay = || {
        let mut g = Game::seeded(777);
        g.add_character("Ada").ok()?;
        let r = g.attempt_task(0, 0).ok()?;
        Some(r.resolution.roll)
    };
    results.push(check(
        "seeded_dice_reproduce",
        replay() == replay(),
        "identical roll from identical seed".into(),
    ));

    results
}
