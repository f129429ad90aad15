//! Boardroom — a turn-based terminal RPG about surviving meetings.
//!
//! Build a roster of coworkers, throw them at meeting tasks, and climb
//! from Intern to Fellow. All game state lives in
//! [`boardroom_core::engine::Game`]; this binary is only the menu loop.

use std::io::{self, Write};

use clap::Parser;

use boardroom_core::prelude::*;
use boardroom_logic::character::{Character, ProgressEvent};
use boardroom_logic::resolve::PromotionRoll;
use boardroom_logic::selection::parse_selection;

#[derive(Parser)]
#[command(name = "boardroom", about = "Meeting Masters RPG — terminal edition")]
struct Cli {
    /// Fixed dice seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

type Lines = io::Lines<io::StdinLock<'static>>;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let mut game = match cli.seed {
        Some(seed) => Game::seeded(seed),
        None => Game::new(),
    };

    println!("=== Welcome to Meeting Masters RPG ===");
    println!("Build your team and level up through meeting challenges!");

    let mut lines = io::stdin().lines();
    loop {
        print_menu(game.day());
        let Some(choice) = read_line(&mut lines) else {
            break;
        };
        match choice.trim() {
            "1" => add_member(&mut game, &mut lines),
            "2" => solo_round(&mut game, &mut lines),
            "3" => team_round(&mut game, &mut lines),
            "4" => show_stats(&game),
            "5" => show_tasks(&game),
            "6" => promotion_round(&mut game, &mut lines),
            "7" => render_day(&game.advance_day()),
            "8" => remove_member(&mut game, &mut lines),
            "9" | "q" | "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }
    println!("Thanks for playing Meeting Masters RPG!");
}

fn print_menu(day: u32) {
    println!();
    println!("=== Day {day} — Main Menu ===");
    println!("1. Add Team Member");
    println!("2. Solo Round");
    println!("3. Team Meeting");
    println!("4. View Team Stats");
    println!("5. View Task Board");
    println!("6. Attempt Promotion");
    println!("7. End the Day");
    println!("8. Remove Team Member");
    println!("9. Exit");
    prompt("Choice: ");
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Next line from stdin, or `None` on EOF / read error (treated as quit).
fn read_line(lines: &mut Lines) -> Option<String> {
    lines.next()?.ok()
}

fn ask(lines: &mut Lines, text: &str) -> Option<String> {
    prompt(text);
    read_line(lines)
}

/// Ask for a 1-based number; `0` or `cancel` backs out.
fn ask_index(lines: &mut Lines, text: &str, max: usize) -> Option<usize> {
    let answer = ask(lines, text)?;
    let answer = answer.trim();
    if answer == "0" || answer.eq_ignore_ascii_case("cancel") {
        return None;
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n - 1),
        _ => {
            println!("Pick a number between 1 and {max} (or 0 to cancel).");
            None
        }
    }
}

// ── Menu actions ────────────────────────────────────────────────────────

fn add_member(game: &mut Game, lines: &mut Lines) {
    let Some(name) = ask(lines, "New member name (or 'cancel'): ") else {
        return;
    };
    let name = name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case("cancel") || name.eq_ignore_ascii_case("exit") {
        println!("Cancelled.");
        return;
    }
    match game.add_character(name) {
        Ok(()) => println!("{name} joined the meeting group!"),
        Err(err) => println!("Can't add that member: {err}"),
    }
}

fn remove_member(game: &mut Game, lines: &mut Lines) {
    if game.roster().is_empty() {
        println!("No team members to remove.");
        return;
    }
    show_roster(game);
    let Some(index) = ask_index(lines, "Remove which member (0 to cancel)? ", game.roster().len())
    else {
        println!("Cancelled.");
        return;
    };
    match game.remove_character(index) {
        Ok(gone) => println!("{} left the meeting group.", gone.name()),
        Err(err) => println!("{err}"),
    }
}

fn solo_round(game: &mut Game, lines: &mut Lines) {
    if game.roster().is_empty() {
        println!("No team members available! Add some first.");
        return;
    }
    show_roster(game);
    let Some(member) = ask_index(lines, "Select team member (0 to cancel): ", game.roster().len())
    else {
        return;
    };
    show_tasks(game);
    let Some(task) = ask_index(lines, "Select task (0 to cancel): ", game.tasks().len()) else {
        return;
    };
    match game.attempt_task(member, task) {
        Ok(report) => render_attempt(&report),
        Err(err) => println!("{err}"),
    }
}

fn team_round(game: &mut Game, lines: &mut Lines) {
    if game.roster().is_empty() {
        println!("No team members available! Add some first.");
        return;
    }
    show_roster(game);
    let Some(answer) = ask(lines, "Who attends (e.g. '1 3 4', 0 to cancel)? ") else {
        return;
    };
    if answer.trim() == "0" {
        return;
    }
    let picked = parse_selection(&answer, game.roster().len());
    if picked.is_empty() {
        println!("No valid members in that list.");
        return;
    }
    show_tasks(game);
    let Some(task) = ask_index(lines, "Select task (0 to cancel): ", game.tasks().len()) else {
        return;
    };
    match game.attempt_team_task(&picked, task) {
        Ok(report) => render_team(&report),
        Err(err) => println!("{err}"),
    }
}

fn promotion_round(game: &mut Game, lines: &mut Lines) {
    if game.roster().is_empty() {
        println!("No team members available! Add some first.");
        return;
    }
    show_roster(game);
    let Some(member) = ask_index(lines, "Who goes for promotion (0 to cancel)? ", game.roster().len())
    else {
        return;
    };
    match game.attempt_promotion(member) {
        Ok(report) => render_promotion(&report),
        Err(err) => println!("{err}"),
    }
}

// ── Views ───────────────────────────────────────────────────────────────

fn show_roster(game: &Game) {
    println!("\n=== Team Members ===");
    for (i, member) in game.roster().iter().enumerate() {
        let badge = if member.eligible_for_promotion() {
            " [promotion ready]"
        } else {
            ""
        };
        println!(
            "{}. {} — {} (Level {}, {} activities left){}",
            i + 1,
            member.name(),
            member.job_level().title(),
            member.level(),
            member.activities_left(),
            badge
        );
    }
}

fn show_stats(game: &Game) {
    if game.roster().is_empty() {
        println!("No team members to display!");
        return;
    }
    for member in game.roster() {
        print_stats(member);
    }
}

fn print_stats(member: &Character) {
    println!("\n=== {} ===", member.name());
    println!(
        "{} | Level {} | {} XP",
        member.job_level().title(),
        member.level(),
        member.experience()
    );
    println!(
        "Activities left today: {} | Days since last activity: {}",
        member.activities_left(),
        member.days_since_activity()
    );
    if member.eligible_for_promotion() {
        println!("Ready for a promotion attempt!");
    }
    println!("Skills:");
    for (skill, value) in member.skills().iter() {
        println!("  {:>15}: {}", skill.label(), value);
    }
}

fn show_tasks(game: &Game) {
    println!("\n=== Available Meeting Tasks ===");
    for (i, task) in game.tasks().iter().enumerate() {
        println!("{}. {}", i + 1, task.name);
        println!("   {}", task.description);
        println!(
            "   Requires: {} (Difficulty: {})",
            task.required_skill.label(),
            task.difficulty
        );
        println!(
            "   Reward: {} XP, +{} {}",
            task.xp_reward,
            task.skill_reward,
            task.required_skill.label()
        );
    }
    println!("\n=== Promotion Ladder ===");
    for packet in game.promotion_tasks() {
        let requirements: Vec<String> = packet
            .requirements
            .iter()
            .map(|(skill, min)| format!("{} {}", skill.label(), min))
            .collect();
        println!(
            "{} -> {}: {} (needs {}, difficulty {})",
            packet.from_rank.title(),
            packet
                .from_rank
                .next()
                .map(|r| r.title())
                .unwrap_or("?"),
            packet.name,
            requirements.join(", "),
            packet.difficulty
        );
    }
}

// ── Report rendering ────────────────────────────────────────────────────

fn render_events(events: &[ProgressEvent]) {
    for event in events {
        match event {
            ProgressEvent::LevelUp { level } => println!("  Level up! Now level {level}."),
            ProgressEvent::PromotionUnlocked { .. } => {
                println!("  Promotion attempt unlocked!")
            }
        }
    }
}

fn render_attempt(report: &AttemptReport) {
    let r = &report.resolution;
    println!("\n{} attempts: {}", report.character, report.task);
    if r.team_bonus > 0 {
        println!(
            "Roll: {} + skill ({}) + team bonus ({}) = {} vs Difficulty {}",
            r.roll, r.skill_value, r.team_bonus, r.total, r.difficulty
        );
    } else {
        println!(
            "Roll: {} + skill ({}) = {} vs Difficulty {}",
            r.roll, r.skill_value, r.total, r.difficulty
        );
    }
    if r.success {
        println!(
            "SUCCESS! {} gains {} XP and +{} skill.",
            report.character, r.xp_awarded, r.skill_awarded
        );
    } else {
        println!(
            "FAILED! {} gains {} XP for trying.",
            report.character, r.xp_awarded
        );
    }
    render_events(&report.events);
}

fn render_team(report: &TeamReport) {
    println!("\n=== Team attempt: {} ===", report.task);
    for skipped in &report.skipped {
        match skipped.reason {
            SkipReason::OutOfActivities => {
                println!("{} sits this one out (no activities left).", skipped.character)
            }
        }
    }
    if report.team_bonus > 0 {
        println!("Team bonus: +{}", report.team_bonus);
    }
    for attempt in &report.attempts {
        render_attempt(attempt);
    }
    if report.synergy_xp > 0 {
        println!(
            "\nTeamwork pays off! Everyone gains {} bonus XP.",
            report.synergy_xp
        );
    }
}

fn render_day(report: &DayReport) {
    println!("\nDay {} begins. Everyone has fresh activities.", report.day);
    for (name, tick) in &report.decay {
        for (skill, value) in &tick.decayed {
            println!("{}'s {} rusted to {}.", name, skill.label(), value);
        }
    }
}

fn render_promotion(report: &PromotionReport) {
    println!("\n{} attempts: {}", report.character, report.task);
    match &report.outcome {
        PromotionRoll::RequirementsUnmet { missing, xp_awarded } => {
            println!("The panel won't convene yet — skills below the bar:");
            for (skill, required, current) in missing {
                println!("  {} {} (needs {})", skill.label(), current, required);
            }
            println!(
                "{} gains {} XP for preparing anyway.",
                report.character, xp_awarded
            );
        }
        PromotionRoll::Success {
            roll,
            skill_total,
            total,
            difficulty,
            xp_awarded,
        } => {
            println!(
                "Roll: {roll} + skills ({skill_total}) = {total} vs Difficulty {difficulty}"
            );
            if let Some(rank) = report.new_rank {
                println!(
                    "PROMOTED! {} is now {} (+{} XP, +1 to every skill).",
                    report.character,
                    rank.title(),
                    xp_awarded
                );
            }
        }
        PromotionRoll::Failure {
            roll,
            skill_total,
            total,
            difficulty,
            xp_awarded,
        } => {
            println!(
                "Roll: {roll} + skills ({skill_total}) = {total} vs Difficulty {difficulty}"
            );
            println!(
                "Not this time. {} gains {} XP and stays eligible.",
                report.character, xp_awarded
            );
        }
    }
    render_events(&report.events);
}
