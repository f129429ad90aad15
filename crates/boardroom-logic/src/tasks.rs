//! Fixed task catalogs: ordinary meeting tasks and per-rank promotion
//! packets.
//!
//! Both catalogs are hardcoded tables built once at startup and never
//! mutated. There is no data file and no configuration surface.

use serde::Serialize;

use crate::career::JobLevel;
use crate::skills::Skill;

/// An ordinary meeting task a character (or a team) can attempt.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingTask {
    pub name: &'static str,
    pub description: &'static str,
    pub required_skill: Skill,
    pub difficulty: i32,
    pub xp_reward: u32,
    pub skill_reward: i32,
}

/// A promotion packet: the gate out of one rank.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionTask {
    pub name: &'static str,
    pub description: &'static str,
    /// The rank this packet promotes out of.
    pub from_rank: JobLevel,
    /// Minimum skill values before the panel will even convene.
    pub requirements: &'static [(Skill, i32)],
    pub difficulty: i32,
}

/// The eight ordinary meeting tasks.
pub fn meeting_task_catalog() -> Vec<MeetingTask> {
    vec![
        MeetingTask {
            name: "Lead Discussion",
            description: "Guide the team through a complex topic",
            required_skill: Skill::Leadership,
            difficulty: 10,
            xp_reward: 25,
            skill_reward: 2,
        },
        MeetingTask {
            name: "Present Findings",
            description: "Share research results with the group",
            required_skill: Skill::Presentation,
            difficulty: 8,
            xp_reward: 20,
            skill_reward: 2,
        },
        MeetingTask {
            name: "Resolve Conflict",
            description: "Mediate between disagreeing team members",
            required_skill: Skill::Communication,
            difficulty: 12,
            xp_reward: 30,
            skill_reward: 3,
        },
        MeetingTask {
            name: "Brainstorm Solutions",
            description: "Generate creative ideas for challenges",
            required_skill: Skill::ProblemSolving,
            difficulty: 6,
            xp_reward: 15,
            skill_reward: 1,
        },
        MeetingTask {
            name: "Coordinate Tasks",
            description: "Organize team efforts and delegate work",
            required_skill: Skill::Teamwork,
            difficulty: 9,
            xp_reward: 22,
            skill_reward: 2,
        },
        MeetingTask {
            name: "Facilitate Workshop",
            description: "Run an interactive team building session",
            required_skill: Skill::Leadership,
            difficulty: 15,
            xp_reward: 40,
            skill_reward: 3,
        },
        MeetingTask {
            name: "Document Decisions",
            description: "Create clear meeting minutes and action items",
            required_skill: Skill::Communication,
            difficulty: 5,
            xp_reward: 12,
            skill_reward: 1,
        },
        MeetingTask {
            name: "Mentor Junior Member",
            description: "Help a new team member learn the ropes",
            required_skill: Skill::Teamwork,
            difficulty: 7,
            xp_reward: 18,
            skill_reward: 2,
        },
    ]
}

/// One promotion packet per non-terminal rank.
pub fn promotion_task_catalog() -> Vec<PromotionTask> {
    vec![
        PromotionTask {
            name: "Probation Review",
            description: "Convince the panel you can run a meeting on your own",
            from_rank: JobLevel::Intern,
            requirements: &[(Skill::Communication, 3), (Skill::Teamwork, 3)],
            difficulty: 12,
        },
        PromotionTask {
            name: "Design Review Defense",
            description: "Walk the senior staff through a design end to end",
            from_rank: JobLevel::JuniorEngineer,
            requirements: &[(Skill::ProblemSolving, 4), (Skill::Communication, 4)],
            difficulty: 15,
        },
        PromotionTask {
            name: "Cross-Team Initiative",
            description: "Land a project that spans three teams",
            from_rank: JobLevel::Engineer,
            requirements: &[
                (Skill::Leadership, 5),
                (Skill::ProblemSolving, 5),
                (Skill::Presentation, 4),
            ],
            difficulty: 20,
        },
        PromotionTask {
            name: "Org Planning Summit",
            description: "Own the quarterly planning cycle for the whole org",
            from_rank: JobLevel::SeniorEngineer,
            requirements: &[
                (Skill::Leadership, 7),
                (Skill::Communication, 6),
                (Skill::ProblemSolving, 6),
            ],
            difficulty: 26,
        },
        PromotionTask {
            name: "Executive Briefing",
            description: "Brief the executives and leave with more budget than you arrived with",
            from_rank: JobLevel::PrincipalEngineer,
            requirements: &[
                (Skill::Leadership, 9),
                (Skill::Presentation, 8),
                (Skill::Teamwork, 7),
            ],
            difficulty: 32,
        },
        PromotionTask {
            name: "All-Hands Keynote",
            description: "Set the technical direction in front of the entire company",
            from_rank: JobLevel::DistinguishedEngineer,
            requirements: &[
                (Skill::Leadership, 12),
                (Skill::Communication, 10),
                (Skill::ProblemSolving, 10),
                (Skill::Presentation, 10),
            ],
            difficulty: 40,
        },
    ]
}

/// Look up the packet that promotes out of `rank`.
pub fn promotion_task_for(catalog: &[PromotionTask], rank: JobLevel) -> Option<&PromotionTask> {
    catalog.iter().find(|t| t.from_rank == rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_meeting_tasks_with_sane_values() {
        let catalog = meeting_task_catalog();
        assert_eq!(catalog.len(), 8);
        for task in &catalog {
            assert!(!task.name.is_empty());
            assert!(task.difficulty > 0);
            assert!(task.xp_reward > 0);
            assert!(task.skill_reward > 0);
        }
    }

    #[test]
    fn one_packet_per_non_terminal_rank() {
        let catalog = promotion_task_catalog();
        assert_eq!(catalog.len(), 6);
        for rank in JobLevel::ALL {
            let packet = promotion_task_for(&catalog, rank);
            assert_eq!(packet.is_some(), !rank.is_terminal());
        }
    }

    #[test]
    fn packets_escalate_up_the_ladder() {
        let catalog = promotion_task_catalog();
        for pair in catalog.windows(2) {
            assert!(pair[0].difficulty < pair[1].difficulty);
        }
        for packet in &catalog {
            assert!(!packet.requirements.is_empty());
            for &(_, min) in packet.requirements {
                assert!(min > 0);
            }
        }
    }

    #[test]
    fn intern_packet_published_minimums() {
        let catalog = promotion_task_catalog();
        let packet = promotion_task_for(&catalog, JobLevel::Intern).unwrap();
        assert_eq!(
            packet.requirements,
            &[(Skill::Communication, 3), (Skill::Teamwork, 3)]
        );
    }
}
