//! Human-readable rendering of a finished schedule.

use std::fmt::Write;

use itertools::Itertools;

use crate::model::outcome::ScheduleOutcome;

/// The two text renderings of a schedule: `detailed` carries ages, costs
/// and per-participant statistics; `simplified` is the terse room list
/// handed out at the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub detailed: String,
    pub simplified: String,
}

const BANNER: &str = "====================";

/// Pure function of the outcome; formatting only, no recomputation.
pub fn format_report(outcome: &ScheduleOutcome) -> Report {
    let mut detailed = String::new();
    let mut simplified = String::new();

    for round in &outcome.rounds {
        let heading = format!("{BANNER} **ROUND {}** {BANNER}\n", round.round);
        detailed.push_str(&heading);
        simplified.push_str(&heading);

        if !round.pairings.is_empty() {
            detailed.push_str("Pairings:\n");
            for (room, pairing) in round.pairings.iter().enumerate() {
                let _ = writeln!(
                    detailed,
                    "  {} (A, age {}) - {} (B, age {})",
                    pairing.a_name, pairing.a_age, pairing.b_name, pairing.b_age
                );
                let _ = writeln!(
                    detailed,
                    "    Age gap: {}, Cost: {:.2}",
                    pairing.age_diff, pairing.cost
                );
                let _ = writeln!(
                    simplified,
                    "  Room {}: {} - {}",
                    room + 1,
                    pairing.a_name,
                    pairing.b_name
                );
            }
        }

        if !round.byes.is_empty() {
            detailed.push_str("Byes:\n");
            for bye in &round.byes {
                let _ = writeln!(
                    detailed,
                    "  {} received a bye (penalty: {:.2})",
                    bye.attendee_name, bye.penalty
                );
            }
            let _ = writeln!(
                simplified,
                "  Byes: {}",
                round.byes.iter().map(|b| b.attendee_name.as_str()).join(", ")
            );
        }

        detailed.push('\n');
        simplified.push('\n');
    }

    let _ = writeln!(detailed, "{BANNER} **PARTICIPANT STATISTICS** {BANNER}");
    for attendee in &outcome.attendees {
        let _ = writeln!(
            detailed,
            "Participant: {} (Category: {}, Age: {})",
            attendee.name, attendee.category, attendee.age
        );
        let _ = writeln!(detailed, "  Total Dates: {}", attendee.date_history.len());
        let partners = if attendee.date_history.is_empty() {
            "None".to_owned()
        } else {
            attendee.date_history.iter().join(", ")
        };
        let _ = writeln!(detailed, "  Date Partners: {partners}");
        let _ = writeln!(detailed, "  Total Byes: {}", attendee.bye_count);
        let _ = writeln!(detailed, "  Consecutive Byes: {}\n", attendee.consecutive_byes);
    }

    Report {
        detailed,
        simplified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{Attendee, Category};
    use crate::scheduler::schedule_rounds;

    fn roster() -> Vec<Attendee> {
        vec![
            Attendee::new("a1", "Alice", 25, Category::A),
            Attendee::new("a2", "Ada", 30, Category::A),
            Attendee::new("a3", "Astrid", 50, Category::A),
            Attendee::new("b1", "Bob", 26, Category::B),
            Attendee::new("b2", "Bert", 29, Category::B),
        ]
    }

    #[test]
    fn detailed_report_names_rounds_partners_and_byes() {
        let outcome = schedule_rounds(roster(), 1, []);
        let report = format_report(&outcome);

        assert!(report.detailed.contains("ROUND 1"));
        assert!(report.detailed.contains("Byes:"));
        // The 50-year-old outlier takes the bye; everyone else is paired.
        assert!(report.detailed.contains("Astrid received a bye"));
        for pairing in &outcome.rounds[0].pairings {
            assert!(report.detailed.contains(&pairing.a_name));
            assert!(report.detailed.contains(&pairing.b_name));
        }
    }

    #[test]
    fn simplified_report_lists_rooms_and_byes() {
        let outcome = schedule_rounds(roster(), 1, []);
        let report = format_report(&outcome);

        assert!(report.simplified.contains("ROUND 1"));
        assert!(report.simplified.contains("Room 1:"));
        assert!(report.simplified.contains("Room 2:"));
        assert!(report.simplified.contains("Byes: Astrid"));
        // Costs and statistics only belong to the detailed report.
        assert!(!report.simplified.contains("Cost"));
        assert!(!report.simplified.contains("PARTICIPANT STATISTICS"));
    }

    #[test]
    fn statistics_cover_every_attendee() {
        let outcome = schedule_rounds(roster(), 2, []);
        let report = format_report(&outcome);

        assert!(report.detailed.contains("PARTICIPANT STATISTICS"));
        for attendee in &outcome.attendees {
            assert!(report
                .detailed
                .contains(&format!("Participant: {}", attendee.name)));
        }
        assert!(report.detailed.contains("Total Dates:"));
        assert!(report.detailed.contains("Total Byes:"));
    }

    #[test]
    fn empty_schedule_still_renders_the_statistics_banner() {
        let outcome = schedule_rounds(Vec::new(), 0, []);
        let report = format_report(&outcome);
        assert!(report.detailed.contains("PARTICIPANT STATISTICS"));
        assert!(report.simplified.is_empty());
    }
}
