//! Multi-round orchestration.
//!
//! Rounds are strictly sequential: the seen-pairs set and the bye counters
//! updated by round `k` price round `k + 1`. The scheduler owns its roster
//! for the whole run and hands the final attendee snapshots back in the
//! outcome.

use tracing::debug;

use crate::assign::{AssignmentProblem, Slot};
use crate::cost::{bye_penalty, pairing_cost};
use crate::model::entity::{Attendee, AttendeeId, Category};
use crate::model::history::SeenPairs;
use crate::model::outcome::{Bye, Pairing, RoundResult, ScheduleOutcome};

pub struct EventScheduler {
    attendees: Vec<Attendee>,
    group_a: Vec<usize>,
    group_b: Vec<usize>,
    seen: SeenPairs,
    rounds: Vec<RoundResult>,
}

impl EventScheduler {
    /// Takes ownership of the roster; `prior_pairs` are (A-id, B-id) keys
    /// from earlier events that should not be repeated at zero cost.
    pub fn new(
        attendees: Vec<Attendee>,
        prior_pairs: impl IntoIterator<Item = (AttendeeId, AttendeeId)>,
    ) -> EventScheduler {
        let group_a = indices_of(&attendees, Category::A);
        let group_b = indices_of(&attendees, Category::B);
        EventScheduler {
            attendees,
            group_a,
            group_b,
            seen: SeenPairs::seed(prior_pairs),
            rounds: Vec::new(),
        }
    }

    /// Runs `round_count` further rounds and returns everything generated
    /// so far, in order. A count of zero is a no-op.
    pub fn run_rounds(&mut self, round_count: u32) -> &[RoundResult] {
        let start = self.rounds.len() as u32;
        for round in start + 1..=start + round_count {
            let result = self.run_round(round);
            self.rounds.push(result);
        }
        &self.rounds
    }

    pub fn into_outcome(self) -> ScheduleOutcome {
        ScheduleOutcome {
            rounds: self.rounds,
            attendees: self.attendees,
        }
    }

    fn run_round(&mut self, round: u32) -> RoundResult {
        // The larger group supplies the rows; surplus rows land on bye
        // slots. On equal sizes category A supplies the rows and there are
        // no bye slots.
        let candidates_are_a = self.group_a.len() >= self.group_b.len();
        let (candidates, anchors) = if candidates_are_a {
            (self.group_a.clone(), self.group_b.clone())
        } else {
            (self.group_b.clone(), self.group_a.clone())
        };

        let size = candidates.len();
        let real_columns = anchors.len();
        if size == 0 {
            return RoundResult {
                round,
                pairings: Vec::new(),
                byes: Vec::new(),
            };
        }

        let problem = AssignmentProblem::build(
            size,
            real_columns,
            |row, col| {
                let candidate = &self.attendees[candidates[row]];
                let anchor = &self.attendees[anchors[col]];
                if candidates_are_a {
                    pairing_cost(candidate, anchor, &self.seen)
                } else {
                    pairing_cost(anchor, candidate, &self.seen)
                }
            },
            |row| bye_penalty(&self.attendees[candidates[row]]),
        );

        let mut pairings = Vec::new();
        let mut byes = Vec::new();
        for assignment in problem.solve() {
            let candidate_idx = candidates[assignment.row];
            match assignment.slot {
                Slot::Paired(col) => {
                    let anchor_idx = anchors[col];
                    let (a_idx, b_idx) = if candidates_are_a {
                        (candidate_idx, anchor_idx)
                    } else {
                        (anchor_idx, candidate_idx)
                    };
                    pairings.push(self.record_pairing(round, a_idx, b_idx, assignment.cost));
                }
                Slot::Bye => {
                    let attendee = &mut self.attendees[candidate_idx];
                    byes.push(Bye {
                        round,
                        attendee_id: attendee.id.clone(),
                        attendee_name: attendee.name.clone(),
                        penalty: assignment.cost,
                    });
                    attendee.bye_count += 1;
                    attendee.consecutive_byes += 1;
                }
            }
        }

        debug!(
            round,
            pairings = pairings.len(),
            byes = byes.len(),
            seen_pairs = self.seen.len(),
            "assigned round"
        );

        RoundResult {
            round,
            pairings,
            byes,
        }
    }

    fn record_pairing(&mut self, round: u32, a_idx: usize, b_idx: usize, cost: f64) -> Pairing {
        let a = &self.attendees[a_idx];
        let b = &self.attendees[b_idx];
        let pairing = Pairing {
            round,
            a_id: a.id.clone(),
            b_id: b.id.clone(),
            a_name: a.name.clone(),
            b_name: b.name.clone(),
            a_age: a.age,
            b_age: b.age,
            age_diff: a.age.abs_diff(b.age),
            cost,
        };
        self.seen.insert(pairing.a_id.clone(), pairing.b_id.clone());

        let b_name = pairing.b_name.clone();
        let a = &mut self.attendees[a_idx];
        a.consecutive_byes = 0;
        a.date_history.push(b_name);
        let a_name = pairing.a_name.clone();
        let b = &mut self.attendees[b_idx];
        b.consecutive_byes = 0;
        b.date_history.push(a_name);

        pairing
    }
}

/// One-shot entry point: builds a scheduler, runs the rounds, returns the
/// results together with the final attendee snapshots.
pub fn schedule_rounds(
    attendees: Vec<Attendee>,
    round_count: u32,
    prior_pairs: impl IntoIterator<Item = (AttendeeId, AttendeeId)>,
) -> ScheduleOutcome {
    let mut scheduler = EventScheduler::new(attendees, prior_pairs);
    scheduler.run_rounds(round_count);
    scheduler.into_outcome()
}

fn indices_of(attendees: &[Attendee], category: Category) -> Vec<usize> {
    attendees
        .iter()
        .enumerate()
        .filter(|(_, attendee)| attendee.category == category)
        .map(|(idx, _)| idx)
        .collect()
}
