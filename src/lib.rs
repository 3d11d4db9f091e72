//! Speed-dating round scheduling.
//!
//! Given a roster split into two categories, produces a sequence of rounds
//! that pairs every attendee across categories at minimum total cost,
//! assigning byes when group sizes differ and steering away from pairs
//! already used in earlier rounds or earlier events.
//!
//! ```
//! use speed_rounds::{format_report, schedule_rounds, Attendee, Category};
//!
//! let roster = vec![
//!     Attendee::new("a1", "Alice", 29, Category::A),
//!     Attendee::new("b1", "Bob", 31, Category::B),
//! ];
//! let outcome = schedule_rounds(roster, 1, []);
//! assert_eq!(outcome.rounds[0].pairings.len(), 1);
//! let report = format_report(&outcome);
//! assert!(report.detailed.contains("ROUND 1"));
//! ```

pub mod assign;
pub mod cost;
pub mod model;
pub mod report;
pub mod roster;
pub mod scheduler;

pub use model::entity::{Attendee, AttendeeId, Category};
pub use model::history::SeenPairs;
pub use model::outcome::{Bye, Pairing, RoundResult, ScheduleOutcome};
pub use report::{format_report, Report};
pub use roster::{validate, RosterError, MAX_ROUNDS};
pub use scheduler::{schedule_rounds, EventScheduler};
