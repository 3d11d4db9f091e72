pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type AttendeeId = String;

    /// The two-valued partition pairings must cross. Conventionally mapped
    /// from whatever binary attribute the caller uses (e.g. gender).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Category {
        A,
        B,
    }

    impl std::fmt::Display for Category {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Category::A => write!(f, "A"),
                Category::B => write!(f, "B"),
            }
        }
    }

    /// One participant for the duration of a scheduling run.
    ///
    /// `id`, `name`, `age` and `category` are never mutated by the
    /// scheduler; the counters and `date_history` are its bookkeeping.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Attendee {
        pub id: AttendeeId,
        pub name: String,
        pub age: u32,
        pub category: Category,
        #[serde(default)]
        pub bye_count: u32,
        #[serde(default)]
        pub consecutive_byes: u32,
        #[serde(default)]
        pub date_history: Vec<String>,
    }

    impl Attendee {
        pub fn new(
            id: impl Into<AttendeeId>,
            name: impl Into<String>,
            age: u32,
            category: Category,
        ) -> Attendee {
            Attendee {
                id: id.into(),
                name: name.into(),
                age,
                category,
                bye_count: 0,
                consecutive_byes: 0,
                date_history: Vec::new(),
            }
        }
    }
}

pub mod history {
    use std::collections::HashSet;

    use super::entity::AttendeeId;

    /// The accumulating record of (A-id, B-id) combinations already used,
    /// consulted to discourage repeats. Keys are ordered: category A first.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct SeenPairs(HashSet<(AttendeeId, AttendeeId)>);

    impl SeenPairs {
        pub fn new() -> SeenPairs {
            SeenPairs::default()
        }

        pub fn seed(pairs: impl IntoIterator<Item = (AttendeeId, AttendeeId)>) -> SeenPairs {
            SeenPairs(pairs.into_iter().collect())
        }

        pub fn contains(&self, a_id: &str, b_id: &str) -> bool {
            self.0.contains(&(a_id.to_owned(), b_id.to_owned()))
        }

        pub fn insert(&mut self, a_id: AttendeeId, b_id: AttendeeId) {
            self.0.insert((a_id, b_id));
        }

        pub fn len(&self) -> usize {
            self.0.len()
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }
}

pub mod outcome {
    use serde::{Deserialize, Serialize};

    use super::entity::{Attendee, AttendeeId};

    /// One category-A attendee matched with one category-B attendee.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Pairing {
        pub round: u32,
        pub a_id: AttendeeId,
        pub b_id: AttendeeId,
        pub a_name: String,
        pub b_name: String,
        pub a_age: u32,
        pub b_age: u32,
        pub age_diff: u32,
        pub cost: f64,
    }

    /// An attendee sitting out a round, with the penalty that was charged
    /// for the bye slot in the assignment.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Bye {
        pub round: u32,
        pub attendee_id: AttendeeId,
        pub attendee_name: String,
        pub penalty: f64,
    }

    /// Pairings plus byes account for every attendee exactly once.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct RoundResult {
        pub round: u32,
        pub pairings: Vec<Pairing>,
        pub byes: Vec<Bye>,
    }

    /// Everything a run produced: the rounds in order, and the final
    /// attendee snapshots (counters and date histories as of the last
    /// round). The caller's own roster objects are never touched.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ScheduleOutcome {
        pub rounds: Vec<RoundResult>,
        pub attendees: Vec<Attendee>,
    }
}
