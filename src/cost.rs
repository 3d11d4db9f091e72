//! Compatibility cost model and bye penalty.
//!
//! All thresholds and coefficients here are fixed policy constants of the
//! product, not tunables.

use crate::model::entity::Attendee;
use crate::model::history::SeenPairs;

pub type Cost = f64;

/// Steep penalty for a pair that has already been used. Not a hard
/// constraint: the solver can still be forced into it when no alternative
/// exists (e.g. a 1x1 roster).
pub const FORBIDDEN_PENALTY: Cost = 1_000_000.0;

/// Age gaps up to this many years (either direction) cost nothing.
pub const COMPATIBILITY_BAND: i64 = 10;

const EXP_DIVISOR: f64 = 2.0;

const BYE_BASE: Cost = 50.0;
const BYE_PER_BYE: Cost = 30.0;
const BYE_PER_CONSECUTIVE: Cost = 70.0;

/// Cost of pairing a category-A attendee with a category-B attendee.
///
/// Zero inside the compatibility band; beyond it the penalty is linear when
/// A is the older one and exponential when B is. The asymmetry is
/// deliberate.
pub fn pairing_cost(a: &Attendee, b: &Attendee, seen: &SeenPairs) -> Cost {
    if seen.contains(&a.id, &b.id) {
        return FORBIDDEN_PENALTY;
    }
    let age_diff = b.age as i64 - a.age as i64; // positive if B is older
    if age_diff.abs() <= COMPATIBILITY_BAND {
        0.0
    } else if age_diff < 0 {
        ((-age_diff) - COMPATIBILITY_BAND) as Cost
    } else {
        (((age_diff - COMPATIBILITY_BAND) as f64) / EXP_DIVISOR).exp() - 1.0
    }
}

/// Penalty for sitting this attendee out, evaluated on the counters as they
/// stand before the bye is applied. Grows with every bye taken and faster
/// with back-to-back byes.
pub fn bye_penalty(attendee: &Attendee) -> Cost {
    BYE_BASE
        + BYE_PER_BYE * attendee.bye_count as Cost
        + BYE_PER_CONSECUTIVE * attendee.consecutive_byes as Cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{Attendee, Category};

    fn a(age: u32) -> Attendee {
        Attendee::new("a1", "Ann", age, Category::A)
    }

    fn b(age: u32) -> Attendee {
        Attendee::new("b1", "Ben", age, Category::B)
    }

    #[test]
    fn within_band_is_free_in_both_directions() {
        let seen = SeenPairs::new();
        assert_eq!(pairing_cost(&a(30), &b(40), &seen), 0.0);
        assert_eq!(pairing_cost(&a(40), &b(30), &seen), 0.0);
        assert_eq!(pairing_cost(&a(30), &b(30), &seen), 0.0);
    }

    #[test]
    fn linear_branch_when_a_is_older() {
        let seen = SeenPairs::new();
        // A is 20 years older: cost = 20 - 10.
        assert_eq!(pairing_cost(&a(50), &b(30), &seen), 10.0);
        assert_eq!(pairing_cost(&a(41), &b(30), &seen), 1.0);
    }

    #[test]
    fn exponential_branch_when_b_is_older() {
        let seen = SeenPairs::new();
        // B is 20 years older: cost = exp(5) - 1.
        let cost = pairing_cost(&a(30), &b(50), &seen);
        assert!((cost - (5.0f64.exp() - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn penalty_is_asymmetric_around_the_band() {
        let seen = SeenPairs::new();
        let b_older = pairing_cost(&a(30), &b(50), &seen);
        let a_older = pairing_cost(&a(50), &b(30), &seen);
        assert!(b_older > a_older);
    }

    #[test]
    fn seen_pair_costs_the_forbidden_penalty() {
        let seen = SeenPairs::seed([("a1".to_owned(), "b1".to_owned())]);
        assert_eq!(pairing_cost(&a(30), &b(30), &seen), FORBIDDEN_PENALTY);
        // Only the ordered (A, B) key matters.
        let reversed = SeenPairs::seed([("b1".to_owned(), "a1".to_owned())]);
        assert_eq!(pairing_cost(&a(30), &b(30), &reversed), 0.0);
    }

    #[test]
    fn bye_penalty_grows_with_counters() {
        let fresh = a(30);
        assert_eq!(bye_penalty(&fresh), 50.0);

        let mut tired = a(30);
        tired.bye_count = 2;
        tired.consecutive_byes = 1;
        assert_eq!(bye_penalty(&tired), 180.0);
        assert!(bye_penalty(&tired) > bye_penalty(&fresh));
    }
}
