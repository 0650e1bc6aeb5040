//! Property tests for the priority heuristic: monotonicity in urgency,
//! impact, occupancy, and age (up to the cap), and terminal zeroing.

use chrono::{Duration, Utc};
use proptest::prelude::*;

use innkeep_core::model::ticket::{Impact, Status, Ticket, Urgency};
use innkeep_core::priority::score;

fn any_urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Low),
        Just(Urgency::Medium),
        Just(Urgency::High),
    ]
}

fn any_impact() -> impl Strategy<Value = Impact> {
    prop_oneof![
        Just(Impact::None),
        Just(Impact::Annoying),
        Just(Impact::Blocking),
    ]
}

fn any_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Open),
        Just(Status::InProgress),
        Just(Status::WaitingPart),
        Just(Status::Vendor),
        Just(Status::Resolved),
        Just(Status::Verified),
    ]
}

fn ticket(urgency: Urgency, impact: Impact, occupied: bool, age_hours: i64) -> Ticket {
    let now = Utc::now();
    Ticket {
        urgency,
        impact,
        occupied,
        status: Status::Open,
        created_at: now - Duration::hours(age_hours),
        ..Ticket::default()
    }
}

proptest! {
    #[test]
    fn resolved_and_verified_always_score_zero(
        urgency in any_urgency(),
        impact in any_impact(),
        occupied in any::<bool>(),
        age_hours in 0i64..24 * 400,
        terminal in prop_oneof![Just(Status::Resolved), Just(Status::Verified)],
    ) {
        let now = Utc::now();
        let t = Ticket {
            status: terminal,
            ..ticket(urgency, impact, occupied, age_hours)
        };
        prop_assert_eq!(score(&t, now), 0);
    }

    #[test]
    fn score_is_monotonic_in_urgency(
        impact in any_impact(),
        occupied in any::<bool>(),
        age_hours in 0i64..24 * 60,
    ) {
        let now = Utc::now();
        let low = score(&ticket(Urgency::Low, impact, occupied, age_hours), now);
        let medium = score(&ticket(Urgency::Medium, impact, occupied, age_hours), now);
        let high = score(&ticket(Urgency::High, impact, occupied, age_hours), now);
        prop_assert!(low <= medium && medium <= high);
    }

    #[test]
    fn score_is_monotonic_in_impact(
        urgency in any_urgency(),
        occupied in any::<bool>(),
        age_hours in 0i64..24 * 60,
    ) {
        let now = Utc::now();
        let none = score(&ticket(urgency, Impact::None, occupied, age_hours), now);
        let annoying = score(&ticket(urgency, Impact::Annoying, occupied, age_hours), now);
        let blocking = score(&ticket(urgency, Impact::Blocking, occupied, age_hours), now);
        prop_assert!(none <= annoying && annoying <= blocking);
    }

    #[test]
    fn occupied_scores_strictly_higher(
        urgency in any_urgency(),
        impact in any_impact(),
        age_hours in 0i64..24 * 60,
    ) {
        let now = Utc::now();
        let vacant = score(&ticket(urgency, impact, false, age_hours), now);
        let occupied = score(&ticket(urgency, impact, true, age_hours), now);
        prop_assert!(occupied > vacant);
    }

    #[test]
    fn score_is_monotonic_in_age_up_to_the_cap(
        urgency in any_urgency(),
        impact in any_impact(),
        occupied in any::<bool>(),
        younger in 0i64..24 * 30,
        older in 0i64..24 * 30,
    ) {
        prop_assume!(younger <= older);
        let now = Utc::now();
        let young = score(&ticket(urgency, impact, occupied, younger), now);
        let old = score(&ticket(urgency, impact, occupied, older), now);
        prop_assert!(young <= old);
    }

    #[test]
    fn age_contribution_is_capped_at_thirty_days(
        urgency in any_urgency(),
        impact in any_impact(),
        occupied in any::<bool>(),
        extra_days in 0i64..400,
    ) {
        let now = Utc::now();
        let at_cap = score(&ticket(urgency, impact, occupied, 24 * 31), now);
        let beyond = score(&ticket(urgency, impact, occupied, 24 * (31 + extra_days)), now);
        prop_assert_eq!(at_cap, beyond);
    }

    #[test]
    fn scores_are_never_negative(
        urgency in any_urgency(),
        impact in any_impact(),
        occupied in any::<bool>(),
        status in any_status(),
        age_hours in -48i64..24 * 400,
    ) {
        let now = Utc::now();
        let t = Ticket {
            status,
            ..ticket(urgency, impact, occupied, age_hours)
        };
        prop_assert!(score(&t, now) >= 0);
    }
}
