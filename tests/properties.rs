//! Property-based tests for the filter and statistics engines.
//!
//! Verifies, over arbitrary record lists:
//! - an empty filter is the identity
//! - every filtered record satisfies the predicate, in original order
//! - filtering is idempotent
//! - status counts and per-item pairs always sum to the record count
//! - pie segments are nonzero, bar series always has six entries

use proptest::prelude::*;

use expatcmd::engine::{aggregate, filter_expats, ExpatFilter, ProvisioningItem};
use expatcmd::models::{Expat, FinalStatus, OrderStatus};

// =============================================================================
// Proptest strategies
// =============================================================================

fn arb_order() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![Just(OrderStatus::Ordered), Just(OrderStatus::NotOrdered)]
}

fn arb_status() -> impl Strategy<Value = FinalStatus> {
    prop_oneof![
        Just(FinalStatus::InProgress),
        Just(FinalStatus::Completed),
        Just(FinalStatus::Pending),
    ]
}

/// Dates drawn from a small pool so that exact matches actually happen
fn arb_date() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("2024-07-15".to_string()),
        Just("2024-07-20".to_string()),
        Just("2024-08-01".to_string()),
        Just("not-a-date".to_string()),
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,12}"
}

fn arb_logistics() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[A-Za-z ]{1,10}"]
}

fn arb_expat() -> impl Strategy<Value = Expat> {
    (
        arb_name(),
        arb_date(),
        (arb_order(), arb_order(), arb_order(), arb_order()),
        (arb_logistics(), arb_logistics()),
        arb_date(),
        arb_status(),
    )
        .prop_map(|(name, arrival, (card, phone, sim, hotel), (driver, car), handover, status)| {
            let mut expat = Expat::new();
            expat.name = name;
            expat.arrival_date = arrival;
            expat.business_card = card;
            expat.phone = phone;
            expat.sim_card = sim;
            expat.hotel = hotel;
            expat.driver = driver;
            expat.car = car;
            expat.handover_date = handover;
            expat.final_status = status;
            expat
        })
}

fn arb_expats() -> impl Strategy<Value = Vec<Expat>> {
    prop::collection::vec(arb_expat(), 0..20)
}

fn ids(expats: &[&Expat]) -> Vec<uuid::Uuid> {
    expats.iter().map(|e| e.id).collect()
}

// =============================================================================
// Filter engine
// =============================================================================

proptest! {
    #[test]
    fn empty_filter_is_identity(expats in arb_expats()) {
        let all: Vec<&Expat> = expats.iter().collect();
        prop_assert_eq!(ids(&filter_expats(&expats, "", "")), ids(&all));
    }

    #[test]
    fn filtered_records_match_predicate(
        expats in arb_expats(),
        name in "[A-Za-z]{0,3}",
        date in arb_date(),
    ) {
        let result = filter_expats(&expats, &name, &date);
        for expat in &result {
            prop_assert!(date.is_empty() || expat.arrival_date == date);
            prop_assert!(
                name.is_empty() || expat.name.to_lowercase().contains(&name.to_lowercase())
            );
        }

        // order-preserving subsequence, and nothing matching is dropped
        let expected: Vec<uuid::Uuid> = expats
            .iter()
            .filter(|e| ExpatFilter::new(name.as_str(), date.as_str()).matches(e))
            .map(|e| e.id)
            .collect();
        prop_assert_eq!(ids(&result), expected);
    }

    #[test]
    fn filter_is_idempotent(
        expats in arb_expats(),
        name in "[A-Za-z]{0,3}",
        date in arb_date(),
    ) {
        let once: Vec<Expat> = filter_expats(&expats, &name, &date).into_iter().cloned().collect();
        let twice: Vec<Expat> = filter_expats(&once, &name, &date).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Statistics engine
// =============================================================================

proptest! {
    #[test]
    fn status_counts_sum_to_len(expats in arb_expats()) {
        let stats = aggregate(&expats);
        prop_assert_eq!(stats.total, expats.len());
        prop_assert_eq!(stats.status_counts.total(), expats.len());
        let summed: usize = stats.status_counts.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(summed, expats.len());
    }

    #[test]
    fn item_pairs_sum_to_len(expats in arb_expats()) {
        let stats = aggregate(&expats);
        for item in ProvisioningItem::ALL {
            prop_assert_eq!(stats.needs.get(item).total(), expats.len());
        }
        for entry in &stats.bar_series {
            prop_assert_eq!(entry.ordered + entry.not_ordered, expats.len());
        }
    }

    #[test]
    fn chart_shapes(expats in arb_expats()) {
        let stats = aggregate(&expats);
        prop_assert_eq!(stats.bar_series.len(), 6);
        prop_assert!(stats.pie_segments.iter().all(|s| s.value > 0));

        let nonzero = stats.status_counts.iter().filter(|(_, n)| *n > 0).count();
        prop_assert_eq!(stats.pie_segments.len(), nonzero);

        let pie_total: usize = stats.pie_segments.iter().map(|s| s.value).sum();
        prop_assert_eq!(pie_total, expats.len());
    }

    #[test]
    fn date_warning_never_changes_stats(expats in arb_expats()) {
        // fixing every flagged handover date leaves the statistics unchanged
        let mut fixed = expats.clone();
        for expat in fixed.iter_mut().filter(|e| e.handover_before_arrival()) {
            expat.handover_date = expat.arrival_date.clone();
        }
        prop_assert!(fixed.iter().all(|e| !e.handover_before_arrival()));
        prop_assert_eq!(aggregate(&expats), aggregate(&fixed));
    }
}
