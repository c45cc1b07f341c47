//! Property-based tests for the core invariants of the Stock Cell:
//! conservation, no phantom acceptance, idempotence of validation.

use std::time::Duration;

use inventory_engine::InventoryService;
use proptest::prelude::*;

proptest! {
    /// For any sequence of `reserve(q_i)` calls against a cell initialized
    /// to `stock`, the accepted quantities never sum past `stock`, and the
    /// post-state total is exactly `stock - sum(accepted)`.
    #[test]
    fn conservation_holds_over_any_sequential_sequence(
        stock in 0u64..500,
        quantities in proptest::collection::vec(1i64..50, 0..200),
    ) {
        let svc = InventoryService::new(stock, Duration::from_secs(60));
        let mut accepted_sum: u64 = 0;

        for q in &quantities {
            let req = corelib::models::ReservationRequest::new(*q);
            let outcome = svc.reserve(req).unwrap();
            if outcome.accepted {
                accepted_sum += *q as u64;
            }
        }

        prop_assert!(accepted_sum <= stock);
        prop_assert_eq!(svc.available().qty, stock - accepted_sum);
    }

    /// If `reserve(q)` returns `accepted = true` with `remaining = r`, the
    /// pre-state must have satisfied `total >= q` and `r == total - q`.
    #[test]
    fn no_phantom_acceptance(stock in 0u64..500, q in 1i64..500) {
        let svc = InventoryService::new(stock, Duration::from_secs(60));
        let pre = svc.available().qty;

        let outcome = svc.reserve(corelib::models::ReservationRequest::new(q)).unwrap();

        if outcome.accepted {
            prop_assert!(pre >= q as u64);
            prop_assert_eq!(outcome.remaining, pre - q as u64);
        } else {
            prop_assert_eq!(outcome.remaining, pre);
        }
    }

    /// Invalid requests never decrement `total`, however many are retried.
    #[test]
    fn invalid_quantity_never_mutates(stock in 0u64..500, bad_qty in -100i64..=0) {
        let svc = InventoryService::new(stock, Duration::from_secs(60));

        for _ in 0..10 {
            prop_assert!(svc.reserve(corelib::models::ReservationRequest::new(bad_qty)).is_err());
        }

        prop_assert_eq!(svc.available().qty, stock);
    }
}
