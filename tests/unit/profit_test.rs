// Property-based tests for per-trip profit computation.
//
// net_profit must equal amount_received - fees - fuel_cost exactly, with
// no rounding applied.

use proptest::prelude::*;
use riderwatch::trips::services::profit::net_profit;

proptest! {
    #[test]
    fn profit_matches_definition(
        amount in 0.0f64..1_000_000.0,
        fees in 0.0f64..100_000.0,
        fuel in 0.0f64..100_000.0
    ) {
        prop_assert_eq!(net_profit(amount, fees, fuel), amount - fees - fuel);
    }

    #[test]
    fn profit_is_deterministic(
        amount in 0.0f64..1_000_000.0,
        fees in 0.0f64..100_000.0,
        fuel in 0.0f64..100_000.0
    ) {
        prop_assert_eq!(net_profit(amount, fees, fuel), net_profit(amount, fees, fuel));
    }

    #[test]
    fn zero_costs_return_amount(amount in 0.0f64..1_000_000.0) {
        prop_assert_eq!(net_profit(amount, 0.0, 0.0), amount);
    }

    #[test]
    fn profit_never_exceeds_amount(
        amount in 0.0f64..1_000_000.0,
        fees in 0.0f64..100_000.0,
        fuel in 0.0f64..100_000.0
    ) {
        prop_assert!(net_profit(amount, fees, fuel) <= amount);
    }
}

#[test]
fn profit_can_go_negative() {
    assert_eq!(net_profit(100.0, 80.0, 50.0), -30.0);
}
