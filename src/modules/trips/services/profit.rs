/// Net profit for a single trip.
///
/// Plain f64 arithmetic with no rounding, matching how amounts are stored.
/// Applied identically on create and update; the stored `net_profit` column
/// is never taken from the client.
pub fn net_profit(amount_received: f64, fees: f64, fuel_cost: f64) -> f64 {
    amount_received - fees - fuel_cost
}
