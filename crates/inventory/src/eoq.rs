//! Economic Order Quantity.

use crate::product::DAYS_PER_YEAR;

/// Order batch size minimising the sum of ordering and holding cost.
///
/// - `demand_rate`: units consumed per day (annualised over [`DAYS_PER_YEAR`])
/// - `ordering_cost`: fixed cost per replenishment order
/// - `holding_cost_percent`: annual holding cost as a fraction of `unit_cost`
///
/// Returns `round(sqrt(2 * D * S / H))`. When the annual holding cost per unit is
/// zero there is no finite optimum and the result is `0`. Nonsensical inputs are
/// not rejected: a negative radicand yields NaN, which saturates to `0` on the
/// integer conversion.
pub fn compute_eoq(
    demand_rate: f64,
    ordering_cost: f64,
    holding_cost_percent: f64,
    unit_cost: f64,
) -> i64 {
    let annual_demand = demand_rate * DAYS_PER_YEAR;
    let holding_cost = holding_cost_percent * unit_cost;

    if holding_cost == 0.0 {
        return 0;
    }

    ((2.0 * annual_demand * ordering_cost) / holding_cost)
        .sqrt()
        .round() as i64
}
