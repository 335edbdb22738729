use std::iter::once;

use itertools::Itertools;

use crate::{
    prelude::*,
    quantity::time::Minutes,
    station::StationTypeConfig,
    tariff::{PriceQuote, compute_hourly},
};

/// Quote the request with every strategy: hourly, and each active plan.
///
/// Unlike the plan matcher, plans too short for the request are included. The quotes are sorted
/// by price, the hourly quote and then the configuration order going first on equal prices.
/// Non-positive requests yield no scenarios.
#[instrument(skip_all, fields(station_type = %config.id(), requested = %requested))]
pub fn simulate_scenarios(config: &StationTypeConfig, requested: Minutes) -> Vec<PriceQuote<'_>> {
    if !requested.is_positive() {
        return Vec::new();
    }
    let scenarios = once(compute_hourly(config, requested))
        .chain(config.active_plans().map(|plan| PriceQuote::flat(config, plan)))
        .sorted_by_key(|quote| quote.price)
        .collect_vec();
    debug!(n_scenarios = scenarios.len(), "simulated");
    scenarios
}
