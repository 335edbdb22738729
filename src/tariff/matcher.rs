use itertools::Itertools;

use crate::{
    quantity::time::Minutes,
    station::{PricingPlan, StationTypeConfig},
};

/// Active plans whose capacity covers the request, cheapest first.
///
/// Ties on price go to the plan with the shorter minimum duration, being the closest in scope
/// to the request, and then to the configuration order. Non-positive requests match nothing.
pub fn find_applicable_plans(config: &StationTypeConfig, requested: Minutes) -> Vec<&PricingPlan> {
    rank(covering(config, requested))
}

/// The cheapest applicable plan, if any.
pub fn find_best_plan(config: &StationTypeConfig, requested: Minutes) -> Option<&PricingPlan> {
    find_applicable_plans(config, requested).into_iter().next()
}

fn covering(
    config: &StationTypeConfig,
    requested: Minutes,
) -> impl Iterator<Item = &PricingPlan> {
    config.active_plans().filter(move |plan| requested.is_positive() && plan.covers(requested))
}

fn rank<'a>(plans: impl IntoIterator<Item = &'a PricingPlan>) -> Vec<&'a PricingPlan> {
    plans.into_iter().sorted_by_key(|plan| (plan.price(), plan.min_duration())).collect()
}
