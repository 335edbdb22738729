use crate::{
    prelude::*,
    quantity::time::Minutes,
    station::{PlanId, PricingPlan, StationTypeConfig},
    tariff::{PriceQuote, QuoteOptions, compute_hourly, find_best_plan},
};

/// Quote the request with the cheapest of the hourly rate and the best applicable plan.
///
/// Plans win ties. A forced plan skips the comparison altogether, unless it is unknown,
/// inactive, or too short for the request: then the automatic selection applies.
/// The discount, if any, is applied last.
#[instrument(skip_all, fields(station_type = %config.id(), requested = %requested))]
pub fn compute_quote<'a>(
    config: &'a StationTypeConfig,
    requested: Minutes,
    options: &QuoteOptions,
) -> PriceQuote<'a> {
    if !requested.is_positive() {
        debug!("nothing to charge for");
        return PriceQuote::none(config);
    }

    let quote = forced_plan(config, requested, options.plan_id)
        .map_or_else(|| cheapest(config, requested), |plan| PriceQuote::flat(config, plan));
    debug!(price = %quote.price, kind = %quote.tariff_kind, "selected");

    if options.apply_discount { quote.discounted(options.discount) } else { quote }
}

/// Same as [`compute_quote`] for a configuration that may have failed to load.
///
/// A missing configuration is reported as an error, never as a zero-price quote.
pub fn try_compute_quote<'a>(
    config: Option<&'a StationTypeConfig>,
    requested: Minutes,
    options: &QuoteOptions,
) -> Result<PriceQuote<'a>> {
    let config = config.context("station type configuration is missing")?;
    Ok(compute_quote(config, requested, options))
}

fn cheapest(config: &StationTypeConfig, requested: Minutes) -> PriceQuote<'_> {
    let hourly = compute_hourly(config, requested);
    let Some(plan) = find_best_plan(config, requested) else {
        return hourly;
    };
    let flat = PriceQuote::flat(config, plan);
    if !hourly.is_available() || flat.price <= hourly.price { flat } else { hourly }
}

fn forced_plan(
    config: &StationTypeConfig,
    requested: Minutes,
    plan_id: Option<PlanId>,
) -> Option<&PricingPlan> {
    let plan_id = plan_id?;
    let Some(plan) = config.plan(plan_id) else {
        debug!(%plan_id, "forced plan does not exist, falling back");
        return None;
    };
    if !plan.is_active() {
        debug!(%plan_id, "forced plan is inactive, falling back");
        return None;
    }
    if !plan.covers(requested) {
        debug!(%plan_id, capacity = %plan.capacity(), "forced plan is too short, falling back");
        return None;
    }
    Some(plan)
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::{
        quantity::{price::Price, ratios::Percent},
        tariff::{
            TariffKind,
            fixtures::{config, inactive_plan, plan},
        },
    };

    fn scenario() -> StationTypeConfig {
        config(dec!(15), vec![plan(1, 20, Some(45), dec!(10)), plan(2, 50, Some(70), dec!(15))])
    }

    #[test]
    fn test_scenario() {
        let config = scenario();
        let quote = compute_quote(&config, Minutes(40), &QuoteOptions::default());
        assert_eq!(quote.price, Price(dec!(10)));
        assert_eq!(quote.tariff_kind, TariffKind::FlatPlan);
        assert_eq!(quote.used_plan.map(PricingPlan::id), Some(PlanId(1)));
        assert_eq!(quote.billed_duration, Minutes(45));
        assert_eq!(quote.savings, Price::ZERO);
        assert_eq!(quote.currency.as_str(), "MAD");
    }

    #[test]
    fn test_best_of_selection() {
        let config = config(dec!(20), vec![plan(1, 50, Some(70), dec!(15))]);
        let quote = compute_quote(&config, Minutes(60), &QuoteOptions::default());
        assert_eq!(quote.price, Price(dec!(15.00)));
        assert_eq!(quote.tariff_kind, TariffKind::FlatPlan);
    }

    #[test]
    fn test_plan_preferred_on_tie() {
        let config = config(dec!(20), vec![plan(1, 30, Some(60), dec!(20))]);
        let quote = compute_quote(&config, Minutes(60), &QuoteOptions::default());
        assert_eq!(compute_hourly(&config, Minutes(60)).price, quote.price);
        assert_eq!(quote.tariff_kind, TariffKind::FlatPlan);
    }

    #[test]
    fn test_hourly_wins_when_cheaper() {
        let config = config(dec!(10), vec![plan(1, 50, Some(70), dec!(15))]);
        let quote = compute_quote(&config, Minutes(20), &QuoteOptions::default());
        assert_eq!(quote.tariff_kind, TariffKind::Hourly);
        assert_eq!(quote.billed_duration, Minutes(30));
        assert_eq!(quote.price, Price(dec!(5)));
        assert!(quote.used_plan.is_none());
    }

    #[test]
    fn test_hourly_without_applicable_plans() {
        let config = scenario();
        let quote = compute_quote(&config, Minutes(90), &QuoteOptions::default());
        assert_eq!(quote.tariff_kind, TariffKind::Hourly);
        assert_eq!(quote.price, Price(dec!(22.50)));
    }

    #[test]
    fn test_non_positive_request() {
        let config = scenario();
        let options = QuoteOptions::builder().plan_id(PlanId(1)).build();
        for requested in [Minutes(0), Minutes(-15)] {
            let quote = compute_quote(&config, requested, &options);
            assert_eq!(quote.tariff_kind, TariffKind::None);
            assert_eq!(quote.price, Price::ZERO);
        }
    }

    #[test]
    fn test_forced_plan_wins_even_when_dearer() {
        let config = scenario();
        let options = QuoteOptions::builder().plan_id(PlanId(2)).build();
        let quote = compute_quote(&config, Minutes(40), &options);
        assert_eq!(quote.used_plan.map(PricingPlan::id), Some(PlanId(2)));
        assert_eq!(quote.price, Price(dec!(15)));
    }

    #[test]
    fn test_forced_plan_beats_cheaper_hourly() {
        let config = config(dec!(10), vec![plan(1, 50, Some(70), dec!(15))]);
        let options = QuoteOptions::builder().plan_id(PlanId(1)).build();
        let quote = compute_quote(&config, Minutes(20), &options);
        assert_eq!(quote.tariff_kind, TariffKind::FlatPlan);
    }

    /// Inactive forced plans fall back to the automatic selection, without an error.
    #[test]
    fn test_forced_inactive_plan_falls_back() {
        let config = config(dec!(15), vec![inactive_plan(1, 60, dec!(1)), plan(2, 20, Some(45), dec!(10))]);
        let options = QuoteOptions::builder().plan_id(PlanId(1)).build();
        let quote = compute_quote(&config, Minutes(40), &options);
        assert_eq!(quote.used_plan.map(PricingPlan::id), Some(PlanId(2)));
    }

    /// Unknown forced plans fall back to the automatic selection, without an error.
    #[test]
    fn test_forced_unknown_plan_falls_back() {
        let config = scenario();
        let options = QuoteOptions::builder().plan_id(PlanId(42)).build();
        let quote = compute_quote(&config, Minutes(40), &options);
        assert_eq!(quote, compute_quote(&config, Minutes(40), &QuoteOptions::default()));
    }

    #[test]
    fn test_forced_short_plan_falls_back() {
        let config = scenario();
        let options = QuoteOptions::builder().plan_id(PlanId(1)).build();
        let quote = compute_quote(&config, Minutes(60), &options);
        assert_eq!(quote.used_plan.map(PricingPlan::id), Some(PlanId(2)));
    }

    #[test]
    fn test_discount() {
        let config = config(dec!(15), vec![]);
        let options = QuoteOptions::builder().apply_discount(true).discount(Percent(dec!(10))).build();
        let quote = compute_quote(&config, Minutes(40), &options);
        // 11.25 × 0.9 = 10.125
        assert_eq!(quote.price, Price(dec!(10.13)));
        assert_eq!(quote.savings, Price(dec!(1.12)));
    }

    #[test]
    fn test_discount_ignored_unless_applied() {
        let config = scenario();
        let options = QuoteOptions::builder().discount(Percent(dec!(50))).build();
        let quote = compute_quote(&config, Minutes(40), &options);
        assert_eq!(quote.price, Price(dec!(10)));
        assert_eq!(quote.savings, Price::ZERO);
    }

    #[test]
    fn test_discount_clamping() {
        let config = scenario();
        let quote = |discount| {
            let options = QuoteOptions::builder().apply_discount(true).discount(Percent(discount)).build();
            compute_quote(&config, Minutes(40), &options)
        };
        let full = quote(dec!(100));
        assert_eq!(quote(dec!(150)), full);
        assert_eq!(full.price, Price::ZERO);
        assert_eq!(full.savings, Price(dec!(10)));
        assert_eq!(quote(dec!(-10)).price, Price(dec!(10)));
    }

    #[test]
    fn test_idempotent() {
        let config = scenario();
        let options = QuoteOptions::builder().apply_discount(true).discount(Percent(dec!(7))).build();
        let first = compute_quote(&config, Minutes(40), &options);
        let second = compute_quote(&config, Minutes(40), &options);
        assert_eq!(first, second);
        assert_eq!(serde_json::to_string(&first).unwrap(), serde_json::to_string(&second).unwrap());
    }

    #[test]
    fn test_invariants() {
        let config = scenario();
        for minutes in -10..=200 {
            let requested = Minutes(minutes);
            let quote = compute_quote(&config, requested, &QuoteOptions::default());
            assert!(quote.price >= Price::ZERO);
            match quote.tariff_kind {
                TariffKind::Hourly => assert!(quote.billed_duration >= requested),
                TariffKind::FlatPlan => assert!(quote.used_plan.unwrap().covers(requested)),
                TariffKind::None => assert!(!requested.is_positive()),
            }
        }
    }

    #[test]
    fn test_try_compute_quote() {
        let config = scenario();
        assert!(try_compute_quote(None, Minutes(40), &QuoteOptions::default()).is_err());
        let quote = try_compute_quote(Some(&config), Minutes(40), &QuoteOptions::default()).unwrap();
        assert_eq!(quote.price, Price(dec!(10)));
    }

    #[test]
    fn test_out_of_range_request() {
        let hourly_only = config(dec!(20), vec![]);
        let quote = compute_quote(&hourly_only, Minutes(i64::MAX - 1), &QuoteOptions::default());
        assert_eq!(quote.tariff_kind, TariffKind::None);
        assert_eq!(quote.price, Price::ZERO);

        // An unbounded plan still covers it:
        let with_plan = config(dec!(20), vec![plan(1, i64::MAX, None, dec!(99))]);
        let quote = compute_quote(&with_plan, Minutes(i64::MAX - 1), &QuoteOptions::default());
        assert_eq!(quote.tariff_kind, TariffKind::FlatPlan);
        assert_eq!(quote.price, Price(dec!(99)));
    }
}
