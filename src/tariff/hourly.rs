use crate::{
    prelude::*,
    quantity::{price::Price, time::Minutes},
    station::StationTypeConfig,
    tariff::{PriceQuote, TariffKind},
};

/// Price the request at the hourly base rate.
///
/// The requested duration is rounded up to the billing interval, and the price is rounded
/// to cents only once, at the very end. Non-positive requests, and requests too large
/// to be priced, yield a zero-price [`TariffKind::None`] quote.
pub fn compute_hourly(config: &StationTypeConfig, requested: Minutes) -> PriceQuote<'_> {
    if !requested.is_positive() {
        return PriceQuote::none(config);
    }
    let Some(billed_duration) = requested.ceil_to_multiple_of(config.billing_interval()) else {
        warn!(%requested, "the billed duration is out of range");
        return PriceQuote::none(config);
    };
    let Some(price) = config.hourly_base_rate().checked_mul(billed_duration) else {
        warn!(%billed_duration, "the hourly price is out of range");
        return PriceQuote::none(config);
    };
    PriceQuote {
        price: price.round_to_cents(),
        billed_duration,
        tariff_kind: TariffKind::Hourly,
        used_plan: None,
        savings: Price::ZERO,
        currency: config.currency(),
    }
}
