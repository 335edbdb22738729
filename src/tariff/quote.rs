use std::fmt::{Display, Formatter};

use bon::Builder;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    fmt::{FormattedDuration, FormattedPrice},
    quantity::{price::Price, ratios::Percent, time::Minutes},
    station::{Currency, PlanId, PricingPlan, StationTypeConfig},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TariffKind {
    /// Metered at the hourly base rate, rounded up to the billing interval.
    Hourly,

    /// Fixed price of a pricing plan.
    FlatPlan,

    /// No price could be derived for the request.
    None,
}

impl Display for TariffKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hourly => write!(f, "Hourly"),
            Self::FlatPlan => write!(f, "Flat plan"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Caller preferences for [`compute_quote`][crate::tariff::compute_quote].
#[derive(Copy, Clone, Debug, Default, Builder)]
pub struct QuoteOptions {
    /// Force this plan instead of picking the cheapest option.
    ///
    /// The forced plan is ignored, and the cheapest option picked instead, when it does not exist,
    /// is inactive, or its capacity is shorter than the requested duration.
    pub plan_id: Option<PlanId>,

    #[builder(default)]
    pub apply_discount: bool,

    /// Flat discount, clamped into `0..=100` when applied.
    #[builder(default)]
    pub discount: Percent,
}

/// Computed price and its metadata for a requested session duration.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PriceQuote<'a> {
    #[serde_as(as = "DisplayFromStr")]
    pub price: Price,

    #[serde(rename = "billed_duration_minutes")]
    pub billed_duration: Minutes,

    pub tariff_kind: TariffKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_plan: Option<&'a PricingPlan>,

    /// Undiscounted minus discounted price.
    #[serde_as(as = "DisplayFromStr")]
    pub savings: Price,

    pub currency: &'a Currency,
}

impl<'a> PriceQuote<'a> {
    /// Zero-price quote for requests nothing can be charged for.
    pub const fn none(config: &'a StationTypeConfig) -> Self {
        Self {
            price: Price::ZERO,
            billed_duration: Minutes::ZERO,
            tariff_kind: TariffKind::None,
            used_plan: None,
            savings: Price::ZERO,
            currency: config.currency(),
        }
    }

    /// Quote charging the plan's fixed price for its full capacity.
    pub fn flat(config: &'a StationTypeConfig, plan: &'a PricingPlan) -> Self {
        Self {
            price: plan.price().round_to_cents(),
            billed_duration: plan.capacity(),
            tariff_kind: TariffKind::FlatPlan,
            used_plan: Some(plan),
            savings: Price::ZERO,
            currency: config.currency(),
        }
    }

    /// Layer a flat percentage discount on top of the price.
    #[must_use]
    pub fn discounted(mut self, discount: Percent) -> Self {
        let undiscounted = self.price;
        self.price = (undiscounted * (Decimal::ONE - discount.clamped().to_ratio())).round_to_cents();
        self.savings = undiscounted - self.price;
        self
    }

    pub fn is_available(&self) -> bool {
        self.tariff_kind != TariffKind::None
    }
}

impl Display for PriceQuote<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FormattedPrice(self.price, self.currency))?;
        match (self.tariff_kind, self.used_plan) {
            (TariffKind::FlatPlan, Some(plan)) => {
                write!(f, " (plan «{}», {})", plan.name(), FormattedDuration(self.billed_duration))?;
            }
            (TariffKind::Hourly, _) => {
                write!(f, " (hourly, {})", FormattedDuration(self.billed_duration))?;
            }
            _ => write!(f, " (unavailable)")?,
        }
        if self.savings > Price::ZERO {
            write!(f, ", saving {}", FormattedPrice(self.savings, self.currency))?;
        }
        Ok(())
    }
}
