//! Station types and their pricing plans.
//!
//! Both are validated once, on construction, so that the tariff engine can trust them.

use std::fmt::{Display, Formatter};

use bon::bon;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    prelude::*,
    quantity::{price::Price, rate::HourlyRate, time::Minutes},
};

#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct StationTypeId(String);

impl From<&str> for StationTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct PlanId(pub u32);

/// Currency code, for display only.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(String::from("MAD"))
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed-price package for sessions up to the plan's capacity.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PricingPlan {
    id: PlanId,
    name: String,

    #[serde(rename = "min_duration_minutes")]
    min_duration: Minutes,

    #[serde(rename = "max_duration_minutes", skip_serializing_if = "Option::is_none")]
    max_duration: Option<Minutes>,

    #[serde_as(as = "DisplayFromStr")]
    price: Price,

    is_active: bool,

    /// Display hint, irrelevant to the calculation.
    is_featured: bool,
}

#[bon]
impl PricingPlan {
    #[builder(finish_fn = try_build)]
    pub fn new(
        id: PlanId,
        #[builder(into)] name: String,
        min_duration: Minutes,
        max_duration: Option<Minutes>,
        price: Price,
        #[builder(default = true)] is_active: bool,
        #[builder(default)] is_featured: bool,
    ) -> Result<Self> {
        ensure!(
            min_duration.is_positive(),
            "plan #{id}: minimum duration must be positive, got {min_duration}",
        );
        if let Some(max_duration) = max_duration {
            ensure!(
                max_duration > min_duration,
                "plan #{id}: maximum duration ({max_duration}) must exceed the minimum ({min_duration})",
            );
        }
        ensure!(!price.is_negative(), "plan #{id}: price must not be negative, got {price}");
        Ok(Self { id, name, min_duration, max_duration, price, is_active, is_featured })
    }
}

impl PricingPlan {
    pub const fn id(&self) -> PlanId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn min_duration(&self) -> Minutes {
        self.min_duration
    }

    pub const fn max_duration(&self) -> Option<Minutes> {
        self.max_duration
    }

    pub const fn price(&self) -> Price {
        self.price
    }

    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    pub const fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Longest session the plan accommodates: the maximum duration when bounded,
    /// and the minimum duration otherwise.
    pub fn capacity(&self) -> Minutes {
        self.max_duration.unwrap_or(self.min_duration)
    }

    pub fn covers(&self, requested: Minutes) -> bool {
        self.capacity() >= requested
    }
}

/// Pricing configuration of a station type, as fetched from the persistence layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StationTypeConfig {
    id: StationTypeId,
    hourly_base_rate: HourlyRate,
    billing_interval: Minutes,
    currency: Currency,

    /// Order only matters for display tie-breaks.
    plans: Vec<PricingPlan>,
}

#[bon]
impl StationTypeConfig {
    #[builder(finish_fn = try_build)]
    pub fn new(
        #[builder(into)] id: StationTypeId,
        hourly_base_rate: HourlyRate,
        #[builder(default = StationTypeConfig::DEFAULT_BILLING_INTERVAL)] billing_interval: Minutes,
        #[builder(default)] currency: Currency,
        #[builder(default)] plans: Vec<PricingPlan>,
    ) -> Result<Self> {
        ensure!(
            hourly_base_rate >= HourlyRate::ZERO,
            "station type `{id}`: hourly base rate must not be negative, got {hourly_base_rate}",
        );
        ensure!(
            billing_interval.is_positive(),
            "station type `{id}`: billing interval must be positive, got {billing_interval}",
        );
        if let Some(plan_id) = plans.iter().map(PricingPlan::id).duplicates().next() {
            bail!("station type `{id}`: plan #{plan_id} is defined more than once");
        }
        Ok(Self { id, hourly_base_rate, billing_interval, currency, plans })
    }
}

impl StationTypeConfig {
    pub const DEFAULT_BILLING_INTERVAL: Minutes = Minutes(15);

    pub const fn id(&self) -> &StationTypeId {
        &self.id
    }

    pub const fn hourly_base_rate(&self) -> HourlyRate {
        self.hourly_base_rate
    }

    pub const fn billing_interval(&self) -> Minutes {
        self.billing_interval
    }

    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn plans(&self) -> &[PricingPlan] {
        &self.plans
    }

    /// Active plans in configuration order.
    pub fn active_plans(&self) -> impl Iterator<Item = &PricingPlan> {
        self.plans.iter().filter(|plan| plan.is_active())
    }

    pub fn plan(&self, id: PlanId) -> Option<&PricingPlan> {
        self.plans.iter().find(|plan| plan.id() == id)
    }
}
