use rust_decimal::Decimal;

use crate::{
    quantity::{price::Price, rate::HourlyRate, time::Minutes},
    station::{PlanId, PricingPlan, StationTypeConfig},
};

pub fn plan(id: u32, min_duration: i64, max_duration: Option<i64>, price: Decimal) -> PricingPlan {
    PricingPlan::builder()
        .id(PlanId(id))
        .name(format!("plan #{id}"))
        .min_duration(Minutes(min_duration))
        .maybe_max_duration(max_duration.map(Minutes))
        .price(Price(price))
        .try_build()
        .unwrap()
}

pub fn inactive_plan(id: u32, min_duration: i64, price: Decimal) -> PricingPlan {
    PricingPlan::builder()
        .id(PlanId(id))
        .name(format!("retired #{id}"))
        .min_duration(Minutes(min_duration))
        .price(Price(price))
        .is_active(false)
        .try_build()
        .unwrap()
}

pub fn config(hourly_base_rate: Decimal, plans: Vec<PricingPlan>) -> StationTypeConfig {
    StationTypeConfig::builder()
        .id("ps5")
        .hourly_base_rate(HourlyRate(hourly_base_rate))
        .billing_interval(Minutes(15))
        .plans(plans)
        .try_build()
        .unwrap()
}
