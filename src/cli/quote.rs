use clap::Parser;

use crate::{
    catalog::Catalog,
    fmt::FormattedPercentage,
    prelude::*,
    quantity::{ratios::Percent, time::Minutes},
    station::{PlanId, StationTypeId},
    tariff::{QuoteOptions, try_compute_quote},
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(long, env = "STATION_TYPE")]
    station_type: StationTypeId,

    /// Requested session duration in minutes.
    #[clap(long, allow_negative_numbers = true)]
    minutes: Minutes,

    /// Force this plan instead of the cheapest option.
    #[clap(long = "plan")]
    plan_id: Option<PlanId>,

    /// Flat discount in percent, clamped into 0–100.
    #[clap(long = "discount-percent", allow_negative_numbers = true)]
    discount: Option<Percent>,

    /// Print the quote as JSON.
    #[clap(long)]
    json: bool,
}

impl QuoteArgs {
    #[instrument(skip_all, fields(station_type = %self.station_type))]
    pub fn run(self, catalog: &Catalog) -> Result {
        if let Some(discount) = self.discount {
            info!(discount = %FormattedPercentage(discount.clamped()), "applying the discount");
        }
        let options = QuoteOptions::builder()
            .maybe_plan_id(self.plan_id)
            .apply_discount(self.discount.is_some())
            .discount(self.discount.unwrap_or_default())
            .build();
        let quote = try_compute_quote(catalog.find(&self.station_type), self.minutes, &options)
            .with_context(|| format!("failed to quote `{}`", self.station_type))?;
        if !quote.is_available() {
            warn!(minutes = %self.minutes, "price unavailable for the requested duration");
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        } else {
            println!("{quote}");
        }
        Ok(())
    }
}
