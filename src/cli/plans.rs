use clap::Parser;

use crate::{
    catalog::Catalog,
    prelude::*,
    quantity::time::Minutes,
    station::StationTypeId,
    tables::build_plans_table,
    tariff::find_applicable_plans,
};

#[derive(Parser)]
pub struct PlansArgs {
    #[clap(long, env = "STATION_TYPE")]
    station_type: StationTypeId,

    /// Only list the plans applicable to a session of this many minutes, cheapest first.
    #[clap(long)]
    minutes: Option<Minutes>,
}

impl PlansArgs {
    pub fn run(self, catalog: &Catalog) -> Result {
        let config = catalog.get(&self.station_type)?;
        let plans = match self.minutes {
            Some(minutes) => find_applicable_plans(config, minutes),
            None => config.plans().iter().collect(),
        };
        info!(n_plans = plans.len(), "listing");
        println!("{}", build_plans_table(&plans, config.currency()));
        Ok(())
    }
}
