use clap::Parser;

use crate::{
    catalog::Catalog,
    prelude::*,
    quantity::time::Minutes,
    station::StationTypeId,
    tables::build_scenarios_table,
    tariff::simulate_scenarios,
};

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(long, env = "STATION_TYPE")]
    station_type: StationTypeId,

    /// Requested session duration in minutes.
    #[clap(long)]
    minutes: Minutes,
}

impl SimulateArgs {
    pub fn run(self, catalog: &Catalog) -> Result {
        let config = catalog.get(&self.station_type)?;
        let scenarios = simulate_scenarios(config, self.minutes);
        ensure!(!scenarios.is_empty(), "nothing to simulate for {}", self.minutes);
        println!("{}", build_scenarios_table(&scenarios, self.minutes));
        Ok(())
    }
}
