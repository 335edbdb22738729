mod check;
mod plans;
mod quote;
mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    catalog::Catalog,
    cli::{check::CheckArgs, plans::PlansArgs, quote::QuoteArgs, simulate::SimulateArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        let catalog = self.catalog.load()?;
        match self.command {
            Command::Quote(args) => args.run(&catalog),
            Command::Simulate(args) => args.run(&catalog),
            Command::Plans(args) => args.run(&catalog),
            Command::Check(args) => args.run(&catalog),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Quote a session: the cheapest of the hourly rate and the applicable plans.
    Quote(QuoteArgs),

    /// Compare every pricing strategy for a session.
    Simulate(SimulateArgs),

    /// List the pricing plans of a station type.
    Plans(PlansArgs),

    /// Validate the catalog and summarise it.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Station-type catalog: TOML, or JSON for `.json` files.
    #[clap(long = "catalog", env = "TARIF_CATALOG_PATH", default_value = "catalog.toml")]
    pub path: PathBuf,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        Catalog::read_from(&self.path)
    }
}
