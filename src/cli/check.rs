use clap::Parser;

use crate::{catalog::Catalog, prelude::*, tables::build_catalog_table};

#[derive(Parser)]
pub struct CheckArgs {
    /// Fail on an empty catalog.
    #[clap(long)]
    strict: bool,
}

impl CheckArgs {
    pub fn run(self, catalog: &Catalog) -> Result {
        if self.strict {
            ensure!(!catalog.is_empty(), "the catalog defines no station types");
        }
        println!("{}", build_catalog_table(catalog));
        info!("the catalog is valid");
        Ok(())
    }
}
