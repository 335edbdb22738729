//! Tariff resolution: hourly billing, flat-rate plans, and the choice between them.
//!
//! Every function here is pure: it borrows an already validated [`StationTypeConfig`]
//! and never mutates it, so concurrent callers need no synchronisation.
//!
//! [`StationTypeConfig`]: crate::station::StationTypeConfig

#[cfg(test)]
pub(crate) mod fixtures;
mod hourly;
mod matcher;
mod quote;
mod selector;
mod simulator;

pub use self::{
    hourly::compute_hourly,
    matcher::{find_applicable_plans, find_best_plan},
    quote::{PriceQuote, QuoteOptions, TariffKind},
    selector::{compute_quote, try_compute_quote},
    simulator::simulate_scenarios,
};
