use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    catalog::Catalog,
    fmt::{FormattedDuration, FormattedPrice},
    quantity::time::Minutes,
    station::{Currency, PricingPlan},
    tariff::PriceQuote,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn window(plan: &PricingPlan) -> String {
    match plan.max_duration() {
        Some(max_duration) => {
            format!("{}–{}", FormattedDuration(plan.min_duration()), FormattedDuration(max_duration))
        }
        None => format!("{}", FormattedDuration(plan.min_duration())),
    }
}

fn plan_name(plan: &PricingPlan) -> String {
    if plan.is_featured() { format!("★ {}", plan.name()) } else { plan.name().to_owned() }
}

/// Scenarios are expected sorted by price: the first one covering the request is highlighted.
pub fn build_scenarios_table(scenarios: &[PriceQuote], requested: Minutes) -> Table {
    let covers_request =
        |quote: &PriceQuote| quote.used_plan.is_none_or(|plan| plan.covers(requested));
    let best = scenarios.iter().position(covers_request);

    let mut table = new_table();
    table.set_header(vec!["Strategy", "Plan", "Window", "Billed", "Price", "Covers"]);
    for (index, quote) in scenarios.iter().enumerate() {
        let covers = covers_request(quote);
        let color = if Some(index) == best {
            Color::Green
        } else if covers {
            Color::Reset
        } else {
            Color::DarkGrey
        };
        table.add_row(vec![
            Cell::new(quote.tariff_kind).fg(color),
            Cell::new(quote.used_plan.map(plan_name).unwrap_or_default()),
            Cell::new(quote.used_plan.map(window).unwrap_or_default())
                .add_attribute(Attribute::Dim),
            Cell::new(FormattedDuration(quote.billed_duration)).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPrice(quote.price, quote.currency))
                .set_alignment(CellAlignment::Right)
                .fg(color),
            Cell::new(if covers { "yes" } else { "no" }).fg(if covers { Color::Green } else { Color::Red }),
        ]);
    }
    table
}

pub fn build_plans_table(plans: &[&PricingPlan], currency: &Currency) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Window", "Capacity", "Price", "Active"]);
    for plan in plans {
        table.add_row(vec![
            Cell::new(plan.id()).add_attribute(Attribute::Dim),
            Cell::new(plan_name(plan)).fg(if plan.is_featured() { Color::Yellow } else { Color::Reset }),
            Cell::new(window(plan)),
            Cell::new(FormattedDuration(plan.capacity())).set_alignment(CellAlignment::Right),
            Cell::new(FormattedPrice(plan.price(), currency)).set_alignment(CellAlignment::Right),
            Cell::new(if plan.is_active() { "yes" } else { "no" })
                .fg(if plan.is_active() { Color::Green } else { Color::Red }),
        ]);
    }
    table
}

pub fn build_catalog_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Station type", "Hourly rate", "Interval", "Plans", "Active"]);
    for config in catalog.iter() {
        table.add_row(vec![
            Cell::new(config.id()),
            Cell::new(format!("{} {}", config.hourly_base_rate(), config.currency()))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedDuration(config.billing_interval())).set_alignment(CellAlignment::Right),
            Cell::new(config.plans().len()).set_alignment(CellAlignment::Right),
            Cell::new(config.active_plans().count()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
