//! Station-type catalog, as exported from the back office.
//!
//! Records are validated and normalised here, so the tariff engine only ever sees
//! well-formed [`StationTypeConfig`]s. Plans exported with the legacy single
//! `duration_minutes` field become plans with that minimum duration and no maximum.

use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::Deserialize;

use crate::{
    prelude::*,
    quantity::{price::Price, rate::HourlyRate, time::Minutes},
    station::{Currency, PlanId, PricingPlan, StationTypeConfig, StationTypeId},
};

pub struct Catalog(BTreeMap<StationTypeId, StationTypeConfig>);

impl Catalog {
    /// Read the catalog file: JSON for `.json` files, TOML otherwise.
    #[instrument(name = "Reading the catalog…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let catalog = if path.extension().is_some_and(|extension| extension == "json") {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
        .with_context(|| format!("invalid catalog `{}`", path.display()))?;
        info!(n_station_types = catalog.len(), "loaded");
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::try_from_file(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Self::try_from_file(serde_json::from_str(contents)?)
    }

    fn try_from_file(file: CatalogFile) -> Result<Self> {
        let mut station_types = BTreeMap::new();
        for record in file.station_types {
            let config = record.try_into_config()?;
            ensure!(
                !station_types.contains_key(config.id()),
                "station type `{}` is defined more than once",
                config.id(),
            );
            station_types.insert(config.id().clone(), config);
        }
        Ok(Self(station_types))
    }

    pub fn find(&self, id: &StationTypeId) -> Option<&StationTypeConfig> {
        self.0.get(id)
    }

    pub fn get(&self, id: &StationTypeId) -> Result<&StationTypeConfig> {
        self.find(id).with_context(|| format!("unknown station type `{id}`"))
    }

    /// Station types ordered by their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = &StationTypeConfig> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "station_type", alias = "station_types")]
    station_types: Vec<StationTypeRecord>,
}

#[derive(Deserialize)]
struct StationTypeRecord {
    id: StationTypeId,

    hourly_base_rate: HourlyRate,

    #[serde(default, rename = "billing_interval_minutes")]
    billing_interval: Option<Minutes>,

    #[serde(default)]
    currency: Option<Currency>,

    #[serde(default, rename = "plan", alias = "plans")]
    plans: Vec<PlanRecord>,
}

impl StationTypeRecord {
    fn try_into_config(self) -> Result<StationTypeConfig> {
        let plans = self
            .plans
            .into_iter()
            .map(PlanRecord::try_into_plan)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("station type `{}`", self.id))?;
        StationTypeConfig::builder()
            .id(self.id)
            .hourly_base_rate(self.hourly_base_rate)
            .maybe_billing_interval(self.billing_interval)
            .maybe_currency(self.currency)
            .plans(plans)
            .try_build()
    }
}

#[derive(Deserialize)]
struct PlanRecord {
    id: PlanId,

    name: String,

    #[serde(default, rename = "min_duration_minutes")]
    min_duration: Option<Minutes>,

    #[serde(default, rename = "max_duration_minutes")]
    max_duration: Option<Minutes>,

    /// Legacy single duration.
    #[serde(default, rename = "duration_minutes")]
    duration: Option<Minutes>,

    price: Price,

    #[serde(default)]
    is_active: Option<bool>,

    #[serde(default)]
    is_featured: Option<bool>,
}

impl PlanRecord {
    fn try_into_plan(self) -> Result<PricingPlan> {
        let min_duration = match (self.min_duration, self.duration) {
            (Some(min_duration), legacy_duration) => {
                if legacy_duration.is_some() {
                    warn!(plan_id = %self.id, "both the window and the legacy duration are set, using the window");
                }
                min_duration
            }
            (None, Some(legacy_duration)) => {
                debug!(plan_id = %self.id, %legacy_duration, "normalizing the legacy duration");
                legacy_duration
            }
            (None, None) => {
                bail!("plan #{}: neither `min_duration_minutes` nor `duration_minutes` is set", self.id)
            }
        };
        PricingPlan::builder()
            .id(self.id)
            .name(self.name)
            .min_duration(min_duration)
            .maybe_max_duration(self.max_duration)
            .price(self.price)
            .maybe_is_active(self.is_active)
            .maybe_is_featured(self.is_featured)
            .try_build()
    }
}
