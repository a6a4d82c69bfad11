use std::path::PathBuf;

use crate::filter::FilterSelection;

/// Flood-area dashboard CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "floodwatch", version, about)]
pub struct Cli {
    /// Apartment dataset CSV
    #[arg(default_value = "dataset/apartment-dataset.csv")]
    pub dataset: PathBuf,

    /// Sub-district boundary GeoJSON
    #[arg(long, default_value = "subdistricts.geojson", value_hint = clap::ValueHint::FilePath)]
    pub geojson: PathBuf,

    /// Enable the occupancy-aware variant (range filter + tooltip fields)
    #[arg(long)]
    pub occupancy: bool,

    /// Restrict to a province (repeatable)
    #[arg(long = "province")]
    pub provinces: Vec<String>,

    /// Restrict to a district (repeatable)
    #[arg(long = "district")]
    pub districts: Vec<String>,

    /// Restrict to a sub-district (repeatable)
    #[arg(long = "sub-district")]
    pub sub_districts: Vec<String>,

    /// Restrict to a validated type (repeatable)
    #[arg(long = "validated-type")]
    pub validated_types: Vec<String>,

    /// Restrict to an isCustomer label (repeatable)
    #[arg(long = "customer")]
    pub customer_statuses: Vec<String>,

    /// Occupancy lower bound in percent, 0-100 (occupancy-aware only)
    #[arg(long)]
    pub occ_min: Option<f64>,

    /// Occupancy upper bound in percent, 0-100 (occupancy-aware only)
    #[arg(long)]
    pub occ_max: Option<f64>,

    /// Print the interaction summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Converts the argument schema into a filter selection; percent bounds
    /// become the fraction pair the filter engine expects.
    pub fn selection(&self) -> FilterSelection {
        let occupancy = match (self.occ_min, self.occ_max) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0.0) / 100.0, max.unwrap_or(100.0) / 100.0)),
        };
        FilterSelection {
            provinces: self.provinces.clone(),
            districts: self.districts.clone(),
            sub_districts: self.sub_districts.clone(),
            validated_types: self.validated_types.clone(),
            customer_statuses: self.customer_statuses.clone(),
            occupancy,
        }
    }
}
