use std::path::Path;

use ahash::AHashSet;
use anyhow::Result;

use crate::dataset::Dataset;
use crate::filter::{self, FilterSelection};
use crate::geo::{self, GeoFeature};
use crate::map::{self, MapError, MapView};
use crate::metrics::SummaryMetrics;
use crate::reconcile::{self, ReconciledRow};
use crate::record::ApartmentRecord;

/// Everything a session loads once and never mutates. Each interaction derives
/// fresh views from it; nothing is cached between interactions.
#[derive(Debug, Clone)]
pub struct SessionContext {
    dataset: Dataset,
    features: Vec<GeoFeature>,
    /// Feature flag unifying the plain and occupancy-aware dashboard variants:
    /// enables the occupancy range filter and widens the map's required fields.
    occupancy_aware: bool,
}

/// The option lists offered for the next interaction. Geographic lists
/// cascade: finer levels are restricted by the coarser selections already
/// made, irrespective of any other active filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub provinces: Vec<String>,
    pub districts: Vec<String>,
    pub sub_districts: Vec<String>,
    pub validated_types: Vec<String>,
    pub customer_statuses: Vec<String>,
}

/// The derived state of one interaction, discarded after rendering.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub filtered: Vec<ApartmentRecord>,
    pub options: FilterOptions,
    pub metrics: SummaryMetrics,
    pub boundary_addresses: Vec<String>,
    pub reconciled: Vec<ReconciledRow>,
    pub map: Result<MapView, MapError>,
}

impl SessionContext {
    pub fn new(dataset: Dataset, features: Vec<GeoFeature>, occupancy_aware: bool) -> Self {
        Self { dataset, features, occupancy_aware }
    }

    pub fn load(dataset_path: &Path, geojson_path: &Path, occupancy_aware: bool) -> Result<Self> {
        let dataset = Dataset::load(dataset_path)?;
        let features = geo::read_geo_features(geojson_path)?;
        tracing::info!(occupancy_aware, "session ready");
        Ok(Self::new(dataset, features, occupancy_aware))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    pub fn occupancy_aware(&self) -> bool {
        self.occupancy_aware
    }

    /// Runs one full recomputation for a selection: filtered view, cascading
    /// option lists, summary metrics, the province-restricted boundary address
    /// list, the reconciled join, and the map view.
    pub fn interact(&self, selection: &FilterSelection) -> Snapshot {
        let records = &self.dataset.records;
        let selection = self.effective_selection(selection);
        let filtered = selection.apply(records);
        tracing::debug!(base = records.len(), filtered = filtered.len(), "applied filters");

        let options = FilterOptions {
            provinces: filter::province_options(records),
            districts: filter::district_options(records, &selection.provinces),
            sub_districts: filter::sub_district_options(
                records,
                &selection.provinces,
                &selection.districts,
            ),
            validated_types: filter::validated_type_options(records),
            customer_statuses: filter::customer_status_options(records),
        };

        let provinces_in_view: AHashSet<String> =
            filtered.iter().filter_map(|r| r.province.clone()).collect();
        let boundary_addresses = geo::boundary_addresses(&self.features, &provinces_in_view);
        // The join runs against the full table; only the boundary side is
        // restricted to the filtered view's provinces.
        let reconciled = reconcile::reconcile(&boundary_addresses, records);

        let metrics = SummaryMetrics::compute(&filtered);
        let map = map::render_map(&filtered, self.dataset.has_coordinates, self.occupancy_aware);
        if matches!(map, Err(MapError::NoData)) {
            tracing::warn!("no records survive the required-field drop for the current filters");
        }

        Snapshot { filtered, options, metrics, boundary_addresses, reconciled, map }
    }

    /// The occupancy range only exists in the occupancy-aware variant; it is
    /// ignored otherwise rather than rejected.
    fn effective_selection(&self, selection: &FilterSelection) -> FilterSelection {
        let mut selection = selection.clone();
        if !self.occupancy_aware {
            selection.occupancy = None;
        }
        selection
    }
}
