#![doc = "Floodwatch public API"]
mod cli;
mod dataset;
mod filter;
mod geo;
mod map;
mod metrics;
mod reconcile;
mod record;
mod session;

#[doc(inline)]
pub use record::{ApartmentRecord, CustomerStatus};

#[doc(inline)]
pub use dataset::{df_to_records, read_from_csv, Dataset};

#[doc(inline)]
pub use geo::{boundary_addresses, features_from_value, read_geo_features, GeoFeature};

#[doc(inline)]
pub use filter::{
    customer_status_options, district_options, province_options, sub_district_options,
    validated_type_options, FilterSelection,
};

#[doc(inline)]
pub use reconcile::{reconcile, ReconciledRow};

#[doc(inline)]
pub use metrics::{format_count, SummaryMetrics};

#[doc(inline)]
pub use map::{render_map, HoverInfo, MapError, MapPoint, MapView};

#[doc(inline)]
pub use session::{FilterOptions, SessionContext, Snapshot};

#[doc(inline)]
pub use cli::Cli;
