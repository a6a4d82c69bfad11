use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashSet;
use anyhow::{Context, Result};
use serde_json::Value;

/// One sub-district boundary feature, reduced to the attributes the dashboard
/// joins on. Names are the English romanizations carried by the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoFeature {
    pub sub_district: String,
    pub district: String,
    pub province: String,
}

impl GeoFeature {
    /// Derived join key: `"subDistrict, district, province"`. Must stay
    /// byte-for-byte consistent with [`crate::record::ApartmentRecord::address_key`].
    pub fn address(&self) -> String {
        format!("{}, {}, {}", self.sub_district, self.district, self.province)
    }
}

/// Reads sub-district features from a GeoJSON FeatureCollection at `path`.
pub fn read_geo_features(path: &Path) -> Result<Vec<GeoFeature>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open geojson: {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse geojson: {}", path.display()))?;
    let features = features_from_value(&value);
    tracing::info!(features = features.len(), "loaded sub-district boundaries");
    Ok(features)
}

/// Extracts features from a parsed GeoJSON value. Each feature's `properties`
/// must carry `tam_en` (sub-district), `amp_en` (district) and `pro_en`
/// (province); features missing any of the three are skipped.
pub fn features_from_value(value: &Value) -> Vec<GeoFeature> {
    let mut features = Vec::new();
    if let Some(list) = value["features"].as_array() {
        for feature in list {
            let props = &feature["properties"];
            match (
                props["tam_en"].as_str(),
                props["amp_en"].as_str(),
                props["pro_en"].as_str(),
            ) {
                (Some(tam), Some(amp), Some(pro)) => features.push(GeoFeature {
                    sub_district: tam.to_string(),
                    district: amp.to_string(),
                    province: pro.to_string(),
                }),
                _ => tracing::debug!("skipping feature without tam_en/amp_en/pro_en"),
            }
        }
    }
    features
}

/// Addresses of the features whose province appears in `provinces`, in feature
/// order. Duplicate addresses are preserved: the reconciliation join emits one
/// row per boundary entry, so collapsing them would change its cardinality.
/// Recomputed whenever the filtered view's provinces change.
pub fn boundary_addresses(features: &[GeoFeature], provinces: &AHashSet<String>) -> Vec<String> {
    features
        .iter()
        .filter(|feature| provinces.contains(&feature.province))
        .map(GeoFeature::address)
        .collect()
}
