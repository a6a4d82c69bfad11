use geo::Point;
use thiserror::Error;

use crate::record::ApartmentRecord;

/// Banner-level conditions the hosting surface renders instead of a map.
/// Neither is fatal to the session; the interaction simply produces no map.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MapError {
    /// Configuration error: the base table has no latitude/longitude columns.
    #[error("the dataset must contain 'latitude' and 'longitude' columns to display the apartment map")]
    MissingCoordinates,
    /// Recoverable: no record survives the required-field drop.
    #[error("no data available for the selected filters to display on the scatter map")]
    NoData,
}

/// Per-point hover tooltip contents. Every field was required for the point
/// to render, so none is optional except the occupancy pair, which only the
/// occupancy-aware variant carries.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub total_floor: f64,
    pub num_of_rooms: f64,
    pub apartment_type: String,
    pub owner_name: String,
    pub tel: String,
    pub email: String,
    pub validated_type: String,
    pub is_customer: String,
    pub occupied_room_count: Option<f64>,
    /// Occupancy rate rendered as a percentage, e.g. "72.50%".
    pub occupancy: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub name: String,
    /// (longitude, latitude)
    pub position: Point<f64>,
    /// Color series key for the host's charting layer; the raw customer label.
    pub category: String,
    pub hover: HoverInfo,
}

/// The view-model handed to the charting layer: one point per renderable
/// record, centered at the median position of the set.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub points: Vec<MapPoint>,
    /// Median (longitude, latitude) of the rendered points.
    pub center: Point<f64>,
}

/// Builds the scatter-map view from a filtered view. Records missing any
/// required field are dropped; `MissingCoordinates` takes precedence over
/// `NoData` since it indicates a misconfigured dataset, not an over-narrow
/// filter.
pub fn render_map(
    records: &[ApartmentRecord],
    has_coordinate_columns: bool,
    occupancy_aware: bool,
) -> Result<MapView, MapError> {
    if !has_coordinate_columns {
        return Err(MapError::MissingCoordinates);
    }

    let points: Vec<MapPoint> = records
        .iter()
        .filter_map(|record| map_point(record, occupancy_aware))
        .collect();
    if points.is_empty() {
        return Err(MapError::NoData);
    }

    let center = Point::new(
        median(points.iter().map(|p| p.position.x())),
        median(points.iter().map(|p| p.position.y())),
    );
    tracing::debug!(points = points.len(), "rendered map view");
    Ok(MapView { points, center })
}

/// One record's point, or `None` when any required field is missing. The
/// occupancy-aware variant additionally requires the two occupancy fields.
fn map_point(record: &ApartmentRecord, occupancy_aware: bool) -> Option<MapPoint> {
    let (occupied_room_count, occupancy) = if occupancy_aware {
        let count = record.occupied_room_count?;
        let rate = record.occ_rate?;
        (Some(count), Some(format!("{:.2}%", rate * 100.0)))
    } else {
        (None, None)
    };

    Some(MapPoint {
        name: record.name.clone()?,
        position: Point::new(record.longitude?, record.latitude?),
        category: record.is_customer.clone()?,
        hover: HoverInfo {
            total_floor: record.total_floor?,
            num_of_rooms: record.num_of_rooms?,
            apartment_type: record.apartment_type.clone()?,
            owner_name: record.owner_name.clone()?,
            tel: record.tel.clone()?,
            email: record.email.clone()?,
            validated_type: record.validated_type.clone()?,
            is_customer: record.is_customer.clone()?,
            occupied_room_count,
            occupancy,
        },
    })
}

/// Median of a non-empty sequence; an even count averages the middle pair.
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
