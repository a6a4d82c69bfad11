use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::{
    frame::DataFrame,
    io::SerReader,
    prelude::{CsvReader, DataType, Float64Chunked, StringChunked},
};

use crate::record::ApartmentRecord;

/// Reads a CSV file from `path` into a Polars DataFrame.
pub fn read_from_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
    let df = CsvReader::new(file)
        .finish()
        .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;
    Ok(df)
}

/// Fetches a column as strings, or `None` when the column is absent.
fn string_col(df: &DataFrame, name: &str) -> Option<StringChunked> {
    df.column(name)
        .ok()
        .and_then(|col| col.cast(&DataType::String).ok())
        .and_then(|col| col.str().ok().cloned())
}

/// Fetches a column as floats, or `None` when the column is absent. String
/// columns are cast leniently: cells that don't parse come through as null.
fn float_col(df: &DataFrame, name: &str) -> Option<Float64Chunked> {
    df.column(name)
        .ok()
        .and_then(|col| col.cast(&DataType::Float64).ok())
        .and_then(|col| col.f64().ok().cloned())
}

/// Converts the loaded frame into typed records, column by column. Missing
/// columns yield `None` in every row rather than failing the load.
pub fn df_to_records(df: &DataFrame) -> Result<Vec<ApartmentRecord>> {
    let name = string_col(df, "name");
    let owner_name = string_col(df, "owner_name");
    let tel = string_col(df, "tel");
    let email = string_col(df, "email");
    let province = string_col(df, "province");
    let district = string_col(df, "district");
    let sub_district = string_col(df, "subDistrict");
    let latitude = float_col(df, "latitude");
    let longitude = float_col(df, "longitude");
    let total_floor = float_col(df, "totalFloor");
    let num_of_rooms = float_col(df, "numOfRooms");
    let apartment_type = string_col(df, "apartmentType");
    let occupied_room_count = float_col(df, "occupaidRoomCount");
    let occ_rate = float_col(df, "occRate");
    let validated_type = string_col(df, "validatedType");
    let is_customer = string_col(df, "isCustomer");

    let get_str = |col: &Option<StringChunked>, i: usize| {
        col.as_ref().and_then(|c| c.get(i)).map(|s| s.to_string())
    };
    let get_f64 = |col: &Option<Float64Chunked>, i: usize| col.as_ref().and_then(|c| c.get(i));

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(ApartmentRecord {
            name: get_str(&name, i),
            owner_name: get_str(&owner_name, i),
            tel: get_str(&tel, i),
            email: get_str(&email, i),
            province: get_str(&province, i),
            district: get_str(&district, i),
            sub_district: get_str(&sub_district, i),
            latitude: get_f64(&latitude, i),
            longitude: get_f64(&longitude, i),
            total_floor: get_f64(&total_floor, i),
            num_of_rooms: get_f64(&num_of_rooms, i),
            apartment_type: get_str(&apartment_type, i),
            occupied_room_count: get_f64(&occupied_room_count, i),
            occ_rate: get_f64(&occ_rate, i),
            validated_type: get_str(&validated_type, i),
            is_customer: get_str(&is_customer, i),
        });
    }
    Ok(records)
}

/// The immutable base table for a session.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<ApartmentRecord>,
    /// Whether the source table carried latitude/longitude columns at all.
    /// Their absence is a configuration error at render time, distinct from
    /// rows that merely lack values.
    pub has_coordinates: bool,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let df = read_from_csv(path)?;
        let has_coordinates = df.column("latitude").is_ok() && df.column("longitude").is_ok();
        let records = df_to_records(&df)?;
        tracing::info!(rows = records.len(), has_coordinates, "loaded apartment dataset");
        Ok(Self { records, has_coordinates })
    }

    /// Builds a dataset from already-typed records, e.g. when the host loads
    /// the table itself.
    pub fn from_records(records: Vec<ApartmentRecord>) -> Self {
        let has_coordinates = true;
        Self { records, has_coordinates }
    }
}
