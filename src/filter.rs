use ahash::AHashSet;

use crate::record::{ApartmentRecord, CustomerStatus};

/// One interaction's worth of user selections. An empty list means no
/// constraint on that field. Occupancy bounds are fractions in [0, 1],
/// inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub provinces: Vec<String>,
    pub districts: Vec<String>,
    pub sub_districts: Vec<String>,
    pub validated_types: Vec<String>,
    pub customer_statuses: Vec<String>,
    pub occupancy: Option<(f64, f64)>,
}

/// Membership test for one field: an empty selection constrains nothing, and a
/// record missing the field fails any active selection on it.
fn passes(value: &Option<String>, selection: &[String]) -> bool {
    selection.is_empty()
        || value
            .as_deref()
            .is_some_and(|v| selection.iter().any(|s| s == v))
}

impl FilterSelection {
    /// Applies the conjunction of every non-empty criterion, producing a fresh
    /// view. The base set is never mutated.
    pub fn apply(&self, records: &[ApartmentRecord]) -> Vec<ApartmentRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    /// The occupancy range only constrains safe-zone records:
    /// `(safeZone AND inRange) OR NOT safeZone`. A safe-zone record without a
    /// usable occ_rate fails closed while the range filter is active.
    pub fn matches(&self, record: &ApartmentRecord) -> bool {
        if !passes(&record.province, &self.provinces)
            || !passes(&record.district, &self.districts)
            || !passes(&record.sub_district, &self.sub_districts)
            || !passes(&record.validated_type, &self.validated_types)
            || !passes(&record.is_customer, &self.customer_statuses)
        {
            return false;
        }

        if let Some((min, max)) = self.occupancy {
            if record.customer_status() == Some(CustomerStatus::SafeZone) {
                match record.occ_rate {
                    Some(rate) => {
                        if !(min <= rate && rate <= max) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
        }
        true
    }
}

/// Distinct values in first-appearance order, nulls skipped.
fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for value in values.flatten() {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

pub fn province_options(records: &[ApartmentRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.province.as_deref()))
}

/// District options cascade from the province selection only; every other
/// active filter is ignored so that changing e.g. the customer selection never
/// invalidates the offered geography.
pub fn district_options(records: &[ApartmentRecord], provinces: &[String]) -> Vec<String> {
    distinct(
        records
            .iter()
            .filter(|r| passes(&r.province, provinces))
            .map(|r| r.district.as_deref()),
    )
}

/// Sub-district options cascade from the province and district selections.
pub fn sub_district_options(
    records: &[ApartmentRecord],
    provinces: &[String],
    districts: &[String],
) -> Vec<String> {
    distinct(
        records
            .iter()
            .filter(|r| passes(&r.province, provinces) && passes(&r.district, districts))
            .map(|r| r.sub_district.as_deref()),
    )
}

pub fn validated_type_options(records: &[ApartmentRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.validated_type.as_deref()))
}

pub fn customer_status_options(records: &[ApartmentRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.is_customer.as_deref()))
}
