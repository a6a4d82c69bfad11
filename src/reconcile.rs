use ahash::AHashMap;

use crate::record::ApartmentRecord;

/// One row of the geographic display view: a boundary address joined against
/// the apartment table. A projection for display, not the authoritative
/// record set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledRow {
    pub address: String,
    /// The matched record's own sub-district, or the parsed fallback for
    /// addresses with no apartment data.
    pub sub_district: String,
    pub record: Option<ApartmentRecord>,
}

/// Left outer join of the boundary address list against the record set, keyed
/// on exact address-key equality. An address occurrence matching k records
/// yields k rows; an unmatched occurrence yields a single placeholder row.
/// Records whose address has no boundary counterpart are absent from this view.
pub fn reconcile(addresses: &[String], records: &[ApartmentRecord]) -> Vec<ReconciledRow> {
    let mut by_address: AHashMap<String, Vec<&ApartmentRecord>> = AHashMap::new();
    for record in records {
        if let Some(key) = record.address_key() {
            by_address.entry(key).or_default().push(record);
        }
    }

    let mut rows = Vec::with_capacity(addresses.len());
    for address in addresses {
        match by_address.get(address) {
            Some(matches) => {
                for record in matches {
                    rows.push(ReconciledRow {
                        address: address.clone(),
                        sub_district: record
                            .sub_district
                            .clone()
                            .unwrap_or_else(|| parse_sub_district(address)),
                        record: Some((*record).clone()),
                    });
                }
            }
            None => rows.push(ReconciledRow {
                address: address.clone(),
                sub_district: parse_sub_district(address),
                record: None,
            }),
        }
    }
    rows
}

/// Recovers a sub-district from an address: the text before the first comma,
/// trimmed.
fn parse_sub_district(address: &str) -> String {
    address.split(',').next().unwrap_or(address).trim().to_string()
}
