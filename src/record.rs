use serde::Serialize;

/// Business relationship and flood-exposure status of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerStatus {
    /// Customer inside the flooded area.
    WatchedList,
    /// Customer outside the flooded area; the only status the occupancy
    /// filter applies to.
    SafeZone,
    NotCustomer,
}

impl CustomerStatus {
    /// The exact labels used by the dataset's `isCustomer` column.
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::WatchedList => "isCustomer (watched list)",
            CustomerStatus::SafeZone => "isCustomer (safe zone)",
            CustomerStatus::NotCustomer => "notCustomer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "isCustomer (watched list)" => Some(CustomerStatus::WatchedList),
            "isCustomer (safe zone)" => Some(CustomerStatus::SafeZone),
            "notCustomer" => Some(CustomerStatus::NotCustomer),
            _ => None,
        }
    }
}

/// One row of the apartment dataset. Every field is optional: the loader keeps
/// sparse rows and each consumer decides which fields it requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApartmentRecord {
    pub name: Option<String>,
    pub owner_name: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub sub_district: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_floor: Option<f64>,
    pub num_of_rooms: Option<f64>,
    pub apartment_type: Option<String>,
    pub occupied_room_count: Option<f64>,
    /// Fraction of rooms occupied, in [0, 1].
    pub occ_rate: Option<f64>,
    pub validated_type: Option<String>,
    /// Raw `isCustomer` label; see [`CustomerStatus`] for the known values.
    pub is_customer: Option<String>,
}

impl ApartmentRecord {
    pub fn customer_status(&self) -> Option<CustomerStatus> {
        self.is_customer.as_deref().and_then(CustomerStatus::from_label)
    }

    /// Join key against the boundary index: `"subDistrict, district, province"`.
    /// Must stay byte-for-byte consistent with [`crate::geo::GeoFeature::address`].
    pub fn address_key(&self) -> Option<String> {
        match (&self.sub_district, &self.district, &self.province) {
            (Some(sub), Some(dist), Some(prov)) => Some(format!("{sub}, {dist}, {prov}")),
            _ => None,
        }
    }
}
