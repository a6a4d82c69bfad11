#![allow(dead_code)]

use floodwatch::ApartmentRecord;

/// A fully-populated record; tests blank out the fields they care about.
pub fn record(
    name: &str,
    province: &str,
    district: &str,
    sub_district: &str,
    status: &str,
) -> ApartmentRecord {
    ApartmentRecord {
        name: Some(name.to_string()),
        owner_name: Some(format!("{name} Co.")),
        tel: Some("812345678".into()),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        province: Some(province.to_string()),
        district: Some(district.to_string()),
        sub_district: Some(sub_district.to_string()),
        latitude: Some(13.75),
        longitude: Some(100.50),
        total_floor: Some(8.0),
        num_of_rooms: Some(40.0),
        apartment_type: Some("low-rise".into()),
        occupied_room_count: Some(30.0),
        occ_rate: Some(0.75),
        validated_type: Some("validated".into()),
        is_customer: Some(status.to_string()),
    }
}
