// End-to-end session tests against on-disk CSV/GeoJSON fixtures.

use std::fs;
use std::path::PathBuf;

use floodwatch::{FilterSelection, MapError, SessionContext};
use tempfile::TempDir;

const CSV_HEADER: &str = "name,owner_name,tel,email,province,district,subDistrict,latitude,longitude,totalFloor,numOfRooms,apartmentType,occupaidRoomCount,occRate,validatedType,isCustomer";

fn dataset_csv() -> String {
    let rows = [
        "Noi Tower,Noi Co.,812345671,noi@example.com,Bangkok,Bang Phlat,Bang Phlat,13.79,100.49,8,40,low-rise,30,0.75,validated,isCustomer (watched list)",
        "Chao Phraya Court,CP Co.,812345672,cp@example.com,Bangkok,Bang Phlat,Bang Yi Khan,13.78,100.48,12,60,high-rise,45,0.75,validated,isCustomer (watched list)",
        "Thonburi Place,TP Co.,812345673,tp@example.com,Bangkok,Khlong San,Khlong Ton Sai,13.73,100.50,6,24,low-rise,20,0.83,validated,isCustomer (watched list)",
        "Siam Residence,SR Co.,812345674,sr@example.com,Bangkok,Pathum Wan,Lumphini,13.74,100.54,20,120,high-rise,90,0.75,unvalidated,notCustomer",
        "Sathon Loft,SL Co.,812345675,sl@example.com,Bangkok,Sathon,Thung Wat Don,13.72,100.53,10,50,high-rise,40,0.80,validated,notCustomer",
        "Lat Phrao Mansion,LP Co.,812345676,lp@example.com,Bangkok,Chatuchak,Chan Kasem,13.83,100.57,5,30,low-rise,25,0.83,unvalidated,notCustomer",
        "Suan Yai Apartment,SY Co.,812345677,sy@example.com,Nonthaburi,Mueang Nonthaburi,Suan Yai,13.86,100.48,7,35,low-rise,28,0.80,validated,notCustomer",
        "Rattanathibet Suites,RS Co.,812345678,rs@example.com,Nonthaburi,Mueang Nonthaburi,Bang Kraso,13.87,100.49,9,45,high-rise,14,0.30,validated,isCustomer (safe zone)",
        "Bang Bua Thong Court,BB Co.,812345679,bb@example.com,Nonthaburi,Bang Bua Thong,Sano Loi,13.91,100.42,4,20,low-rise,11,0.55,validated,isCustomer (safe zone)",
        "Pak Kret Villa,PK Co.,812345680,pk@example.com,Nonthaburi,Pak Kret,Bang Phut,13.92,100.50,6,32,low-rise,26,0.80,validated,isCustomer (safe zone)",
    ];
    format!("{CSV_HEADER}\n{}\n", rows.join("\n"))
}

fn boundary_geojson() -> String {
    serde_json::json!({
        "type": "FeatureCollection",
        "features": [
            {"properties": {"tam_en": "Bang Phlat", "amp_en": "Bang Phlat", "pro_en": "Bangkok"}},
            {"properties": {"tam_en": "Wang Mai", "amp_en": "Pathum Wan", "pro_en": "Bangkok"}},
            {"properties": {"tam_en": "Suan Yai", "amp_en": "Mueang Nonthaburi", "pro_en": "Nonthaburi"}},
            {"properties": {"tam_en": "Tha Sai", "amp_en": "Mueang Chiang Mai", "pro_en": "Chiang Mai"}},
        ]
    })
    .to_string()
}

fn write_session_files(dir: &TempDir, csv: &str) -> (PathBuf, PathBuf) {
    let dataset_path = dir.path().join("apartment-dataset.csv");
    let geojson_path = dir.path().join("subdistricts.geojson");
    fs::write(&dataset_path, csv).unwrap();
    fs::write(&geojson_path, boundary_geojson()).unwrap();
    (dataset_path, geojson_path)
}

#[test]
fn empty_selection_passes_the_whole_base_set_through() {
    let dir = TempDir::new().unwrap();
    let (dataset, geojson) = write_session_files(&dir, &dataset_csv());
    let session = SessionContext::load(&dataset, &geojson, false).unwrap();

    let snapshot = session.interact(&FilterSelection::default());
    assert_eq!(snapshot.filtered.len(), 10);
    assert_eq!(snapshot.metrics.watched_list, 3);
    assert_eq!(snapshot.metrics.not_customer, 4);
    assert_eq!(snapshot.metrics.safe_zone, 3);

    // Chiang Mai has no apartment data, so its feature never contributes.
    assert_eq!(
        snapshot.boundary_addresses,
        vec![
            "Bang Phlat, Bang Phlat, Bangkok",
            "Wang Mai, Pathum Wan, Bangkok",
            "Suan Yai, Mueang Nonthaburi, Nonthaburi",
        ]
    );
    assert_eq!(snapshot.reconciled.len(), 3);
    assert!(snapshot.reconciled[1].record.is_none());
    assert_eq!(snapshot.reconciled[1].sub_district, "Wang Mai");

    let view = snapshot.map.unwrap();
    assert_eq!(view.points.len(), 10);
}

#[test]
fn boundary_addresses_track_the_filtered_provinces() {
    let dir = TempDir::new().unwrap();
    let (dataset, geojson) = write_session_files(&dir, &dataset_csv());
    let session = SessionContext::load(&dataset, &geojson, false).unwrap();

    let snapshot = session.interact(&FilterSelection {
        provinces: vec!["Bangkok".into()],
        ..Default::default()
    });
    assert_eq!(snapshot.filtered.len(), 6);
    assert_eq!(
        snapshot.boundary_addresses,
        vec![
            "Bang Phlat, Bang Phlat, Bangkok",
            "Wang Mai, Pathum Wan, Bangkok",
        ]
    );
    // The join side stays the full table, so the Bang Phlat record still matches.
    assert!(snapshot.reconciled[0].record.is_some());
}

#[test]
fn cascading_options_ignore_non_geographic_filters() {
    let dir = TempDir::new().unwrap();
    let (dataset, geojson) = write_session_files(&dir, &dataset_csv());
    let session = SessionContext::load(&dataset, &geojson, false).unwrap();

    let snapshot = session.interact(&FilterSelection {
        provinces: vec!["Nonthaburi".into()],
        customer_statuses: vec!["isCustomer (safe zone)".into()],
        ..Default::default()
    });
    // District options cover every Nonthaburi record, not just safe-zone ones.
    assert_eq!(
        snapshot.options.districts,
        vec!["Mueang Nonthaburi", "Bang Bua Thong", "Pak Kret"]
    );
    assert_eq!(snapshot.options.provinces, vec!["Bangkok", "Nonthaburi"]);
}

#[test]
fn occupancy_range_narrows_only_safe_zone_records() {
    let dir = TempDir::new().unwrap();
    let (dataset, geojson) = write_session_files(&dir, &dataset_csv());
    let session = SessionContext::load(&dataset, &geojson, true).unwrap();

    let snapshot = session.interact(&FilterSelection {
        occupancy: Some((0.50, 1.0)),
        ..Default::default()
    });
    // Rattanathibet Suites (0.30) drops out; the seven non-safe-zone records stay.
    assert_eq!(snapshot.filtered.len(), 9);
    assert_eq!(snapshot.metrics.safe_zone, 2);
    assert_eq!(snapshot.metrics.watched_list, 3);
    assert_eq!(snapshot.metrics.not_customer, 4);

    // Boundary value stays in.
    let snapshot = session.interact(&FilterSelection {
        occupancy: Some((0.30, 1.0)),
        ..Default::default()
    });
    assert_eq!(snapshot.filtered.len(), 10);
}

#[test]
fn plain_variant_ignores_the_occupancy_range() {
    let dir = TempDir::new().unwrap();
    let (dataset, geojson) = write_session_files(&dir, &dataset_csv());
    let session = SessionContext::load(&dataset, &geojson, false).unwrap();

    let snapshot = session.interact(&FilterSelection {
        occupancy: Some((0.99, 1.0)),
        ..Default::default()
    });
    assert_eq!(snapshot.filtered.len(), 10);
}

#[test]
fn dataset_without_coordinate_columns_yields_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let csv = "name,province,district,subDistrict,isCustomer\n\
               Noi Tower,Bangkok,Bang Phlat,Bang Phlat,notCustomer\n";
    let (dataset, geojson) = write_session_files(&dir, csv);
    let session = SessionContext::load(&dataset, &geojson, false).unwrap();

    let snapshot = session.interact(&FilterSelection::default());
    assert_eq!(snapshot.map, Err(MapError::MissingCoordinates));
    // The rest of the interaction still computes.
    assert_eq!(snapshot.filtered.len(), 1);
    assert_eq!(snapshot.metrics.not_customer, 1);
}
