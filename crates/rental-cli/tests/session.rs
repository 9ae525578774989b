//! End-to-end interactions against CSV fixtures.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use rental_cli::commands::{render_selection, run_session};
use rental_cli::config::DashboardConfig;
use rental_cli::summary::{frequency_table, variable_listing};
use rental_ingest::{DataSources, DatasetCache};
use rental_model::{City, PriceRange, Selection, Variable};
use rental_transform::{MapOutcome, Notice};
use tempfile::TempDir;

const HEADER: &str = "price,latitude,longitude,room_type,beds,instant_bookable\n";

fn write_city_files(dir: &Path) {
    for city in City::ALL {
        let body = format!(
            "{HEADER}\
             80,19.43,-99.13,Private room,1,t\n\
             120.5,19.44,-99.14,Entire home/apt,2,f\n\
             200,19.45,-99.15,Entire home/apt,3,f\n\
             n/a,,,,,\n"
        );
        fs::write(dir.join(city.default_file_name()), body).expect("write csv");
    }
}

fn config(data: &Path, output: &Path) -> DashboardConfig {
    DashboardConfig::default().with_overrides(Some(data.to_path_buf()), Some(output.to_path_buf()))
}

#[test]
fn session_renders_each_valid_line() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_city_files(data.path());

    let input = "variable=price_mxn map-city=berlin\n\
                 width=99\n\
                 bogus\n\
                 \n\
                 variable=room_type table=on table-city=naples\n\
                 quit\n\
                 variable=instant_bookable\n";
    let mut errors = Vec::new();
    let renders = run_session(
        &config(data.path(), output.path()),
        Selection::new(Variable::Beds),
        Cursor::new(input),
        &mut errors,
    )
    .expect("session");

    assert_eq!(renders, 3);
    let errors = String::from_utf8(errors).unwrap();
    assert!(errors.contains("width must be between 4 and 20, got 99"));
    assert!(errors.contains("expected key=value"));

    for name in [
        "beds.svg",
        "price_mxn.svg",
        "map_berlin.svg",
        "map_berlin.json",
        "room_type.svg",
    ] {
        assert!(output.path().join(name).is_file(), "{name} missing");
    }
    assert!(!output.path().join("instant_bookable.svg").exists());
}

#[test]
fn missing_data_is_reported_and_session_continues() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let mut errors = Vec::new();
    let renders = run_session(
        &config(data.path(), output.path()),
        Selection::new(Variable::Beds),
        Cursor::new("variable=room_type\n"),
        &mut errors,
    )
    .expect("session");
    assert_eq!(renders, 0);
    let errors = String::from_utf8(errors).unwrap();
    assert_eq!(errors.matches("data unavailable").count(), 2);
}

#[test]
fn price_range_filters_the_map() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_city_files(data.path());
    let cache = DatasetCache::new(DataSources::in_dir(data.path()));

    let selection = Selection::new(Variable::PriceMxn)
        .with_map_city(City::Naples)
        .with_price_range(Some(PriceRange::new(1500.0, 2200.0)));
    let (view, _) = render_selection(&cache, &selection, output.path()).unwrap();
    let Some(MapOutcome::Rendered(map)) = view.map else {
        panic!("expected map");
    };
    // Naples prices: 1440, 2169, 3600 MXN.
    assert_eq!(map.points.len(), 1);
    assert_eq!(map.points[0].price_mxn, 2169.0);
    assert_eq!(map.points[0].color, [255, 0, 0]);

    let selection = selection.with_price_range(Some(PriceRange::new(10.0, 20.0)));
    let (view, written) = render_selection(&cache, &selection, output.path()).unwrap();
    assert!(matches!(view.map, Some(MapOutcome::Notice(_))));
    assert_eq!(view.notices.len(), 1);
    assert_eq!(written.len(), 1);
}

#[test]
fn map_notice_removes_the_previous_map() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_city_files(data.path());
    let cache = DatasetCache::new(DataSources::in_dir(data.path()));

    let selection = Selection::new(Variable::PriceMxn).with_map_city(City::Naples);
    let (_, written) = render_selection(&cache, &selection, output.path()).unwrap();
    assert_eq!(written.len(), 3);
    assert!(output.path().join("map_naples.svg").is_file());

    let selection = selection.with_price_range(Some(PriceRange::new(1.0, 2.0)));
    let (view, written) = render_selection(&cache, &selection, output.path()).unwrap();
    assert!(matches!(
        view.map,
        Some(MapOutcome::Notice(Notice::NoListingsInRange {
            city: City::Naples,
            ..
        }))
    ));
    assert_eq!(written, vec![output.path().join("price_mxn.svg")]);
    assert!(!output.path().join("map_naples.svg").exists());
    assert!(!output.path().join("map_naples.json").exists());
}

#[test]
fn city_without_coordinates_gets_no_map() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_city_files(data.path());
    fs::write(
        data.path().join(City::Berlin.default_file_name()),
        format!("{HEADER}80,,,Private room,1,t\n120.5,,,Entire home/apt,2,f\n"),
    )
    .expect("write csv");
    let cache = DatasetCache::new(DataSources::in_dir(data.path()));

    let selection = Selection::new(Variable::PriceMxn).with_map_city(City::Berlin);
    let (view, written) = render_selection(&cache, &selection, output.path()).unwrap();
    assert_eq!(
        view.map,
        Some(MapOutcome::Notice(Notice::NoGeoData(City::Berlin)))
    );
    assert_eq!(view.notices, vec![Notice::NoGeoData(City::Berlin)]);
    assert_eq!(written, vec![output.path().join("price_mxn.svg")]);
    assert!(!output.path().join("map_berlin.svg").exists());
    assert!(!output.path().join("map_berlin.json").exists());
}

#[test]
fn frequency_table_lists_missing_values() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_city_files(data.path());
    let cache = DatasetCache::new(DataSources::in_dir(data.path()));
    let selection = Selection::new(Variable::RoomType)
        .with_show_table(true)
        .with_table_city(City::Mexico);
    let (view, _) = render_selection(&cache, &selection, output.path()).unwrap();
    let table = view.table.expect("table");
    assert_eq!(table.total(), 4);
    let rendered = frequency_table(&table).to_string();
    assert!(rendered.contains("Entire home/apt"));
    assert!(rendered.contains("NaN"));
    assert!(rendered.contains("Frequency"));
    assert!(!rendered.contains("TOTAL"));
    // One row per distinct value, missing included.
    assert_eq!(table.rows.len(), 3);
    assert_eq!(rendered.matches("Private room").count(), 1);
}

#[test]
fn variable_listing_snapshot() {
    insta::assert_snapshot!(variable_listing(), @r"
    numeric: accommodates, bathrooms, bedrooms, beds
    categorical: host_response_time, host_verifications, room_type, property_type, host_acceptance_rate
    score: review_scores_rating, review_scores_accuracy, review_scores_cleanliness, review_scores_checkin, review_scores_communication, review_scores_location, review_scores_value
    binary: instant_bookable, has_availability, host_is_superhost, host_has_profile_pic, host_identity_verified
    price: price_mxn
    ");
}
