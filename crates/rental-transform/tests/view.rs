//! Chart selection over small in-memory datasets.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;
use rental_ingest::{CityDataset, Datasets, normalize_prices};
use rental_model::{City, PriceRange, Selection, Variable};
use rental_transform::{
    ChartPlan, MapOutcome, Notice, build_map, build_view, quantile_bins, top_counts,
};

fn text(name: &str, values: &[Option<&str>]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn floats(name: &str, values: &[Option<f64>]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn city_frame(offset: f64) -> DataFrame {
    DataFrame::new(vec![
        text(
            "price",
            &[Some("100"), Some("250"), Some("n/a"), Some("400"), Some("1000")],
        ),
        floats(
            "latitude",
            &[Some(19.0), Some(19.2), Some(19.4), None, Some(19.6)],
        ),
        floats(
            "longitude",
            &[Some(-99.0), Some(-99.2), Some(-99.4), Some(-99.1), Some(-99.6)],
        ),
        floats(
            "beds",
            &[Some(1.0 + offset), Some(2.0), None, Some(3.0), Some(1.0)],
        ),
        text(
            "room_type",
            &[
                Some("Entire home/apt"),
                Some("Private room"),
                Some("Entire home/apt"),
                None,
                Some("Hotel room"),
            ],
        ),
        text(
            "host_acceptance_rate",
            &[Some("100%"), Some("95%"), None, Some("80%"), Some("100%")],
        ),
        floats(
            "review_scores_rating",
            &[Some(4.5), Some(4.8), Some(5.0), None, Some(4.9)],
        ),
        text(
            "instant_bookable",
            &[Some("t"), Some("f"), Some("f"), Some("t"), None],
        ),
    ])
    .expect("frame")
}

fn datasets() -> Datasets {
    let mut datasets = Datasets::new();
    for (idx, city) in City::ALL.iter().enumerate() {
        let mut dataset = CityDataset::new(*city, city_frame(idx as f64));
        normalize_prices(&mut dataset).expect("normalize");
        datasets.insert(dataset);
    }
    datasets
}

#[test]
fn numeric_variable_builds_one_strip_plot() {
    let view = build_view(&datasets(), &Selection::new(Variable::Beds)).unwrap();
    let ChartPlan::Strip(plot) = view.chart else {
        panic!("expected strip plot");
    };
    assert_eq!(plot.series.len(), 4);
    assert_eq!(plot.series[0].points.len(), 4);
    assert_eq!(plot.size.width, 10.0);
    assert_eq!(plot.series[3].color, City::Mexico.color());
    assert!(view.map.is_none());
    assert!(view.table.is_none());
}

#[test]
fn categorical_variable_builds_top_counts_grid() {
    let view = build_view(&datasets(), &Selection::new(Variable::RoomType)).unwrap();
    let ChartPlan::CategoryGrid(grid) = view.chart else {
        panic!("expected category grid");
    };
    assert_eq!(grid.panels.len(), 4);
    assert_eq!(grid.label_rotation, 45.0);
    let bars = &grid.panels[0].bars;
    assert_eq!(bars[0].label, "Entire home/apt");
    assert_eq!(bars[0].count, 2);
    assert_eq!(bars.len(), 3);
}

#[test]
fn acceptance_rate_is_quantile_binned() {
    let view = build_view(&datasets(), &Selection::new(Variable::HostAcceptanceRate)).unwrap();
    let ChartPlan::CategoryGrid(grid) = view.chart else {
        panic!("expected category grid");
    };
    for panel in &grid.panels {
        assert!(panel.bars.len() <= 5);
        assert_eq!(panel.bars.iter().map(|b| b.count).sum::<usize>(), 4);
        assert!(panel.bars[0].label.starts_with('['));
    }
}

#[test]
fn score_variable_builds_density_curves() {
    let view = build_view(&datasets(), &Selection::new(Variable::ReviewScoresRating)).unwrap();
    let ChartPlan::Density(plot) = view.chart else {
        panic!("expected density plot");
    };
    assert_eq!(plot.series.len(), 4);
}

#[test]
fn binary_variable_builds_two_slice_pies() {
    let view = build_view(&datasets(), &Selection::new(Variable::InstantBookable)).unwrap();
    let ChartPlan::Pies(grid) = view.chart else {
        panic!("expected pies");
    };
    assert_eq!(grid.pies.len(), 4);
    assert_eq!(grid.rows().count(), 2);
    for pie in &grid.pies {
        let slices = pie.shares.slices();
        assert_eq!(slices.len(), 2);
        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() <= 0.1 + 1e-9);
        assert_eq!(pie.shares.truthy.percent, 40.0);
    }
}

#[test]
fn price_builds_tiers_and_map() {
    let selection = Selection::new(Variable::PriceMxn).with_map_city(City::Naples);
    let view = build_view(&datasets(), &selection).unwrap();
    let ChartPlan::PriceTiers(grid) = &view.chart else {
        panic!("expected price tiers");
    };
    assert_eq!(grid.size.height, 8.0);
    for panel in &grid.panels {
        assert_eq!(panel.bars.iter().map(|b| b.count).sum::<usize>(), 4);
    }
    let Some(MapOutcome::Rendered(map)) = &view.map else {
        panic!("expected rendered map");
    };
    assert_eq!(map.city, City::Naples);
    // Row 3 has no price, row 4 no latitude.
    assert_eq!(map.points.len(), 3);
    assert_eq!(map.zoom, 11.0);
    assert_eq!(map.pitch, 45.0);
    let max = map.points.iter().map(|p| p.price_mxn).fold(0.0, f64::max);
    assert_eq!(max, 18000.0);
    let most_expensive = map.points.iter().find(|p| p.price_mxn == max).unwrap();
    assert_eq!(most_expensive.color, [255, 0, 0]);
    assert!((map.center_latitude - (19.0 + 19.2 + 19.6) / 3.0).abs() < 1e-9);
}

#[test]
fn empty_price_range_gives_notice() {
    let selection = Selection::new(Variable::PriceMxn)
        .with_map_city(City::Mexico)
        .with_price_range(Some(PriceRange::new(500.0, 200.0)));
    let view = build_view(&datasets(), &selection).unwrap();
    assert!(matches!(
        view.map,
        Some(MapOutcome::Notice(Notice::NoListingsInRange {
            city: City::Mexico,
            ..
        }))
    ));
    assert_eq!(view.notices.len(), 1);
}

#[test]
fn city_without_coordinates_gives_no_geo_data() {
    let mut frame = city_frame(0.0);
    frame
        .with_column(floats("latitude", &[None; 5]))
        .expect("replace latitude");
    let mut berlin = CityDataset::new(City::Berlin, frame);
    normalize_prices(&mut berlin).expect("normalize");

    assert_eq!(
        build_map(&berlin, None).unwrap(),
        MapOutcome::Notice(Notice::NoGeoData(City::Berlin))
    );
    assert_eq!(
        build_map(&berlin, Some(PriceRange::new(0.0, 1.0e6))).unwrap(),
        MapOutcome::Notice(Notice::NoGeoData(City::Berlin))
    );

    let mut datasets = datasets();
    datasets.insert(berlin);
    let selection = Selection::new(Variable::PriceMxn).with_map_city(City::Berlin);
    let view = build_view(&datasets, &selection).unwrap();
    assert_eq!(
        view.map,
        Some(MapOutcome::Notice(Notice::NoGeoData(City::Berlin)))
    );
    assert_eq!(view.notices, vec![Notice::NoGeoData(City::Berlin)]);
    assert!(matches!(view.chart, ChartPlan::PriceTiers(_)));
}

#[test]
fn table_only_when_toggled() {
    let selection = Selection::new(Variable::RoomType).with_table_city(City::Berlin);
    let view = build_view(&datasets(), &selection).unwrap();
    assert!(view.table.is_none());

    let view = build_view(&datasets(), &selection.with_show_table(true)).unwrap();
    let table = view.table.expect("table");
    assert_eq!(table.city, "Berlin");
    assert_eq!(table.total(), 5);
    assert!(table.rows.iter().any(|row| row.value.is_none()));
}

proptest! {
    #[test]
    fn quantile_bins_cover_every_value(values in proptest::collection::vec(-1.0e4f64..1.0e4, 0..200)) {
        let bins = quantile_bins(&values, 5);
        prop_assert!(bins.len() <= 5);
        prop_assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn top_counts_are_non_increasing(raw in proptest::collection::vec(proptest::option::of(0u8..8), 0..100)) {
        let labels: Vec<Option<String>> = raw.iter().map(|v| v.map(|n| n.to_string())).collect();
        let top = top_counts(&labels, 5);
        prop_assert!(top.len() <= 5);
        prop_assert!(top.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }
}
