//! Price map output: a static SVG scatter and a deck description.

use rental_transform::map::TOOLTIP_TEMPLATE;
use rental_transform::{MapPoint, MapView, price_color};
use serde_json::{Value, json};
use svg::Document;
use svg::node::element::{Circle, Group, Title};

use crate::figure::{Margins, Scale, figure, text, title, x_ticks, y_axis};

const MAP_WIDTH: f64 = 10.0;
const MAP_HEIGHT: f64 = 8.0;
const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";

fn rgb(color: [u8; 3]) -> String {
    format!("rgb({},{},{})", color[0], color[1], color[2])
}

/// Scatter of listings by longitude and latitude, coloured by price.
pub fn render_map(view: &MapView) -> Document {
    let (document, area) = figure(MAP_WIDTH, MAP_HEIGHT);
    let chart = area.inset(Margins::DEFAULT);
    let bounds = |pick: fn(&MapPoint) -> f64| {
        view.points
            .iter()
            .map(pick)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };
    let (lon_lo, lon_hi) = bounds(|p| p.longitude);
    let (lat_lo, lat_hi) = bounds(|p| p.latitude);
    let x_scale = Scale::new((lon_lo, lon_hi), (chart.x, chart.right()));
    let y_scale = Scale::new((lat_lo, lat_hi), (chart.bottom(), chart.y));

    let mut points = Group::new().set("class", "listings");
    for point in &view.points {
        let tooltip = Title::new(MapView::tooltip(point));
        points = points.add(
            Circle::new()
                .set("cx", x_scale.map(point.longitude))
                .set("cy", y_scale.map(point.latitude))
                .set("r", 4)
                .set("fill", rgb(point.color))
                .set("fill-opacity", 0.8)
                .add(tooltip),
        );
    }
    let heading = format!(
        "{} listings, {} to {} MXN",
        view.city, view.range.lo, view.range.hi
    );
    let max = view.points.iter().map(|p| p.price_mxn).fold(0.0, f64::max);
    let legend = Group::new()
        .set("class", "legend")
        .add(
            text("Low", chart.right() - 110.0, chart.y + 12.0, 11.0)
                .set("fill", rgb(price_color(0.0, max))),
        )
        .add(
            text("High", chart.right() - 60.0, chart.y + 12.0, 11.0)
                .set("fill", rgb(price_color(max, max))),
        );
    document
        .add(title(&heading, &area))
        .add(y_axis(&chart, &y_scale, "Latitude"))
        .add(x_ticks(&chart, &x_scale))
        .add(points)
        .add(legend)
}

/// Deck-style description: initial view state, one scatterplot layer and
/// the tooltip template.
pub fn deck_json(view: &MapView) -> Value {
    let data: Vec<Value> = view
        .points
        .iter()
        .map(|point| {
            json!({
                "lat": point.latitude,
                "lon": point.longitude,
                "price_mxn": point.price_mxn,
                "color": point.color,
            })
        })
        .collect();
    json!({
        "map_style": MAP_STYLE,
        "initial_view_state": {
            "latitude": view.center_latitude,
            "longitude": view.center_longitude,
            "zoom": view.zoom,
            "pitch": view.pitch,
        },
        "layers": [{
            "type": "ScatterplotLayer",
            "get_position": ["lon", "lat"],
            "get_color": "color",
            "get_radius": view.radius,
            "pickable": true,
            "data": data,
        }],
        "tooltip": { "text": TOOLTIP_TEMPLATE },
        "city": view.city.name(),
        "price_range": [view.range.lo, view.range.hi],
    })
}
