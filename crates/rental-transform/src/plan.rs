//! Chart selection: one plan per interaction.
//!
//! [`build_view`] classifies the selected variable and produces exactly one
//! [`ChartPlan`], plus the price map for price selections and the summary
//! table when it is switched on. Plans are plain data; drawing them is the
//! report crate's job.

use rental_ingest::{CityDataset, Datasets, parse_percent};
use rental_model::{City, PRICE_MXN_COLUMN, Rgb, Selection, Variable, VariableKind};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::binary::BinaryShares;
use crate::counts::{FrequencyTable, top_counts};
use crate::density::{DensityCurve, gaussian_kde};
use crate::error::Result;
use crate::map::{MapOutcome, Notice, build_map};
use crate::quantile::{DEFAULT_QUANTILES, quantile_bins};
use crate::strip::{StripPoint, strip_points};

/// Bars shown per city for raw-value categorical counts.
pub const TOP_CATEGORIES: usize = 5;
/// Figure size of each categorical panel.
pub const PANEL_SIZE: FigureSize = FigureSize {
    width: 5.0,
    height: 4.0,
};
/// Figure size of each pie.
pub const PIE_SIZE: FigureSize = FigureSize {
    width: 4.0,
    height: 4.0,
};
/// Rotation of category tick labels, in degrees.
pub const LABEL_ROTATION: f64 = 45.0;
/// Pies per row.
pub const PIES_PER_ROW: usize = 2;
pub const FREQUENCY_AXIS: &str = "Frequency";

/// Figure dimensions in inches, as picked on the size sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            width: f64::from(selection.width()),
            height: f64::from(selection.height()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripSeries {
    pub city: City,
    pub color: Rgb,
    pub points: Vec<StripPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripPlot {
    pub title: String,
    pub size: FigureSize,
    pub series: Vec<StripSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPanel {
    pub city: City,
    pub color: Rgb,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

/// A 2x2 grid of bar panels, one per city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGrid {
    pub title: String,
    /// Size of the whole figure when drawn as one, else of each panel.
    pub size: FigureSize,
    /// Each panel is its own figure (categorical) or a subplot of one
    /// figure (price tiers).
    pub separate_figures: bool,
    pub label_rotation: f64,
    pub panels: Vec<BarPanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensitySeries {
    pub city: City,
    pub color: Rgb,
    pub curve: DensityCurve,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityPlot {
    pub title: String,
    pub size: FigureSize,
    pub series: Vec<DensitySeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiePanel {
    pub city: City,
    pub colors: [Rgb; 2],
    pub shares: BinaryShares,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieGrid {
    pub size: FigureSize,
    pub pies: Vec<PiePanel>,
}

impl PieGrid {
    /// Pies laid out two per row in city order.
    pub fn rows(&self) -> impl Iterator<Item = &[PiePanel]> {
        self.pies.chunks(PIES_PER_ROW)
    }
}

/// The chart drawn for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartPlan {
    Strip(StripPlot),
    CategoryGrid(BarGrid),
    Density(DensityPlot),
    Pies(PieGrid),
    PriceTiers(BarGrid),
}

/// Everything one interaction renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub variable: Variable,
    pub kind: VariableKind,
    pub chart: ChartPlan,
    pub map: Option<MapOutcome>,
    pub table: Option<FrequencyTable>,
    pub notices: Vec<Notice>,
}

/// Builds the chart, map and table for `selection`.
pub fn build_view(datasets: &Datasets, selection: &Selection) -> Result<DashboardView> {
    let variable = selection.variable;
    let kind = variable.kind();
    let span = info_span!("build_view", variable = %variable, kind = %kind);
    let _guard = span.enter();
    let mut notices = Vec::new();

    let chart = match kind {
        VariableKind::Numeric => ChartPlan::Strip(strip_plot(datasets, selection)?),
        VariableKind::Categorical => ChartPlan::CategoryGrid(category_grid(datasets, variable)?),
        VariableKind::Score => ChartPlan::Density(density_plot(datasets, selection)?),
        VariableKind::Binary => ChartPlan::Pies(pie_grid(datasets, variable, &mut notices)?),
        VariableKind::Price => ChartPlan::PriceTiers(price_tiers(datasets, selection)?),
    };

    let map = match kind {
        VariableKind::Price => match datasets.get(selection.map_city) {
            Some(dataset) => {
                let outcome = build_map(dataset, selection.price_range)?;
                if let MapOutcome::Notice(notice) = &outcome {
                    notices.push(notice.clone());
                }
                Some(outcome)
            }
            None => None,
        },
        _ => None,
    };

    let table = if selection.show_table {
        datasets
            .get(selection.table_city)
            .map(|dataset| frequency_table(dataset, variable))
            .transpose()?
    } else {
        None
    };

    debug!(
        notices = notices.len(),
        map = map.is_some(),
        table = table.is_some(),
        "view built"
    );
    Ok(DashboardView {
        variable,
        kind,
        chart,
        map,
        table,
        notices,
    })
}

fn present(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().flatten().collect()
}

fn strip_plot(datasets: &Datasets, selection: &Selection) -> Result<StripPlot> {
    let column = selection.variable.column();
    let mut series = Vec::new();
    for (slot, dataset) in datasets.iter().enumerate() {
        let values = present(dataset.numeric_values(column)?);
        series.push(StripSeries {
            city: dataset.city,
            color: dataset.city.color(),
            points: strip_points(slot, &values),
        });
    }
    Ok(StripPlot {
        title: format!("Distribution of {column}"),
        size: FigureSize::from_selection(selection),
        series,
    })
}

fn category_bars(dataset: &CityDataset, variable: Variable) -> Result<Vec<Bar>> {
    let column = variable.column();
    if variable.is_quantile_binned() {
        let values: Vec<f64> = dataset
            .label_values(column)?
            .iter()
            .flatten()
            .filter_map(|label| parse_percent(label))
            .collect();
        Ok(binned_bars(&values))
    } else {
        let labels = dataset.label_values(column)?;
        Ok(top_counts(&labels, TOP_CATEGORIES)
            .into_iter()
            .map(|(label, count)| Bar { label, count })
            .collect())
    }
}

fn binned_bars(values: &[f64]) -> Vec<Bar> {
    quantile_bins(values, DEFAULT_QUANTILES)
        .iter()
        .enumerate()
        .map(|(idx, bin)| Bar {
            label: bin.label(idx == 0),
            count: bin.count,
        })
        .collect()
}

fn category_grid(datasets: &Datasets, variable: Variable) -> Result<BarGrid> {
    let column = variable.column();
    let mut panels = Vec::new();
    for dataset in datasets.iter() {
        panels.push(BarPanel {
            city: dataset.city,
            color: dataset.city.color(),
            title: dataset.city.name().to_string(),
            x_label: column.to_string(),
            y_label: FREQUENCY_AXIS.to_string(),
            bars: category_bars(dataset, variable)?,
        });
    }
    Ok(BarGrid {
        title: format!("Counts of {column}"),
        size: PANEL_SIZE,
        separate_figures: true,
        label_rotation: LABEL_ROTATION,
        panels,
    })
}

fn density_plot(datasets: &Datasets, selection: &Selection) -> Result<DensityPlot> {
    let column = selection.variable.column();
    let mut series = Vec::new();
    for dataset in datasets.iter() {
        let values = present(dataset.numeric_values(column)?);
        match gaussian_kde(&values) {
            Some(curve) => series.push(DensitySeries {
                city: dataset.city,
                color: dataset.city.color(),
                curve,
            }),
            None => debug!(city = %dataset.city, values = values.len(), "no spread, density skipped"),
        }
    }
    Ok(DensityPlot {
        title: format!("Density of {column}"),
        size: FigureSize::from_selection(selection),
        series,
    })
}

fn pie_grid(datasets: &Datasets, variable: Variable, notices: &mut Vec<Notice>) -> Result<PieGrid> {
    let mut pies = Vec::new();
    for dataset in datasets.iter() {
        let labels = dataset.label_values(variable.column())?;
        match BinaryShares::from_values(&labels) {
            Some(shares) => pies.push(PiePanel {
                city: dataset.city,
                colors: [dataset.city.color(), Rgb::LIGHT_GRAY],
                shares,
            }),
            None => notices.push(Notice::NoRows(dataset.city)),
        }
    }
    Ok(PieGrid {
        size: PIE_SIZE,
        pies,
    })
}

fn price_tiers(datasets: &Datasets, selection: &Selection) -> Result<BarGrid> {
    let mut panels = Vec::new();
    for dataset in datasets.iter() {
        let prices = present(dataset.numeric_values(PRICE_MXN_COLUMN)?);
        panels.push(BarPanel {
            city: dataset.city,
            color: dataset.city.color(),
            title: format!("Price tiers in {}", dataset.city),
            x_label: String::new(),
            y_label: String::new(),
            bars: binned_bars(&prices),
        });
    }
    let size = FigureSize::from_selection(selection);
    Ok(BarGrid {
        title: "Price tiers (MXN)".to_string(),
        size: FigureSize {
            width: size.width,
            height: size.height + 2.0,
        },
        separate_figures: false,
        label_rotation: LABEL_ROTATION,
        panels,
    })
}

/// Frequency table of `variable` in one city.
pub fn frequency_table(dataset: &CityDataset, variable: Variable) -> Result<FrequencyTable> {
    let labels = dataset.label_values(variable.column())?;
    Ok(FrequencyTable::build(
        variable.column(),
        dataset.city.name(),
        &labels,
    ))
}
