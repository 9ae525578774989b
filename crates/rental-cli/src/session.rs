//! Line-oriented interaction parsing for `session`.
//!
//! Each line is a set of `key=value` tokens that update the current
//! selection, e.g. `variable=price_mxn map-city=berlin range=900..4000`.

use anyhow::{Context, Result, anyhow, bail};
use rental_model::{City, PriceRange, Selection, Variable};

#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Variable(Variable),
    Width(u32),
    Height(u32),
    ShowTable(bool),
    MapCity(City),
    /// `None` returns to the map city's full range.
    PriceRange(Option<PriceRange>),
    TableCity(City),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionLine {
    Quit,
    Blank,
    Updates(Vec<Update>),
}

pub fn parse_line(line: &str) -> Result<SessionLine> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(SessionLine::Blank);
    }
    if matches!(line, "quit" | "exit") {
        return Ok(SessionLine::Quit);
    }
    line.split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<_>>>()
        .map(SessionLine::Updates)
}

fn parse_token(token: &str) -> Result<Update> {
    let (key, value) = token
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got {token:?}"))?;
    let update = match key {
        "variable" => Update::Variable(value.parse()?),
        "width" => Update::Width(value.parse().with_context(|| format!("width {value:?}"))?),
        "height" => Update::Height(value.parse().with_context(|| format!("height {value:?}"))?),
        "table" => Update::ShowTable(parse_switch(value)?),
        "map-city" => Update::MapCity(value.parse()?),
        "range" => Update::PriceRange(match value {
            "" | "full" => None,
            _ => Some(value.parse()?),
        }),
        "table-city" => Update::TableCity(value.parse()?),
        _ => bail!("unknown key {key:?}"),
    };
    Ok(update)
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => bail!("table must be on or off, got {value:?}"),
    }
}

/// Applies `updates` to a copy of `current`. Either every update succeeds
/// or the selection is left unchanged.
///
/// Changing the map city resets the price range, since the previous range
/// was chosen against another city's prices. A `range=` in the same line
/// is applied afterwards and wins.
pub fn apply_updates(current: &Selection, updates: &[Update]) -> Result<Selection> {
    let mut next = current.clone();
    for update in updates {
        match update {
            Update::Variable(variable) => next.select_variable(*variable),
            Update::Width(width) => next.set_width(*width)?,
            Update::Height(height) => next.set_height(*height)?,
            Update::ShowTable(show) => next.show_table = *show,
            Update::MapCity(city) => {
                if next.map_city != *city {
                    next.map_city = *city;
                    next.price_range = None;
                }
            }
            Update::TableCity(city) => next.table_city = *city,
            Update::PriceRange(_) => {}
        }
    }
    for update in updates {
        if let Update::PriceRange(range) = update {
            next.price_range = *range;
        }
    }
    Ok(next)
}
