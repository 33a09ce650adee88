//! Map selection and coordinate parsing for the command line.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use uav_core::{presets, Coordinate, GridMap};

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// Built-in obstacle map.
    Flat,
    /// Built-in obstacle-height map.
    Height,
    /// JSON file holding an array of integer rows.
    File(PathBuf),
}

impl FromStr for MapSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "flat" => MapSource::Flat,
            "height" => MapSource::Height,
            path => MapSource::File(PathBuf::from(path)),
        })
    }
}

impl MapSource {
    pub fn load(&self) -> Result<GridMap> {
        match self {
            MapSource::Flat => Ok(presets::flat_map()),
            MapSource::Height => Ok(presets::height_map()),
            MapSource::File(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read map {}", path.display()))?;
                parse_map(&raw).with_context(|| format!("invalid map {}", path.display()))
            }
        }
    }
}

/// Parse a JSON grid such as `[[0, 1], [0, 0]]`.
pub fn parse_map(raw: &str) -> Result<GridMap> {
    let rows: Vec<Vec<i32>> = serde_json::from_str(raw)?;
    Ok(GridMap::from_rows(rows)?)
}

/// Parse `ROW,COL`.
pub fn parse_coordinate(s: &str) -> Result<Coordinate> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row in '{}'", s))?;
    let col = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column in '{}'", s))?;
    Ok(Coordinate::new(row, col))
}
