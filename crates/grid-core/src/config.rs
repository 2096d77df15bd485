// File: crates/grid-core/src/config.rs
// Summary: Declarative grid configuration (geometry, origin, layer spacing and styles) with loaders.
// Notes:
// - Field names are camelCase so settings written for the legacy grid
//   (`boundingRectangle`, `majorLines.configuration.skipBoundary`, ...) load as-is.
// - A layer that is absent from the config is simply not drawn.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GridError, Result};
use crate::grid::{check_distance, Grid};
use crate::style::StyleMap;
use crate::types::{Transform, DEFAULT_DISTANCE, DEFAULT_EXTENT, DEFAULT_MINOR_NUMBER};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub xmin: f64,
    pub ymin: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { xmin: 0.0, ymin: 0.0, width: DEFAULT_EXTENT, height: DEFAULT_EXTENT }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginMode {
    /// Absolute coordinates.
    Set,
    /// Proportions of width/height measured from the minimum corner.
    Anchor,
}

/// Origin request. Every field is optional; an incomplete request is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginSpec {
    #[serde(rename = "type", default, deserialize_with = "lenient_mode")]
    pub mode: Option<OriginMode>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl OriginSpec {
    pub fn set(x: f64, y: f64) -> Self {
        Self { mode: Some(OriginMode::Set), x: Some(x), y: Some(y) }
    }

    pub fn anchor(x: f64, y: f64) -> Self {
        Self { mode: Some(OriginMode::Anchor), x: Some(x), y: Some(y) }
    }
}

/// Unknown origin types become `None`, so the request is ignored rather than
/// failing the whole config.
fn lenient_mode<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<OriginMode>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| match name.as_str() {
        "set" => Some(OriginMode::Set),
        "anchor" => Some(OriginMode::Anchor),
        other => {
            warn!("unknown origin type '{other}', origin left unset");
            None
        }
    }))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MajorSpacing {
    pub distance: f64,
    pub skip_boundary: bool,
    pub skip_origin: bool,
}

impl Default for MajorSpacing {
    fn default() -> Self {
        Self { distance: DEFAULT_DISTANCE, skip_boundary: false, skip_origin: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinorSpacing {
    pub number: usize,
    pub distance: f64,
}

impl Default for MinorSpacing {
    fn default() -> Self {
        Self { number: DEFAULT_MINOR_NUMBER, distance: DEFAULT_DISTANCE }
    }
}

/// Spacing parameters plus the attributes stamped on every line of the layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLayer<S> {
    pub configuration: S,
    pub attributes: StyleMap,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub geometry: Geometry,
    pub group_attributes: Option<StyleMap>,
    pub bounding_rectangle: Option<StyleMap>,
    pub origin: Option<OriginSpec>,
    pub axes: Option<StyleMap>,
    pub major_lines: Option<LineLayer<MajorSpacing>>,
    pub minor_lines: Option<LineLayer<MinorSpacing>>,
    pub transform: Option<Transform>,
}

impl GridConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: GridConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: GridConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.toml` or `.json` file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GridError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Self::from_toml_str(&text),
            "json" => Self::from_json_str(&text),
            other => Err(GridError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Check geometry and spacing up front so scene building cannot fail halfway.
    pub fn validate(&self) -> Result<()> {
        self.grid()?;
        if let Some(layer) = &self.major_lines {
            check_distance(layer.configuration.distance)?;
        }
        if let Some(layer) = &self.minor_lines {
            check_distance(layer.configuration.distance)?;
        }
        if let Some(t) = &self.transform {
            let finite = t.translate.map_or(true, |(x, y)| x.is_finite() && y.is_finite())
                && t.scale.map_or(true, f64::is_finite)
                && t.rotate.map_or(true, f64::is_finite);
            if !finite {
                return Err(GridError::InvalidGeometry("transform values must be finite".into()));
            }
        }
        Ok(())
    }

    /// Grid for this geometry with the configured origin applied.
    pub fn grid(&self) -> Result<Grid> {
        let g = &self.geometry;
        let mut grid = Grid::new(g.xmin, g.ymin, g.width, g.height)?;
        if let Some(origin) = &self.origin {
            grid.apply_origin(origin);
        }
        Ok(grid)
    }
}
