// File: crates/grid-core/src/types.rs
// Summary: Shared defaults and the group transform applied by renderers.

use serde::{Deserialize, Serialize};

/// Default spacing between major lines.
pub const DEFAULT_DISTANCE: f64 = 10.0;
/// Default count of minor lines per major interval.
pub const DEFAULT_MINOR_NUMBER: usize = 1;
/// Default grid extent when a config omits geometry.
pub const DEFAULT_EXTENT: f64 = 100.0;

/// Translation / uniform scale / rotation for the whole rendered group.
/// The grid geometry never sees this; backends apply it, in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Transform {
    pub translate: Option<(f64, f64)>,
    pub scale: Option<f64>,
    /// Degrees, clockwise in y-down coordinates.
    pub rotate: Option<f64>,
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        self.translate.is_none() && self.scale.is_none() && self.rotate.is_none()
    }

    /// SVG `transform` attribute text, e.g. `scale(0.5) rotate(-5)`.
    pub fn to_svg(&self) -> String {
        let mut parts = Vec::new();
        if let Some((tx, ty)) = self.translate {
            parts.push(format!("translate({tx} {ty})"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({r})"));
        }
        parts.join(" ")
    }
}
