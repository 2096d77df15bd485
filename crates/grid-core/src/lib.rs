// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports grid geometry, configuration, scenes and SVG output.

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scene;
pub mod style;
pub mod svg;
pub mod types;

pub use axis::{Axes, Direction};
pub use config::{GridConfig, LineLayer, MajorSpacing, MinorSpacing, OriginMode, OriginSpec};
pub use error::{GridError, Result};
pub use geometry::{Point, Rect, Segment};
pub use grid::Grid;
pub use scene::{Layer, Primitive, Renderer, Scene};
pub use style::{AttrValue, StyleMap};
pub use types::Transform;
