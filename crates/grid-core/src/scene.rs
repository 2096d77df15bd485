// File: crates/grid-core/src/scene.rs
// Summary: Renderer-agnostic display list for a configured grid, plus the backend trait.

use log::debug;

use crate::axis::Direction;
use crate::config::GridConfig;
use crate::error::Result;
use crate::geometry::{Rect, Segment};
use crate::grid::Grid;
use crate::style::StyleMap;
use crate::types::Transform;

/// Role of a primitive inside the grid group; backends may use it for layering or ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Bounds,
    Axis,
    Major,
    Minor,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { layer: Layer, rect: Rect, style: StyleMap },
    Line { layer: Layer, segment: Segment, style: StyleMap },
}

impl Primitive {
    pub fn layer(&self) -> Layer {
        match self {
            Primitive::Rect { layer, .. } | Primitive::Line { layer, .. } => *layer,
        }
    }
}

/// Backend contract: one call per styled primitive, bracketed by group open/close.
pub trait Renderer {
    fn begin_group(&mut self, _attributes: &StyleMap, _transform: &Transform) {}
    fn rect(&mut self, rect: Rect, style: &StyleMap);
    fn line(&mut self, segment: Segment, style: &StyleMap);
    fn end_group(&mut self) {}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub group_attributes: StyleMap,
    pub transform: Transform,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Build the grid group described by `config`.
    /// Order: bounding rectangle, axes (horizontal, vertical), majors (x, y), minors (x, y).
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let grid = config.grid()?;
        let mut scene = Scene {
            group_attributes: config.group_attributes.clone().unwrap_or_default(),
            transform: config.transform.unwrap_or_default(),
            primitives: Vec::new(),
        };

        if let Some(style) = &config.bounding_rectangle {
            scene.push_rect(Layer::Bounds, grid.bounding_rectangle(), style);
        }
        if let (Some(style), Some(axes)) = (&config.axes, grid.axes()) {
            for segment in axes.segments() {
                scene.push_line(Layer::Axis, segment, style);
            }
        }
        if let Some(layer) = &config.major_lines {
            for dir in Direction::BOTH {
                let spacing = &layer.configuration;
                let lines = grid.major_lines(spacing.distance, spacing.skip_boundary, spacing.skip_origin, dir)?;
                scene.push_lines(Layer::Major, lines, &layer.attributes);
            }
        }
        if let Some(layer) = &config.minor_lines {
            for dir in Direction::BOTH {
                let spacing = &layer.configuration;
                let lines = grid.minor_lines(spacing.number, spacing.distance, dir)?;
                scene.push_lines(Layer::Minor, lines, &layer.attributes);
            }
        }

        debug!(
            "built grid scene: {} primitives (origin set: {})",
            scene.primitives.len(),
            grid.origin_set()
        );
        Ok(scene)
    }

    /// Scene holding only the given grid's lines for one layer; handy for callers
    /// that drive [`Grid`] directly instead of through a config.
    pub fn from_lines(layer: Layer, lines: Vec<Segment>, style: &StyleMap) -> Self {
        let mut scene = Scene::default();
        scene.push_lines(layer, lines, style);
        scene
    }

    pub fn push_rect(&mut self, layer: Layer, rect: Rect, style: &StyleMap) {
        self.primitives.push(Primitive::Rect { layer, rect, style: style.clone() });
    }

    pub fn push_line(&mut self, layer: Layer, segment: Segment, style: &StyleMap) {
        self.primitives.push(Primitive::Line { layer, segment, style: style.clone() });
    }

    pub fn push_lines(&mut self, layer: Layer, lines: Vec<Segment>, style: &StyleMap) {
        self.primitives.extend(
            lines.into_iter().map(|segment| Primitive::Line { layer, segment, style: style.clone() }),
        );
    }

    pub fn lines(&self, layer: Layer) -> impl Iterator<Item = &Segment> + '_ {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Line { layer: l, segment, .. } if *l == layer => Some(segment),
            _ => None,
        })
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.primitives.iter().filter(|p| p.layer() == layer).count()
    }

    /// Replay the display list into a backend.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_group(&self.group_attributes, &self.transform);
        for p in &self.primitives {
            match p {
                Primitive::Rect { rect, style, .. } => renderer.rect(*rect, style),
                Primitive::Line { segment, style, .. } => renderer.line(*segment, style),
            }
        }
        renderer.end_group();
    }
}

/// Convenience: the scene for `grid` with every layer styled by `style`; used by benches and quick previews.
pub fn preview_scene(grid: &Grid, distance: f64, minor_number: usize, style: &StyleMap) -> Result<Scene> {
    let mut scene = Scene::default();
    scene.push_rect(Layer::Bounds, grid.bounding_rectangle(), style);
    if let Some(axes) = grid.axes() {
        for segment in axes.segments() {
            scene.push_line(Layer::Axis, segment, style);
        }
    }
    for dir in Direction::BOTH {
        scene.push_lines(Layer::Major, grid.major_lines(distance, false, false, dir)?, style);
    }
    for dir in Direction::BOTH {
        scene.push_lines(Layer::Minor, grid.minor_lines(minor_number, distance, dir)?, style);
    }
    Ok(scene)
}
