// File: crates/grid-core/src/grid.rs
// Summary: Grid value object; major/minor tick positions, line projection, axes.
// Notes:
// - Major scanning keeps the legacy boundary tolerance: with `skip_boundary` the
//   upper cutoff moves in by one unit instead of excluding exactly the endpoint.
// - The scan is capped at `span / distance + 10` steps; for valid input the cap
//   never triggers before the cutoff does.
// - A step that no longer advances the cursor (distance below float resolution)
//   ends the scan, keeping the output strictly ascending.

use log::{debug, trace, warn};

use crate::axis::{Axes, Direction};
use crate::config::{MajorSpacing, MinorSpacing, OriginMode, OriginSpec};
use crate::error::{GridError, Result};
use crate::geometry::{Point, Rect, Segment};

/// Positions closer than this to the origin coordinate are dropped by `skip_origin`.
pub const ORIGIN_TOLERANCE: f64 = 1.0;

/// Extra scan steps allowed past `span / distance`.
const SCAN_SLACK_STEPS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    bounds: Rect,
    origin: Option<Point>,
}

impl Grid {
    pub fn new(xmin: f64, ymin: f64, width: f64, height: f64) -> Result<Self> {
        let bounds = Rect::try_from_xywh(xmin, ymin, width, height)
            .map_err(|e| GridError::InvalidGeometry(e.to_string()))?;
        Ok(Self::from_rect(bounds))
    }

    /// Wrap an already-built rectangle; no validation.
    pub fn from_rect(bounds: Rect) -> Self {
        Self { bounds, origin: None }
    }

    pub fn xmin(&self) -> f64 { self.bounds.x }
    pub fn ymin(&self) -> f64 { self.bounds.y }
    pub fn xmax(&self) -> f64 { self.bounds.xmax() }
    pub fn ymax(&self) -> f64 { self.bounds.ymax() }
    pub fn width(&self) -> f64 { self.bounds.width }
    pub fn height(&self) -> f64 { self.bounds.height }

    pub fn bounding_rectangle(&self) -> Rect {
        self.bounds
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    pub fn origin_set(&self) -> bool {
        self.origin.is_some()
    }

    /// Store `point` as the origin. Points outside the rectangle are allowed.
    pub fn set_origin(&mut self, point: Point) {
        debug!("grid origin set to ({}, {})", point.x, point.y);
        self.origin = Some(point);
    }

    /// Place the origin at a proportion of the extent; `(0.5, 0.5)` is the center.
    /// Anchors outside `[0, 1]` extrapolate past the rectangle.
    pub fn anchor_origin(&mut self, anchor: Point) {
        let point = Point::new(
            self.bounds.x + anchor.x * self.bounds.width,
            self.bounds.y + anchor.y * self.bounds.height,
        );
        debug!("grid origin anchored at ({}, {}) -> ({}, {})", anchor.x, anchor.y, point.x, point.y);
        self.origin = Some(point);
    }

    /// Apply a declarative origin request. Requests without a mode or without
    /// both coordinates leave the origin untouched and return `false`.
    pub fn apply_origin(&mut self, request: &OriginSpec) -> bool {
        let (Some(mode), Some(x), Some(y)) = (request.mode, request.x, request.y) else {
            warn!("ignoring incomplete origin request {request:?}");
            return false;
        };
        match mode {
            OriginMode::Set => self.set_origin(Point::new(x, y)),
            OriginMode::Anchor => self.anchor_origin(Point::new(x, y)),
        }
        true
    }

    /// Horizontal and vertical lines through the origin, or `None` while no origin is set.
    pub fn axes(&self) -> Option<Axes> {
        let o = self.origin?;
        Some(Axes {
            horizontal: Segment::new(self.xmin(), o.y, self.xmax(), o.y),
            vertical: Segment::new(o.x, self.ymin(), o.x, self.ymax()),
        })
    }

    /// Major tick positions along `direction`, ascending.
    pub fn majors(
        &self,
        distance: f64,
        skip_boundary: bool,
        skip_origin: bool,
        direction: Direction,
    ) -> Result<Vec<f64>> {
        check_distance(distance)?;
        let (min, max, span) = self.extent(direction);
        let origin = if skip_origin { self.origin.map(|o| coord(o, direction)) } else { None };

        let mut out = Vec::new();
        let mut pos = min;
        let rshift = if skip_boundary { -1.0 } else { 0.0 };
        if !skip_boundary {
            out.push(pos);
        }

        let cap = span / distance + SCAN_SLACK_STEPS;
        let mut step = 0.0;
        while step < cap {
            step += 1.0;
            let next = pos + distance;
            if next <= pos {
                warn!("majors[{direction}] distance={distance} is below float resolution at {pos}, scan stopped");
                break;
            }
            pos = next;
            if pos > max + rshift {
                break;
            }
            if let Some(o) = origin {
                if (pos - o).abs() < ORIGIN_TOLERANCE {
                    continue;
                }
            }
            out.push(pos);
        }
        trace!("majors[{direction}] distance={distance} -> {} positions", out.len());
        Ok(out)
    }

    pub fn majors_with(&self, spacing: &MajorSpacing, direction: Direction) -> Result<Vec<f64>> {
        self.majors(spacing.distance, spacing.skip_boundary, spacing.skip_origin, direction)
    }

    /// `number` evenly spaced positions inside each interval of the unskipped majors.
    pub fn minors(&self, number: usize, distance: f64, direction: Direction) -> Result<Vec<f64>> {
        let majors = self.majors(distance, false, false, direction)?;
        if number == 0 {
            return Ok(Vec::new());
        }
        let step = distance / (number as f64 + 1.0);
        let mut out = Vec::with_capacity(majors.len().saturating_sub(1) * number);
        for pair in majors.windows(2) {
            out.extend(subdivide(pair[0], step, number));
        }
        trace!("minors[{direction}] number={number} distance={distance} -> {} positions", out.len());
        Ok(out)
    }

    pub fn minors_with(&self, spacing: &MinorSpacing, direction: Direction) -> Result<Vec<f64>> {
        self.minors(spacing.number, spacing.distance, direction)
    }

    pub fn major_lines(
        &self,
        distance: f64,
        skip_boundary: bool,
        skip_origin: bool,
        direction: Direction,
    ) -> Result<Vec<Segment>> {
        let positions = self.majors(distance, skip_boundary, skip_origin, direction)?;
        Ok(self.project(&positions, direction))
    }

    pub fn minor_lines(&self, number: usize, distance: f64, direction: Direction) -> Result<Vec<Segment>> {
        let positions = self.minors(number, distance, direction)?;
        Ok(self.project(&positions, direction))
    }

    /// String-keyed variant of [`Grid::major_lines`]. Unknown direction names yield no lines.
    pub fn major_lines_named(
        &self,
        distance: f64,
        skip_boundary: bool,
        skip_origin: bool,
        direction: &str,
    ) -> Result<Vec<Segment>> {
        match Direction::from_name(direction) {
            Some(d) => self.major_lines(distance, skip_boundary, skip_origin, d),
            None => {
                warn!("unknown grid direction '{direction}', no major lines produced");
                Ok(Vec::new())
            }
        }
    }

    /// String-keyed variant of [`Grid::minor_lines`]. Unknown direction names yield no lines.
    pub fn minor_lines_named(&self, number: usize, distance: f64, direction: &str) -> Result<Vec<Segment>> {
        match Direction::from_name(direction) {
            Some(d) => self.minor_lines(number, distance, d),
            None => {
                warn!("unknown grid direction '{direction}', no minor lines produced");
                Ok(Vec::new())
            }
        }
    }

    /// Map scalar positions to full-span segments.
    pub fn project(&self, positions: &[f64], direction: Direction) -> Vec<Segment> {
        positions
            .iter()
            .map(|&p| match direction {
                Direction::X => Segment::new(p, self.ymin(), p, self.ymax()),
                Direction::Y => Segment::new(self.xmin(), p, self.xmax(), p),
            })
            .collect()
    }

    fn extent(&self, direction: Direction) -> (f64, f64, f64) {
        match direction {
            Direction::X => (self.xmin(), self.xmax(), self.width()),
            Direction::Y => (self.ymin(), self.ymax(), self.height()),
        }
    }
}

fn coord(p: Point, direction: Direction) -> f64 {
    match direction {
        Direction::X => p.x,
        Direction::Y => p.y,
    }
}

pub(crate) fn check_distance(distance: f64) -> Result<()> {
    if distance.is_finite() && distance > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidDistance(distance))
    }
}

/// `start + k * step` for `k = 1..=count`.
pub fn subdivide(start: f64, step: f64, count: usize) -> impl Iterator<Item = f64> {
    (1..=count).map(move |k| start + step * k as f64)
}
