// File: crates/grid-core/src/axis.rs
// Summary: Grid direction selector and the axis pair drawn through the origin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::geometry::Segment;

/// Which coordinate a position sequence runs along.
/// `X` positions become vertical lines, `Y` positions horizontal lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    X,
    Y,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::X, Direction::Y];

    /// Lenient lookup used by the string-keyed line API; exact "x"/"y" only.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Direction::X),
            "y" => Some(Direction::Y),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::X => "x",
            Direction::Y => "y",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_name(s).ok_or_else(|| GridError::UnknownDirection(s.to_string()))
    }
}

/// Horizontal and vertical axis lines through the grid origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub horizontal: Segment,
    pub vertical: Segment,
}

impl Axes {
    /// Horizontal first, matching draw order.
    pub fn segments(&self) -> [Segment; 2] {
        [self.horizontal, self.vertical]
    }
}
