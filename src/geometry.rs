//! Junction placement and port coordinate resolution.
//!
//! The analysis core never needs coordinates. Placements exist for the
//! renderer collaborator, which consumes resolved port positions and may
//! reposition or swap junctions without ever touching topology. Curve
//! interpolation between resolved endpoints is the renderer's job and is
//! deliberately absent here.

use serde::{Deserialize, Serialize};

use crate::port::Port;

/// Lateral distance from a junction's root to each branch port.
const BRANCH_HALF_WIDTH: f64 = 0.5;

/// Forward distance from a junction's root to the branch ports.
const BRANCH_REACH: f64 = 1.0;

/// Horizontal spacing between auto-placed junctions.
const AUTO_GRID_STEP: f64 = 3.0;

/// A point in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point rotated around the origin by `degrees`, counterclockwise.
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// This point translated by `offset`.
    #[must_use]
    pub fn translated(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

/// Where a junction sits and which way it opens.
///
/// Irrelevant to the graph: exit rules and connectivity never consult a
/// placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position of the root port.
    pub position: Point,
    /// Direction the junction opens toward, in degrees.
    pub orientation_deg: f64,
    /// Mirrors the left/right branch sides.
    pub swapped: bool,
}

impl Placement {
    /// Deterministic placeholder placement for the `index`-th junction
    /// created while building a track.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn auto(index: usize) -> Self {
        Self {
            position: Point::new(AUTO_GRID_STEP * index as f64, 0.0),
            orientation_deg: 0.0,
            swapped: false,
        }
    }

    /// Resolves the position of one port under this placement.
    ///
    /// The root port is the placement position itself. Branch ports sit at
    /// fixed local offsets rotated by the junction's orientation; `swapped`
    /// mirrors the lateral component.
    #[must_use]
    pub fn port_position(&self, port: Port) -> Point {
        let side = if self.swapped { -1.0 } else { 1.0 };
        let local = match port {
            Port::Root => return self.position,
            Port::Left => Point::new(-BRANCH_HALF_WIDTH * side, BRANCH_REACH),
            Port::Right => Point::new(BRANCH_HALF_WIDTH * side, BRANCH_REACH),
        };
        local.rotated(self.orientation_deg).translated(self.position)
    }
}
