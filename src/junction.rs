//! Junction types and identity.
//!
//! Junctions are the only nodes in a track. Each is created exactly once per
//! distinct name encountered while building, is never destroyed during
//! analysis, and is owned exclusively by its track.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Placement, Point};
use crate::port::Port;

/// Stable arena index of a junction within its track.
///
/// Runs reference junctions through this index, never by direct ownership,
/// so the graph holds no reference cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JunctionId(usize);

impl JunctionId {
    /// Creates an ID from a raw arena index.
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "junction#{}", self.0)
    }
}

/// A three-port switch.
///
/// Identity is the unique user-visible name, the stable key within a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    /// Unique name from the connection spec.
    pub name: String,
    /// Render placement; irrelevant to topology.
    pub placement: Placement,
}

impl Junction {
    /// Creates a junction with the deterministic auto placement for the
    /// `index`-th creation slot.
    #[must_use]
    pub(crate) fn auto_placed(name: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            placement: Placement::auto(index),
        }
    }

    /// Mirrors the left/right branch sides.
    ///
    /// Only geometry changes; exit rules and connectivity are unaffected.
    pub fn swap(&mut self) {
        self.placement.swapped = !self.placement.swapped;
    }

    /// Resolved position of one of this junction's ports, for the renderer.
    #[must_use]
    pub fn port_position(&self, port: Port) -> Point {
        self.placement.port_position(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_expose_their_index() {
        let id = JunctionId::from_index(3);
        assert_eq!(id.index(), 3);
        assert_eq!(format!("{id}"), "junction#3");
    }

    #[test]
    fn auto_placed_junctions_are_deterministic() {
        let a = Junction::auto_placed("j1", 0);
        let b = Junction::auto_placed("j1", 0);
        assert_eq!(a, b);
        assert_eq!(a.name, "j1");
    }

    #[test]
    fn swap_toggles_only_the_placement() {
        let mut junction = Junction::auto_placed("j1", 0);
        let left_before = junction.port_position(Port::Left);
        junction.swap();
        assert!(junction.placement.swapped);
        assert_eq!(junction.port_position(Port::Right), left_before);
        junction.swap();
        assert!(!junction.placement.swapped);
        assert_eq!(junction.port_position(Port::Left), left_before);
    }
}
