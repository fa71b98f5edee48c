//! The port model: three ports per junction and their fixed exit rules.
//!
//! A junction is a three-port switch. Its two branch sides (`left`, `right`)
//! physically converge to the throat (`root`), so an agent entering at a
//! branch port has its exit forced, while an agent entering at the root must
//! decide which branch to take. The rule is independent of geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three ports of a junction.
///
/// Never an independent entity; always scoped to a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Port {
    /// The left branch side.
    Left,
    /// The right branch side.
    Right,
    /// The throat both branch sides converge to.
    Root,
}

impl Port {
    /// All ports, in the fixed `left`, `right`, `root` order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Root];

    /// The port an agent entering here must leave through, or `None` when
    /// leaving requires a decision.
    ///
    /// # Examples
    ///
    /// ```
    /// use railyard::Port;
    ///
    /// assert_eq!(Port::Left.forced_exit(), Some(Port::Root));
    /// assert_eq!(Port::Right.forced_exit(), Some(Port::Root));
    /// assert_eq!(Port::Root.forced_exit(), None);
    /// ```
    #[must_use]
    pub const fn forced_exit(self) -> Option<Self> {
        match self {
            Self::Left | Self::Right => Some(Self::Root),
            Self::Root => None,
        }
    }

    /// Returns true if an agent entering at this port must decide where to
    /// exit.
    #[must_use]
    pub const fn is_decision_point(self) -> bool {
        matches!(self, Self::Root)
    }

    /// The lowercase name used in endpoint strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Root => "root",
        }
    }

    /// Parses a port from its endpoint-string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "root" => Some(Self::Root),
            _ => None,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
