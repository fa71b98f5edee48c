//! Runs: undirected edges between junction ports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::junction::JunctionId;
use crate::port::Port;

/// Stable arena index of a run within its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(usize);

impl RunId {
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

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// One end of a run: a specific port on a specific junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// Junction the port belongs to.
    pub junction: JunctionId,
    /// Port on that junction.
    pub port: Port,
}

impl Endpoint {
    /// Creates an endpoint.
    #[must_use]
    pub const fn new(junction: JunctionId, port: Port) -> Self {
        Self { junction, port }
    }
}

/// An undirected edge between exactly two ports.
///
/// Both endpoints reference junctions in the owning track, and each
/// `(junction, port)` pair is the endpoint of exactly one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// User-visible name from the connection spec.
    pub name: String,
    /// The two ends, in spec order.
    pub endpoints: [Endpoint; 2],
}

impl Run {
    /// The end opposite to `from`, or `None` if `from` is not an end of this
    /// run.
    #[must_use]
    pub fn opposite(&self, from: Endpoint) -> Option<Endpoint> {
        if self.endpoints[0] == from {
            Some(self.endpoints[1])
        } else if self.endpoints[1] == from {
            Some(self.endpoints[0])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(junction: usize, port: Port) -> Endpoint {
        Endpoint::new(JunctionId::from_index(junction), port)
    }

    #[test]
    fn opposite_swaps_the_two_ends() {
        let run = Run {
            name: "A".to_string(),
            endpoints: [endpoint(0, Port::Left), endpoint(1, Port::Root)],
        };
        assert_eq!(
            run.opposite(endpoint(0, Port::Left)),
            Some(endpoint(1, Port::Root))
        );
        assert_eq!(
            run.opposite(endpoint(1, Port::Root)),
            Some(endpoint(0, Port::Left))
        );
    }

    #[test]
    fn opposite_rejects_a_foreign_endpoint() {
        let run = Run {
            name: "A".to_string(),
            endpoints: [endpoint(0, Port::Left), endpoint(1, Port::Root)],
        };
        assert_eq!(run.opposite(endpoint(0, Port::Right)), None);
        assert_eq!(run.opposite(endpoint(2, Port::Left)), None);
    }
}
