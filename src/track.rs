//! Track topology: the arena that owns junctions and runs.
//!
//! A track is built once from a [`TrackSpec`] and is read-only during
//! analysis; several traversals may analyze the same track in parallel as
//! long as each owns its own state.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConfigurationError, TrackResult};
use crate::geometry::Point;
use crate::junction::{Junction, JunctionId};
use crate::port::Port;
use crate::run::{Endpoint, Run, RunId};
use crate::spec::{self, TrackSpec};

/// A network of junctions connected by runs.
///
/// Junctions and runs live in growable tables; runs reference junctions by
/// stable index, so the graph owns no reference cycles. The junction table
/// is additionally keyed by name for spec resolution.
#[derive(Debug, Clone, Default)]
pub struct Track {
    junctions: Vec<Junction>,
    by_name: HashMap<String, JunctionId>,
    runs: Vec<Run>,
    /// The unique run attached to each connected port.
    port_runs: HashMap<Endpoint, RunId>,
}

impl Track {
    /// Builds a track from a connection specification.
    ///
    /// Junctions are created lazily on first reference, in the spec's
    /// deterministic iteration order, never duplicating a name.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if an endpoint cannot be parsed, names a port
    /// outside `{left, right, root}`, or claims a port that another run
    /// already connects. A port left without any run is accepted here and
    /// surfaces the moment an analysis needs the missing run.
    pub fn build(spec: &TrackSpec) -> TrackResult<Self> {
        let mut track = Self::default();
        for (run_name, a, b) in spec.iter() {
            spec::validate_run_name(run_name)?;
            let a = track.resolve(a)?;
            let b = track.resolve(b)?;
            track.link(run_name, a, b)?;
        }
        debug!(
            junctions = track.junctions.len(),
            runs = track.runs.len(),
            "track built"
        );
        Ok(track)
    }

    /// Number of junctions.
    #[must_use]
    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    /// Number of runs.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Junction IDs in creation order.
    pub fn junction_ids(&self) -> impl Iterator<Item = JunctionId> + '_ {
        (0..self.junctions.len()).map(JunctionId::from_index)
    }

    /// Junctions in creation order.
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.junctions.iter()
    }

    /// Runs in creation order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.runs.iter()
    }

    /// Looks up a junction ID by name.
    #[must_use]
    pub fn junction_by_name(&self, name: &str) -> Option<JunctionId> {
        self.by_name.get(name).copied()
    }

    /// The junction behind an ID issued by this track.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this track.
    #[must_use]
    pub fn junction(&self, id: JunctionId) -> &Junction {
        &self.junctions[id.index()]
    }

    /// Mutable junction access for the renderer collaborator.
    ///
    /// Junctions carry no connectivity, so repositioning or swapping through
    /// this handle cannot alter analysis results.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this track.
    pub fn junction_mut(&mut self, id: JunctionId) -> &mut Junction {
        &mut self.junctions[id.index()]
    }

    /// The name of a junction.
    #[must_use]
    pub fn junction_name(&self, id: JunctionId) -> &str {
        &self.junctions[id.index()].name
    }

    /// The run attached to a port, if any.
    #[must_use]
    pub fn run_at(&self, end: Endpoint) -> Option<&Run> {
        self.port_runs.get(&end).map(|id| &self.runs[id.index()])
    }

    /// Crosses the unique run at `from`, yielding the opposite endpoint.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::MissingRun` when the port is unconnected: the
    /// port-degree invariant was violated upstream.
    pub fn cross(&self, from: Endpoint) -> TrackResult<Endpoint> {
        let Some(&run_id) = self.port_runs.get(&from) else {
            return Err(ConfigurationError::MissingRun {
                junction: self.junction_name(from.junction).to_string(),
                port: from.port,
            });
        };
        let [a, b] = self.runs[run_id.index()].endpoints;
        Ok(if a == from { b } else { a })
    }

    /// Strict audit that every port of every junction has exactly one run.
    ///
    /// [`Track::build`] already rejects double connections, so this reports
    /// the first unconnected port in creation order, if any.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::MissingRun` naming the first unconnected port.
    pub fn check_complete(&self) -> TrackResult<()> {
        for id in self.junction_ids() {
            for port in Port::ALL {
                if !self.port_runs.contains_key(&Endpoint::new(id, port)) {
                    return Err(ConfigurationError::MissingRun {
                        junction: self.junction_name(id).to_string(),
                        port,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolved coordinate of one port, for the renderer.
    #[must_use]
    pub fn port_position(&self, end: Endpoint) -> Point {
        self.junction(end.junction).port_position(end.port)
    }

    /// Resolved coordinates of a run's two endpoints, for the renderer.
    #[must_use]
    pub fn run_positions(&self, run: &Run) -> (Point, Point) {
        let [a, b] = run.endpoints;
        (self.port_position(a), self.port_position(b))
    }

    fn resolve(&mut self, endpoint: &str) -> TrackResult<Endpoint> {
        let parsed = spec::parse_endpoint(endpoint)?;
        let junction = self.junction_or_create(&parsed.junction);
        Ok(Endpoint::new(junction, parsed.port))
    }

    fn junction_or_create(&mut self, name: &str) -> JunctionId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let index = self.junctions.len();
        let id = JunctionId::from_index(index);
        self.junctions.push(Junction::auto_placed(name, index));
        self.by_name.insert(name.to_string(), id);
        id
    }

    fn link(&mut self, name: &str, a: Endpoint, b: Endpoint) -> TrackResult<()> {
        if a == b {
            return Err(ConfigurationError::PortAlreadyConnected {
                junction: self.junction_name(a.junction).to_string(),
                port: a.port,
                existing: name.to_string(),
                duplicate: name.to_string(),
            });
        }
        for end in [a, b] {
            if let Some(&existing) = self.port_runs.get(&end) {
                return Err(ConfigurationError::PortAlreadyConnected {
                    junction: self.junction_name(end.junction).to_string(),
                    port: end.port,
                    existing: self.runs[existing.index()].name.clone(),
                    duplicate: name.to_string(),
                });
            }
        }
        let id = RunId::from_index(self.runs.len());
        self.port_runs.insert(a, id);
        self.port_runs.insert(b, id);
        self.runs.push(Run {
            name: name.to_string(),
            endpoints: [a, b],
        });
        Ok(())
    }
}
