//! Decision-driven traversal simulation.
//!
//! The simulator walks a read-only track, alternating between two phases:
//! applying the exit rule inside the current junction and crossing the run
//! attached to the exit port. Decisions at root ports follow a fixed policy:
//! the first visit exits left, the second exits right, later visits choose
//! pseudo-randomly. Traversal succeeds once every junction has decided both
//! ways at least once, and fails the moment a forced re-entry proves no new
//! decision can ever be made.

mod limits;

pub use limits::TraversalLimits;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::TrackResult;
use crate::junction::JunctionId;
use crate::port::Port;
use crate::run::Endpoint;
use crate::track::Track;

/// Outcome of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Every junction's root decision has been exercised both ways.
    Covered,
    /// The agent can no longer make progress.
    Stuck {
        /// Junction where the traversal ended.
        junction: String,
        /// Port at which the agent entered it.
        port: Port,
        /// Why the traversal gave up.
        cause: StuckCause,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Covered`].
    #[must_use]
    pub const fn is_covered(&self) -> bool {
        matches!(self, Self::Covered)
    }
}

/// Why a traversal reported [`Verdict::Stuck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StuckCause {
    /// The agent re-entered a forced port with no decision made anywhere in
    /// the network since its last visit: proof of an inescapable forced
    /// cycle.
    ForcedCycle,
    /// The decision budget ran out before coverage. The topology admits
    /// endless movement without ever exercising every decision.
    DecisionBudget,
}

/// One visited position, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    /// Junction name.
    pub junction: String,
    /// Port the agent entered at. The synthetic start counts as a root
    /// entry.
    pub port: Port,
}

/// Full result of a traversal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// The verdict.
    pub verdict: Verdict,
    /// Total decisions made.
    pub decisions: u64,
    /// Ordered entry trace; empty unless recording was enabled.
    pub trace: Vec<Visit>,
}

/// Configurable traversal over a read-only track.
///
/// Each run owns its decision and entry logs exclusively, so several
/// traversals may analyze the same track in parallel under different seeds.
///
/// # Examples
///
/// ```rust,ignore
/// let report = Traversal::new(&track).seed(42).record_trace(true).run()?;
/// ```
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    track: &'a Track,
    seed: u64,
    limits: TraversalLimits,
    record_trace: bool,
}

impl<'a> Traversal<'a> {
    /// Creates a traversal of `track` with seed 0 and default limits.
    #[must_use]
    pub fn new(track: &'a Track) -> Self {
        Self {
            track,
            seed: 0,
            limits: TraversalLimits::default(),
            record_trace: false,
        }
    }

    /// Seeds the tie-breaking RNG; identical seeds replay identical walks.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the default limits.
    #[must_use]
    pub fn limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Records the ordered `(junction, port)` entry trace in the report.
    #[must_use]
    pub fn record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Runs the traversal to a verdict.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if the limits are invalid or a step lands on a
    /// port with no run to cross (violated degree invariant).
    pub fn run(self) -> TrackResult<TraversalReport> {
        self.limits.validate()?;
        Simulator::new(self.track, self.seed, self.limits, self.record_trace).run()
    }
}

/// Simulates a single traversal; see [`Traversal`].
///
/// # Errors
///
/// Same as [`Traversal::run`].
pub fn traverse(track: &Track, seed: u64) -> TrackResult<TraversalReport> {
    Traversal::new(track).seed(seed).run()
}

/// Mutable traversal state, owned per run and discarded afterwards.
struct Simulator<'a> {
    track: &'a Track,
    rng: StdRng,
    budget: u64,
    record_trace: bool,
    /// Decisions made at each junction so far.
    decision_log: HashMap<JunctionId, u32>,
    /// Global decision count at the last branch-port entry of each junction.
    entry_log: HashMap<JunctionId, u64>,
    decisions: u64,
    trace: Vec<Visit>,
}

impl<'a> Simulator<'a> {
    fn new(track: &'a Track, seed: u64, limits: TraversalLimits, record_trace: bool) -> Self {
        Self {
            track,
            rng: StdRng::seed_from_u64(seed),
            budget: limits.decision_budget(track.junction_count()),
            record_trace,
            decision_log: HashMap::new(),
            entry_log: HashMap::new(),
            decisions: 0,
            trace: Vec::new(),
        }
    }

    fn run(mut self) -> TrackResult<TraversalReport> {
        // Start at the root of the first junction in creation order.
        let Some(start) = self.track.junction_ids().next() else {
            // Coverage over zero junctions holds vacuously.
            return Ok(self.report(Verdict::Covered));
        };
        debug!(
            start = self.track.junction_name(start),
            budget = self.budget,
            "traversal started"
        );

        let mut at = Endpoint::new(start, Port::Root);
        loop {
            self.record(at);
            let exit = match at.port.forced_exit() {
                Some(forced) => {
                    // Stuck check before forcing the exit: an unchanged
                    // decision count since the last branch entry here means
                    // the agent is cycling through forced edges.
                    if self.entry_log.get(&at.junction) == Some(&self.decisions) {
                        return Ok(self.stuck(at, StuckCause::ForcedCycle));
                    }
                    self.entry_log.insert(at.junction, self.decisions);
                    forced
                }
                None => {
                    let chosen = self.decide(at.junction);
                    if self.fully_covered() {
                        return Ok(self.report(Verdict::Covered));
                    }
                    if self.decisions >= self.budget {
                        return Ok(self.stuck(at, StuckCause::DecisionBudget));
                    }
                    chosen
                }
            };
            at = self.track.cross(Endpoint::new(at.junction, exit))?;
        }
    }

    /// Applies the decision policy at a root entry and logs the decision.
    fn decide(&mut self, junction: JunctionId) -> Port {
        let count = self.decision_log.entry(junction).or_insert(0);
        let exit = match *count {
            0 => Port::Left,
            1 => Port::Right,
            _ => {
                if self.rng.gen_bool(0.5) {
                    Port::Left
                } else {
                    Port::Right
                }
            }
        };
        *count += 1;
        self.decisions += 1;
        trace!(
            junction = self.track.junction_name(junction),
            %exit,
            total = self.decisions,
            "decision"
        );
        exit
    }

    /// True once every junction's root decision went both ways.
    fn fully_covered(&self) -> bool {
        self.track
            .junction_ids()
            .all(|id| self.decision_log.get(&id).is_some_and(|count| *count >= 2))
    }

    fn record(&mut self, at: Endpoint) {
        if self.record_trace {
            self.trace.push(Visit {
                junction: self.track.junction_name(at.junction).to_string(),
                port: at.port,
            });
        }
    }

    fn stuck(&mut self, at: Endpoint, cause: StuckCause) -> TraversalReport {
        let verdict = Verdict::Stuck {
            junction: self.track.junction_name(at.junction).to_string(),
            port: at.port,
            cause,
        };
        self.report(verdict)
    }

    fn report(&mut self, verdict: Verdict) -> TraversalReport {
        debug!(?verdict, decisions = self.decisions, "traversal finished");
        TraversalReport {
            verdict,
            decisions: self.decisions,
            trace: std::mem::take(&mut self.trace),
        }
    }
}
