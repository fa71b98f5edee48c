//! Static first-order loop detection.
//!
//! For each junction, follow the chain of forced transitions starting at its
//! root: cross the run at the root, and wherever a branch port is reached,
//! take the forced exit back to that junction's root and keep going. Reaching
//! any root port means a decision point interrupts the chain; returning to
//! the origin junction through a branch port proves a mandatory cycle no
//! decision can ever escape.
//!
//! The check is deliberately partial: it catches first-order forced loops
//! only. Stuck configurations mediated by decisions are invisible here and
//! are left to the traversal simulator, which is the source of truth.

use serde::Serialize;
use tracing::debug;

use crate::junction::JunctionId;
use crate::port::Port;
use crate::run::Endpoint;
use crate::track::Track;

/// Outcome of the static loop check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum LoopVerdict {
    /// No first-order forced loop exists.
    Safe,
    /// A mandatory cycle passes through `junction`.
    LoopFound {
        /// First looping junction in creation order.
        junction: String,
    },
}

impl LoopVerdict {
    /// Returns true for [`LoopVerdict::Safe`].
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }
}

/// Checks every junction for first-order forced loops.
///
/// Reports the first looping junction in creation order, or `Safe`. The
/// track is read-only throughout, so repeated calls yield identical results.
#[must_use]
pub fn find_loops(track: &Track) -> LoopVerdict {
    for id in track.junction_ids() {
        if junction_loops(track, id) {
            let junction = track.junction_name(id).to_string();
            debug!(%junction, "first-order forced loop");
            return LoopVerdict::LoopFound { junction };
        }
    }
    LoopVerdict::Safe
}

/// Names of all junctions on a first-order forced loop, in creation order.
#[must_use]
pub fn loop_report(track: &Track) -> Vec<String> {
    track
        .junction_ids()
        .filter(|&id| junction_loops(track, id))
        .map(|id| track.junction_name(id).to_string())
        .collect()
}

/// Follows the forced chain out of `origin`'s root.
///
/// A chain longer than the junction count must be revisiting junctions, so
/// the walk is bounded by `|junctions|` crossings.
fn junction_loops(track: &Track, origin: JunctionId) -> bool {
    let mut at = Endpoint::new(origin, Port::Root);
    for _ in 0..track.junction_count() {
        let Ok(reached) = track.cross(at) else {
            // Dangling root: nothing to follow, no loop through here.
            return false;
        };
        if reached.port.is_decision_point() {
            // The chain runs into a decision; the agent can escape.
            return false;
        }
        if reached.junction == origin {
            return true;
        }
        at = Endpoint::new(reached.junction, Port::Root);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::TrackSpec;

    fn build(spec: TrackSpec) -> Track {
        Track::build(&spec).unwrap()
    }

    #[test]
    fn figure_eight_loops_are_safe() {
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.left", "j1.right")
                .connect("B", "j2.root", "j1.root")
                .connect("C", "j2.right", "j2.left"),
        );
        assert_eq!(find_loops(&track), LoopVerdict::Safe);
    }

    #[test]
    fn cross_wired_pair_has_a_forced_loop() {
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.left", "j2.right")
                .connect("B", "j1.right", "j2.root")
                .connect("C", "j1.root", "j2.left"),
        );
        let LoopVerdict::LoopFound { junction } = find_loops(&track) else {
            panic!("expected LoopFound");
        };
        assert_eq!(junction, "j1");
    }

    #[test]
    fn loop_report_lists_every_looping_junction() {
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.left", "j2.right")
                .connect("B", "j1.right", "j2.root")
                .connect("C", "j1.root", "j2.left"),
        );
        assert_eq!(loop_report(&track), vec!["j1", "j2"]);
    }

    #[test]
    fn root_to_root_runs_end_the_chain() {
        // Both roots meet a decision point after one crossing.
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.left", "j2.left")
                .connect("B", "j1.right", "j2.right")
                .connect("C", "j1.root", "j2.root"),
        );
        assert_eq!(find_loops(&track), LoopVerdict::Safe);
        assert!(loop_report(&track).is_empty());
    }

    #[test]
    fn dangling_root_terminates_the_chain() {
        let track = build(TrackSpec::new().connect("A", "j1.left", "j1.right"));
        assert_eq!(find_loops(&track), LoopVerdict::Safe);
    }

    #[test]
    fn chain_is_bounded_by_the_junction_count() {
        // j1.root feeds a forced chain that gets caught in the j2/j3 cycle
        // and never returns to j1: only the crossing bound ends that chase.
        // The cycle itself is still reported, through j2 first.
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.root", "j2.left")
                .connect("B", "j2.root", "j3.left")
                .connect("C", "j3.root", "j2.right")
                .connect("D", "j1.left", "j1.right"),
        );
        assert_eq!(
            find_loops(&track),
            LoopVerdict::LoopFound {
                junction: "j2".to_string()
            }
        );
        assert_eq!(loop_report(&track), vec!["j2", "j3"]);
    }

    #[test]
    fn find_loops_is_idempotent() {
        let track = build(
            TrackSpec::new()
                .connect("A", "j1.left", "j2.right")
                .connect("B", "j1.right", "j2.root")
                .connect("C", "j1.root", "j2.left"),
        );
        assert_eq!(find_loops(&track), find_loops(&track));
    }
}
