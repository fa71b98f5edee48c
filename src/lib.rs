//! # Railyard - track topology coverage analysis
//!
//! Railyard models a network of three-port track junctions (`left`, `right`,
//! `root`) connected by named runs, and decides whether a single traveling
//! agent can keep exploring the whole network indefinitely or must eventually
//! get trapped on a forced cycle.
//!
//! ## Core Concepts
//!
//! - **Junction**: a three-port switch whose branch sides always converge to
//!   its root; entering at the root is a decision between the branches
//! - **Run**: an undirected edge between exactly two junction ports
//! - **Track**: the arena owning all junctions and runs, built once from a
//!   [`TrackSpec`] and read-only during analysis
//! - **Verdicts**: [`Verdict::Covered`] / [`Verdict::Stuck`] from the dynamic
//!   simulator, [`LoopVerdict`] from the static loop finder
//!
//! ## Usage
//!
//! ```rust,ignore
//! use railyard::{find_loops, Track, TrackSpec, Traversal};
//!
//! let spec = TrackSpec::new()
//!     .connect("A", "j1.left", "j1.right")
//!     .connect("B", "j2.root", "j1.root")
//!     .connect("C", "j2.right", "j2.left");
//!
//! let track = Track::build(&spec)?;
//! let report = Traversal::new(&track).seed(42).run()?;
//! assert!(report.verdict.is_covered());
//! assert!(find_loops(&track).is_safe());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod geometry;
pub mod junction;
pub mod loops;
pub mod port;
pub mod run;
pub mod spec;
pub mod track;
pub mod traverse;

// Re-export primary types at crate root for convenience
pub use error::{ConfigurationError, TrackResult};
pub use geometry::{Placement, Point};
pub use junction::{Junction, JunctionId};
pub use loops::{find_loops, loop_report, LoopVerdict};
pub use port::Port;
pub use run::{Endpoint, Run, RunId};
pub use spec::TrackSpec;
pub use track::Track;
pub use traverse::{
    traverse, StuckCause, Traversal, TraversalLimits, TraversalReport, Verdict, Visit,
};
