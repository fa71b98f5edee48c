//! The connection specification: the crate's external input boundary.
//!
//! A spec maps run names to endpoint pairs written `"<junction>.<port>"`.
//! Keys are held in a `BTreeMap` so junction auto-creation order is
//! deterministic regardless of how the caller assembled the mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, TrackResult};
use crate::port::Port;

/// Conservative upper bound for junction and run names.
///
/// A safety limit defending the embedded boundary against unbounded input.
pub const MAX_NAME_LEN: usize = 256;

/// A parsed-but-unresolved endpoint reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRef {
    /// Referenced junction name.
    pub junction: String,
    /// Referenced port.
    pub port: Port,
}

/// Connection specification: run name to endpoint pair.
///
/// Serializes as exactly the external JSON shape:
///
/// ```json
/// {"A": ["j1.left", "j2.right"], "B": ["j1.right", "j2.root"]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackSpec(BTreeMap<String, (String, String)>);

impl TrackSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a spec from its JSON form.
    pub fn from_json(json: &str) -> TrackResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidSpec {
            reason: e.to_string(),
        })
    }

    /// Adds a run connecting two endpoints written `"<junction>.<port>"`.
    ///
    /// Replaces any pair previously recorded under `run`.
    #[must_use]
    pub fn connect(
        mut self,
        run: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) -> Self {
        self.0.insert(run.into(), (a.into(), b.into()));
        self
    }

    /// Number of runs in the spec.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the spec holds no runs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(run, endpoint, endpoint)` triples in deterministic name
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.0
            .iter()
            .map(|(name, (a, b))| (name.as_str(), a.as_str(), b.as_str()))
    }
}

/// Validates a run name from the spec.
pub(crate) fn validate_run_name(name: &str) -> TrackResult<()> {
    if name.trim().is_empty() {
        return Err(ConfigurationError::EmptyRunName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ConfigurationError::NameTooLong {
            name: name.to_string(),
            max_length: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Parses an endpoint reference of the form `"<junction>.<left|right|root>"`.
///
/// Splits at the first `.`; junction names cannot contain dots.
pub(crate) fn parse_endpoint(endpoint: &str) -> TrackResult<EndpointRef> {
    let Some((junction, port_name)) = endpoint.split_once('.') else {
        return Err(ConfigurationError::MalformedEndpoint {
            endpoint: endpoint.to_string(),
        });
    };
    if junction.trim().is_empty() {
        return Err(ConfigurationError::EmptyJunctionName {
            endpoint: endpoint.to_string(),
        });
    }
    if junction.len() > MAX_NAME_LEN {
        return Err(ConfigurationError::NameTooLong {
            name: junction.to_string(),
            max_length: MAX_NAME_LEN,
        });
    }
    let Some(port) = Port::from_name(port_name) else {
        return Err(ConfigurationError::UnknownPort {
            endpoint: endpoint.to_string(),
            port: port_name.to_string(),
        });
    };
    Ok(EndpointRef {
        junction: junction.to_string(),
        port,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_endpoints() {
        let parsed = parse_endpoint("j1.left").unwrap();
        assert_eq!(parsed.junction, "j1");
        assert_eq!(parsed.port, Port::Left);

        let parsed = parse_endpoint("siding_7.root").unwrap();
        assert_eq!(parsed.junction, "siding_7");
        assert_eq!(parsed.port, Port::Root);
    }

    #[test]
    fn rejects_endpoint_without_separator() {
        let err = parse_endpoint("j1left").unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedEndpoint { .. }));
    }

    #[test]
    fn rejects_unknown_port_names() {
        let err = parse_endpoint("j1.up").unwrap_err();
        let ConfigurationError::UnknownPort { port, .. } = err else {
            panic!("expected UnknownPort");
        };
        assert_eq!(port, "up");
    }

    #[test]
    fn dotted_junction_names_surface_as_unknown_ports() {
        // Splitting happens at the first dot, matching the endpoint grammar.
        let err = parse_endpoint("yard.north.left").unwrap_err();
        let ConfigurationError::UnknownPort { port, .. } = err else {
            panic!("expected UnknownPort");
        };
        assert_eq!(port, "north.left");
    }

    #[test]
    fn rejects_empty_junction_name() {
        let err = parse_endpoint(".left").unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyJunctionName { .. }));
    }

    #[test]
    fn rejects_oversized_names() {
        let long = "j".repeat(MAX_NAME_LEN + 1);
        let err = parse_endpoint(&format!("{long}.left")).unwrap_err();
        assert!(matches!(err, ConfigurationError::NameTooLong { .. }));
        let err = validate_run_name(&long).unwrap_err();
        assert!(matches!(err, ConfigurationError::NameTooLong { .. }));
    }

    #[test]
    fn run_names_must_be_non_empty() {
        assert!(matches!(
            validate_run_name("  "),
            Err(ConfigurationError::EmptyRunName)
        ));
        assert!(validate_run_name("A").is_ok());
    }

    #[test]
    fn deserializes_the_external_json_shape() {
        let spec = TrackSpec::from_json(
            r#"{"A": ["j1.left", "j2.right"], "B": ["j1.right", "j2.root"]}"#,
        )
        .unwrap();
        assert_eq!(spec.len(), 2);
        let runs: Vec<_> = spec.iter().collect();
        assert_eq!(runs[0], ("A", "j1.left", "j2.right"));
        assert_eq!(runs[1], ("B", "j1.right", "j2.root"));
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let err = TrackSpec::from_json("{\"A\": [\"j1.left\"]}").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSpec { .. }));
        assert!(err.is_parse());
    }

    #[test]
    fn iteration_order_ignores_insertion_order() {
        let spec = TrackSpec::new()
            .connect("C", "j2.right", "j2.left")
            .connect("A", "j1.left", "j1.right")
            .connect("B", "j2.root", "j1.root");
        let names: Vec<_> = spec.iter().map(|(name, _, _)| name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
