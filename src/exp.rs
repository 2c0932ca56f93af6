use crate::error::{AnalysisError, AnalysisResult};

// Delimiter the benchmark harness writes between the protocol and the
// workload tokens. The "worloads" misspelling comes from the harness itself.
const WORKLOAD_DELIMITER: &str = "_worloads_";

/// The (protocol, workload) coordinates of an experiment, extracted from its
/// raw identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpId {
    pub protocol: String,
    pub workload: String,
}

impl ExpId {
    /// Parses a raw experiment identifier such as `paxos_worloads_a_3nodes`.
    ///
    /// The protocol token is everything before the delimiter (normalized, see
    /// `normalize_protocol`); the workload token is the segment right after
    /// the delimiter, up to the next `'_'`.
    pub fn parse(experiment: &str) -> AnalysisResult<Self> {
        let (protocol, rest) = experiment
            .split_once(WORKLOAD_DELIMITER)
            .ok_or_else(|| AnalysisError::MalformedIdentifier {
                experiment: experiment.to_string(),
            })?;
        let workload = match rest.split_once('_') {
            Some((workload, _)) => workload,
            None => rest,
        };
        Ok(Self {
            protocol: normalize_protocol(protocol).to_string(),
            workload: workload.to_string(),
        })
    }
}

/// Maps a raw protocol token to its canonical name.
///
/// The cockroach runs exercise its raft-based replication layer, so they are
/// reported as raft; every other token passes through unchanged.
pub fn normalize_protocol(protocol: &str) -> &str {
    match protocol {
        "cockroach" => "raft",
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let id = ExpId::parse("paxos_worloads_a_3nodes").expect("should parse");
        assert_eq!(id.protocol, "paxos");
        assert_eq!(id.workload, "a");

        // workload token may be the last segment
        let id = ExpId::parse("accord_worloads_h").expect("should parse");
        assert_eq!(id.protocol, "accord");
        assert_eq!(id.workload, "h");
    }

    #[test]
    fn parse_normalizes_the_protocol() {
        let id = ExpId::parse("cockroach_worloads_b_y").expect("should parse");
        assert_eq!(id.protocol, "raft");
        assert_eq!(id.workload, "b");
    }

    #[test]
    fn parse_without_delimiter_fails() {
        let err = ExpId::parse("paxos_workloads_a")
            .expect_err("missing delimiter should be reported");
        assert!(matches!(
            err,
            AnalysisError::MalformedIdentifier { experiment } if experiment == "paxos_workloads_a"
        ));
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_protocol("cockroach"), "raft");
        assert_eq!(normalize_protocol("raft"), "raft");
        assert_eq!(normalize_protocol("paxos"), "paxos");
        assert_eq!(normalize_protocol("accord"), "accord");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn parse_is_pure(experiment: String) -> bool {
        let first = ExpId::parse(&experiment).ok();
        let second = ExpId::parse(&experiment).ok();
        first == second
    }

    #[quickcheck]
    fn normalization_is_idempotent(protocol: String) -> bool {
        let once = normalize_protocol(&protocol);
        normalize_protocol(once) == once
    }
}
