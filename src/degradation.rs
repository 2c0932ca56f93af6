use crate::agg::AggregateRow;
use crate::float::F64;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Degradation is always computed over UPDATE operations.
pub const UPDATE_OPERATION: &str = "UPDATE";

// fault levels compared against the baseline
pub const BASELINE_LEVEL: usize = 0;
pub const FAULT_LEVELS: [usize; 2] = [1, 2];

/// Metrics of one fault level relative to the fault-free baseline of the same
/// (protocol, workload) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegradationRow {
    pub protocol: String,
    pub workload: String,
    pub problem_level: usize,
    pub ops_ratio: F64,
    pub latency_ratio: F64,
}

/// Computes degradation ratios from UPDATE aggregates.
///
/// For each (protocol, workload) pair the baseline is its aggregate at
/// problem level 0. Pairs without a baseline produce no output at all; levels
/// without an aggregate are skipped individually, so partial results per pair
/// are allowed. Output is sorted by (protocol, workload, problem_level).
pub fn degradation(update_rows: &[AggregateRow]) -> Vec<DegradationRow> {
    // index the aggregates of each pair by problem level; groups where no
    // UPDATE row matched carry no signal and are treated as absent
    let mut pairs: BTreeMap<(&str, &str), BTreeMap<usize, &AggregateRow>> =
        BTreeMap::new();
    for row in update_rows.iter().filter(|row| row.has_matches()) {
        pairs
            .entry((&row.key.protocol, &row.key.workload))
            .or_default()
            .insert(row.key.problem_level, row);
    }

    let mut result = Vec::new();
    for ((protocol, workload), levels) in pairs {
        let baseline = match levels.get(&BASELINE_LEVEL) {
            Some(baseline) => *baseline,
            None => {
                warn!(
                    "no baseline run for protocol {} workload {}; pair skipped",
                    protocol, workload
                );
                continue;
            }
        };

        for problem_level in FAULT_LEVELS {
            if let Some(current) = levels.get(&problem_level) {
                result.push(DegradationRow {
                    protocol: protocol.to_string(),
                    workload: workload.to_string(),
                    problem_level,
                    ops_ratio: ratio(current.ops_total, baseline.ops_total),
                    latency_ratio: ratio(
                        current.latency_mean,
                        baseline.latency_mean,
                    ),
                });
            }
        }
    }
    result
}

// current / baseline. A baseline of exactly 0 yields 0, which conflates "no
// baseline signal" with "infinite degradation"; accepted approximation.
fn ratio(current: F64, baseline: F64) -> F64 {
    if baseline.value() == 0.0 {
        F64::zero()
    } else {
        F64::new(current.value() / baseline.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agg::{aggregate, OperationFilter};
    use crate::db::{Dataset, Record};

    fn update_record(
        protocol: &str,
        workload: &str,
        problem_level: usize,
        ops: f64,
        p95_us: f64,
    ) -> Record {
        Record {
            protocol: protocol.to_string(),
            workload: workload.to_string(),
            problem_level,
            operation: Some(UPDATE_OPERATION.to_string()),
            ops,
            p95_us,
            count: 0,
        }
    }

    fn update_aggregates(records: Vec<Record>) -> Vec<AggregateRow> {
        let dataset = Dataset::from_records(records);
        aggregate(&dataset, OperationFilter::Exactly(UPDATE_OPERATION))
    }

    #[test]
    fn ratios_against_the_baseline() {
        let rows = update_aggregates(vec![
            update_record("paxos", "a", 0, 100.0, 50.0),
            update_record("paxos", "a", 1, 80.0, 75.0),
            update_record("paxos", "a", 2, 60.0, 120.0),
        ]);

        let degradation = degradation(&rows);
        assert_eq!(degradation.len(), 2);

        assert_eq!(degradation[0].problem_level, 1);
        assert_eq!(degradation[0].ops_ratio, F64::new(0.8));
        assert_eq!(degradation[0].latency_ratio, F64::new(1.5));

        assert_eq!(degradation[1].problem_level, 2);
        assert_eq!(degradation[1].ops_ratio, F64::new(0.6));
        assert_eq!(degradation[1].latency_ratio, F64::new(2.4));
    }

    #[test]
    fn identical_metrics_give_ratio_one() {
        let rows = update_aggregates(vec![
            update_record("paxos", "a", 0, 100.0, 50.0),
            update_record("paxos", "a", 1, 100.0, 50.0),
        ]);

        let degradation = degradation(&rows);
        assert_eq!(degradation.len(), 1);
        assert_eq!(degradation[0].ops_ratio, F64::new(1.0));
        assert_eq!(degradation[0].latency_ratio, F64::new(1.0));
    }

    #[test]
    fn pair_without_baseline_is_skipped_entirely() {
        let rows = update_aggregates(vec![
            // raft/a has levels 1 and 2 but no baseline
            update_record("raft", "a", 1, 80.0, 75.0),
            update_record("raft", "a", 2, 60.0, 120.0),
            // paxos/a is complete
            update_record("paxos", "a", 0, 100.0, 50.0),
            update_record("paxos", "a", 1, 80.0, 75.0),
        ]);

        let degradation = degradation(&rows);
        assert_eq!(degradation.len(), 1);
        assert_eq!(degradation[0].protocol, "paxos");
    }

    #[test]
    fn missing_level_is_skipped_but_pair_still_reported() {
        let rows = update_aggregates(vec![
            update_record("paxos", "a", 0, 100.0, 50.0),
            update_record("paxos", "a", 2, 50.0, 100.0),
        ]);

        let degradation = degradation(&rows);
        assert_eq!(degradation.len(), 1);
        assert_eq!(degradation[0].problem_level, 2);
        assert_eq!(degradation[0].ops_ratio, F64::new(0.5));
        assert_eq!(degradation[0].latency_ratio, F64::new(2.0));
    }

    #[test]
    fn zero_baseline_gives_zero_ratio() {
        let rows = update_aggregates(vec![
            update_record("paxos", "a", 0, 0.0, 50.0),
            update_record("paxos", "a", 1, 80.0, 75.0),
        ]);

        let degradation = degradation(&rows);
        assert_eq!(degradation.len(), 1);
        // baseline ops is 0, so the ratio is the 0 sentinel, not infinity
        assert_eq!(degradation[0].ops_ratio, F64::zero());
        assert_eq!(degradation[0].latency_ratio, F64::new(1.5));
    }

    #[test]
    fn baseline_group_without_update_rows_counts_as_missing() {
        let dataset = Dataset::from_records(vec![
            Record {
                protocol: "paxos".to_string(),
                workload: "a".to_string(),
                problem_level: 0,
                operation: Some("READ".to_string()),
                ops: 100.0,
                p95_us: 50.0,
                count: 0,
            },
            update_record("paxos", "a", 1, 80.0, 75.0),
        ]);
        let rows =
            aggregate(&dataset, OperationFilter::Exactly(UPDATE_OPERATION));

        assert!(degradation(&rows).is_empty());
    }

    #[test]
    fn output_is_sorted_by_protocol_and_workload() {
        let rows = update_aggregates(vec![
            update_record("raft", "a", 0, 100.0, 50.0),
            update_record("raft", "a", 1, 80.0, 75.0),
            update_record("paxos", "b", 0, 100.0, 50.0),
            update_record("paxos", "b", 1, 80.0, 75.0),
            update_record("paxos", "a", 0, 100.0, 50.0),
            update_record("paxos", "a", 1, 80.0, 75.0),
        ]);

        let degradation = degradation(&rows);
        let pairs: Vec<_> = degradation
            .iter()
            .map(|row| (row.protocol.as_str(), row.workload.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("paxos", "a"), ("paxos", "b"), ("raft", "a")]
        );
    }
}
