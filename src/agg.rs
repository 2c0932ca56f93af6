use crate::db::{Dataset, Record};
use crate::float::F64;
use serde::Serialize;
use std::collections::BTreeMap;

// Case-sensitive substring that marks an operation as failed, e.g.
// "TIMEOUT_ERROR".
pub const ERROR_MARKER: &str = "ERROR";

/// Selection predicate over a record's `operation` field. Records without an
/// operation never match.
#[derive(Debug, Clone, Copy)]
pub enum OperationFilter<'a> {
    /// The operation is exactly this string.
    Exactly(&'a str),
    /// The operation contains this case-sensitive substring.
    Contains(&'a str),
}

impl OperationFilter<'_> {
    fn matches(&self, operation: Option<&str>) -> bool {
        match (self, operation) {
            (Self::Exactly(expected), Some(operation)) => {
                operation == *expected
            }
            (Self::Contains(marker), Some(operation)) => {
                operation.contains(marker)
            }
            (_, None) => false,
        }
    }
}

/// The coordinates a dataset is partitioned by. `Ord` is derived so that
/// aggregation output is naturally sorted by (protocol, workload,
/// problem_level).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub protocol: String,
    pub workload: String,
    pub problem_level: usize,
}

/// One summary per group.
///
/// Throughput is additive across the measurement window so `ops_total` is a
/// sum; tail latency is a representative central value so `latency_mean` is a
/// mean. Each row of the input is itself a summary over a benchmark run, so
/// `latency_mean` is a mean of per-run p95 values, not a true percentile over
/// raw requests (those are not available).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub key: GroupKey,
    /// Sum of `ops` over rows matching the operation filter.
    pub ops_total: F64,
    /// Mean of `p95_us` over rows matching the operation filter; NaN when no
    /// row matches.
    pub latency_mean: F64,
    /// Sum of `count` over rows whose operation contains `ERROR_MARKER`,
    /// regardless of the filter.
    pub error_count: u64,
}

impl AggregateRow {
    /// Whether any row of the group matched the operation filter.
    pub fn has_matches(&self) -> bool {
        !self.latency_mean.is_nan()
    }
}

/// Groups the dataset by (protocol, workload, problem_level) and summarizes
/// each group over the rows selected by `filter`. One row is produced per
/// group present in the dataset, in sorted key order.
pub fn aggregate(
    dataset: &Dataset,
    filter: OperationFilter<'_>,
) -> Vec<AggregateRow> {
    // group record indices; the btree map keeps keys sorted
    let mut groups: BTreeMap<GroupKey, Vec<&Record>> = BTreeMap::new();
    for record in dataset.records() {
        let key = GroupKey {
            protocol: record.protocol.clone(),
            workload: record.workload.clone(),
            problem_level: record.problem_level,
        };
        groups.entry(key).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(key, records)| {
            let mut ops_total = 0.0;
            let mut latency_sum = 0.0;
            let mut matched = 0usize;
            let mut error_count = 0u64;

            for record in records {
                if filter.matches(record.operation.as_deref()) {
                    ops_total += record.ops;
                    latency_sum += record.p95_us;
                    matched += 1;
                }
                let is_error = record
                    .operation
                    .as_deref()
                    .map_or(false, |operation| operation.contains(ERROR_MARKER));
                if is_error {
                    error_count += record.count;
                }
            }

            // the mean is undefined when nothing matched
            let latency_mean = if matched == 0 {
                F64::nan()
            } else {
                F64::new(latency_sum / matched as f64)
            };

            AggregateRow {
                key,
                ops_total: F64::new(ops_total),
                latency_mean,
                error_count,
            }
        })
        .collect()
}
