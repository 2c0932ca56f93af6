use crate::agg::{aggregate, AggregateRow, OperationFilter};
use crate::db::Dataset;
use crate::degradation::{degradation, DegradationRow, UPDATE_OPERATION};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the plotting layer needs, partitioned per workload. The core's
/// contract ends here: charts, colors and layout are the plotting layer's
/// problem.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub workloads: Vec<WorkloadSummary>,
}

/// The numeric tables of one workload.
#[derive(Debug, Serialize)]
pub struct WorkloadSummary {
    pub workload: String,
    /// UPDATE throughput, mean p95 latency and error counts per
    /// (protocol, problem_level).
    pub absolute: Vec<AggregateRow>,
    /// Per-level metrics relative to the fault-free baseline.
    pub degradation: Vec<DegradationRow>,
    /// The p95 of every UPDATE row, as measured.
    pub update_latencies: Vec<UpdateLatency>,
}

/// One raw UPDATE measurement, kept for the absolute-latency listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateLatency {
    pub protocol: String,
    pub problem_level: usize,
    pub p95_us: f64,
}

impl Summary {
    /// Derives all per-workload tables from a loaded dataset. Workloads are
    /// reported in sorted order; the tables inherit the sorted order of the
    /// aggregation and degradation passes.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let absolute =
            aggregate(dataset, OperationFilter::Exactly(UPDATE_OPERATION));
        let degradation = degradation(&absolute);

        // partition both tables per workload
        let mut workloads: BTreeMap<String, WorkloadSummary> = BTreeMap::new();

        for row in absolute {
            let workload = row.key.workload.clone();
            entry(&mut workloads, &workload).absolute.push(row);
        }
        for row in degradation {
            let workload = row.workload.clone();
            entry(&mut workloads, &workload).degradation.push(row);
        }
        for record in dataset.records() {
            if record.operation.as_deref() == Some(UPDATE_OPERATION) {
                entry(&mut workloads, &record.workload)
                    .update_latencies
                    .push(UpdateLatency {
                        protocol: record.protocol.clone(),
                        problem_level: record.problem_level,
                        p95_us: record.p95_us,
                    });
            }
        }

        Self {
            workloads: workloads.into_values().collect(),
        }
    }
}

fn entry<'a>(
    workloads: &'a mut BTreeMap<String, WorkloadSummary>,
    workload: &str,
) -> &'a mut WorkloadSummary {
    workloads
        .entry(workload.to_string())
        .or_insert_with(|| WorkloadSummary {
            workload: workload.to_string(),
            absolute: Vec::new(),
            degradation: Vec::new(),
            update_latencies: Vec::new(),
        })
}
