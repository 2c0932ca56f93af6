#![deny(rust_2018_idioms)]

// This module contains the definition of `AnalysisError`.
pub mod error;

// This module contains the definition of `F64`.
pub mod float;

// This module contains the experiment identifier parser.
pub mod exp;

// This module contains the benchmark record and the dataset loader.
pub mod db;

// This module contains the aggregation of records into per-group summaries.
pub mod agg;

// This module contains the computation of degradation ratios against the
// fault-free baseline.
pub mod degradation;

// This module contains the assembly of per-workload summaries for the
// plotting layer.
pub mod summary;

// This module contains display names and colors for the plotting layer.
pub mod fmt;

// Re-exports.
pub use error::{AnalysisError, AnalysisResult};
pub use float::F64;
