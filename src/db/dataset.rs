use crate::db::record::{BenchRow, Record};
use crate::error::{AnalysisError, AnalysisResult};
use crate::exp::ExpId;
use std::path::Path;
use tracing::debug;

/// All records of one benchmarking run, concatenated across fault levels.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Loads benchmark csv files into one dataset.
    ///
    /// Callers state the fault level of each file explicitly; level 0 is the
    /// fault-free baseline. Per-file record order is preserved, as is the
    /// order of the files themselves.
    pub fn load<P: AsRef<Path>>(
        files: impl IntoIterator<Item = (P, usize)>,
    ) -> AnalysisResult<Self> {
        let mut records = Vec::new();
        for (path, problem_level) in files {
            Self::load_file(path.as_ref(), problem_level, &mut records)?;
        }
        Ok(Self { records })
    }

    /// Creates a dataset from already-tagged records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    fn load_file(
        path: &Path,
        problem_level: usize,
        records: &mut Vec<Record>,
    ) -> AnalysisResult<()> {
        let file_read = |source| AnalysisError::FileRead {
            path: path.to_owned(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(&file_read)?;

        let mut rows = 0;
        for row in reader.deserialize() {
            // parse csv row
            let row: BenchRow = row.map_err(&file_read)?;
            // extract (protocol, workload) from the experiment identifier;
            // a malformed identifier aborts the whole run
            let ExpId { protocol, workload } = ExpId::parse(&row.experiment)?;
            records.push(Record {
                protocol,
                workload,
                problem_level,
                operation: row.operation,
                ops: row.ops,
                p95_us: row.p95_us,
                count: row.count,
            });
            rows += 1;
        }

        debug!(
            "loaded {} rows from {} at problem level {}",
            rows,
            path.display(),
            problem_level
        );
        Ok(())
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
