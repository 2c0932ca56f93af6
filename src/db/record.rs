use serde::{Deserialize, Deserializer};

// All fields written by the harness:
// "experiment","operation","ops","p95_us","count"
#[derive(Debug, Deserialize)]
pub(crate) struct BenchRow {
    pub experiment: String,
    // an empty operation field is absent, not an error marker
    #[serde(default)]
    pub operation: Option<String>,
    pub ops: f64,
    pub p95_us: f64,
    #[serde(deserialize_with = "f64_to_u64")]
    pub count: u64,
}

// the harness writes counts as floats ("5.0"); accept both forms
fn f64_to_u64<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = String::deserialize(de)?;
    let n = n.parse::<f64>().map_err(serde::de::Error::custom)?;
    Ok(n.round() as u64)
}

/// One measured observation, tagged with its fault level and with the
/// coordinates extracted from its experiment identifier. Records are created
/// once at load time and never mutated.
#[derive(Debug, Clone)]
pub struct Record {
    pub protocol: String,
    pub workload: String,
    pub problem_level: usize,
    pub operation: Option<String>,
    pub ops: f64,
    pub p95_us: f64,
    pub count: u64,
}
