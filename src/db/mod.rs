mod dataset;
mod record;

// Re-exports.
pub use dataset::Dataset;
pub use record::Record;
