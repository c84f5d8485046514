//! Submission snapshot and export targets

mod record;
mod sink;

pub use record::Submission;
pub use sink::{JsonFileSink, SubmissionSink};

#[cfg(test)]
pub use sink::{ExportError, MockSubmissionSink};
