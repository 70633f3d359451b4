// Pipeline failure taxonomy
// Every variant is fatal for the current pass: the dataset is small,
// author-curated, and regenerated wholesale, so nothing is retried or
// downgraded to a warning.

use std::path::PathBuf;

/// Errors that can abort a pipeline pass.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A record does not match its kind's declared shape.
    #[error("schema violation in {record}: field '{field}': {detail}")]
    SchemaViolation {
        record: String,
        field: String,
        detail: String,
    },

    /// An expected input table cannot be obtained.
    #[error("source unavailable: {}: {detail}", .path.display())]
    SourceUnavailable { path: PathBuf, detail: String },

    /// An oracle record has no locale counterpart.
    #[error("missing localization for {kind} record '{id}'")]
    MissingLocalization { kind: &'static str, id: String },

    /// A codename referenced by a child entity does not exist in its
    /// parent store.
    #[error("dangling reference: '{child}' field '{field}' points to missing '{missing}'")]
    DanglingReference {
        child: String,
        field: &'static str,
        missing: String,
    },
}
