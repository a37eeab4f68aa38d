use thiserror::Error;

/// Failures while applying an edit to the records.
///
/// The editor logs these and carries on; they never reach the host.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Unknown record: {0}")]
    UnknownRecord(String),

    #[error("No document loaded")]
    NoActiveDocument,

    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}
