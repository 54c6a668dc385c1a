//! Error types for the records client.

/// Errors that can occur when retrieving records.
///
/// Transport failures, non-success statuses and unparseable bodies all
/// collapse into [`Error::RequestFailed`]. The underlying cause is logged
/// through `tracing` and never returned to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request could not be completed or its response could not be used.
    #[error("An error occurred while processing your request")]
    RequestFailed,
}
