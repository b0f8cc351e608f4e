//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for builder operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Construction errors raised by builder configuration.
///
/// Every failure in this crate is eager: a malformed call is rejected at
/// the call site, never discovered during `build`. Rendering a well-formed
/// tree always succeeds.
#[derive(Debug, Error)]
pub enum QueryError {
    /// CASE WHEN branch lists differ in length
    #[error("CASE WHEN expected {expected} branches but got {returned} returned values")]
    CaseWhenLengthMismatch { expected: usize, returned: usize },

    /// CASE WHEN constructed with no branches
    #[error("CASE WHEN must have at least one branch")]
    CaseWhenEmpty,

    /// A full condition was supplied to a USING-mode join
    #[error("USING-mode joins take column names, not a condition")]
    ConditionInUsingJoin,

    /// Column-list join with fewer than two columns
    #[error("column-list join requires at least two columns, got {0}")]
    JoinColumnsTooFew(usize),
}
