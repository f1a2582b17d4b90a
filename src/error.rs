//! Error types for the Lectora filter
//!
//! The rewrite pass itself is total over strings and never fails; errors
//! only arise at the configuration seam.

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, FilterError>;

/// Filter error type
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
