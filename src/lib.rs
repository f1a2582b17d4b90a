//! Lectora Filter
//!
//! A content filter for LMS pages that embed exported "Lectora Online"
//! e-learning packages. Given rendered page HTML and a context supplied by
//! the host platform, it injects navigation chrome around the `<body>`
//! content, appends the theme stylesheet inside `<head>`, and renders an
//! end-of-module link when the viewer is eligible for completion tracking.
//!
//! The filter itself never touches a datastore: completion persistence is
//! signalled back to the host through [`RewriteOutcome::mark_viewed`].
//!
//! # Modules
//!
//! - `filter`: the HTML rewriter and its context/outcome types
//! - `config`: theme variant and completion-tracking configuration
//! - `error`: crate error type

pub mod config;
pub mod error;
pub mod filter;

pub use config::{FilterConfig, Theme};
pub use error::{FilterError, Result};
pub use filter::{LectoraRewriter, RewriteContext, RewriteOutcome};
