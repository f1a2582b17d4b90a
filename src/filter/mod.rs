//! HTML rewriting for Lectora Online course pages
//!
//! Provides the single-pass rewriter that:
//! - injects an end-of-module completion link
//! - wraps the `<body>` content with navigation/background chrome
//! - appends the theme stylesheet inside `<head>`

mod chrome;
mod rewriter;
mod types;

pub use rewriter::LectoraRewriter;
pub use types::{RewriteContext, RewriteOutcome};
