//! Context and outcome types for the rewriter
//!
//! The original plugin read course, user, theme, and completion state from
//! ambient platform globals. Here all of that arrives as an explicit
//! [`RewriteContext`] assembled by the host, which keeps the rewrite a pure
//! function of its inputs.

/// Host-supplied state for one rewrite call
#[derive(Debug, Clone, Default)]
pub struct RewriteContext {
    /// Whether completion tracking is enabled for this module instance
    pub has_completion_flag: bool,
    /// Whether the viewer already has a viewed-state record for this module
    pub completion_already_viewed: bool,
    /// URL of the course page (and section) to return to
    pub return_url: String,
    /// Site root URL, prefix for theme asset paths
    pub site_base_url: String,
    /// Site-relative stylesheet path; empty means "use the theme default"
    pub theme_stylesheet_path: String,
    /// URL of the navbar logo image
    pub logo_image_path: String,
    /// URL of the page background image
    pub background_image_path: String,
    /// Pre-rendered user menu markup, embedded verbatim in the navbar
    pub user_menu_html: String,
}

/// Result of one rewrite call
#[derive(Debug)]
pub struct RewriteOutcome {
    /// The rewritten document (or the input unchanged)
    pub html: String,
    /// Whether the host should persist a completion-viewed record for
    /// (module instance, user). The filter never performs this write itself.
    pub mark_viewed: bool,
}

impl RewriteOutcome {
    /// Pass-through outcome: document unchanged, nothing to persist.
    pub(crate) fn unchanged(document: &str) -> Self {
        RewriteOutcome {
            html: document.to_string(),
            mark_viewed: false,
        }
    }
}
