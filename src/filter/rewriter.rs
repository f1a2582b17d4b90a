//! The Lectora page rewriter
//!
//! Single-pass, string-level rewriting: a cheap marker guard, a completion
//! decision, two literal attribute substitutions, then first-match
//! replacement of the `<body>` and `<head>` regions. Regions that fail to
//! match are left untouched, so malformed markup degrades to a partial (or
//! absent) rewrite rather than an error.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::config::FilterConfig;

use super::chrome;
use super::types::{RewriteContext, RewriteOutcome};

/// Fast-path guard: pages not produced by the Lectora Online export
/// never contain this string.
const PACKAGE_MARKER: &str = "lectora online";

/// Present on the final page of an exported module.
const END_OF_MODULE_MARKER: &str = "end_of_lectora_module";

/// Marker `alt` attributes the export leaves on its end-of-module images.
const COMPLETED_ALT_ATTRIBUTE: &str = "alt=lectora_module_completed";
const END_ALT_ATTRIBUTE: &str = "alt=end_of_lectora_module";

/// Rewrites Lectora Online course pages with LMS chrome.
///
/// Stateless between calls; safe to share across threads and reuse for
/// every piece of rendered text on a page.
pub struct LectoraRewriter {
    config: FilterConfig,
    body_region: Regex,
    head_region: Regex,
}

impl LectoraRewriter {
    pub fn new(config: FilterConfig) -> Self {
        // (?is) with lazy quantifiers: case-insensitive, dot matches
        // newlines, shortest region wins. The body pattern requires
        // whitespace after the tag name, so a bare `<body>` is not a region.
        LectoraRewriter {
            body_region: Regex::new(r"(?is)<body\s.*?>(.*?)</body>").unwrap(),
            head_region: Regex::new(r"(?is)<head>(.*?)</head>").unwrap(),
            config,
        }
    }

    /// Rewrite one document.
    ///
    /// Pure apart from the returned [`RewriteOutcome::mark_viewed`] signal,
    /// which tells the host to persist a completion-viewed record.
    pub fn rewrite(&self, document: &str, ctx: &RewriteContext) -> RewriteOutcome {
        if document.is_empty() {
            return RewriteOutcome::unchanged(document);
        }

        let lowered = document.to_lowercase();
        if !lowered.contains(PACKAGE_MARKER) {
            // Performance shortcut - not a Lectora page, do nothing.
            trace!("no Lectora Online marker, passing through");
            return RewriteOutcome::unchanged(document);
        }

        let at_end_of_module = lowered.contains(END_OF_MODULE_MARKER);
        let (end_link, mark_viewed) = if at_end_of_module && ctx.has_completion_flag {
            debug!(return_url = %ctx.return_url, "rendering end-of-module link");
            (
                chrome::end_of_module_link(&ctx.return_url),
                self.config.track_completion_inline && !ctx.completion_already_viewed,
            )
        } else {
            (String::new(), false)
        };

        // The export marks its clickable end-of-module images with literal
        // `alt=` attributes; turn those into course-page redirects.
        let onclick = chrome::redirect_onclick(&ctx.return_url);
        let mut text = if end_link.is_empty() {
            document.to_string()
        } else {
            document.replace(COMPLETED_ALT_ATTRIBUTE, &onclick)
        };
        text = text.replace(END_ALT_ATTRIBUTE, &onclick);

        let text = if self.body_region.is_match(&text) {
            self.body_region
                .replace(&text, |caps: &Captures| {
                    chrome::body_chrome(caps.get(1).map_or("", |m| m.as_str()), ctx, &end_link)
                })
                .into_owned()
        } else {
            debug!("Lectora page without a <body> region, leaving body unchanged");
            text
        };

        let stylesheet_path = if ctx.theme_stylesheet_path.is_empty() {
            self.config.theme.stylesheet_path()
        } else {
            ctx.theme_stylesheet_path.as_str()
        };
        let stylesheet_url = format!("{}{}", ctx.site_base_url, stylesheet_path);

        let text = if self.head_region.is_match(&text) {
            self.head_region
                .replace(&text, |caps: &Captures| {
                    chrome::head_chrome(caps.get(1).map_or("", |m| m.as_str()), &stylesheet_url)
                })
                .into_owned()
        } else {
            debug!("Lectora page without a <head> region, leaving head unchanged");
            text
        };

        RewriteOutcome {
            html: text,
            mark_viewed,
        }
    }
}

impl Default for LectoraRewriter {
    fn default() -> Self {
        LectoraRewriter::new(FilterConfig::default())
    }
}
