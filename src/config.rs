//! Configuration management for the Lectora filter
//!
//! Two near-identical deployments of this filter exist in the field,
//! differing in theme assets and in whether the filter itself signals
//! completion tracking. Both are expressed here as configuration of a
//! single rewriter rather than as separate filters.

use serde::Deserialize;
use std::env;

use crate::error::{FilterError, Result};

/// Filter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Theme variant supplying default asset paths
    pub theme: Theme,
    /// Whether the completion-link branch may request a viewed-state write.
    /// When false the end-of-module link still renders, but
    /// `RewriteOutcome::mark_viewed` is never raised.
    pub track_completion_inline: bool,
}

/// Theme variant the filter is deployed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Malmberg,
    Vermeer,
}

impl Theme {
    /// Site-relative path of the theme's Lectora stylesheet, used when the
    /// host does not supply one in the rewrite context.
    pub fn stylesheet_path(&self) -> &'static str {
        match self {
            Theme::Malmberg => "/theme/malmberg/style/lectora.css",
            Theme::Vermeer => "/theme/vermeer/style/lectora.css",
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            theme: Theme::Malmberg,
            track_completion_inline: true,
        }
    }
}

impl FilterConfig {
    pub fn from_env() -> Result<Self> {
        let theme = match env::var("LECTORA_THEME") {
            Ok(name) => match name.to_lowercase().as_str() {
                "malmberg" => Theme::Malmberg,
                "vermeer" => Theme::Vermeer,
                _ => return Err(FilterError::UnknownTheme(name)),
            },
            Err(_) => Theme::Malmberg,
        };

        Ok(FilterConfig {
            theme,
            track_completion_inline: env::var("LECTORA_TRACK_COMPLETION")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.theme, Theme::Malmberg);
        assert!(config.track_completion_inline);
    }

    #[test]
    fn test_theme_stylesheet_paths() {
        assert_eq!(
            Theme::Malmberg.stylesheet_path(),
            "/theme/malmberg/style/lectora.css"
        );
        assert_eq!(
            Theme::Vermeer.stylesheet_path(),
            "/theme/vermeer/style/lectora.css"
        );
    }

    #[test]
    fn test_from_env_rejects_unknown_theme() {
        env::set_var("LECTORA_THEME", "bogus");
        let err = FilterConfig::from_env().unwrap_err();
        assert!(matches!(err, FilterError::UnknownTheme(name) if name == "bogus"));
        env::remove_var("LECTORA_THEME");
    }

    #[test]
    fn test_deserialize_config() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"theme": "vermeer", "track_completion_inline": false}"#)
                .unwrap();
        assert_eq!(config.theme, Theme::Vermeer);
        assert!(!config.track_completion_inline);
    }
}
