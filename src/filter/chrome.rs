//! Markup templates for the injected chrome
//!
//! Small `format!`-based builders for the elements the rewriter injects.
//! URLs coming from the host are escaped before landing in attribute
//! values; `user_menu_html` is pre-rendered by the host and embedded
//! verbatim.

use html_escape::encode_double_quoted_attribute;

use super::types::RewriteContext;

/// The "Einde Module" anchor shown at the end of a completed module.
pub fn end_of_module_link(return_url: &str) -> String {
    format!(
        r#"<a href="{}" class="lectorabtn">Einde Module</a>"#,
        encode_double_quoted_attribute(return_url)
    )
}

/// Replacement for the marker `alt=` attributes: clicking the module's
/// final image navigates back to the course page.
pub fn redirect_onclick(return_url: &str) -> String {
    format!(
        r#"onclick="location.href='{}'""#,
        encode_double_quoted_attribute(return_url)
    )
}

/// Body chrome wrapping the captured content: page background, navbar with
/// home link and logo, the user menu, and the end-of-module link. Attributes
/// of the original opening tag are intentionally dropped.
pub fn body_chrome(content: &str, ctx: &RewriteContext, end_link: &str) -> String {
    format!(
        r#"<body style="background: url({background}) repeat-y scroll center 0 transparent;">
    <div id="page-content-wrapper">
        <nav role="navigation" class="navbar navbar-default">
            <div class="container-fluid navbar-inner">
                <a class="navbar-brand" href="{home}"><img src="{logo}"></a>
                {user_menu}
            </div>
        </nav>
        <div class="contentback">
            <div class="lectorapage">
                {content}
                {end_link}
            </div>
        </div>
    </div>
</body>"#,
        background = encode_double_quoted_attribute(&ctx.background_image_path),
        home = encode_double_quoted_attribute(&ctx.site_base_url),
        logo = encode_double_quoted_attribute(&ctx.logo_image_path),
        user_menu = ctx.user_menu_html,
        content = content,
        end_link = end_link,
    )
}

/// Head block: the captured head content with the theme stylesheet
/// appended.
pub fn head_chrome(content: &str, stylesheet_url: &str) -> String {
    format!(
        r#"<head>{content}<link rel="stylesheet" type="text/css" href="{href}"></head>"#,
        content = content,
        href = encode_double_quoted_attribute(stylesheet_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_module_link() {
        let link = end_of_module_link("https://lms.example/course/view.php?id=7&section=2");
        assert!(link.contains(r#"class="lectorabtn""#));
        assert!(link.contains(">Einde Module</a>"));
        // URL lands escaped inside the attribute
        assert!(link.contains("id=7&amp;section=2"));
    }

    #[test]
    fn test_redirect_onclick() {
        let attr = redirect_onclick("https://lms.example/course/view.php?id=7");
        assert!(attr.starts_with(r#"onclick="location.href="#));
    }

    #[test]
    fn test_body_chrome_wraps_content() {
        let ctx = RewriteContext {
            site_base_url: "https://lms.example".to_string(),
            logo_image_path: "https://lms.example/theme/logo.png".to_string(),
            background_image_path: "https://lms.example/theme/lectorabg.png".to_string(),
            user_menu_html: r#"<div class="usermenu">Jan</div>"#.to_string(),
            ..Default::default()
        };

        let body = body_chrome("CONTENT", &ctx, "");
        assert!(body.starts_with("<body style="));
        assert!(body.contains("url(https://lms.example/theme/lectorabg.png)"));
        assert!(body.contains(r#"<div class="usermenu">Jan</div>"#));
        assert!(body.contains("CONTENT"));
        assert!(body.ends_with("</body>"));
    }

    #[test]
    fn test_head_chrome_appends_stylesheet() {
        let head = head_chrome("ORIGINAL", "https://lms.example/theme/malmberg/style/lectora.css");
        assert!(head.starts_with("<head>ORIGINAL<link"));
        assert!(head.contains(r#"href="https://lms.example/theme/malmberg/style/lectora.css""#));
        assert!(head.ends_with("</head>"));
    }
}
