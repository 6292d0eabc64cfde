use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options
});

static HIGHLIGHTER: Lazy<SyntectAdapter> =
    Lazy::new(|| SyntectAdapter::new(Some("base16-ocean.dark")));

/// Render a bot reply. Raw HTML in the reply is escaped, not passed through.
pub fn markdown_to_html(md: &str) -> String {
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&*HIGHLIGHTER);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_legal_reply_formatting() {
        let html = markdown_to_html("**Điều 12.** Hồ sơ gồm:\n\n- Đơn đề nghị\n- Bản sao");
        assert!(html.contains("<strong>Điều 12.</strong>"));
        assert!(html.contains("<li>Đơn đề nghị</li>"));
    }

    #[test]
    fn renders_tables() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn raw_html_is_not_passed_through() {
        let html = markdown_to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
