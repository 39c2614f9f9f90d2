//! Standalone HTML page around a converted fragment.

use crate::stylesheet;

/// Class of the element holding the fragment.
pub const CONTAINER_CLASS: &str = "terminal";

/// Options for wrapping a fragment in a full page.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    stylesheet: bool,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: true,
        }
    }

    /// Embed the class stylesheet in the page head (default: on).
    pub fn with_stylesheet(mut self, enabled: bool) -> Self {
        self.stylesheet = enabled;
        self
    }

    /// Wrap `fragment` in a page. The fragment is inserted as is; only the
    /// title is escaped.
    pub fn render(&self, fragment: &str) -> String {
        let mut page = String::with_capacity(fragment.len() + 1024);
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str("<title>");
        page.push_str(&escape_text(&self.title));
        page.push_str("</title>\n");

        if self.stylesheet {
            let scope = format!(".{}", CONTAINER_CLASS);
            page.push_str("<style>\n");
            page.push_str(&stylesheet::generate(Some(&scope)));
            page.push_str("</style>\n");
        }

        page.push_str("</head>\n<body>\n<div class=\"");
        page.push_str(CONTAINER_CLASS);
        page.push_str("\">");
        page.push_str(fragment);
        page.push_str("</div>\n</body>\n</html>\n");
        page
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("Terminal output")
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
