//! CSS for the classes emitted by the converter.
//!
//! Colors are written as inline styles, so only the text attributes need
//! rules here.

use crate::html::TextAttribute;

/// Declarations for one attribute class.
fn declarations(attribute: TextAttribute) -> &'static str {
    match attribute {
        TextAttribute::Bold => "font-weight: bold;",
        TextAttribute::Light => "opacity: 0.6;",
        TextAttribute::Underline => "text-decoration: underline;",
        TextAttribute::Blink => "animation: termspan-blink 1s step-end infinite;",
        TextAttribute::Reverse => "filter: invert(100%);",
        TextAttribute::Invisible => "visibility: hidden;",
    }
}

/// Build the stylesheet, scoping every rule under `scope` when given
/// (e.g. `.terminal`).
pub fn generate(scope: Option<&str>) -> String {
    let prefix = scope.map(|s| format!("{} ", s)).unwrap_or_default();
    let mut css = String::new();

    if let Some(scope) = scope {
        css.push_str(&format!(
            "{} {{\n    font-family: monospace;\n    white-space: pre-wrap;\n}}\n\n",
            scope
        ));
    }

    for attribute in TextAttribute::ALL {
        css.push_str(&format!(
            "{}.{} {{\n    {}\n}}\n\n",
            prefix,
            attribute.class_name(),
            declarations(attribute)
        ));
    }

    css.push_str("@keyframes termspan-blink {\n    50% {\n        opacity: 0;\n    }\n}\n");
    css
}
