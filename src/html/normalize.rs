//! Whitespace normalization applied after the scan.
//!
//! Every space is written as `&nbsp;` during the scan. Afterwards a pair of
//! entities enclosing a run without `&` goes back to plain spaces, so only
//! padding that would otherwise collapse keeps the entity. A leading plain
//! space is restored to `&nbsp;`.

use std::sync::OnceLock;

use regex::Regex;

const NBSP: &str = "&nbsp;";

fn enclosed_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("&nbsp;([^&]+)&nbsp;").expect("static pattern is valid"))
}

/// Normalize the entities in a converted buffer.
pub fn collapse_spaces(output: &str) -> String {
    let collapsed = enclosed_run().replace_all(output, " ${1} ");

    match collapsed.strip_prefix(' ') {
        Some(rest) => {
            let mut restored = String::with_capacity(collapsed.len() + NBSP.len());
            restored.push_str(NBSP);
            restored.push_str(rest);
            restored
        }
        None => collapsed.into_owned(),
    }
}
