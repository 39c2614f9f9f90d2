//! ANSI to HTML conversion.
//!
//! Turns terminal output into an HTML fragment of nested `<span>` elements.
//! SGR sequences become classes and inline styles; every other escape
//! sequence is consumed and dropped. Conversion never fails.
//!
//! Submodules:
//! - sequence: classification of escape sequence bodies
//! - sgr: SGR parameter handling
//! - state: output buffer and span bookkeeping
//! - normalize: post-pass `&nbsp;` cleanup

pub mod normalize;
pub mod sequence;
pub mod sgr;
pub mod state;

use std::str::Chars;

pub use sequence::{classify, ControlFunction, Sequence};
pub use sgr::{Color, SgrCode, TextAttribute};
pub use state::RenderState;

const ESC: char = '\u{1b}';

/// Convert terminal output to an HTML fragment.
///
/// Text is copied verbatim apart from spaces, which become `&nbsp;` and are
/// then normalized. The result is not HTML-escaped and must only be embedded
/// where the input is trusted. Every opened span is closed.
///
/// ```
/// let html = termspan::to_html("\x1b[1mBold\x1b[0m");
/// assert_eq!(html, "<span class=\"bold\" style=\"\">Bold</span>");
/// ```
pub fn to_html(input: &str) -> String {
    let mut state = RenderState::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == ESC {
            let body = read_sequence(&mut chars);
            dispatch(&body, &mut state);
        } else {
            state.push_char(c);
        }
    }

    state.rewrite_output(|output| normalize::collapse_spaces(&output));
    tracing::debug!(
        input_len = input.len(),
        spans = state.opened_total(),
        unclosed = state.open_spans(),
        "converted terminal output to html"
    );
    state.close_all();

    state.into_output()
}

/// Read a sequence body following ESC.
///
/// - `[`: up to and including the first ASCII letter
/// - `#`: up to and including the first ASCII digit
/// - `(` or `)`: exactly one more character
/// - anything else: that single character
///
/// Input ending early truncates the body; nothing is ever read past the end.
fn read_sequence(chars: &mut Chars<'_>) -> String {
    let mut body = String::new();
    let Some(introducer) = chars.next() else {
        return body;
    };
    body.push(introducer);

    match introducer {
        '[' => read_until(chars, &mut body, |c| c.is_ascii_alphabetic()),
        '#' => read_until(chars, &mut body, |c| c.is_ascii_digit()),
        '(' | ')' => {
            if let Some(c) = chars.next() {
                body.push(c);
            }
        }
        _ => {}
    }
    body
}

fn read_until(chars: &mut Chars<'_>, body: &mut String, terminator: fn(char) -> bool) {
    for c in chars.by_ref() {
        body.push(c);
        if terminator(c) {
            break;
        }
    }
}

fn dispatch(body: &str, state: &mut RenderState) {
    match classify(body) {
        Sequence::Sgr(params) => sgr::apply(params, state),
        Sequence::Control(function) => {
            tracing::trace!(sequence = body, ?function, "dropping control sequence");
        }
        Sequence::Unrecognized => {
            tracing::trace!(sequence = body, "dropping unrecognized escape sequence");
        }
    }
}
