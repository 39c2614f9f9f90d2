//! Library-level conversion properties

use termspan::to_html;

use crate::helpers::load_fixture;

fn count_opens(html: &str) -> usize {
    html.matches("<span").count()
}

fn count_closes(html: &str) -> usize {
    html.matches("</span>").count()
}

// ============================================================================
// Plain Text
// ============================================================================

#[test]
fn text_without_escapes_only_changes_spaces() {
    let inputs = ["plain", "a b", "tab\tand newline\n", "<b>&amp;</b>"];
    for input in inputs {
        let html = to_html(input);
        assert_eq!(count_opens(&html), 0, "input {:?}", input);
        assert_eq!(html.replace("&nbsp;", " "), input);
    }
}

#[test]
fn converting_twice_is_stable_without_escapes() {
    let inputs = [
        "",
        " ",
        "a b",
        " a b",
        "one two three four",
        "  double  spaced  ",
        "x&nbsp;y z",
    ];
    for input in inputs {
        let once = to_html(input);
        assert_eq!(to_html(&once), once, "input {:?}", input);
    }
}

// ============================================================================
// Span Balance
// ============================================================================

#[test]
fn spans_always_balance() {
    let inputs = [
        "\x1b[1m",
        "\x1b[1mx",
        "\x1b[1mx\x1b[0m\x1b[0m\x1b[0m",
        "\x1b[1;31;42ma\x1b[4mb\x1b[5;6mc",
        "\x1b[0m\x1b[m",
        "\x1b[31",
        "\x1b[1mx\x1b",
    ];
    for input in inputs {
        let html = to_html(input);
        assert_eq!(count_opens(&html), count_closes(&html), "input {:?}", input);
    }
}

#[test]
fn double_reset_emits_single_close() {
    let html = to_html("\x1b[31;1mX\x1b[0m\x1b[0m");
    assert_eq!(html, "<span class=\"bold\" style=\"color: red\">X</span>");
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn build_log_fixture() {
    let html = to_html(&load_fixture("build.log"));
    insta::assert_snapshot!(html, @r#"
<span class="bold" style="">Compiling</span> termspan
<span class="" style="color: green">ok</span>
<span class="bold" style="color: red">error</span>: oops
"#);
}

#[test]
fn redraw_fixture_drops_cursor_control() {
    let html = to_html(&load_fixture("redraw.log"));
    assert_eq!(
        html,
        "<span class=\"bold\" style=\"background-color: blue\"> status </span>done"
    );
}
