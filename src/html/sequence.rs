//! Escape sequence classification.
//!
//! Sorts a delimited sequence body (the text after ESC) into:
//! - SGR: `[` ... `m`, handed to the SGR processor
//! - Control: a known VT100/VT52 control function with no visual effect
//! - Unrecognized: anything else
//!
//! Control and unrecognized sequences are both dropped by the converter.
//! The control category is only reported in trace logs.

/// Categories of known control functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFunction {
    /// ESC 7
    SaveCursor,
    /// ESC 8
    RestoreCursor,
    /// CSI 20 h / CSI 20 l
    LineFeedMode,
    /// CSI ? n h
    SetMode,
    /// CSI ? n l
    ResetMode,
    /// ESC = / ESC >
    KeypadMode,
    /// ESC ( x / ESC ) x
    CharsetDesignation,
    /// ESC N / ESC O
    SingleShift,
    /// CSI ; r
    ScrollRegion,
    /// CSI A-D
    CursorMove,
    /// CSI H / CSI ; H / CSI f / CSI ; f
    CursorPosition,
    /// ESC D / ESC M / ESC E
    Index,
    /// ESC H
    TabSet,
    /// CSI g / CSI 0 g / CSI 3 g
    TabClear,
    /// ESC # 3-6 / ESC # 8
    LineAttributes,
    /// CSI K and CSI J variants
    Erase,
    /// Device status reports
    DeviceStatus,
    /// CSI c / CSI 0 c / CSI ? 1 ; 0 c / ESC c
    DeviceAttributes,
    /// CSI 2 ; n y
    LocatorReport,
    /// CSI 0-4 q
    PrintMode,
}

/// Classification of a sequence body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence<'a> {
    /// Select Graphic Rendition; carries the parameter text between `[` and `m`.
    Sgr(&'a str),
    Control(ControlFunction),
    Unrecognized,
}

/// Classify a sequence body such as `[1m`, `[2J` or `(B`.
pub fn classify(body: &str) -> Sequence<'_> {
    if let Some(params) = body
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix('m'))
    {
        return Sequence::Sgr(params);
    }

    match control_function(body) {
        Some(function) => Sequence::Control(function),
        None => Sequence::Unrecognized,
    }
}

fn control_function(body: &str) -> Option<ControlFunction> {
    use ControlFunction::*;

    let function = match body {
        "7" => SaveCursor,
        "8" => RestoreCursor,
        "[20h" | "[20l" => LineFeedMode,
        "[?1h" | "[?3h" | "[?4h" | "[?5h" | "[?6h" | "[?7h" | "[?8h" | "[?9h" => SetMode,
        "[?1l" | "[?2l" | "[?3l" | "[?4l" | "[?5l" | "[?6l" | "[?7l" | "[?8l" | "[?9l" => {
            ResetMode
        }
        "=" | ">" => KeypadMode,
        "(A" | ")A" | "(B" | ")B" | "(0" | ")0" | "(1" | ")1" | "(2" | ")2" => {
            CharsetDesignation
        }
        "N" | "O" => SingleShift,
        "[;r" => ScrollRegion,
        "[A" | "[B" | "[C" | "[D" => CursorMove,
        "[H" | "[;H" | "[f" | "[;f" => CursorPosition,
        "D" | "M" | "E" => Index,
        "H" => TabSet,
        "[g" | "[0g" | "[3g" => TabClear,
        "#3" | "#4" | "#5" | "#6" | "#8" => LineAttributes,
        "[K" | "[0K" | "[1K" | "[2K" | "[J" | "[0J" | "[1J" | "[2J" => Erase,
        "5n" | "0n" | "3n" | "6n" | ";R" => DeviceStatus,
        "[c" | "[0c" | "[?1;0c" | "c" => DeviceAttributes,
        "[2;1y" | "[2;2y" | "[2;9y" | "[2;10y" => LocatorReport,
        "[0q" | "[1q" | "[2q" | "[3q" | "[4q" => PrintMode,
        _ => return None,
    };
    Some(function)
}
