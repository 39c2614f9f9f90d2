//! SGR (Select Graphic Rendition) processing.
//!
//! Handles the parameter list of a CSI m sequence:
//! - Reset (0, or an empty list)
//! - Bold, light, underline, blink, reverse, invisible (1-6)
//! - Standard foreground colors (30-37)
//! - Standard background colors (40-47)
//!
//! Everything else (italic, 256-color, RGB, bright colors) is ignored.

use super::state::RenderState;

/// Text attributes that render as a CSS class on the emitted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAttribute {
    Bold,
    Light,
    Underline,
    Blink,
    Reverse,
    Invisible,
}

impl TextAttribute {
    /// Every attribute, in SGR code order.
    pub const ALL: [TextAttribute; 6] = [
        TextAttribute::Bold,
        TextAttribute::Light,
        TextAttribute::Underline,
        TextAttribute::Blink,
        TextAttribute::Reverse,
        TextAttribute::Invisible,
    ];

    /// CSS class name written into the `class` attribute.
    pub fn class_name(self) -> &'static str {
        match self {
            TextAttribute::Bold => "bold",
            TextAttribute::Light => "light",
            TextAttribute::Underline => "underline",
            TextAttribute::Blink => "blink",
            TextAttribute::Reverse => "reverse",
            TextAttribute::Invisible => "invisible",
        }
    }
}

/// The eight standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    fn from_offset(offset: u8) -> Option<Self> {
        let color = match offset {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            _ => return None,
        };
        Some(color)
    }

    /// CSS color keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

/// Effect of a single SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Attribute(TextAttribute),
    Foreground(Color),
    Background(Color),
    Ignored,
}

impl SgrCode {
    /// Parse one semicolon-separated parameter.
    ///
    /// Parameters are matched as exact text, so zero-padded forms such as
    /// `01` or `031` are not recognized.
    pub fn parse(param: &str) -> Self {
        let attribute = match param {
            "0" => return SgrCode::Reset,
            "1" => TextAttribute::Bold,
            "2" => TextAttribute::Light,
            "3" => TextAttribute::Underline,
            "4" => TextAttribute::Blink,
            "5" => TextAttribute::Reverse,
            "6" => TextAttribute::Invisible,
            _ => return Self::parse_color(param),
        };
        SgrCode::Attribute(attribute)
    }

    fn parse_color(param: &str) -> Self {
        let bytes = param.as_bytes();
        if bytes.len() != 2 || !bytes[1].is_ascii_digit() {
            return SgrCode::Ignored;
        }
        let Some(color) = Color::from_offset(bytes[1] - b'0') else {
            return SgrCode::Ignored;
        };
        match bytes[0] {
            b'3' => SgrCode::Foreground(color),
            b'4' => SgrCode::Background(color),
            _ => SgrCode::Ignored,
        }
    }

    /// Inline CSS declaration for color codes.
    pub fn declaration(self) -> Option<String> {
        match self {
            SgrCode::Foreground(color) => Some(format!("color: {}", color.css_name())),
            SgrCode::Background(color) => {
                Some(format!("background-color: {}", color.css_name()))
            }
            _ => None,
        }
    }
}

/// Apply the parameter text of an SGR sequence (the body without the
/// leading `[` and trailing `m`) to the render state.
///
/// Codes apply left to right. A reset closes at most one open span per
/// occurrence; it never clears classes or styles accumulated earlier.
pub fn apply(params: &str, state: &mut RenderState) {
    if params.is_empty() {
        state.close_one();
        return;
    }

    for param in params.split(';') {
        let code = SgrCode::parse(param);
        match code {
            SgrCode::Reset => state.close_one(),
            SgrCode::Attribute(attribute) => state.push_class(attribute.class_name()),
            SgrCode::Foreground(_) | SgrCode::Background(_) => {
                if let Some(declaration) = code.declaration() {
                    state.push_style(declaration);
                }
            }
            SgrCode::Ignored => {
                tracing::trace!(param, "ignoring unsupported SGR parameter");
            }
        }
    }
}
