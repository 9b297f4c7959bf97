//! Glyph tables and the ANSI color model used by the renderer.
//!
//! Two fixed character sets (Unicode box drawing and an ASCII fallback)
//! and a small color model — the 8 basic ANSI colors plus the 256-color
//! "fixed" palette — composed through [`anstyle`] so the emitted SGR
//! sequences match what every other terminal tool produces. Stripping is
//! a left-inverse of colorizing: `strip_ansi(fg(s, c)) == s`.

/// The glyphs a renderer draws its margins, underlines, and arrows with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Characters {
    pub hbar: char,
    pub vbar: char,
    pub xbar: char,
    pub vbar_gap: char,
    pub line_margin: char,
    pub uarrow: char,
    pub rarrow: char,
    pub ltop: char,
    pub mtop: char,
    pub rtop: char,
    pub lbot: char,
    pub rbot: char,
    pub mbot: char,
    pub lbox: char,
    pub rbox: char,
    pub lcross: char,
    pub rcross: char,
    pub lunderbar: char,
    pub runderbar: char,
    pub munderbar: char,
    pub underline: char,
    pub underbar_single: char,
}

impl Characters {
    pub fn unicode() -> Self {
        Self {
            hbar: '─',
            vbar: '│',
            xbar: '┼',
            vbar_gap: '┆',
            line_margin: '┤',
            uarrow: '▲',
            rarrow: '▶',
            ltop: '╭',
            mtop: '┬',
            rtop: '╮',
            lbot: '╰',
            rbot: '╯',
            mbot: '┴',
            lbox: '┤',
            rbox: '│',
            lcross: '├',
            rcross: '┤',
            lunderbar: '┌',
            runderbar: '┐',
            munderbar: '┬',
            underline: '─',
            underbar_single: '▲',
        }
    }

    pub fn ascii() -> Self {
        Self {
            hbar: '-',
            vbar: '|',
            xbar: '+',
            vbar_gap: ':',
            line_margin: '|',
            uarrow: '^',
            rarrow: '>',
            ltop: ',',
            mtop: 'v',
            rtop: '.',
            lbot: '`',
            rbot: '\'',
            mbot: '-',
            lbox: '[',
            rbox: ']',
            lcross: '|',
            rcross: '|',
            lunderbar: '-',
            runderbar: '-',
            munderbar: '-',
            underline: '-',
            underbar_single: '^',
        }
    }
}

/// Which glyph table to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CharSet {
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn characters(self) -> Characters {
        match self {
            CharSet::Unicode => Characters::unicode(),
            CharSet::Ascii => Characters::ascii(),
        }
    }
}

/// The 8 named ANSI colors (SGR 30–37 foreground, +10 background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BasicColor {
    fn to_anstyle(self) -> anstyle::AnsiColor {
        match self {
            BasicColor::Black => anstyle::AnsiColor::Black,
            BasicColor::Red => anstyle::AnsiColor::Red,
            BasicColor::Green => anstyle::AnsiColor::Green,
            BasicColor::Yellow => anstyle::AnsiColor::Yellow,
            BasicColor::Blue => anstyle::AnsiColor::Blue,
            BasicColor::Magenta => anstyle::AnsiColor::Magenta,
            BasicColor::Cyan => anstyle::AnsiColor::Cyan,
            BasicColor::White => anstyle::AnsiColor::White,
        }
    }
}

/// A renderable color: basic ANSI or a slot in the 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Color {
    Basic(BasicColor),
    Fixed(u8),
}

impl Color {
    pub const BLACK: Color = Color::Basic(BasicColor::Black);
    pub const RED: Color = Color::Basic(BasicColor::Red);
    pub const GREEN: Color = Color::Basic(BasicColor::Green);
    pub const YELLOW: Color = Color::Basic(BasicColor::Yellow);
    pub const BLUE: Color = Color::Basic(BasicColor::Blue);
    pub const MAGENTA: Color = Color::Basic(BasicColor::Magenta);
    pub const CYAN: Color = Color::Basic(BasicColor::Cyan);
    pub const WHITE: Color = Color::Basic(BasicColor::White);

    /// A 256-color palette slot, clamped to `0..=255`.
    pub fn fixed(value: u16) -> Color {
        Color::Fixed(value.min(255) as u8)
    }

    fn to_anstyle(self) -> anstyle::Color {
        match self {
            Color::Basic(basic) => anstyle::Color::Ansi(basic.to_anstyle()),
            Color::Fixed(value) => anstyle::Color::Ansi256(anstyle::Ansi256Color(value)),
        }
    }
}

fn paint(value: &str, style: anstyle::Style) -> String {
    format!("{}{value}{}", style.render(), style.render_reset())
}

/// Wraps `value` in the foreground SGR sequence for `color` plus a
/// reset; `None` leaves the text untouched.
pub fn fg(value: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => paint(
            value,
            anstyle::Style::new().fg_color(Some(color.to_anstyle())),
        ),
        None => value.to_string(),
    }
}

/// Background counterpart of [`fg`].
pub fn bg(value: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => paint(
            value,
            anstyle::Style::new().bg_color(Some(color.to_anstyle())),
        ),
        None => value.to_string(),
    }
}

/// Removes every ANSI escape sequence from `value`.
///
/// Used when ANSI mode is off: the final output is byte-identical plain
/// text regardless of how many colorizing calls happened upstream.
pub fn strip_ansi(value: &str) -> String {
    anstream::adapter::strip_str(value).to_string()
}

/// Diagnostic kind color, gated so call sites can force plain text
/// without threading color values through every call.
pub fn error_color(enabled: bool) -> Option<Color> {
    enabled.then_some(Color::RED)
}

pub fn warning_color(enabled: bool) -> Option<Color> {
    enabled.then_some(Color::YELLOW)
}

pub fn advice_color(enabled: bool) -> Option<Color> {
    enabled.then(|| Color::fixed(147))
}

pub fn margin_color(enabled: bool) -> Option<Color> {
    enabled.then(|| Color::fixed(246))
}

pub fn note_color(enabled: bool) -> Option<Color> {
    enabled.then(|| Color::fixed(115))
}

pub fn skipped_margin_color(enabled: bool) -> Option<Color> {
    enabled.then(|| Color::fixed(240))
}

pub fn unimportant_color(enabled: bool) -> Option<Color> {
    enabled.then(|| Color::fixed(249))
}
