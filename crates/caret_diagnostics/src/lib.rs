//! Human-readable, optionally colorized rendering of source-code
//! diagnostics.
//!
//! A [`Report`] collects one diagnostic — kind, code, message, labeled
//! spans, notes, and help — and [`Report::render`] lays it out against a
//! [`SourceCache`] as annotated text: a header, a boxed source snippet
//! with line numbers, per-label underlines with attach markers, arrows
//! to label messages, and trailing footers. Offsets can count characters
//! or UTF-8 bytes; the report's [`Config`] decides, once, for the whole
//! render pass.
//!
//! ```
//! use caret_diagnostics::{Label, Report, ReportKind, Span, SourceCache};
//!
//! let cache: SourceCache = [("main.ts", "let a = 1;")].into_iter().collect();
//! let output = Report::new(Span::new("main.ts", 0, 10))
//!     .kind(ReportKind::Error)
//!     .message("syntax error")
//!     .label(Label::new(Span::new("main.ts", 4, 5)).unwrap().message("here"))
//!     .render(&cache)
//!     .unwrap();
//! assert!(output.contains("let a = 1;"));
//! ```

pub use caret_source_file::{
    IndexUnit, Line, LineIndex, OffsetLine, Source, SourceCache, SourceNotFound,
};
pub use config::{AnsiMode, Config, LabelAttach, char_width};
pub use draw::{
    BasicColor, CharSet, Characters, Color, advice_color, bg, error_color, fg, margin_color,
    note_color, skipped_margin_color, strip_ansi, unimportant_color, warning_color,
};
pub use label::{InvalidLabel, Label};
pub use render::RenderError;
pub use report::{Report, ReportKind, ReportStyle};
pub use span::Span;

mod config;
mod draw;
mod label;
mod render;
mod report;
mod span;
