use caret_source_file::SourceCache;

use crate::config::Config;
use crate::draw::{Color, advice_color, error_color, warning_color};
use crate::label::Label;
use crate::render::{self, RenderError};
use crate::span::Span;

/// The fixed diagnostic kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ReportKind {
    Error,
    Warning,
    Advice,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Error => "Error",
            ReportKind::Warning => "Warning",
            ReportKind::Advice => "Advice",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a report announces itself in the header line.
///
/// Either a fixed kind with its fixed color, a caller-named style
/// carrying its own color, or a bare name with no color. One resolver
/// produces the `(name, color)` pair so the render path never inspects
/// the variants itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStyle {
    Kind(ReportKind),
    Custom { name: String, color: Color },
    Plain(String),
}

impl ReportStyle {
    /// Caller-named style with its own color.
    pub fn custom(name: impl Into<String>, color: Color) -> ReportStyle {
        ReportStyle::Custom {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ReportStyle::Kind(kind) => kind.as_str(),
            ReportStyle::Custom { name, .. } => name,
            ReportStyle::Plain(name) => name,
        }
    }

    /// The header color for this style.
    ///
    /// Fixed kinds keep their color regardless of `config.color` (ANSI
    /// stripping still removes it when ANSI mode is off); only custom
    /// styles are gated on the color toggle, and bare names never
    /// color.
    pub(crate) fn resolve_color(&self, config: &Config) -> Option<Color> {
        match self {
            ReportStyle::Kind(ReportKind::Error) => error_color(true),
            ReportStyle::Kind(ReportKind::Warning) => warning_color(true),
            ReportStyle::Kind(ReportKind::Advice) => advice_color(true),
            ReportStyle::Custom { color, .. } => config.color.then_some(*color),
            ReportStyle::Plain(_) => None,
        }
    }
}

impl From<ReportKind> for ReportStyle {
    fn from(kind: ReportKind) -> ReportStyle {
        ReportStyle::Kind(kind)
    }
}

impl From<&str> for ReportStyle {
    fn from(name: &str) -> ReportStyle {
        ReportStyle::Plain(name.to_string())
    }
}

impl From<String> for ReportStyle {
    fn from(name: String) -> ReportStyle {
        ReportStyle::Plain(name)
    }
}

/// One diagnostic, accumulated by its builder methods and rendered as a
/// pure read.
///
/// Scalar fields replace on each call; `notes`, `help`, and `labels`
/// only ever grow. The config is resolved eagerly at construction and
/// may be replaced wholesale once via [`Report::config`]. Rendering
/// leaves the report untouched, so the same report can be rendered
/// again (also against a different cache or after a config change).
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub(crate) kind: ReportStyle,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) notes: Vec<String>,
    pub(crate) help: Vec<String>,
    pub(crate) span: Span,
    pub(crate) labels: Vec<Label>,
    pub(crate) config: Config,
}

impl Report {
    /// A new report anchored at `span`, defaulting to
    /// [`ReportKind::Error`] with the default config.
    pub fn new(span: Span) -> Report {
        Report {
            kind: ReportKind::Error.into(),
            code: None,
            message: None,
            notes: Vec::new(),
            help: Vec::new(),
            span,
            labels: Vec::new(),
            config: Config::default(),
        }
    }

    pub fn kind(mut self, kind: impl Into<ReportStyle>) -> Report {
        self.kind = kind.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Report {
        self.code = Some(code.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Report {
        self.message = Some(message.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Report {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Report {
        self.help.push(help.into());
        self
    }

    pub fn label(mut self, label: Label) -> Report {
        self.labels.push(label);
        self
    }

    pub fn labels(mut self, labels: impl IntoIterator<Item = Label>) -> Report {
        self.labels.extend(labels);
        self
    }

    /// Replaces the report's configuration wholesale.
    pub fn config(mut self, config: Config) -> Report {
        self.config = config;
        self
    }

    pub fn primary_span(&self) -> &Span {
        &self.span
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Renders this report against `cache` into its final text.
    ///
    /// Fails only when the primary span's source id is not registered;
    /// imprecise span data degrades to placeholders or dropped labels
    /// instead.
    pub fn render(&self, cache: &SourceCache) -> Result<String, RenderError> {
        render::render_report(self, cache)
    }
}
