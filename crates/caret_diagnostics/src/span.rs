/// A half-open `[start, end)` range over one source's offsets.
///
/// A span is a plain value: the unit its offsets are measured in (chars
/// or bytes) is not stored here but resolved at render time from the
/// report's configuration, so one render pass interprets every span
/// consistently. `start <= end` is not enforced at construction;
/// [`Label::new`](crate::Label::new) enforces it where it matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub source_id: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(source_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            source_id: Some(source_id.into()),
            start,
            end,
        }
    }

    /// A span without a source id, e.g. for diagnostics that never
    /// resolve against a file.
    pub fn detached(start: usize, end: usize) -> Self {
        Self {
            source_id: None,
            start,
            end,
        }
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }
}
