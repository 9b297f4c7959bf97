use crate::draw::Color;
use crate::span::Span;

/// A label span whose start lies past its end.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("label start {start} must not be past its end {end}")]
pub struct InvalidLabel {
    pub start: usize,
    pub end: usize,
}

/// A span annotated with display metadata, attached to a report.
///
/// Construction fails for an inverted span; this is checked eagerly so a
/// malformed label can never surface as a render-time failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub(crate) span: Span,
    pub(crate) message: Option<String>,
    pub(crate) color: Option<Color>,
    pub(crate) order: i32,
    pub(crate) priority: i32,
}

impl Label {
    pub fn new(span: Span) -> Result<Label, InvalidLabel> {
        if span.start > span.end {
            return Err(InvalidLabel {
                start: span.start,
                end: span.end,
            });
        }
        Ok(Label {
            span,
            message: None,
            color: None,
            order: 0,
            priority: 0,
        })
    }

    /// Attach a message to this label. Rendering draws an arrow from the
    /// label's attach column to the message; a label without a message
    /// still gets its underline.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Vertical/selection ordering among labels sharing a line; lower
    /// orders render first.
    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Reserved for future crossing resolution; the base layout ignores
    /// it.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn get_color(&self) -> Option<Color> {
        self.color
    }

    pub fn get_order(&self) -> i32 {
        self.order
    }

    pub fn get_priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_span_fails_at_construction() {
        for (start, end) in [(1, 0), (10, 9), (usize::MAX, 0)] {
            let err = Label::new(Span::detached(start, end)).unwrap_err();
            assert_eq!(err, InvalidLabel { start, end });
        }
    }

    #[test]
    fn empty_and_ordered_spans_are_accepted() {
        assert!(Label::new(Span::detached(3, 3)).is_ok());
        assert!(Label::new(Span::new("a.ts", 0, 4)).is_ok());
    }

    #[test]
    fn builder_fills_display_metadata() {
        let label = Label::new(Span::detached(0, 2))
            .unwrap()
            .message("here")
            .order(7)
            .priority(1);
        assert_eq!(label.get_message(), Some("here"));
        assert_eq!(label.order, 7);
        assert_eq!(label.priority, 1);
        assert_eq!(label.color, None);
    }
}
