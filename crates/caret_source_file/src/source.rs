use crate::line_index::{IndexUnit, Line, LineIndex};

/// An offset resolved against a [`Source`]'s line table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetLine {
    /// The line record containing the offset.
    pub line: Line,
    /// Zero-based index of the line in the table.
    pub index: usize,
    /// Offset of the query position within the line, in the unit of the
    /// query.
    pub column: usize,
}

/// One source file's text together with its line table.
///
/// Immutable after construction apart from the display line offset,
/// which biases *printed* line numbers (for diagnostics over a sub-file
/// region) without affecting indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    text: String,
    index: LineIndex,
    display_line_offset: usize,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = LineIndex::from_source_text(&text);
        Self {
            text,
            index,
            display_line_offset: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Total length in `unit` space.
    pub fn len(&self, unit: IndexUnit) -> usize {
        self.index.len(unit)
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    pub fn lines(&self) -> &[Line] {
        self.index.lines()
    }

    pub fn get_line(&self, index: usize) -> Option<&Line> {
        self.index.get_line(index)
    }

    /// Resolves `offset` to its containing line, or `None` when the
    /// offset lies past the end of the text. The end-of-text offset is a
    /// valid position and resolves to the final line.
    pub fn line_at(&self, offset: usize, unit: IndexUnit) -> Option<OffsetLine> {
        let index = self.index.line_at(offset, unit)?;
        let line = self.index.lines()[index];
        Some(OffsetLine {
            line,
            index,
            column: offset - line.offset(unit),
        })
    }

    /// See [`LineIndex::line_range`].
    pub fn line_range(&self, start: usize, end: usize, unit: IndexUnit) -> (usize, usize) {
        self.index.line_range(start, end, unit)
    }

    /// The raw text of `line`, terminator included, or `None` when the
    /// record does not belong to this source's line table.
    pub fn line_text(&self, line: &Line) -> Option<&str> {
        let index = self.index.line_at(line.byte_offset, IndexUnit::Byte)?;
        if self.index.lines()[index] != *line {
            return None;
        }
        self.text.get(line.byte_offset..line.byte_offset + line.byte_len)
    }

    pub fn display_line_offset(&self) -> usize {
        self.display_line_offset
    }

    /// Sets the bias added to printed line numbers. Indexing is
    /// unaffected.
    pub fn set_display_line_offset(&mut self, offset: usize) {
        self.display_line_offset = offset;
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::new(text)
    }
}
