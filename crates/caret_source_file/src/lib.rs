//! Source text indexing for diagnostic rendering.
//!
//! A [`Source`] owns one file's text and a line table that answers
//! offset-to-line/column queries in two units — Unicode scalar values
//! and UTF-8 bytes — without ambiguity: every lookup names its
//! [`IndexUnit`] explicitly. A [`SourceCache`] maps opaque source ids to
//! their [`Source`], and is the only way the renderer resolves a span's
//! text.

pub use cache::{SourceCache, SourceNotFound};
pub use line_index::{IndexUnit, Line, LineIndex};
pub use source::{OffsetLine, Source};

mod cache;
mod line_index;
mod source;
