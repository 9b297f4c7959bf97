use std::collections::HashMap;

use crate::source::Source;

/// Lookup of a source id that was never registered.
///
/// This is deliberately fatal for rendering: a renderer must never
/// silently draw a snippet against the wrong file.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("failed to fetch source '{id}'")]
pub struct SourceNotFound {
    pub id: String,
}

/// Maps opaque source ids to their indexed text.
///
/// Sources are registered up front by the host layer; the cache performs
/// no IO and no lazy loading, keeping the renderer testable with
/// in-memory text.
#[derive(Debug, Clone, Default)]
pub struct SourceCache {
    sources: HashMap<String, Source>,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source` under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, source: Source) {
        self.sources.insert(id.into(), source);
    }

    /// The only read path the renderer uses to resolve a span's text.
    pub fn fetch(&self, id: &str) -> Result<&Source, SourceNotFound> {
        self.sources.get(id).ok_or_else(|| SourceNotFound {
            id: id.to_string(),
        })
    }

    /// Mutable access, e.g. to set a source's display line offset
    /// between renders.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Source> {
        self.sources.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<I, S> FromIterator<(I, S)> for SourceCache
where
    I: Into<String>,
    S: Into<Source>,
{
    fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
        Self {
            sources: iter
                .into_iter()
                .map(|(id, source)| (id.into(), source.into()))
                .collect(),
        }
    }
}
