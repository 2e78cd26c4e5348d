//! Source file spans and locations

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A unique identifier for a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("file#{_0}")]
pub struct FileId(pub u32);

impl FileId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A byte offset span in a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("{start}..{end}")]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span covering both `self` and `other`
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A span with associated file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize, Display)]
#[display("{file}:{span}")]
pub struct FileSpan {
    pub file: FileId,
    pub span: Span,
}

impl FileSpan {
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(4, 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_span_cover() {
        let joined = Span::new(8, 12).cover(Span::new(2, 5));
        assert_eq!(joined, Span::new(2, 12));
    }

    #[test]
    fn test_display() {
        let span = FileSpan::new(FileId(2), Span::new(1, 7));
        assert_eq!(span.to_string(), "file#2:1..7");
    }

    #[test]
    fn test_span_deserializes_from_json() {
        let span: Span = serde_json::from_str(r#"{"start": 3, "end": 9}"#).unwrap();
        assert_eq!(span.range(), 3..9);
    }
}
