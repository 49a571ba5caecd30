//! Source spans.
//!
//! Offsets are byte offsets into the source text of a single file. Two shapes
//! are used: [`TextSpan`] (start + length, as found in edit scripts) and
//! [`TextRange`] (half-open `pos..end`, as found in editor selections).

use serde::{Deserialize, Serialize};

/// A span expressed as a start offset and a length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub length: u32,
}

impl TextSpan {
    #[inline]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    /// An empty span at `start`, i.e. a pure insertion point.
    #[inline]
    pub const fn at(start: u32) -> Self {
        Self { start, length: 0 }
    }

    /// Build a span from absolute bounds. `end` is clamped to `start`.
    #[inline]
    pub fn from_bounds(start: u32, end: u32) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// End offset, saturating at `u32::MAX`.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }

    /// End offset, or `None` when `start + length` does not fit in a `u32`.
    #[inline]
    pub const fn checked_end(&self) -> Option<u32> {
        self.start.checked_add(self.length)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether `offset` lies strictly between the span's bounds.
    #[inline]
    pub const fn strictly_contains(&self, offset: u32) -> bool {
        offset > self.start && offset < self.end()
    }
}

/// A half-open range `pos..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    #[inline]
    pub const fn new(pos: u32, end: u32) -> Self {
        Self { pos, end }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub fn to_span(self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }
}

/// A request location: either a caret position or a selected range.
///
/// Serialized untagged so both `12` and `{ "pos": 3, "end": 9 }` are accepted,
/// matching how tsserver passes `positionOrRange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionOrRange {
    Position(u32),
    Range(TextRange),
}

impl PositionOrRange {
    /// The position, or the start of the range.
    #[inline]
    pub const fn start(&self) -> u32 {
        match self {
            Self::Position(pos) => *pos,
            Self::Range(range) => range.pos,
        }
    }

    /// The selected range, if this is a range. A zero-length range is still a range.
    #[inline]
    pub const fn as_range(&self) -> Option<TextRange> {
        match self {
            Self::Position(_) => None,
            Self::Range(range) => Some(*range),
        }
    }
}

impl From<u32> for PositionOrRange {
    fn from(pos: u32) -> Self {
        Self::Position(pos)
    }
}

impl From<TextRange> for PositionOrRange {
    fn from(range: TextRange) -> Self {
        Self::Range(range)
    }
}
