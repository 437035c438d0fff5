//! Source locations and closed source ranges.
//!
//! A [`Loc`] is a single byte offset into the source buffer. A [`Span`]
//! is a closed interval of locations: both `start` and `end` are inclusive,
//! matching the convention the parser uses when it hands token extents to
//! the node factories.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    #[error("span start {0} (0x{0:X}) exceeds u32::MAX (0x{max:X})", max = u32::MAX)]
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    #[error("span end {0} (0x{0:X}) exceeds u32::MAX (0x{max:X})", max = u32::MAX)]
    EndTooLarge(usize),
}

/// A single source position (byte offset from the start of the buffer).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Loc(u32);

impl Loc {
    /// Location used for generated nodes.
    pub const DUMMY: Loc = Loc(0);

    #[inline]
    pub const fn new(offset: u32) -> Self {
        Loc(offset)
    }

    /// Byte offset of this location.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.0
    }

    /// Location `n` bytes further into the buffer (saturating).
    #[inline]
    #[must_use]
    pub const fn advance(self, n: u32) -> Loc {
        Loc(self.0.saturating_add(n))
    }
}

impl fmt::Debug for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed source range.
///
/// Layout: 8 bytes total
/// - start: first byte covered
/// - end: last byte covered (inclusive)
///
/// A single-point span has `start == end` and covers one byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: Loc,
    pub end: Loc,
}

impl Span {
    /// Dummy span for generated nodes.
    pub const DUMMY: Span = Span {
        start: Loc::DUMMY,
        end: Loc::DUMMY,
    };

    /// Create a span from a location pair.
    #[inline]
    pub fn new(start: Loc, end: Loc) -> Self {
        debug_assert!(start <= end, "span start {start:?} is after end {end:?}");
        Span { start, end }
    }

    /// Create a single-point span.
    #[inline]
    pub const fn point(loc: Loc) -> Span {
        Span {
            start: loc,
            end: loc,
        }
    }

    /// Try to create a closed span from a half-open byte range.
    ///
    /// An empty range maps to the point span at `range.start`.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let last = range.end.saturating_sub(1).max(range.start);
        let end = u32::try_from(last).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span {
            start: Loc(start),
            end: Loc(end),
        })
    }

    /// Number of bytes covered (at least one).
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.0 - self.start.0 + 1
    }

    /// Check if this span covers a single location.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Check if a location is within this span (both ends inclusive).
    #[inline]
    pub fn contains(&self, loc: Loc) -> bool {
        loc >= self.start && loc <= self.end
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extend span to include another location.
    #[inline]
    #[must_use]
    pub fn extend_to(self, end: Loc) -> Span {
        Span {
            start: self.start,
            end: self.end.max(end),
        }
    }

    /// Convert to a half-open `std::ops::Range` for slicing source text.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start.0 as usize..self.end.0 as usize + 1
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start.0, self.end.0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start.0, self.end.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Loc, Span};
    crate::static_assert_size!(Loc, 4);
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: u32, end: u32) -> Span {
        Span::new(Loc::new(start), Loc::new(end))
    }

    #[test]
    fn test_span_basic() {
        let s = span(10, 20);
        assert_eq!(s.len(), 11);
        assert!(!s.is_point());
        assert!(s.contains(Loc::new(15)));
        assert!(s.contains(Loc::new(20)));
        assert!(!s.contains(Loc::new(21)));
    }

    #[test]
    fn test_span_point() {
        let p = Span::point(Loc::new(42));
        assert_eq!(p.start, p.end);
        assert!(p.is_point());
        assert_eq!(p.len(), 1);
        assert!(p.contains(Loc::new(42)));
    }

    #[test]
    fn test_span_merge() {
        let merged = span(10, 20).merge(span(15, 30));
        assert_eq!(merged, span(10, 30));

        // Disjoint, reversed order
        let merged = span(20, 30).merge(span(0, 5));
        assert_eq!(merged, span(0, 30));
    }

    #[test]
    fn test_span_extend_to() {
        let s = span(10, 20);
        assert_eq!(s.extend_to(Loc::new(30)), span(10, 30));
        assert_eq!(s.extend_to(Loc::new(15)), s);
    }

    #[test]
    fn test_span_from_half_open_range() {
        let Ok(s) = Span::try_from_range(100..200) else {
            panic!("expected Ok for valid range");
        };
        assert_eq!(s, span(100, 199));
        assert_eq!(s.to_range(), 100..200);

        let Ok(empty) = Span::try_from_range(7..7) else {
            panic!("expected Ok for empty range");
        };
        assert_eq!(empty, Span::point(Loc::new(7)));
    }

    #[test]
    fn test_span_try_from_range_too_large() {
        let large = u32::MAX as usize + 1;
        assert!(matches!(
            Span::try_from_range(large..large + 10),
            Err(SpanError::StartTooLarge(_))
        ));
        assert!(matches!(
            Span::try_from_range(0..large + 1),
            Err(SpanError::EndTooLarge(_))
        ));
    }

    #[test]
    fn test_span_error_display() {
        let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
        assert!(msg.contains("start"));
        assert!(msg.contains("0x100000000"));

        let msg = SpanError::EndTooLarge(0x2_0000_0000).to_string();
        assert!(msg.contains("end"));
        assert!(msg.contains("0x200000000"));
    }

    #[test]
    fn test_loc_advance_saturates() {
        assert_eq!(Loc::new(5).advance(3), Loc::new(8));
        assert_eq!(Loc::new(u32::MAX).advance(1), Loc::new(u32::MAX));
    }

    #[test]
    fn test_span_debug_display() {
        let s = span(100, 200);
        assert_eq!(format!("{s:?}"), "100..=200");
        assert_eq!(format!("{s}"), "100..=200");
        assert_eq!(format!("{:?}", Loc::new(3)), "@3");
    }
}
