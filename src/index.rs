//! The index of line breaks observed in a stream.

use alloc::vec::Vec;
use core::ops::Range;

use crate::position::LineCol;

/// The only byte treated as a line terminator. `\r` is an ordinary byte.
pub const NEWLINE: u8 = b'\n';

/// Records where lines end in a stream which is consumed chunk by chunk.
///
/// Every offset handed to [`record`] is appended to a sorted list, so looking a position up is
/// a binary search. The information is only complete for offsets less than [`size`]; offsets
/// beyond that are answered as if the stream had no further newlines.
///
/// ```
/// use linepos::{LineCol, LineIndex};
///
/// let mut index = LineIndex::new();
/// index.record(b"foo\nb");
/// index.record(b"ar\nbaz");
///
/// assert_eq!(index.size(), 11);
/// assert_eq!(index.position(3), LineCol::new(1, 4));
/// assert_eq!(index.position(8), LineCol::new(3, 1));
/// ```
///
/// [`record`]: LineIndex::record
/// [`size`]: LineIndex::size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "nightly", doc(cfg(feature = "alloc")))]
pub struct LineIndex {
    consumed: u64,
    breaks: Vec<u64>,
}

impl LineIndex {
    /// Creating an empty index.
    #[inline]
    pub const fn new() -> Self {
        Self {
            consumed: 0,
            breaks: Vec::new(),
        }
    }

    /// Scans the next chunk of the stream, which follows directly after the bytes recorded so far.
    pub fn record(&mut self, chunk: &[u8]) {
        let base = self.consumed;
        self.breaks
            .extend(memchr::memchr_iter(NEWLINE, chunk).map(|i| base + i as u64 + 1));
        self.consumed += chunk.len() as u64;
    }

    /// The number of bytes recorded so far.
    #[inline]
    pub fn size(&self) -> u64 {
        self.consumed
    }

    /// Translates a byte offset into line and column numbers.
    ///
    /// The newline itself is counted as the last column of the line preceding it. The result is
    /// only accurate if `offset` is less than [`size`](LineIndex::size).
    pub fn position(&self, offset: u64) -> LineCol {
        let i = self.breaks.partition_point(|&b| b <= offset);
        match i {
            0 => LineCol::new(1, offset.saturating_add(1)),
            i => LineCol::new(i as u64 + 1, offset - self.breaks[i - 1] + 1),
        }
    }

    /// Like [`position`](LineIndex::position), but only returns the line.
    #[inline]
    pub fn line(&self, offset: u64) -> u64 {
        self.position(offset).line
    }

    /// Like [`position`](LineIndex::position), but only returns the column.
    #[inline]
    pub fn column(&self, offset: u64) -> u64 {
        self.position(offset).col
    }

    /// Offsets directly following each newline seen so far, in ascending order.
    #[inline]
    pub fn line_breaks(&self) -> &[u64] {
        &self.breaks
    }

    /// The number of lines started so far, counting an empty one after a trailing newline.
    #[inline]
    pub fn lines(&self) -> u64 {
        self.breaks.len() as u64 + 1
    }

    /// The byte range of a line (numbered from `1`), including its newline.
    ///
    /// The last line ends at [`size`](LineIndex::size), as it may still be growing. Returns
    /// `None` for line `0` and for lines not seen yet.
    pub fn line_span(&self, line: u64) -> Option<Range<u64>> {
        let i = usize::try_from(line.checked_sub(1)?).ok()?;
        let start = match i {
            0 => 0,
            i => *self.breaks.get(i - 1)?,
        };
        let end = self.breaks.get(i).copied().unwrap_or(self.consumed);
        Some(start..end)
    }

    /// Forgetting everything recorded, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.consumed = 0;
        self.breaks.clear();
    }
}
