use std::io::{IoSliceMut, Read, Result};
use std::mem;

use super::Tracker;
use crate::position::LineCol;

/// Wrapping [`Read`], records the newlines read through it.
///
/// Reads are passed through unchanged, including errors and end of stream. The intended use is
/// putting it between a decoder and its input, and translating the byte offsets the decoder
/// reports (e.g. in its errors) with [`position`](LineReader::position).
///
/// ```
/// use std::io::Read;
/// use linepos::{LineCol, LineReader};
///
/// let mut reader = LineReader::new(&b"{\n  \"foo\": 42,\n}"[..]);
/// let mut buf = String::new();
/// reader.read_to_string(&mut buf)?;
///
/// // The decoder complains about the `}` at byte 15.
/// assert_eq!(reader.position(15), LineCol::new(3, 1));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    tracker: Tracker,
}

impl<R: Read> From<R> for LineReader<R> {
    #[inline]
    fn from(reader: R) -> Self {
        Self {
            reader,
            tracker: Tracker::new(),
        }
    }
}

impl<R: Read> LineReader<R> {
    /// Creating a new instance.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::from(reader)
    }
}

impl<R> LineReader<R> {
    /// A handle for querying positions from elsewhere, e.g. another thread.
    #[inline]
    pub fn tracker(&self) -> Tracker {
        self.tracker.clone()
    }

    /// The number of bytes read so far. Position information is only accurate for offsets less
    /// than this.
    #[inline]
    pub fn size(&self) -> u64 {
        self.tracker.size()
    }

    /// Translates a byte offset into line and column numbers. See [`Tracker::position`].
    #[inline]
    pub fn position(&self, offset: u64) -> LineCol {
        self.tracker.position(offset)
    }

    /// Like [`position`](LineReader::position), but only returns the line.
    #[inline]
    pub fn line(&self, offset: u64) -> u64 {
        self.tracker.line(offset)
    }

    /// Like [`position`](LineReader::position), but only returns the column.
    #[inline]
    pub fn column(&self, offset: u64) -> u64 {
        self.tracker.column(offset)
    }

    /// Continues reading from `reader`, forgetting the recorded information. Returns the previous
    /// reader.
    ///
    /// Trackers taken before stay attached and see the cleared state.
    pub fn reset(&mut self, reader: R) -> R {
        let old = mem::replace(&mut self.reader, reader);
        self.tracker.clear();
        old
    }

    /// Getting a reference to the original reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Extracting the original reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for LineReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.reader.read(buf)?;
        self.tracker.record(&buf[..n]);
        Ok(n)
    }

    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<usize> {
        let n = self.reader.read_vectored(bufs)?;
        self.tracker.record_vectored(bufs, n);
        Ok(n)
    }
}
