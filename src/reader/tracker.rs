use std::io::IoSliceMut;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::index::LineIndex;
use crate::position::LineCol;

/// A shared handle to the line information recorded by a reader.
///
/// Cloning is cheap, and clones observe the same reader. Queries only wait for a reader while
/// it records a chunk it has already received, never while it waits on its source.
///
/// ```
/// use std::io::Read;
/// use std::thread;
/// use linepos::LineReader;
///
/// let mut reader = LineReader::new(&b"first\nsecond\n"[..]);
/// let tracker = reader.tracker();
///
/// let decoder = thread::spawn(move || {
///     let mut buf = Vec::new();
///     reader.read_to_end(&mut buf).map(|_| buf)
/// });
/// let _ = tracker.size();
/// decoder.join().unwrap()?;
///
/// assert_eq!(tracker.position(8).line, 2);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tracker {
    index: Arc<RwLock<LineIndex>>,
}

impl Tracker {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            index: Arc::new(RwLock::new(LineIndex::new())),
        }
    }

    // A poisoned lock still guards a sorted index: `LineIndex` never panics half way through
    // appending an offset.
    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, LineIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, LineIndex> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub(crate) fn record(&self, chunk: &[u8]) {
        if !chunk.is_empty() {
            self.write().record(chunk);
        }
    }

    /// Records the first `n` bytes spread over `bufs`, as filled by a vectored read.
    pub(crate) fn record_vectored(&self, bufs: &[IoSliceMut<'_>], mut n: usize) {
        if n == 0 {
            return;
        }
        let mut index = self.write();
        for buf in bufs {
            let len = buf.len().min(n);
            index.record(&buf[..len]);
            n -= len;
            if n == 0 {
                break;
            }
        }
    }

    #[inline]
    pub(crate) fn clear(&self) {
        self.write().clear();
    }

    /// The number of bytes read so far. Position information is only accurate for offsets less
    /// than this.
    #[inline]
    pub fn size(&self) -> u64 {
        self.read().size()
    }

    /// Translates a byte offset into line and column numbers, both starting with `1`.
    ///
    /// A newline is counted as part of the line it terminates. `\r` is an ordinary byte, so on
    /// `\r\n` input columns are one past what an editor hiding the `\r` would show. The result is
    /// only accurate if `offset` is less than [`size`](Tracker::size); beyond that it assumes no
    /// more newlines follow.
    #[inline]
    pub fn position(&self, offset: u64) -> LineCol {
        self.read().position(offset)
    }

    /// Like [`position`](Tracker::position), but only returns the line.
    #[inline]
    pub fn line(&self, offset: u64) -> u64 {
        self.position(offset).line
    }

    /// Like [`position`](Tracker::position), but only returns the column.
    #[inline]
    pub fn column(&self, offset: u64) -> u64 {
        self.position(offset).col
    }

    /// Copying out everything recorded so far.
    pub fn snapshot(&self) -> LineIndex {
        self.read().clone()
    }
}
