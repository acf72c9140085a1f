use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::ready;
use futures_io::{AsyncRead, IoSliceMut, Result};
use pin_project_lite::pin_project;

use super::Tracker;
use crate::position::LineCol;

pin_project! {
    /// Wrapping [`AsyncRead`], records the newlines read through it.
    ///
    /// The asynchronous counterpart of [`LineReader`]. Queries take `&self`, and a [`Tracker`]
    /// can be moved to another task while this one is being polled.
    ///
    /// ```
    /// use futures::io::AsyncReadExt;
    /// use linepos::{AsyncLineReader, LineCol};
    ///
    /// futures::executor::block_on(async {
    ///     let mut reader = AsyncLineReader::new(&b"foo\nbar"[..]);
    ///     let mut buf = Vec::new();
    ///     reader.read_to_end(&mut buf).await?;
    ///
    ///     assert_eq!(reader.position(5), LineCol::new(2, 2));
    ///     Ok::<(), std::io::Error>(())
    /// })?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    ///
    /// [`AsyncRead`]: futures_io::AsyncRead
    /// [`LineReader`]: crate::reader::LineReader
    #[derive(Debug)]
    pub struct AsyncLineReader<R> {
        #[pin]
        reader: R,
        tracker: Tracker,
    }
}

impl<R: AsyncRead> From<R> for AsyncLineReader<R> {
    #[inline]
    fn from(reader: R) -> Self {
        Self {
            reader,
            tracker: Tracker::new(),
        }
    }
}

impl<R: AsyncRead> AsyncLineReader<R> {
    /// Creating a new instance.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::from(reader)
    }
}

impl<R> AsyncLineReader<R> {
    /// A handle for querying positions from elsewhere, e.g. another task.
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

    /// Like [`position`](AsyncLineReader::position), but only returns the line.
    #[inline]
    pub fn line(&self, offset: u64) -> u64 {
        self.tracker.line(offset)
    }

    /// Like [`position`](AsyncLineReader::position), but only returns the column.
    #[inline]
    pub fn column(&self, offset: u64) -> u64 {
        self.tracker.column(offset)
    }

    /// Continues reading from `reader`, forgetting the recorded information. The previous reader
    /// is dropped in place, before the index is locked.
    pub fn reset(self: Pin<&mut Self>, reader: R) {
        let mut this = self.project();
        this.reader.set(reader);
        this.tracker.clear();
    }

    /// Getting a reference to the original reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Getting a pinned reference to the original reader.
    ///
    /// Reading through it directly bypasses the recording and leaves positions off.
    #[inline]
    pub fn get_pin_mut(self: Pin<&mut Self>) -> Pin<&mut R> {
        self.project().reader
    }

    /// Extracting the original reader.
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> AsyncRead for AsyncLineReader<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<Result<usize>> {
        let this = self.project();
        let n = ready!(this.reader.poll_read(cx, buf))?;
        this.tracker.record(&buf[..n]);
        Poll::Ready(Ok(n))
    }

    fn poll_read_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &mut [IoSliceMut<'_>],
    ) -> Poll<Result<usize>> {
        let this = self.project();
        let n = ready!(this.reader.poll_read_vectored(cx, bufs))?;
        this.tracker.record_vectored(bufs, n);
        Poll::Ready(Ok(n))
    }
}
