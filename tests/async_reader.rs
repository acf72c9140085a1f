use futures::channel::mpsc;
use futures::executor::block_on;
use futures::io::{AsyncReadExt, Cursor};
use futures::stream::TryStreamExt;
use futures::io::AsyncRead;
use futures::{join, pin_mut, SinkExt};
use linepos::{AsyncLineReader, LineCol, LineReader, Tracker};
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

const SAMPLE: &[u8] = b"[\n  1,\n  2\n]\n";

#[test]
fn agrees_with_the_blocking_reader() {
    let mut blocking = LineReader::new(SAMPLE);
    io::copy(&mut blocking, &mut io::sink()).unwrap();

    block_on(async {
        let mut reader = AsyncLineReader::new(Cursor::new(SAMPLE));
        let mut byte = [0u8; 1];
        while reader.read(&mut byte).await.unwrap() == 1 {}

        assert_eq!(reader.size(), blocking.size());
        for offset in 0..=SAMPLE.len() as u64 {
            assert_eq!(reader.position(offset), blocking.position(offset));
        }
    });
}

#[test]
fn tracker_follows_another_task() {
    let (mut tx, rx) = mpsc::unbounded::<io::Result<Vec<u8>>>();
    let mut reader = AsyncLineReader::new(rx.into_async_read());
    let tracker = reader.tracker();

    block_on(async {
        let decode = async {
            let mut out = Vec::new();
            reader.read_to_end(&mut out).await.unwrap();
            out
        };
        let feed = async {
            tx.send(Ok(b"ab\n".to_vec())).await.unwrap();
            tx.send(Ok(b"cd\ne".to_vec())).await.unwrap();
            tx.close_channel();
        };
        let (out, ()) = join!(decode, feed);
        assert_eq!(out, b"ab\ncd\ne");
    });

    assert_eq!(tracker.size(), 7);
    assert_eq!(tracker.position(6), LineCol::new(3, 1));
    assert_eq!(tracker.column(5), 3);
}

#[test]
fn errors_are_returned_unchanged() {
    let chunks = futures::stream::iter(vec![
        Ok(b"x\n".to_vec()),
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated")),
    ]);
    block_on(async {
        let mut reader = AsyncLineReader::new(chunks.into_async_read());
        let mut out = Vec::new();
        let err = reader.read_to_end(&mut out).await.unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(out, b"x\n");
        assert_eq!(reader.size(), 2);
        assert_eq!(reader.line(2), 2);
    });
}

type Slot = Arc<Mutex<Option<Tracker>>>;

/// Looks at the tracker when dropped, as a source flushing on close might.
struct Closing {
    input: &'static [u8],
    tracker: Slot,
    seen: Arc<Mutex<Option<u64>>>,
}

impl AsyncRead for Closing {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.input).poll_read(cx, buf)
    }
}

impl Drop for Closing {
    fn drop(&mut self) {
        if let Some(tracker) = self.tracker.lock().unwrap().take() {
            *self.seen.lock().unwrap() = Some(tracker.size());
        }
    }
}

#[test]
fn reset_drops_the_old_source_outside_the_lock() {
    let slot = Slot::default();
    let seen = Arc::new(Mutex::new(None));
    let old = Closing {
        input: b"a\nb",
        tracker: slot.clone(),
        seen: seen.clone(),
    };
    let fresh = Closing {
        input: b"c",
        tracker: Slot::default(),
        seen: Arc::new(Mutex::new(None)),
    };

    block_on(async {
        let reader = AsyncLineReader::new(old);
        pin_mut!(reader);
        *slot.lock().unwrap() = Some(reader.tracker());

        let mut out = Vec::new();
        reader.read_to_end(&mut out).await.unwrap();
        reader.as_mut().reset(fresh);

        assert_eq!(*seen.lock().unwrap(), Some(3));
        assert_eq!(reader.size(), 0);
        assert_eq!(reader.position(0), LineCol::new(1, 1));
    });
}

#[test]
fn blocking_reset_clears_after_swapping() {
    let mut reader = LineReader::new(&b"x\ny\n"[..]);
    let tracker = reader.tracker();
    io::copy(&mut reader, &mut io::sink()).unwrap();

    let old = reader.reset(&b"z"[..]);
    assert_eq!(old, b"");
    assert_eq!(tracker.size(), 0);
    assert_eq!(tracker.position(1), LineCol::new(1, 2));
}
