//! Readers recording line information of the bytes passing through them.
//!
//! [`LineReader`] wraps [`std::io::Read`] and [`AsyncLineReader`] wraps [`AsyncRead`]. Both pass
//! every read through unchanged and scan the returned bytes for newlines. Lookups go through a
//! [`Tracker`], which can be cloned and sent to another thread while the reader itself is owned
//! by a decoder.
//!
//! [`AsyncRead`]: futures_io::AsyncRead

mod async_read;
mod read;
mod tracker;

pub use async_read::AsyncLineReader;
pub use read::LineReader;
pub use tracker::Tracker;
