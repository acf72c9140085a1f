//! Mapping byte offsets in streams to line and column numbers.
//!
//! Decoders like JSON or XML parsers usually report errors and token positions as byte offsets
//! into their input, which are hardly useful to a human. Putting a [`LineReader`] (or an
//! [`AsyncLineReader`]) between the decoder and its input records where lines end as the bytes
//! pass through, so those offsets can be translated afterwards, or while decoding is still
//! going on, without buffering the input.
//!
//! ```
//! use std::io::Read;
//! use linepos::{LineCol, LineReader};
//!
//! let mut reader = LineReader::new(&b"foo\nbar\nbaz"[..]);
//! let mut input = Vec::new();
//! reader.read_to_end(&mut input)?;
//!
//! assert_eq!(reader.position(4), LineCol::new(2, 1));
//! assert_eq!(reader.line(8), 3);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Only `\n` is treated as a newline, and it belongs to the line it ends. Without the `std`
//! feature only [`LineIndex`] is available, which records chunks handed to it directly.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "nightly", feature(doc_cfg))]
#![doc(test(attr(warn(warnings))))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod index;
pub mod position;
#[cfg(feature = "std")]
#[cfg_attr(feature = "nightly", doc(cfg(feature = "std")))]
pub mod reader;

#[cfg(feature = "alloc")]
pub use index::{LineIndex, NEWLINE};
pub use position::LineCol;
#[cfg(feature = "std")]
pub use reader::{AsyncLineReader, LineReader, Tracker};
