//! Human-readable positions.

use core::cmp::Ordering;
use core::fmt;

/// A position in a byte stream, as line and column numbers.
///
/// Both numbers start with `1`, and columns are counted in bytes. Only `\n` is treated as a
/// newline, and it belongs to the line it terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u64,
    pub col: u64,
}

impl LineCol {
    /// Creating a new instance.
    #[inline]
    pub const fn new(line: u64, col: u64) -> Self {
        Self { line, col }
    }
}

impl Default for LineCol {
    #[inline]
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl Ord for LineCol {
    fn cmp(&self, other: &Self) -> Ordering {
        let line_ord = self.line.cmp(&other.line);
        if line_ord != Ordering::Equal {
            line_ord
        } else {
            self.col.cmp(&other.col)
        }
    }
}

impl PartialOrd for LineCol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LineCol {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl From<LineCol> for (u64, u64) {
    #[inline]
    fn from(pos: LineCol) -> Self {
        (pos.line, pos.col)
    }
}
