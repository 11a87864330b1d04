//! Removal of ANSI color and erase-line sequences from captured tool output.
//!
//! The recognised sequences are `ESC [ <n>[;<n>] (m|G|K)` with one or two
//! digits per parameter, which covers SGR colors, cursor-to-column and
//! erase-in-line as emitted by gcc, clang, and the analyzers. Anything else
//! (including other CSI sequences) is left untouched.
//!
//! Input is handled as raw bytes so logs with invalid UTF-8 survive unchanged
//! apart from the removed sequences.

use regex::bytes::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Pattern for one escape sequence.
pub const ESCAPE_PATTERN: &str = r"\x1B\[(?:[0-9]{1,2}(?:;[0-9]{1,2})?)?[mGK]";

static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ESCAPE_PATTERN).expect("escape pattern must compile"));

/// Result of stripping one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub bytes: Cow<'a, [u8]>,
    /// Number of sequences removed, summed over all passes.
    pub removed: usize,
}

/// Strip every escape sequence from `input`.
///
/// Borrows when there is nothing to remove. Removal repeats until no match is
/// left, so sequences that only become contiguous once an inner one is gone
/// are removed too and `strip(strip(x)) == strip(x)` holds for any input.
pub fn strip(input: &[u8]) -> Cow<'_, [u8]> {
    strip_counted(input).bytes
}

/// Like [`strip`], also reporting how many sequences were removed.
///
/// Each pass is a single regex scan. Ordinary logs finish after one pass;
/// only sequences nested inside each other (`ESC ESC[m [m`) need more, one
/// pass per nesting level, so `n` nested sequences cost `O(n^2)`.
pub fn strip_counted(input: &[u8]) -> Stripped<'_> {
    let mut bytes = Cow::Borrowed(input);
    let mut removed = 0;

    loop {
        let mut found = 0;
        let next = match ESCAPE_RE.replace_all(&bytes, |_: &Captures<'_>| {
            found += 1;
            &b""[..]
        }) {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match next {
            Some(next) => {
                removed += found;
                bytes = Cow::Owned(next);
            }
            None => return Stripped { bytes, removed },
        }
    }
}

/// Whether `input` still contains a sequence [`strip`] would remove.
pub fn has_escapes(input: &[u8]) -> bool {
    ESCAPE_RE.is_match(input)
}
