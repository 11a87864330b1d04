//! Extraction of the defects section from a normalized log.
//!
//! Analyzer logs end with a section introduced by a marker line (by default
//! `CURRENT DEFECTS`). The cut keeps the first line containing the marker and
//! everything after it, byte for byte.

use memchr::memmem;

/// The tail section selected from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub bytes: &'a [u8],
    /// Zero-based index of the marker line, if one was found.
    pub marker_line: Option<usize>,
}

impl Section<'_> {
    pub fn line_count(&self) -> usize {
        count_lines(self.bytes)
    }
}

/// Select the suffix of `normalized` starting at the first line that contains
/// `marker`. Returns an empty section when no line does.
///
/// A marker that itself spans a newline can never lie within one line and
/// therefore never matches.
pub fn tail_section<'a>(normalized: &'a [u8], marker: &str) -> Section<'a> {
    let marker = marker.as_bytes();
    let not_found = Section {
        bytes: &[],
        marker_line: None,
    };

    if normalized.is_empty() || memchr::memchr(b'\n', marker).is_some() {
        return not_found;
    }

    match memmem::find(normalized, marker) {
        Some(pos) => {
            let start = memchr::memrchr(b'\n', &normalized[..pos]).map_or(0, |nl| nl + 1);
            Section {
                bytes: &normalized[start..],
                marker_line: Some(memchr::memchr_iter(b'\n', &normalized[..start]).count()),
            }
        }
        None => not_found,
    }
}

/// Number of lines in `bytes`. A trailing fragment without `\n` counts.
pub fn count_lines(bytes: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', bytes).count();
    match bytes.last() {
        Some(b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}
