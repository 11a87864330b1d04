//! Domain-specific assertions for format-outputs harnesses.
//!
//! These wrap `pretty_assertions` and render bytes lossily as text so a
//! failing comparison shows a readable line diff.

use std::collections::BTreeSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// File content assertions
// ---------------------------------------------------------------------------

/// Assert that the file at `path` holds exactly `expected` bytes.
///
/// ```rust
/// assert_file_bytes!(results.join("run1/GCC.log.cut"), GCC_CUT);
/// ```
#[macro_export]
macro_rules! assert_file_bytes {
    ($path:expr, $expected:expr) => {{
        let path: std::path::PathBuf = $path.into();
        let expected_owned = $expected;
        let expected: &[u8] = expected_owned.as_ref();
        let actual = std::fs::read(&path)
            .unwrap_or_else(|e| panic!("assert_file_bytes! failed: cannot read {}: {e}", path.display()));
        if actual != expected {
            pretty_assertions::assert_eq!(
                String::from_utf8_lossy(&actual),
                String::from_utf8_lossy(expected),
                "assert_file_bytes! failed for {}",
                path.display()
            );
            panic!("assert_file_bytes! failed for {}: bytes differ", path.display());
        }
    }};
}

/// Assert that the file at `path` exists and is empty.
#[macro_export]
macro_rules! assert_file_empty {
    ($path:expr) => {{
        let path: std::path::PathBuf = $path.into();
        let meta = std::fs::metadata(&path)
            .unwrap_or_else(|e| panic!("assert_file_empty! failed: {}: {e}", path.display()));
        assert_eq!(meta.len(), 0, "assert_file_empty! failed: {} is not empty", path.display());
    }};
}

// ---------------------------------------------------------------------------
// Tree assertions
// ---------------------------------------------------------------------------

/// Assert the exact set of regular files under a root, as `/`-separated
/// relative paths.
///
/// ```rust
/// assert_tree!(results.path(), ["run1/GCC.log", "run1/GCC.log.cut"]);
/// ```
#[macro_export]
macro_rules! assert_tree {
    ($root:expr, [$($file:expr),* $(,)?]) => {{
        let actual = $crate::common::list_files($root);
        let expected: std::collections::BTreeSet<String> =
            [$($file),*].iter().map(|s: &&str| s.to_string()).collect();
        pretty_assertions::assert_eq!(actual, expected, "assert_tree! failed");
    }};
}

/// Every regular file under `root`, relative and `/`-separated.
pub fn list_files(root: &Path) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect(root, root, &mut out);
    out
}

fn collect(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
    for entry in std::fs::read_dir(dir).expect("read_dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).expect("under root");
            let parts: Vec<_> = rel.components().map(|c| c.as_os_str().to_string_lossy()).collect();
            out.insert(parts.join("/"));
        }
    }
}
