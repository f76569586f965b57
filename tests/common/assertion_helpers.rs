//! Assertion helpers for testing

use std::path::Path;

/// Assert that a file exists
#[macro_export]
macro_rules! assert_file_exists {
    ($path:expr) => {
        assert!($path.exists(), "File should exist: {}", $path.display());
    };
}

/// Assert that a file does not exist
#[macro_export]
macro_rules! assert_file_not_exists {
    ($path:expr) => {
        assert!(
            !$path.exists(),
            "File should not exist: {}",
            $path.display()
        );
    };
}

/// Assert a file's content
pub fn assert_content(path: &Path, expected: &str) {
    let actual = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    pretty_assertions::assert_eq!(actual, expected, "content of {}", path.display());
}
