//! Weak pattern denylist
//!
//! Holds the common substrings that mark a password as guessable.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an extra pattern file.
pub const WEAK_PATTERNS_PATH_ENV: &str = "PWD_WEAK_PATTERNS_PATH";

/// Patterns that are always part of the denylist.
pub const BUILTIN_WEAK_PATTERNS: [&str; 4] = ["123456", "abcdef", "qwerty", "password"];

#[derive(Error, Debug)]
pub enum WeakPatternsError {
    #[error("Weak pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Weak pattern file is empty")]
    EmptyFile,
}

/// Lowercased substrings matched case-insensitively against candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakPatterns {
    /// Match order, built-ins first.
    patterns: Vec<String>,
    seen: HashSet<String>,
}

impl Default for WeakPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WeakPatterns {
    /// The built-in denylist only.
    pub fn builtin() -> Self {
        let mut patterns = WeakPatterns {
            patterns: Vec::with_capacity(BUILTIN_WEAK_PATTERNS.len()),
            seen: HashSet::with_capacity(BUILTIN_WEAK_PATTERNS.len()),
        };
        for pattern in BUILTIN_WEAK_PATTERNS {
            patterns.insert(pattern);
        }
        patterns
    }

    /// Built-in patterns extended with one pattern per line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no pattern lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WeakPatternsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: FileNotFound {:?}", path);
            return Err(WeakPatternsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: Empty file {:?}", path);
            return Err(WeakPatternsError::EmptyFile);
        }

        let mut patterns = Self::builtin();
        for line in content.lines() {
            patterns.insert(line);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Weak patterns loaded: {} patterns from {:?}",
            patterns.len(),
            path
        );

        Ok(patterns)
    }

    /// Loads the file named by `PWD_WEAK_PATTERNS_PATH`, or the built-ins when unset.
    pub fn from_env() -> Result<Self, WeakPatternsError> {
        match std::env::var_os(WEAK_PATTERNS_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Adds a pattern. Blank lines and duplicates are ignored.
    pub fn insert(&mut self, pattern: &str) {
        let pattern = pattern.trim().to_lowercase();
        if !pattern.is_empty() && self.seen.insert(pattern.clone()) {
            self.patterns.push(pattern);
        }
    }

    /// Returns the first pattern contained in `password`, ignoring case.
    pub fn matches(&self, password: &str) -> Option<&str> {
        let lowered = password.to_lowercase();
        self.patterns
            .iter()
            .find(|p| lowered.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(patterns: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for p in patterns {
            writeln!(temp_file, "{}", p).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_matches_case_insensitively() {
        let patterns = WeakPatterns::builtin();
        assert_eq!(patterns.len(), 4);
        assert_eq!(patterns.matches("MyQWERTYkeys"), Some("qwerty"));
        assert_eq!(patterns.matches("xx123456xx"), Some("123456"));
        assert_eq!(patterns.matches("PassWord1"), Some("password"));
        assert_eq!(patterns.matches("Abc123!@XYZ9"), None);
    }

    #[test]
    fn test_from_path_extends_builtins() {
        let temp_file = setup_with_tempfile(&["Clinic", "  letmein  ", "", "qwerty"]);

        let patterns = WeakPatterns::from_path(temp_file.path()).unwrap();
        assert_eq!(patterns.len(), 6);
        assert_eq!(patterns.matches("myCLINIC!"), Some("clinic"));
        assert_eq!(patterns.matches("LetMeIn99"), Some("letmein"));
        assert_eq!(patterns.matches("abcdefgh"), Some("abcdef"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = WeakPatterns::from_path("/nonexistent/path/patterns.txt");
        match result {
            Err(WeakPatternsError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n").expect("Failed to write empty content");

        let result = WeakPatterns::from_path(temp_file.path());
        assert!(matches!(result, Err(WeakPatternsError::EmptyFile)));
    }

    #[test]
    fn test_from_path_non_utf8_is_read_error() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x0a])
            .expect("Failed to write bytes");

        let result = WeakPatterns::from_path(temp_file.path());
        assert!(matches!(result, Err(WeakPatternsError::ReadError(_))));
    }

    #[test]
    fn test_large_file_deduplicates() {
        let lines: Vec<String> = (0..10_000).map(|i| format!("common{}", i % 5_000)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let temp_file = setup_with_tempfile(&refs);

        let patterns = WeakPatterns::from_path(temp_file.path()).unwrap();
        assert_eq!(patterns.len(), 4 + 5_000);
        assert_eq!(patterns.matches("xCOMMON0x"), Some("common0"));
        assert_eq!(patterns.matches("Abc!@XYZ9"), None);
    }

    #[test]
    #[serial]
    fn test_from_env_unset_uses_builtins() {
        remove_env(WEAK_PATTERNS_PATH_ENV);

        let patterns = WeakPatterns::from_env().unwrap();
        assert_eq!(patterns, WeakPatterns::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_file() {
        let temp_file = setup_with_tempfile(&["hospital"]);
        set_env(WEAK_PATTERNS_PATH_ENV, temp_file.path().to_str().unwrap());

        let patterns = WeakPatterns::from_env().unwrap();
        assert_eq!(patterns.matches("Hospital2024!"), Some("hospital"));

        remove_env(WEAK_PATTERNS_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file() {
        set_env(WEAK_PATTERNS_PATH_ENV, "/nonexistent/patterns.txt");

        let result = WeakPatterns::from_env();
        assert!(matches!(result, Err(WeakPatternsError::FileNotFound(_))));

        remove_env(WEAK_PATTERNS_PATH_ENV);
    }
}
