//! Word sources: turning a location or raw content into a set of words.
//!
//! Plain text is split on commas when that yields more than one token and on
//! newlines otherwise; tokens are trimmed, uppercased, and empty ones dropped.
//! JSON content must be an array of strings, normalized the same way.
//! Anything else is an unsupported source.

use crate::bank::normalize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while resolving or reading a word source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The location's scheme or the content's shape is not recognized
    #[error("Unsupported word source '{location}': {reason}")]
    Unsupported { location: String, reason: String },

    /// The source could not be read
    #[error("Failed to read word source '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content claimed to be JSON but did not parse
    #[error("Invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can produce a normalized set of words.
pub trait WordSource {
    /// Produce the words this source describes.
    fn words(&self) -> Result<BTreeSet<String>, SourceError>;

    /// Human-readable description for logs and error messages.
    fn describe(&self) -> String;
}

/// An explicit, in-memory list of words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList(pub Vec<String>);

impl WordSource for WordList {
    fn words(&self) -> Result<BTreeSet<String>, SourceError> {
        Ok(self
            .0
            .iter()
            .map(|word| normalize(word))
            .filter(|word| !word.is_empty())
            .collect())
    }

    fn describe(&self) -> String {
        format!("list of {} words", self.0.len())
    }
}

/// Plain-text content, comma or newline separated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSource(pub String);

impl WordSource for TextSource {
    fn words(&self) -> Result<BTreeSet<String>, SourceError> {
        Ok(parse_text(&self.0))
    }

    fn describe(&self) -> String {
        "inline text".to_string()
    }
}

/// JSON content holding an array of strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonSource(pub String);

impl WordSource for JsonSource {
    fn words(&self) -> Result<BTreeSet<String>, SourceError> {
        parse_json(&self.0, &self.describe())
    }

    fn describe(&self) -> String {
        "inline JSON".to_string()
    }
}

/// A local file. `.json` files are parsed as JSON, everything else as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl WordSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn words(&self) -> Result<BTreeSet<String>, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let words = if self.is_json() {
            parse_json(&content, &self.describe())?
        } else {
            parse_text(&content)
        };
        debug!(count = words.len(), "loaded words from file");
        Ok(words)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Resolve a location string into a source.
///
/// Bare paths and `file://` locations are read from disk. Any other scheme,
/// network locations included, is unsupported.
///
/// # Example
///
/// ```rust
/// use gallows::source::{resolve_location, SourceError};
///
/// assert!(resolve_location("words.txt").is_ok());
/// assert!(matches!(
///     resolve_location("https://example.com/words.txt"),
///     Err(SourceError::Unsupported { .. })
/// ));
/// ```
pub fn resolve_location(location: &str) -> Result<Box<dyn WordSource>, SourceError> {
    match location.split_once("://") {
        None => Ok(Box::new(FileSource::new(location))),
        Some((scheme, path)) if scheme.eq_ignore_ascii_case("file") => {
            Ok(Box::new(FileSource::new(path)))
        }
        Some((scheme, _)) => Err(SourceError::Unsupported {
            location: location.to_string(),
            reason: format!("scheme '{scheme}' is not supported"),
        }),
    }
}

/// Split plain text into normalized words.
///
/// ```rust
/// use gallows::source::parse_text;
///
/// let words = parse_text("cat, dog ,,bird");
/// assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["BIRD", "CAT", "DOG"]);
/// ```
pub fn parse_text(content: &str) -> BTreeSet<String> {
    let by_comma: Vec<&str> = content.split(',').collect();
    let tokens = if by_comma.len() > 1 {
        by_comma
    } else {
        content.lines().collect()
    };

    tokens
        .into_iter()
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse a JSON array of strings into normalized words.
pub fn parse_json(content: &str, location: &str) -> Result<BTreeSet<String>, SourceError> {
    let unsupported = |reason: &str| SourceError::Unsupported {
        location: location.to_string(),
        reason: reason.to_string(),
    };

    let Value::Array(items) = serde_json::from_str::<Value>(content)? else {
        return Err(unsupported("JSON data is not a list of words"));
    };

    let mut words = BTreeSet::new();
    for item in items {
        let Value::String(word) = item else {
            return Err(unsupported("JSON list contains a non-string entry"));
        };
        let word = normalize(&word);
        if !word.is_empty() {
            words.insert(word);
        }
    }
    Ok(words)
}
