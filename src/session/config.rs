//! Serializable session configuration.

use serde::{Deserialize, Serialize};

/// Lives per round when nothing else is configured.
pub const DEFAULT_MAX_LIVES: u32 = 6;

/// Construction parameters for a [`GameSession`](crate::GameSession).
///
/// Every field has a default, so hosts can keep partial configuration
/// files:
///
/// ```rust
/// use gallows::SessionConfig;
///
/// let config: SessionConfig = serde_json::from_str(r#"{ "words": ["ant", "bee"] }"#).unwrap();
/// assert_eq!(config.max_lives, 6);
/// assert!(!config.allow_empty);
///
/// let session = config.build().unwrap();
/// assert_eq!(session.word_bank().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Wrong guesses allowed per round
    pub max_lives: u32,
    /// Explicit words for the bank
    pub words: Vec<String>,
    /// Word source location (local path or `file://` URL)
    pub location: Option<String>,
    /// Permit a session whose bank is empty
    pub allow_empty: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            words: Vec::new(),
            location: None,
            allow_empty: false,
        }
    }
}

impl SessionConfig {
    /// Build a session from this configuration.
    pub fn build(&self) -> Result<crate::GameSession, crate::SessionError> {
        crate::SessionBuilder::from_config(self).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = SessionConfig {
            max_lives: 3,
            words: vec!["OWL".to_string()],
            location: Some("words.txt".to_string()),
            allow_empty: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
