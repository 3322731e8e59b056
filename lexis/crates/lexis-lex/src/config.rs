//! Lexer configuration.
//!
//! Configuration covers the few engine-level knobs that are not expressed
//! through classifier chains. It can be built in code or loaded from TOML:
//!
//! ```toml
//! line_comment = "//"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::unicode::is_operator_char;

/// Default line comment marker.
pub const DEFAULT_LINE_COMMENT: &str = "--";

/// Engine-level settings for a [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Two-character marker that starts a comment running to end of line.
    #[serde(default = "default_line_comment")]
    pub line_comment: String,
}

fn default_line_comment() -> String {
    DEFAULT_LINE_COMMENT.to_string()
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            line_comment: default_line_comment(),
        }
    }
}

impl LexerConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis_lex::config::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("line_comment = \"//\"").unwrap();
    /// assert_eq!(config.line_comment, "//");
    ///
    /// let config = LexerConfig::from_toml_str("").unwrap();
    /// assert_eq!(config, LexerConfig::default());
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: LexerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded lexer config from {}", path.display());
        Ok(config)
    }

    /// Checks that the comment marker is exactly two operator characters.
    ///
    /// Anything else could never be seen at a token boundary, or would
    /// swallow identifiers, numbers, or strings.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut chars = self.line_comment.chars();
        let valid = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => is_operator_char(a) && is_operator_char(b),
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidCommentMarker(self.line_comment.clone()))
        }
    }
}
