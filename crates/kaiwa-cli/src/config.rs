//! TOML config loading for the model name and the priming context.
//!
//! The persona context is ordinary configuration, not a baked-in string:
//! a config file can replace the library's built-in default entirely.
//!
//! ```toml
//! model = "gpt-4o-mini"
//!
//! [[context]]
//! role = "system"
//! content = "You are a palm-sized companion robot."
//! ```

use std::path::{Path, PathBuf};

use kaiwa::{ChatMessage, Role};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KaiwaConfig {
    pub model: Option<String>,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextEntry {
    pub role: Role,
    pub content: String,
}

impl KaiwaConfig {
    /// Configured priming messages, or `None` when the file supplied no
    /// `[[context]]` entries and the library default should stand.
    pub fn context_messages(&self) -> Option<Vec<ChatMessage>> {
        if self.context.is_empty() {
            return None;
        }
        Some(
            self.context
                .iter()
                .map(|e| ChatMessage {
                    role: e.role,
                    content: e.content.clone(),
                })
                .collect(),
        )
    }
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<KaiwaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: KaiwaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path (`<config dir>/kaiwa/config.toml`).
/// A missing file is not an error; defaults are returned.
pub fn load_default() -> Result<KaiwaConfig, ConfigError> {
    let Some(path) = default_config_path() else {
        return Ok(KaiwaConfig::default());
    };
    if !path.exists() {
        return Ok(KaiwaConfig::default());
    }
    load_from_path(&path)
}

fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("kaiwa").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_and_context_entries() {
        let config: KaiwaConfig = toml::from_str(
            r#"
            model = "gpt-4o-mini"

            [[context]]
            role = "system"
            content = "You are a test robot."

            [[context]]
            role = "system"
            content = "Keep answers short."
            "#,
        )
        .unwrap();

        assert_eq!(config.model.as_deref(), Some("gpt-4o-mini"));
        let messages = config.context_messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system("You are a test robot."));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: KaiwaConfig = toml::from_str("").unwrap();
        assert!(config.model.is_none());
        assert!(config.context_messages().is_none());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<KaiwaConfig, _> = toml::from_str(
            r#"
            [[context]]
            role = "tool"
            content = "nope"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error_for_explicit_paths() {
        let err = load_from_path(Path::new("/nonexistent/kaiwa.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
