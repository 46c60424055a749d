use crate::error::{ContactzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = ">>> ";

/// Configuration for contactz, stored in the platform config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactzConfig {
    /// Prompt printed before each line of input
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Directory where `save`/`load` read and write books (current dir if unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// When false, `add` skips a number the contact already has
    #[serde(default = "default_allow_duplicates")]
    pub allow_duplicate_phones: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_allow_duplicates() -> bool {
    true
}

impl Default for ContactzConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            data_dir: None,
            allow_duplicate_phones: default_allow_duplicates(),
        }
    }
}

impl ContactzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactzError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            ContactzError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactzError::Serialization)?;
        fs::write(config_path, content).map_err(ContactzError::Io)?;
        Ok(())
    }

    /// Directory for saved books, falling back to `cwd`.
    pub fn data_dir_or(&self, cwd: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| cwd.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ContactzConfig::default();
        assert_eq!(config.prompt, ">>> ");
        assert_eq!(config.data_dir, None);
        assert!(config.allow_duplicate_phones);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(config, ContactzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let config = ContactzConfig {
            prompt: "? ".to_string(),
            data_dir: Some(PathBuf::from("/tmp/books")),
            allow_duplicate_phones: false,
        };
        config.save(dir.path()).unwrap();

        let loaded = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"prompt": "> "}"#).unwrap();

        let loaded = ContactzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.prompt, "> ");
        assert!(loaded.allow_duplicate_phones);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "prompt = 1").unwrap();

        let err = ContactzConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContactzError::Config(_)));
    }

    #[test]
    fn test_data_dir_fallback() {
        let cwd = Path::new("/work");
        assert_eq!(ContactzConfig::default().data_dir_or(cwd), PathBuf::from("/work"));

        let config = ContactzConfig {
            data_dir: Some(PathBuf::from("/books")),
            ..ContactzConfig::default()
        };
        assert_eq!(config.data_dir_or(cwd), PathBuf::from("/books"));
    }
}
