use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chunk::DEFAULT_MAX_CHUNK_SIZE;
use crate::error::{Result, SubtranError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub translate: TranslateConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Translation endpoint URL
    pub endpoint: String,
    /// Source language code, "auto" for detection
    pub source_lang: String,
    /// Maximum characters per translation request
    pub max_chunk_size: usize,
    /// Request timeout in seconds; none by default, a long remote call
    /// blocks the pipeline until it resolves
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Subtitle file extension appended to custom names lacking one
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate: TranslateConfig {
                endpoint: "https://translate.googleapis.com".to_string(),
                source_lang: "auto".to_string(),
                max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
                timeout_secs: None,
            },
            export: ExportConfig {
                extension: "srt".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SubtranError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| SubtranError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SubtranError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SubtranError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_constants() {
        let config = Config::default();
        assert_eq!(config.translate.max_chunk_size, 4500);
        assert_eq!(config.translate.source_lang, "auto");
        assert!(config.translate.timeout_secs.is_none());
        assert_eq!(config.export.extension, "srt");
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subtran.toml");

        let mut config = Config::default();
        config.translate.max_chunk_size = 1000;
        config.translate.timeout_secs = Some(30);
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.translate.max_chunk_size, 1000);
        assert_eq!(loaded.translate.timeout_secs, Some(30));
    }
}
