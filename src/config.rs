//! Configuration management for the resume extractor

use crate::error::{Result, ResumeExtractorError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub ai: AiConfig,
    pub output: OutputConfig,
}

/// Thresholds driving the heuristic layout pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Font size above which a line counts as a header candidate
    pub header_font_size: f32,
    /// Minimum font size for the name line at the top of the document
    pub name_font_size: f32,
    /// Minimum font size for the title/headline line
    pub title_font_size: f32,
    /// Number of leading lines scanned for personal information
    pub personal_window: usize,
}

/// Settings for the OpenAI-compatible semantic extraction path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Raw text longer than this is split into chunks before extraction
    pub chunk_threshold: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                header_font_size: 12.0,
                name_font_size: 16.0,
                title_font_size: 12.0,
                personal_window: 15,
            },
            ai: AiConfig {
                endpoint: "https://api.openai.com/v1".to_string(),
                model: "gpt-4".to_string(),
                api_key_env: "OPENAI_API_KEY".to_string(),
                chunk_threshold: 12000,
                chunk_size: 4000,
                chunk_overlap: 200,
                max_tokens: 2000,
                temperature: 0.1,
            },
            output: OutputConfig {
                pretty: true,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeExtractorError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeExtractorError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-extractor")
            .join("config.toml")
    }

    /// API key for the semantic extraction endpoint, if configured
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.ai.api_key_env).ok().filter(|k| !k.is_empty())
    }
}
