//! CLI interface for the resume extractor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-extractor")]
#[command(about = "Extract structured resume data from professional-profile exports")]
#[command(
    long_about = "Convert profile PDF exports into structured resume records using layout heuristics or an OpenAI-compatible extraction endpoint"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a profile export into a structured record
    Parse {
        /// Input file (PDF, TXT, or layout-line JSON)
        input: PathBuf,

        /// Use the semantic extraction endpoint instead of layout heuristics
        #[arg(long)]
        ai: bool,

        /// Override the configured extraction model
        #[arg(short, long)]
        model: Option<String>,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["pdf", "txt", "json"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.docx"), &["pdf", "txt", "json"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["pdf"]).is_err());
    }
}
