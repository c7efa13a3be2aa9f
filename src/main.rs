//! Resume extractor: structured data from professional-profile exports

mod ai;
mod cli;
mod config;
mod error;
mod extract;
mod input;
mod merge;
mod model;

use ai::client::ChatCompletionClient;
use ai::extractor::AiExtractor;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{Result, ResumeExtractorError};
use extract::pipeline::ResumeExtractor;
use input::manager::InputManager;
use log::{error, info};
use model::ResumeRecord;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            input,
            ai,
            model,
            output,
            compact,
        } => {
            cli::validate_file_extension(&input, &["pdf", "txt", "json"])
                .map_err(ResumeExtractorError::InvalidInput)?;

            info!("Parsing profile export: {}", input.display());

            let manager = InputManager::new();
            let record = if ai {
                extract_with_ai(&manager, &input, &config, model).await?
            } else {
                let lines = manager.load_lines(&input).await?;
                info!("Loaded {} layout lines", lines.len());
                ResumeExtractor::new(&config)?.extract(&lines)
            };

            print_summary(&record);

            let pretty = config.output.pretty && !compact;
            let json = if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };

            match output {
                Some(path) => {
                    write_output(&path, &json).await?;
                    println!("Saved record to {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Header font size: {}pt", config.extraction.header_font_size);
                println!("Name font size: {}pt", config.extraction.name_font_size);
                println!("Personal window: {} lines", config.extraction.personal_window);
                println!("AI endpoint: {}", config.ai.endpoint);
                println!("AI model: {}", config.ai.model);
                println!("Chunk threshold: {} chars", config.ai.chunk_threshold);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

async fn extract_with_ai(
    manager: &InputManager,
    input: &PathBuf,
    config: &Config,
    model_override: Option<String>,
) -> Result<ResumeRecord> {
    let api_key = config.api_key().ok_or_else(|| {
        ResumeExtractorError::Configuration(format!(
            "Semantic extraction requires an API key in ${}",
            config.ai.api_key_env
        ))
    })?;

    let mut ai_config = config.ai.clone();
    if let Some(model) = model_override {
        ai_config.model = model;
    }

    let text = manager.load_raw_text(input).await?;
    info!("Extracted {} characters of raw text", text.chars().count());

    let client = ChatCompletionClient::new(&ai_config, api_key);
    AiExtractor::new(client, ai_config).extract(&text).await
}

fn print_summary(record: &ResumeRecord) {
    if record.personal_info.is_empty() {
        eprintln!("{}", "No personal information detected".yellow());
    }
    let name = if record.personal_info.name.is_empty() {
        "(no name detected)".to_string()
    } else {
        record.personal_info.name.clone()
    };
    eprintln!("{} {}", "Extracted:".green().bold(), name);
    eprintln!(
        "  {} experience, {} education, {} skills, {} certifications, {} languages",
        record.experience.len(),
        record.education.len(),
        record.skills.len(),
        record.certifications.len(),
        record.languages.len()
    );
}

async fn write_output(path: &PathBuf, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, json).await?;
    Ok(())
}
