//! Input manager routing files to the right extraction front end

use crate::error::{Result, ResumeExtractorError};
use crate::input::file_detector::FileType;
use crate::input::layout::{self, TextLine};
use crate::input::text_extractor::{PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;
use tokio::fs;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a file into layout lines for the heuristic pipeline.
    ///
    /// Layout JSON keeps its styling; PDF and plain text fall back to
    /// synthetic lines without layout cues.
    pub async fn load_lines(&self, path: &Path) -> Result<Vec<TextLine>> {
        match self.detect_file_type(path)? {
            FileType::LayoutJson => {
                info!("Reading layout lines from: {}", path.display());
                let content = fs::read_to_string(path)
                    .await
                    .map_err(ResumeExtractorError::Io)?;
                layout::parse_layout_json(&content)
            }
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                let text = PdfExtractor.extract(path).await?;
                Ok(layout::lines_from_text(&text))
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                let text = PlainTextExtractor.extract(path).await?;
                Ok(layout::lines_from_text(&text))
            }
            FileType::Unknown => Err(ResumeExtractorError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    /// Read a file as raw text for the semantic extraction path.
    pub async fn load_raw_text(&self, path: &Path) -> Result<String> {
        match self.detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => PlainTextExtractor.extract(path).await,
            FileType::LayoutJson => {
                // Flatten layout records back into plain text
                let content = fs::read_to_string(path)
                    .await
                    .map_err(ResumeExtractorError::Io)?;
                let lines = layout::parse_layout_json(&content)?;
                Ok(lines
                    .into_iter()
                    .map(|l| l.text)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            FileType::Unknown => Err(ResumeExtractorError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        if !path.exists() {
            return Err(ResumeExtractorError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ResumeExtractorError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        Ok(FileType::from_extension(extension))
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
