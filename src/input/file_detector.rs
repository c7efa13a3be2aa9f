//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    /// JSON array of layout line records from the text/layout provider
    LayoutJson,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "json" => FileType::LayoutJson,
            _ => FileType::Unknown,
        }
    }
}
