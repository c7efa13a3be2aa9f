//! Input processing module
//! Handles file detection, layout line loading, and raw text extraction

pub mod file_detector;
pub mod layout;
pub mod manager;
pub mod text_extractor;
