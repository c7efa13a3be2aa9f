//! Resume extractor library

pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod merge;
pub mod model;

pub use config::Config;
pub use error::{Result, ResumeExtractorError};
pub use extract::pipeline::ResumeExtractor;
pub use model::ResumeRecord;
