//! Heuristic structure extraction module
//! Section segmentation and per-category entity extractors

pub mod certifications;
pub mod education;
pub mod experience;
pub mod languages;
pub mod personal;
pub mod pipeline;
pub mod sections;
pub mod skills;
pub mod vocab;
