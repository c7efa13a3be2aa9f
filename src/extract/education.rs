//! Education extraction
//!
//! A `YYYY - YYYY` range opens an entry; following lines fill degree, school,
//! and a single description string in that order.

use crate::extract::vocab::{Patterns, DEGREE_KEYWORDS};
use crate::input::layout::TextLine;
use crate::model::Education;

pub struct EducationExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> EducationExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    pub fn extract(&self, lines: &[&TextLine]) -> Vec<Education> {
        let mut education = Vec::new();
        let mut current: Option<Education> = None;

        for line in lines {
            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }

            if let Some(caps) = self.patterns.year_range.captures(text) {
                if let Some(entry) = current.take() {
                    education.push(entry);
                }
                current = Some(Education {
                    id: (education.len() + 1).to_string(),
                    start_date: caps[1].to_string(),
                    end_date: caps[2].to_string(),
                    ..Default::default()
                });
            } else if let Some(entry) = current.as_mut() {
                if entry.degree.is_empty() && contains_degree_keyword(text) {
                    entry.degree = text.to_string();
                } else if entry.school.is_empty() {
                    entry.school = text.to_string();
                } else if entry.description.is_empty() {
                    entry.description = text.to_string();
                }
            }
        }

        if let Some(entry) = current.take() {
            education.push(entry);
        }

        education
    }
}

fn contains_degree_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
