//! Work experience extraction
//!
//! Date-range lines drive a small state machine: each one closes the open
//! entry and opens a new one, pulling position, company, and location from
//! the surrounding lines. Everything else accumulates into the description.

use crate::extract::vocab::{is_present_token, Patterns, BOILERPLATE};
use crate::input::layout::TextLine;
use crate::model::Experience;
use std::collections::HashSet;

/// Prepositions that rule a line out as a company name
const COMPANY_PREPOSITIONS: &[&str] = &["at", "in", "from", "to", "since"];

/// How many lines around a date line are searched for job details
const NEIGHBORHOOD: usize = 3;

pub struct ExperienceExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> ExperienceExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    pub fn extract(&self, lines: &[&TextLine]) -> Vec<Experience> {
        let mut experiences = Vec::new();
        let mut current: Option<Experience> = None;
        // Lines claimed as position/company/location never join a description
        let mut consumed: HashSet<usize> = HashSet::new();

        for (i, line) in lines.iter().enumerate() {
            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }

            if let Some(caps) = self.patterns.date_range.captures(text) {
                if let Some(entry) = current.take() {
                    experiences.push(entry);
                }

                let end_date = caps[2].to_string();
                let mut entry = Experience {
                    id: (experiences.len() + 1).to_string(),
                    start_date: caps[1].to_string(),
                    current: is_present_token(&end_date),
                    end_date,
                    ..Default::default()
                };
                self.fill_job_details(lines, i, &mut entry, &mut consumed);
                current = Some(entry);
            } else if let Some(entry) = current.as_mut() {
                if !consumed.contains(&i) && is_description_line(text) {
                    entry.description.push(text.to_string());
                }
            }
        }

        if let Some(entry) = current.take() {
            experiences.push(entry);
        }

        experiences
    }

    /// Search the lines around a date line for position, company, and
    /// location, claiming each matched line exactly once.
    fn fill_job_details(
        &self,
        lines: &[&TextLine],
        date_idx: usize,
        entry: &mut Experience,
        consumed: &mut HashSet<usize>,
    ) {
        let start = date_idx.saturating_sub(NEIGHBORHOOD);
        let end = (date_idx + NEIGHBORHOOD + 1).min(lines.len());

        for i in start..end {
            if i == date_idx {
                continue;
            }
            let text = lines[i].text.trim();
            if text.is_empty() || consumed.contains(&i) {
                continue;
            }

            if entry.position.is_empty() && self.patterns.contains_job_title(text) {
                entry.position = text.to_string();
                consumed.insert(i);
            } else if entry.company.is_empty() && self.looks_like_company(text) {
                entry.company = text.to_string();
                consumed.insert(i);
            } else if entry.location.is_empty()
                && (text.contains(',') || self.patterns.contains_gazetteer_token(text))
            {
                entry.location = text.to_string();
                consumed.insert(i);
            }
        }
    }

    fn looks_like_company(&self, text: &str) -> bool {
        if text.len() >= 80 || self.patterns.date_range.is_match(text) {
            return false;
        }
        // Substring containment on purpose: it also filters prose-looking
        // lines ("billing" contains "in") that are never company names.
        let lowered = text.to_lowercase();
        !COMPANY_PREPOSITIONS
            .iter()
            .any(|prep| lowered.contains(prep))
    }
}

fn is_description_line(text: &str) -> bool {
    if text.len() <= 10 || starts_with_year(text) {
        return false;
    }
    let lowered = text.to_lowercase();
    !BOILERPLATE.iter().any(|token| lowered.contains(token))
}

/// Lines opening with a four-digit year are date fragments, not prose.
fn starts_with_year(text: &str) -> bool {
    text.chars().take(4).filter(|c| c.is_ascii_digit()).count() == 4
}
