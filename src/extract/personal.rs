//! Personal information extraction from the document's leading window
//!
//! Profile exports put name, headline, and contact details at the top, so the
//! heuristics only look at the first few lines. An explicit contact section
//! with `label: value` lines overrides the window guesses.

use crate::config::ExtractionConfig;
use crate::extract::vocab::{Patterns, LOCATION_DENYLIST};
use crate::input::layout::TextLine;
use crate::model::PersonalInfo;
use unicode_segmentation::UnicodeSegmentation;

/// Substrings that disqualify a line from being the person's name
const NAME_EXCLUSIONS: &[&str] = &["email", "phone", "linkedin", "@"];

pub struct PersonalInfoExtractor<'a> {
    patterns: &'a Patterns,
    config: &'a ExtractionConfig,
}

impl<'a> PersonalInfoExtractor<'a> {
    pub fn new(patterns: &'a Patterns, config: &'a ExtractionConfig) -> Self {
        Self { patterns, config }
    }

    /// Extract personal info from the leading window plus any explicit
    /// personal/contact section. Every field is first-wins.
    pub fn extract(&self, lines: &[TextLine], personal_section: &[&TextLine]) -> PersonalInfo {
        let mut info = PersonalInfo::default();

        // Labeled contact lines take precedence over window heuristics
        for line in personal_section {
            self.apply_labeled_line(&mut info, &line.text);
        }

        let window = &lines[..lines.len().min(self.config.personal_window)];
        self.scan_window(&mut info, window);
        self.find_location(&mut info, window);

        info
    }

    fn scan_window(&self, info: &mut PersonalInfo, window: &[TextLine]) {
        let mut name_line: Option<usize> = None;

        for (i, line) in window.iter().enumerate() {
            let text = line.text.trim();

            if info.name.is_empty() && self.looks_like_name(line, text) {
                info.name = text.to_string();
                name_line = Some(i);
                continue;
            }

            if !info.name.is_empty()
                && info.title.is_empty()
                && name_line.map_or(false, |n| i > n)
                && self.looks_like_title(line, text)
            {
                info.title = text.to_string();
                continue;
            }

            if info.email.is_empty() {
                if let Some(m) = self.patterns.email.find(text) {
                    info.email = m.as_str().to_string();
                }
            }

            // A digit run next to an '@' is part of an email, not a phone number
            if info.phone.is_empty() && !text.contains('@') {
                if let Some(m) = self.patterns.phone.find(text) {
                    info.phone = m.as_str().trim().to_string();
                }
            }

            if info.profile_url.is_empty() {
                if let Some(m) = self.patterns.profile_url.find(text) {
                    info.profile_url = m.as_str().to_string();
                }
            }

            if info.website.is_empty()
                && !self.patterns.profile_url.is_match(text)
                && !(!info.email.is_empty() && text.contains(&info.email))
            {
                if let Some(m) = self.patterns.website.find(text) {
                    info.website = m.as_str().to_string();
                }
            }
        }
    }

    fn looks_like_name(&self, line: &TextLine, text: &str) -> bool {
        line.font_size >= self.config.name_font_size
            && self.patterns.name_chars.is_match(text)
            && text.unicode_words().count() <= 4
            && !NAME_EXCLUSIONS
                .iter()
                .any(|excl| text.to_lowercase().contains(excl))
    }

    fn looks_like_title(&self, line: &TextLine, text: &str) -> bool {
        line.font_size >= self.config.title_font_size
            && text.len() > 5
            && !self.patterns.email.is_match(text)
            && !self.patterns.phone.is_match(text)
            && !self.patterns.profile_url.is_match(text)
    }

    fn find_location(&self, info: &mut PersonalInfo, window: &[TextLine]) {
        if !info.location.is_empty() {
            return;
        }

        for line in window {
            let text = line.text.trim();
            if self.patterns.contains_contact_pattern(text) {
                continue;
            }
            if !text.contains(',') && !self.patterns.contains_gazetteer_token(text) {
                continue;
            }

            let candidate = self
                .patterns
                .location_junk
                .replace_all(text, "")
                .trim()
                .to_string();
            let lowered = candidate.to_lowercase();

            if candidate.len() < 50
                && candidate.unicode_words().count() <= 6
                && !LOCATION_DENYLIST.iter().any(|word| lowered.contains(word))
            {
                info.location = candidate;
                return;
            }
        }
    }

    /// Apply a `label: value` line from an explicit contact section.
    /// Unrecognized labels are ignored.
    fn apply_labeled_line(&self, info: &mut PersonalInfo, text: &str) {
        let Some((label, value)) = text.split_once(':') else {
            return;
        };
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        match label.trim().to_lowercase().as_str() {
            "name" => set_if_empty(&mut info.name, value),
            "title" | "headline" | "position" => set_if_empty(&mut info.title, value),
            "email" | "e-mail" | "mail" => set_if_empty(&mut info.email, value),
            "phone" | "telephone" | "mobile" | "telefon" => set_if_empty(&mut info.phone, value),
            "location" | "address" | "adresse" | "ort" => set_if_empty(&mut info.location, value),
            "linkedin" | "profile" => set_if_empty(&mut info.profile_url, value),
            "website" | "web" | "homepage" => set_if_empty(&mut info.website, value),
            _ => {}
        }
    }
}

fn set_if_empty(field: &mut String, value: &str) {
    if field.is_empty() {
        *field = value.to_string();
    }
}
