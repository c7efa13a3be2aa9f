//! The extraction pipeline: classify, segment, extract, assemble

use crate::config::{Config, ExtractionConfig};
use crate::error::Result;
use crate::extract::certifications::CertificationsExtractor;
use crate::extract::education::EducationExtractor;
use crate::extract::experience::ExperienceExtractor;
use crate::extract::languages::LanguagesExtractor;
use crate::extract::personal::PersonalInfoExtractor;
use crate::extract::sections::{Category, SectionMap};
use crate::extract::skills::SkillsExtractor;
use crate::extract::vocab::Patterns;
use crate::input::layout::TextLine;
use crate::model::ResumeRecord;
use log::debug;

/// Runs the heuristic structure extraction over a sequence of layout lines.
pub struct ResumeExtractor {
    patterns: Patterns,
    config: ExtractionConfig,
}

impl ResumeExtractor {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            patterns: Patterns::new()?,
            config: config.extraction.clone(),
        })
    }

    /// Extract a structured record from lines in reading order.
    ///
    /// An empty line list yields an all-default record; missing sections
    /// yield empty lists for their categories.
    pub fn extract(&self, lines: &[TextLine]) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        if lines.is_empty() {
            return record;
        }

        let sections = SectionMap::build(lines, &self.config);
        for category in Category::ALL {
            debug!(
                "Section {}: {} occurrence(s)",
                category,
                sections.occurrences(category).len()
            );
        }

        let personal_section = sections.section_lines(Category::Personal, lines);
        record.personal_info =
            PersonalInfoExtractor::new(&self.patterns, &self.config).extract(lines, &personal_section);

        record.summary = self.join_summary(&sections.section_lines(Category::Summary, lines));

        record.experience = ExperienceExtractor::new(&self.patterns)
            .extract(&sections.section_lines(Category::Experience, lines));
        record.education = EducationExtractor::new(&self.patterns)
            .extract(&sections.section_lines(Category::Education, lines));
        record.skills =
            SkillsExtractor::new(&self.patterns).extract(&sections.section_lines(Category::Skills, lines));
        record.certifications = CertificationsExtractor::new(&self.patterns)
            .extract(&sections.section_lines(Category::Certifications, lines));
        record.languages = LanguagesExtractor::new(&self.patterns)
            .extract(&sections.section_lines(Category::Languages, lines));

        record
    }

    /// Join summary lines into one paragraph with normalized whitespace.
    fn join_summary(&self, lines: &[&TextLine]) -> String {
        let joined = lines
            .iter()
            .map(|line| line.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        self.patterns
            .whitespace_runs
            .replace_all(&joined, " ")
            .trim()
            .to_string()
    }
}
