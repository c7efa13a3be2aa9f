//! Compiled patterns and keyword vocabularies shared by the extractors
//!
//! Everything here is immutable after construction; the pipeline builds one
//! `Patterns` value and hands references to the extractors.

use crate::error::{Result, ResumeExtractorError};
use aho_corasick::AhoCorasick;
use regex::Regex;

/// Job title keywords used for position detection in experience entries
pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "analyst",
    "consultant",
    "specialist",
    "lead",
    "senior",
    "junior",
    "intern",
    "cto",
    "ceo",
    "founder",
];

/// Title words that disqualify a line from being read as a location
pub const LOCATION_DENYLIST: &[&str] = &["engineer", "developer", "manager", "director", "analyst"];

/// City and country tokens recognized without a comma cue
pub const GAZETTEER: &[&str] = &[
    "germany",
    "deutschland",
    "berlin",
    "munich",
    "münchen",
    "hamburg",
    "usa",
    "united states",
    "uk",
    "london",
    "paris",
    "france",
];

/// PDF export artifacts excluded from descriptions and skills
pub const BOILERPLATE: &[&str] = &["page", "linkedin", "generated"];

/// Additional non-skill words filtered from skill tokens
pub const SKILL_STOPWORDS: &[&str] = &["years", "experience"];

/// Degree keywords, English and German
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "diploma",
    "certificate",
    "degree",
    "diplom",
    "zertifikat",
    "abschluss",
];

/// Words denoting an ongoing interval in a date range
pub const PRESENT_TOKENS: &[&str] = &["present", "current", "heute", "aktuell"];

/// Returns true if an end-date token means the position is still held.
pub fn is_present_token(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    PRESENT_TOKENS.iter().any(|t| token == *t)
}

/// Compiled regular expressions and keyword automata.
pub struct Patterns {
    pub email: Regex,
    pub phone: Regex,
    pub profile_url: Regex,
    pub website: Regex,
    /// `<month-year|year> <dash> <month-year|year|present-token>`
    pub date_range: Regex,
    /// `YYYY - YYYY` for education entries
    pub year_range: Regex,
    pub bare_year: Regex,
    /// Letters, spaces, periods, hyphens, apostrophes only
    pub name_chars: Regex,
    /// Characters stripped when normalizing a location line
    pub location_junk: Regex,
    pub skill_delimiters: Regex,
    pub cert_delimiters: Regex,
    pub language_parenthesized: Regex,
    pub language_dashed: Regex,
    pub language_colon: Regex,
    pub whitespace_runs: Regex,
    job_titles: AhoCorasick,
    gazetteer: AhoCorasick,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        let job_titles = Self::build_matcher(JOB_TITLE_KEYWORDS)?;
        let gazetteer = Self::build_matcher(GAZETTEER)?;

        Ok(Self {
            email: Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}")?,
            phone: Regex::new(r"\+?[\d\s\-\(\)]{10,}")?,
            profile_url: Regex::new(r"(?i)linkedin\.com/in/\S+")?,
            website: Regex::new(r"(?:https?://)?(?:www\.)?[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}(?:/\S*)?")?,
            date_range: Regex::new(
                r"(?i)(\w+\s+\d{4}|\d{4})\s*[-–]\s*(\w+\s+\d{4}|\d{4}|present|current|heute|aktuell)",
            )?,
            year_range: Regex::new(r"(\d{4})\s*[-–]\s*(\d{4})")?,
            bare_year: Regex::new(r"\b\d{4}\b")?,
            name_chars: Regex::new(r"^[A-Za-zÀ-ÿ\s.'\-]+$")?,
            location_junk: Regex::new(r"[^\w\s,\-À-ÿ]")?,
            skill_delimiters: Regex::new(r"[,•·|\t\n]|\s{2,}")?,
            cert_delimiters: Regex::new(r"[-–|]")?,
            language_parenthesized: Regex::new(r"^(.+?)\s*\((.+?)\)$")?,
            language_dashed: Regex::new(r"^(.+?)\s*[-–]\s*(.+?)$")?,
            language_colon: Regex::new(r"^(.+?)\s*:\s*(.+?)$")?,
            whitespace_runs: Regex::new(r"\s+")?,
            job_titles,
            gazetteer,
        })
    }

    fn build_matcher(keywords: &[&str]) -> Result<AhoCorasick> {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(keywords)
            .map_err(|e| ResumeExtractorError::Pattern(format!("Failed to build matcher: {}", e)))
    }

    pub fn contains_job_title(&self, line: &str) -> bool {
        self.job_titles.is_match(line)
    }

    pub fn contains_gazetteer_token(&self, line: &str) -> bool {
        // Non-ASCII entries like "münchen" don't case-fold in the automaton,
        // so match against the lowercased line.
        self.gazetteer.is_match(&line.to_lowercase())
    }

    /// Does this line carry any contact pattern (email, phone, profile URL)?
    pub fn contains_contact_pattern(&self, line: &str) -> bool {
        self.email.is_match(line) || self.phone.is_match(line) || self.profile_url.is_match(line)
    }
}
