//! Line classification and section segmentation
//!
//! Headers are detected from style cues, then matched against a multilingual
//! phrase vocabulary to assign categories. Each header occurrence owns the
//! lines up to the nearest following header of any other category.

use crate::config::ExtractionConfig;
use crate::input::layout::TextLine;

/// Resume section categories recognized by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Personal,
        Category::Summary,
        Category::Experience,
        Category::Education,
        Category::Skills,
        Category::Certifications,
        Category::Languages,
    ];

    /// Header phrases for this category, English and German.
    pub fn header_phrases(&self) -> &'static [&'static str] {
        match self {
            Category::Personal => &[
                "contact",
                "contact information",
                "personal information",
                "kontakt",
                "kontaktinformationen",
                "persönliche informationen",
            ],
            Category::Summary => &[
                "summary",
                "about",
                "about me",
                "professional summary",
                "profile",
                "zusammenfassung",
                "über mich",
                "profil",
                "berufliches profil",
            ],
            Category::Experience => &[
                "experience",
                "work experience",
                "professional experience",
                "employment",
                "career",
                "work history",
                "berufserfahrung",
                "arbeitserfahrung",
                "karriere",
                "beruflicher werdegang",
            ],
            Category::Education => &[
                "education",
                "academic background",
                "studies",
                "university",
                "bildung",
                "ausbildung",
                "studium",
                "akademischer hintergrund",
            ],
            Category::Skills => &[
                "skills",
                "top skills",
                "core competencies",
                "technical skills",
                "competencies",
                "abilities",
                "fähigkeiten",
                "kompetenzen",
                "fertigkeiten",
                "kenntnisse",
            ],
            Category::Certifications => &[
                "certifications",
                "licenses & certifications",
                "certificates",
                "licenses",
                "zertifikate",
                "zertifizierungen",
                "lizenzen",
            ],
            Category::Languages => &[
                "languages",
                "language skills",
                "sprachen",
                "sprachkenntnisse",
            ],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Personal => write!(f, "Personal"),
            Category::Summary => write!(f, "Summary"),
            Category::Experience => write!(f, "Experience"),
            Category::Education => write!(f, "Education"),
            Category::Skills => write!(f, "Skills"),
            Category::Certifications => write!(f, "Certifications"),
            Category::Languages => write!(f, "Languages"),
        }
    }
}

/// Cheap style-based pre-filter for section headers.
///
/// A line qualifies if it is bold, oversized, fully upper-case, or ends with
/// a colon. Category assignment happens separately in the segmenter.
pub fn is_header_candidate(line: &TextLine, config: &ExtractionConfig) -> bool {
    let text = line.text.trim();
    if text.is_empty() {
        return false;
    }
    line.bold
        || line.font_size > config.header_font_size
        || is_fully_uppercase(text)
        || text.ends_with(':')
}

fn is_fully_uppercase(text: &str) -> bool {
    let mut has_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

/// Header occurrences per category, with range computation.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    occurrences: Vec<(Category, usize)>,
}

impl SectionMap {
    /// Scan all lines and record every header occurrence under its category.
    pub fn build(lines: &[TextLine], config: &ExtractionConfig) -> Self {
        let mut occurrences = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if !is_header_candidate(line, config) {
                continue;
            }
            if let Some(category) = match_category(&line.text) {
                occurrences.push((category, index));
            }
        }

        Self { occurrences }
    }

    pub fn occurrences(&self, category: Category) -> Vec<usize> {
        self.occurrences
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, i)| *i)
            .collect()
    }

    /// Content ranges for a category in document order.
    ///
    /// Each occurrence at index `s` owns `[s+1, e)` where `e` is the nearest
    /// following header of any *other* category, or end of document. Repeated
    /// headers of the same category contribute multiple ranges.
    pub fn ranges(&self, category: Category, line_count: usize) -> Vec<std::ops::Range<usize>> {
        let mut ranges = Vec::new();

        for &(c, start) in &self.occurrences {
            if c != category {
                continue;
            }
            let end = self
                .occurrences
                .iter()
                .filter(|(other, idx)| *other != category && *idx > start)
                .map(|(_, idx)| *idx)
                .min()
                .unwrap_or(line_count);
            ranges.push(start + 1..end.max(start + 1));
        }

        ranges
    }

    /// Lines attributed to a category, concatenated across its ranges.
    pub fn section_lines<'a>(&self, category: Category, lines: &'a [TextLine]) -> Vec<&'a TextLine> {
        self.ranges(category, lines.len())
            .into_iter()
            .flat_map(|range| lines[range].iter())
            .filter(|line| !line.text.trim().is_empty())
            .collect()
    }
}

/// Match a header line against every category's phrase set.
///
/// Four modes are tried per phrase: exact equality, prefix, exact after
/// stripping a trailing colon, exact after removing all whitespace. The first
/// matching category wins, so a line opens at most one occurrence.
fn match_category(text: &str) -> Option<Category> {
    let lowered = text.trim().to_lowercase();
    let colon_stripped = lowered.trim_end_matches(':').trim_end();
    let squashed: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();

    for category in Category::ALL {
        for phrase in category.header_phrases() {
            let phrase_squashed: String = phrase.chars().filter(|c| !c.is_whitespace()).collect();
            if lowered == *phrase
                || lowered.starts_with(phrase)
                || colon_stripped == *phrase
                || squashed == phrase_squashed
            {
                return Some(category);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, index: usize) -> TextLine {
        TextLine::plain(text, index)
    }

    fn bold_line(text: &str, index: usize) -> TextLine {
        let mut l = TextLine::plain(text, index);
        l.bold = true;
        l
    }

    fn default_config() -> ExtractionConfig {
        crate::config::Config::default().extraction
    }

    #[test]
    fn test_header_candidate_rules() {
        let config = default_config();

        assert!(is_header_candidate(&bold_line("Experience", 0), &config));
        assert!(is_header_candidate(&line("SKILLS", 0), &config));
        assert!(is_header_candidate(&line("Education:", 0), &config));

        let mut big = line("Languages", 0);
        big.font_size = 14.0;
        assert!(is_header_candidate(&big, &config));

        assert!(!is_header_candidate(&line("worked on backend systems", 0), &config));
    }

    #[test]
    fn test_category_matching_modes() {
        assert_eq!(match_category("Experience"), Some(Category::Experience));
        assert_eq!(match_category("Work Experience"), Some(Category::Experience));
        assert_eq!(match_category("Skills:"), Some(Category::Skills));
        assert_eq!(match_category("BERUFSERFAHRUNG"), Some(Category::Experience));
        // Whitespace-stripped comparison
        assert_eq!(match_category("workexperience"), Some(Category::Experience));
        assert_eq!(match_category("Fluent in nonsense"), None);
    }

    #[test]
    fn test_no_headers_yields_empty_ranges() {
        let lines = vec![
            line("just some text", 0),
            line("more plain body text here", 1),
        ];
        let map = SectionMap::build(&lines, &default_config());
        for category in Category::ALL {
            assert!(map.ranges(category, lines.len()).is_empty());
            assert!(map.section_lines(category, &lines).is_empty());
        }
    }

    #[test]
    fn test_nearest_following_header_bounds_range() {
        let lines = vec![
            bold_line("Experience", 0),
            line("Software Engineer", 1),
            line("Acme Corp", 2),
            bold_line("Education", 3),
            line("TU Berlin", 4),
        ];
        let map = SectionMap::build(&lines, &default_config());

        let exp = map.ranges(Category::Experience, lines.len());
        assert_eq!(exp, vec![1..3]);

        let edu = map.ranges(Category::Education, lines.len());
        assert_eq!(edu, vec![4..5]);
    }

    #[test]
    fn test_repeated_category_concatenates_ranges() {
        let lines = vec![
            bold_line("Languages", 0),
            line("English (Native)", 1),
            bold_line("Skills", 2),
            line("Rust", 3),
            bold_line("Languages", 4),
            line("German (Fluent)", 5),
        ];
        let map = SectionMap::build(&lines, &default_config());

        let texts: Vec<&str> = map
            .section_lines(Category::Languages, &lines)
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, vec!["English (Native)", "German (Fluent)"]);
    }

    #[test]
    fn test_adjacent_headers_give_empty_range() {
        let lines = vec![
            bold_line("Skills", 0),
            bold_line("Education", 1),
            line("TU Berlin", 2),
        ];
        let map = SectionMap::build(&lines, &default_config());
        assert!(map.section_lines(Category::Skills, &lines).is_empty());
    }
}
