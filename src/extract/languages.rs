//! Spoken language extraction

use crate::extract::vocab::Patterns;
use crate::input::layout::TextLine;
use crate::model::SpokenLanguage;

pub struct LanguagesExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> LanguagesExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    /// Try `name (level)`, `name - level`, `name: level` in order; a line
    /// matching none becomes a language without a level.
    pub fn extract(&self, lines: &[&TextLine]) -> Vec<SpokenLanguage> {
        let mut languages = Vec::new();

        for line in lines {
            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }

            let id = (languages.len() + 1).to_string();
            let candidates = [
                &self.patterns.language_parenthesized,
                &self.patterns.language_dashed,
                &self.patterns.language_colon,
            ];

            let matched = candidates.iter().find_map(|pattern| {
                pattern.captures(text).map(|caps| SpokenLanguage {
                    id: id.clone(),
                    name: caps[1].trim().to_string(),
                    level: caps[2].trim().to_string(),
                })
            });

            languages.push(matched.unwrap_or_else(|| SpokenLanguage {
                id,
                name: text.to_string(),
                level: String::new(),
            }));
        }

        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(texts: &[&str]) -> Vec<SpokenLanguage> {
        let patterns = Patterns::new().unwrap();
        let lines: Vec<TextLine> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| TextLine::plain(*t, i))
            .collect();
        let refs: Vec<&TextLine> = lines.iter().collect();
        LanguagesExtractor::new(&patterns).extract(&refs)
    }

    #[test]
    fn test_parenthesized_level() {
        let langs = extract(&["English (Native)"]);
        assert_eq!(langs[0].name, "English");
        assert_eq!(langs[0].level, "Native");
    }

    #[test]
    fn test_dash_level() {
        let langs = extract(&["German - Fluent"]);
        assert_eq!(langs[0].name, "German");
        assert_eq!(langs[0].level, "Fluent");
    }

    #[test]
    fn test_colon_level() {
        let langs = extract(&["Französisch: Grundkenntnisse"]);
        assert_eq!(langs[0].name, "Französisch");
        assert_eq!(langs[0].level, "Grundkenntnisse");
    }

    #[test]
    fn test_bare_language_has_empty_level() {
        let langs = extract(&["Spanish"]);
        assert_eq!(langs[0].name, "Spanish");
        assert_eq!(langs[0].level, "");
    }

    #[test]
    fn test_ids_are_sequential() {
        let langs = extract(&["English (Native)", "German - Fluent", "Spanish"]);
        let ids: Vec<&str> = langs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
