//! Skills extraction

use crate::extract::vocab::{Patterns, BOILERPLATE, SKILL_STOPWORDS};
use crate::input::layout::TextLine;
use crate::model::Skill;

pub struct SkillsExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> SkillsExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    /// Split each line on the delimiter set and keep every plausible token
    /// as a skill with the default "Intermediate" level.
    pub fn extract(&self, lines: &[&TextLine]) -> Vec<Skill> {
        let mut skills = Vec::new();

        for line in lines {
            let text = line.text.trim();
            if text.len() < 2 {
                continue;
            }

            for token in self.patterns.skill_delimiters.split(text) {
                let name = token.trim();
                if !is_skill_token(name) {
                    continue;
                }
                skills.push(Skill {
                    id: (skills.len() + 1).to_string(),
                    name: name.to_string(),
                    ..Default::default()
                });
            }
        }

        skills
    }
}

fn is_skill_token(name: &str) -> bool {
    let char_count = name.chars().count();
    if char_count < 2 || char_count >= 50 {
        return false;
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let lowered = name.to_lowercase();
    !BOILERPLATE
        .iter()
        .chain(SKILL_STOPWORDS.iter())
        .any(|word| lowered.contains(word))
}
