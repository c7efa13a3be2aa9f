//! Merging and deduplication of partial extraction results
//!
//! Multiple passes over one document (chunked semantic extraction, or
//! re-running the pipeline over sub-ranges) each produce a partial record.
//! The merge is a pure fold: failed attempts arrive as `None` and are
//! skipped, never failing the whole merge.

use crate::model::{PersonalInfo, ResumeRecord};
use std::collections::HashSet;

/// Fold an ordered list of partial records into one.
///
/// Personal fields are first-non-empty-wins, the summary is the longest
/// candidate (first seen on ties), and list fields are concatenated then
/// deduplicated by their entity keys. Ids are re-assigned afterwards.
pub fn merge_records(partials: Vec<Option<ResumeRecord>>) -> ResumeRecord {
    let mut merged = ResumeRecord::default();

    for partial in partials.into_iter().flatten() {
        merge_personal_info(&mut merged.personal_info, partial.personal_info);

        if partial.summary.chars().count() > merged.summary.chars().count() {
            merged.summary = partial.summary;
        }

        merged.experience.extend(partial.experience);
        merged.education.extend(partial.education);
        merged.skills.extend(partial.skills);
        merged.certifications.extend(partial.certifications);
        merged.languages.extend(partial.languages);
    }

    dedup_lists(&mut merged);
    merged.renumber_ids();
    merged
}

fn merge_personal_info(merged: &mut PersonalInfo, other: PersonalInfo) {
    first_wins(&mut merged.name, other.name);
    first_wins(&mut merged.title, other.title);
    first_wins(&mut merged.email, other.email);
    first_wins(&mut merged.phone, other.phone);
    first_wins(&mut merged.location, other.location);
    first_wins(&mut merged.profile_url, other.profile_url);
    first_wins(&mut merged.website, other.website);
}

fn first_wins(field: &mut String, value: String) {
    if field.is_empty() && !value.is_empty() {
        *field = value;
    }
}

fn dedup_lists(record: &mut ResumeRecord) {
    let mut seen = HashSet::new();
    record.skills.retain(|skill| {
        !skill.name.is_empty() && seen.insert(skill.name.to_lowercase())
    });

    let mut seen = HashSet::new();
    record.languages.retain(|lang| {
        !lang.name.is_empty() && seen.insert(lang.name.to_lowercase())
    });

    let mut seen = HashSet::new();
    record.experience.retain(|exp| {
        let key = exp.dedup_key();
        let all_empty = key.0.is_empty() && key.1.is_empty() && key.2.is_empty();
        !all_empty && seen.insert(key)
    });

    let mut seen = HashSet::new();
    record.education.retain(|edu| {
        let key = edu.dedup_key();
        let all_empty = key.0.is_empty() && key.1.is_empty();
        !all_empty && seen.insert(key)
    });

    let mut seen = HashSet::new();
    record.certifications.retain(|cert| {
        let key = cert.dedup_key();
        let all_empty = key.0.is_empty() && key.1.is_empty();
        !all_empty && seen.insert(key)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Certification, Education, Experience, Skill, SpokenLanguage};

    fn record_with_skill(name: &str) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        record.skills.push(Skill {
            id: "1".to_string(),
            name: name.to_string(),
            ..Default::default()
        });
        record
    }

    #[test]
    fn test_merge_of_all_none_is_default() {
        let merged = merge_records(vec![None, None]);
        assert_eq!(merged, ResumeRecord::default());
    }

    #[test]
    fn test_failed_chunks_are_skipped() {
        let merged = merge_records(vec![
            None,
            Some(record_with_skill("Rust")),
            None,
            Some(record_with_skill("Go")),
        ]);
        let names: Vec<&str> = merged.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_personal_info_first_non_empty_wins() {
        let mut a = ResumeRecord::default();
        a.personal_info.name = "Jane Doe".to_string();
        let mut b = ResumeRecord::default();
        b.personal_info.name = "Other Name".to_string();
        b.personal_info.email = "jane@example.com".to_string();

        let merged = merge_records(vec![Some(a), Some(b)]);
        assert_eq!(merged.personal_info.name, "Jane Doe");
        assert_eq!(merged.personal_info.email, "jane@example.com");
    }

    #[test]
    fn test_longest_summary_wins() {
        let mut a = ResumeRecord::default();
        a.summary = "A short one.".to_string();
        let mut b = ResumeRecord::default();
        b.summary = "A considerably longer summary sentence.".to_string();

        let merged = merge_records(vec![Some(a.clone()), Some(b.clone())]);
        assert_eq!(merged.summary, "A considerably longer summary sentence.");

        // First seen wins on ties
        let mut c = ResumeRecord::default();
        c.summary = "A short two.".to_string();
        let merged = merge_records(vec![Some(a.clone()), Some(c)]);
        assert_eq!(merged.summary, "A short one.");
    }

    #[test]
    fn test_summary_length_compares_characters_not_bytes() {
        // 28 characters / 30 bytes vs 29 characters / 29 bytes
        let mut a = ResumeRecord::default();
        a.summary = "Überblick über die Laufbahn.".to_string();
        let mut b = ResumeRecord::default();
        b.summary = "A plain career overview text.".to_string();

        let merged = merge_records(vec![Some(a), Some(b)]);
        assert_eq!(merged.summary, "A plain career overview text.");
    }

    #[test]
    fn test_skill_dedup_is_case_insensitive() {
        let merged = merge_records(vec![
            Some(record_with_skill("Rust")),
            Some(record_with_skill("rust")),
        ]);
        assert_eq!(merged.skills.len(), 1);
        assert_eq!(merged.skills[0].name, "Rust");
    }

    #[test]
    fn test_experience_dedup_key_and_empty_drop() {
        let mut a = ResumeRecord::default();
        a.experience.push(Experience {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            ..Default::default()
        });
        // All-empty key entry must be dropped
        a.experience.push(Experience {
            end_date: "2021".to_string(),
            ..Default::default()
        });
        let mut b = ResumeRecord::default();
        b.experience.push(Experience {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            description: vec!["duplicate from another chunk".to_string()],
            ..Default::default()
        });

        let merged = merge_records(vec![Some(a), Some(b)]);
        assert_eq!(merged.experience.len(), 1);
        assert!(merged.experience[0].description.is_empty());
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let mut record = ResumeRecord::default();
        record.personal_info.name = "Jane Doe".to_string();
        record.summary = "A summary.".to_string();
        record.skills.push(Skill {
            id: "1".to_string(),
            name: "Rust".to_string(),
            ..Default::default()
        });
        record.experience.push(Experience {
            id: "1".to_string(),
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            ..Default::default()
        });
        record.education.push(Education {
            id: "1".to_string(),
            degree: "BSc".to_string(),
            school: "TU Berlin".to_string(),
            ..Default::default()
        });
        record.certifications.push(Certification {
            id: "1".to_string(),
            name: "CKA".to_string(),
            issuer: "Linux Foundation".to_string(),
            ..Default::default()
        });
        record.languages.push(SpokenLanguage {
            id: "1".to_string(),
            name: "English".to_string(),
            level: "Native".to_string(),
        });

        let merged = merge_records(vec![Some(record.clone()), Some(record.clone())]);
        assert_eq!(merged, record);
    }

    #[test]
    fn test_ids_renumbered_after_dedup() {
        let mut a = record_with_skill("Rust");
        a.skills.push(Skill {
            id: "2".to_string(),
            name: "Rust".to_string(),
            ..Default::default()
        });
        a.skills.push(Skill {
            id: "3".to_string(),
            name: "Go".to_string(),
            ..Default::default()
        });
        let merged = merge_records(vec![Some(a)]);
        let ids: Vec<&str> = merged.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
