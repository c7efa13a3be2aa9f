//! Structured resume record produced by the extraction pipeline
//!
//! Every list field serializes even when empty so downstream consumers never
//! see a missing or null collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_url: String,
    pub website: String,
}

impl PersonalInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.title.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.location.is_empty()
            && self.profile_url.is_empty()
            && self.website.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

impl Experience {
    /// Dedup key per merge rules: position, company, start date.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.position.clone(),
            self.company.clone(),
            self.start_date.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
}

impl Education {
    pub fn dedup_key(&self) -> (String, String) {
        (self.degree.clone(), self.school.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: String,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: "Intermediate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

impl Certification {
    pub fn dedup_key(&self) -> (String, String) {
        (self.name.clone(), self.issuer.clone())
    }
}

/// A spoken language with an optional proficiency level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    pub id: String,
    pub name: String,
    pub level: String,
}

/// The root aggregate handed to the caller after a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<SpokenLanguage>,
}

impl ResumeRecord {
    /// Re-assign dense, 1-based ids to every list in emission order.
    pub fn renumber_ids(&mut self) {
        for (i, exp) in self.experience.iter_mut().enumerate() {
            exp.id = (i + 1).to_string();
        }
        for (i, edu) in self.education.iter_mut().enumerate() {
            edu.id = (i + 1).to_string();
        }
        for (i, skill) in self.skills.iter_mut().enumerate() {
            skill.id = (i + 1).to_string();
        }
        for (i, cert) in self.certifications.iter_mut().enumerate() {
            cert.id = (i + 1).to_string();
        }
        for (i, lang) in self.languages.iter_mut().enumerate() {
            lang.id = (i + 1).to_string();
        }
    }
}
