//! Certifications extraction

use crate::extract::vocab::Patterns;
use crate::input::layout::TextLine;
use crate::model::Certification;

pub struct CertificationsExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> CertificationsExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    /// Lines split on dash/pipe into name, issuer, and optional date. A bare
    /// four-digit year inside the issuer segment is lifted into the date.
    pub fn extract(&self, lines: &[&TextLine]) -> Vec<Certification> {
        let mut certifications = Vec::new();

        for line in lines {
            let text = line.text.trim();
            if text.is_empty() {
                continue;
            }

            let parts: Vec<&str> = self
                .patterns
                .cert_delimiters
                .split(text)
                .map(|p| p.trim())
                .collect();

            let mut cert = Certification {
                id: (certifications.len() + 1).to_string(),
                ..Default::default()
            };

            if parts.len() >= 2 {
                cert.name = parts[0].to_string();
                let mut issuer = parts[1].to_string();
                let mut date = parts.get(2).map(|p| p.to_string()).unwrap_or_default();

                if date.is_empty() {
                    if let Some(year) = self.patterns.bare_year.find(&issuer) {
                        date = year.as_str().to_string();
                        issuer = self
                            .patterns
                            .bare_year
                            .replace_all(&issuer, "")
                            .trim()
                            .to_string();
                    }
                }

                cert.issuer = issuer;
                cert.date = date;
            } else {
                cert.name = text.to_string();
            }

            certifications.push(cert);
        }

        certifications
    }
}
