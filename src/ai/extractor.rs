//! Chunk orchestration for the semantic extraction path
//!
//! Short documents go through one extraction call; long ones are chunked,
//! extracted per chunk, and folded back together by the merge engine. A
//! failed chunk is dropped with a warning instead of failing the document.

use crate::ai::chunker::split_text;
use crate::ai::client::SemanticExtractor;
use crate::ai::prompts::PromptTemplates;
use crate::config::AiConfig;
use crate::error::Result;
use crate::merge::merge_records;
use crate::model::ResumeRecord;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

pub struct AiExtractor<C: SemanticExtractor> {
    client: C,
    config: AiConfig,
    templates: PromptTemplates,
}

impl<C: SemanticExtractor> AiExtractor<C> {
    pub fn new(client: C, config: AiConfig) -> Self {
        Self {
            client,
            config,
            templates: PromptTemplates::default(),
        }
    }

    pub async fn extract(&self, text: &str) -> Result<ResumeRecord> {
        if text.chars().count() <= self.config.chunk_threshold {
            let user = self.templates.render_user(text);
            let mut record = self.client.extract_record(&self.templates.system, &user).await?;
            record.renumber_ids();
            return Ok(record);
        }

        let chunks = split_text(text, self.config.chunk_size, self.config.chunk_overlap)?;
        info!("Text exceeds {} chars, extracting {} chunks", self.config.chunk_threshold, chunks.len());

        let progress = ProgressBar::new(chunks.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] chunk {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut partials: Vec<Option<ResumeRecord>> = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let system = self.templates.render_chunk_system(i, chunks.len());
            let user = self.templates.render_user(chunk);

            match self.client.extract_record(&system, &user).await {
                Ok(record) => partials.push(Some(record)),
                Err(e) => {
                    warn!("Failed to extract from chunk {}: {}", i + 1, e);
                    partials.push(None);
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(merge_records(partials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ResumeExtractorError;
    use crate::model::Skill;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned extractor: returns one skill per call, failing on request
    struct FakeExtractor {
        calls: AtomicUsize,
        fail_call: Option<usize>,
    }

    impl FakeExtractor {
        fn new(fail_call: Option<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_call,
            }
        }
    }

    impl SemanticExtractor for FakeExtractor {
        async fn extract_record(&self, _system: &str, _user: &str) -> Result<ResumeRecord> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_call == Some(call) {
                return Err(ResumeExtractorError::SemanticExtraction("boom".to_string()));
            }
            let mut record = ResumeRecord::default();
            record.skills.push(Skill {
                id: "1".to_string(),
                name: format!("skill-{}", call),
                ..Default::default()
            });
            Ok(record)
        }
    }

    fn small_chunks_config() -> AiConfig {
        let mut config = Config::default().ai;
        config.chunk_threshold = 50;
        config.chunk_size = 40;
        config.chunk_overlap = 5;
        config
    }

    #[tokio::test]
    async fn test_short_text_single_call() {
        let extractor = AiExtractor::new(FakeExtractor::new(None), small_chunks_config());
        let record = extractor.extract("short text").await.unwrap();
        assert_eq!(record.skills.len(), 1);
        assert_eq!(record.skills[0].id, "1");
    }

    #[tokio::test]
    async fn test_long_text_merges_chunks() {
        let extractor = AiExtractor::new(FakeExtractor::new(None), small_chunks_config());
        let text = "lorem ipsum dolor sit amet ".repeat(10);
        let record = extractor.extract(&text).await.unwrap();
        // One distinct skill per chunk, renumbered from 1
        assert!(record.skills.len() > 1);
        assert_eq!(record.skills[0].id, "1");
    }

    #[tokio::test]
    async fn test_failed_chunk_is_skipped() {
        let extractor = AiExtractor::new(FakeExtractor::new(Some(0)), small_chunks_config());
        let text = "lorem ipsum dolor sit amet ".repeat(10);
        let record = extractor.extract(&text).await.unwrap();
        // The first chunk failed but the rest still merged
        assert!(record.skills.iter().all(|s| s.name != "skill-0"));
        assert!(!record.skills.is_empty());
    }

    #[tokio::test]
    async fn test_single_call_failure_is_an_error() {
        let extractor = AiExtractor::new(FakeExtractor::new(Some(0)), small_chunks_config());
        assert!(extractor.extract("short").await.is_err());
    }
}
