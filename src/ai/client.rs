//! OpenAI-compatible chat completion client for semantic extraction

use crate::config::AiConfig;
use crate::error::{Result, ResumeExtractorError};
use crate::model::ResumeRecord;
use serde::Deserialize;
use serde_json::json;

/// An external service that turns raw profile text into a structured record.
pub trait SemanticExtractor {
    fn extract_record(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl std::future::Future<Output = Result<ResumeRecord>> + Send;
}

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(config: &AiConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResumeExtractorError::SemanticExtraction(format!(
                "Extraction endpoint returned {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ResumeExtractorError::SemanticExtraction("Empty completion response".to_string())
            })
    }
}

impl SemanticExtractor for ChatCompletionClient {
    async fn extract_record(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ResumeRecord> {
        let content = self.complete(system_prompt, user_prompt).await?;
        parse_record(&content)
    }
}

/// Parse a completion into a record, tolerating a markdown-fenced JSON body.
pub fn parse_record(content: &str) -> Result<ResumeRecord> {
    let trimmed = content.trim();
    if let Ok(record) = serde_json::from_str(trimmed) {
        return Ok(record);
    }

    if let Some(inner) = extract_fenced_json(trimmed) {
        if let Ok(record) = serde_json::from_str(inner) {
            return Ok(record);
        }
    }

    Err(ResumeExtractorError::SemanticExtraction(
        "Failed to parse completion as a resume record".to_string(),
    ))
}

fn extract_fenced_json(content: &str) -> Option<&str> {
    let start = content.find("```")?;
    let after_fence = &content[start + 3..];
    let body_start = after_fence.find('\n')?;
    let body = &after_fence[body_start + 1..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let record = parse_record(r#"{"personal_info": {"name": "Jane Doe"}, "summary": "Hi"}"#)
            .unwrap();
        assert_eq!(record.personal_info.name, "Jane Doe");
        assert_eq!(record.summary, "Hi");
    }

    #[test]
    fn test_parse_fenced_json() {
        let content = "Here is the result:\n```json\n{\"summary\": \"fenced\"}\n```";
        let record = parse_record(content).unwrap();
        assert_eq!(record.summary, "fenced");
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_record("I could not extract anything, sorry.").is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let record = parse_record(r#"{"skills": [{"name": "Rust"}]}"#).unwrap();
        assert_eq!(record.skills[0].level, "Intermediate");
        assert!(record.experience.is_empty());
    }
}
