//! Raw text chunking for the semantic extraction path

use crate::error::{Result, ResumeExtractorError};

/// Split text into overlapping chunks, breaking at word boundaries where
/// possible so no chunk cuts a token in half.
pub fn split_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>> {
    if chunk_size <= overlap {
        return Err(ResumeExtractorError::InvalidInput(
            "Chunk size must be greater than overlap".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let content_chars: Vec<char> = text.chars().collect();
    let total_length = content_chars.len();

    if total_length == 0 {
        return Ok(chunks);
    }

    let step_size = chunk_size - overlap;
    let mut start = 0;

    while start < total_length {
        let end = std::cmp::min(start + chunk_size, total_length);

        // Try to break at word boundaries
        let mut actual_end = end;
        if end < total_length {
            for i in (start..end).rev() {
                let c = content_chars[i];
                if c.is_whitespace() || c == '.' || c == '!' || c == '?' {
                    actual_end = i + 1;
                    break;
                }
            }
        }

        let chunk: String = content_chars[start..actual_end].iter().collect();
        let chunk = chunk.trim().to_string();
        if !chunk.is_empty() {
            chunks.push(chunk);
        }

        start += step_size;
    }

    Ok(chunks)
}
