//! Layout line records from the document text/layout provider
//!
//! The provider hands over an ordered sequence of styled lines; this module
//! owns the wire shape, the reading-order sort, and a plain-text fallback for
//! inputs that carry no layout information.

use crate::error::{Result, ResumeExtractorError};
use serde::{Deserialize, Serialize};

/// One styled line of text with its position on the page.
///
/// The bounding box is `(x0, y0, x1, y1)` in PDF coordinates, y growing
/// upward. `font_size` is the maximum span size on the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub bbox: (f32, f32, f32, f32),
    pub page: u32,
    pub font_size: f32,
    pub bold: bool,
}

impl TextLine {
    /// A synthetic line for text without layout data: body size, not bold.
    pub fn plain(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            bbox: (0.0, -(index as f32), 0.0, -(index as f32)),
            page: 0,
            font_size: 12.0,
            bold: false,
        }
    }
}

/// Parse the layout provider's JSON contract.
///
/// This is the one fatal input error in the pipeline: lines that cannot be
/// interpreted as the record shape abort extraction.
pub fn parse_layout_json(content: &str) -> Result<Vec<TextLine>> {
    let mut lines: Vec<TextLine> = serde_json::from_str(content)
        .map_err(|e| ResumeExtractorError::Layout(format!("not a line-record array: {}", e)))?;
    lines.retain(|line| !line.text.trim().is_empty());
    sort_reading_order(&mut lines);
    Ok(lines)
}

/// Sort lines into reading order: page ascending, then top to bottom, then
/// left to right.
pub fn sort_reading_order(lines: &mut [TextLine]) {
    lines.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(
                b.bbox
                    .1
                    .partial_cmp(&a.bbox.1)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(
                a.bbox
                    .0
                    .partial_cmp(&b.bbox.0)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });
}

/// Build synthetic layout lines from raw text so plain-text inputs can flow
/// through the same pipeline.
pub fn lines_from_text(text: &str) -> Vec<TextLine> {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| TextLine::plain(line, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_json() {
        let content = r#"[
            {"text": "Jane Doe", "bbox": [50.0, 700.0, 200.0, 720.0], "page": 0, "font_size": 18.0, "bold": true},
            {"text": "Engineer", "bbox": [50.0, 680.0, 200.0, 695.0], "page": 0, "font_size": 12.0, "bold": false}
        ]"#;
        let lines = parse_layout_json(content).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Jane Doe");
        assert!(lines[0].bold);
    }

    #[test]
    fn test_malformed_layout_is_fatal() {
        let result = parse_layout_json(r#"{"not": "an array"}"#);
        assert!(matches!(result, Err(ResumeExtractorError::Layout(_))));
    }

    #[test]
    fn test_reading_order_sort() {
        let mut lines = vec![
            TextLine {
                text: "second".to_string(),
                bbox: (50.0, 600.0, 100.0, 610.0),
                page: 0,
                font_size: 12.0,
                bold: false,
            },
            TextLine {
                text: "third".to_string(),
                bbox: (50.0, 700.0, 100.0, 710.0),
                page: 1,
                font_size: 12.0,
                bold: false,
            },
            TextLine {
                text: "first".to_string(),
                bbox: (50.0, 700.0, 100.0, 710.0),
                page: 0,
                font_size: 12.0,
                bold: false,
            },
        ];
        sort_reading_order(&mut lines);
        let order: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_lines_from_text_skips_blanks() {
        let lines = lines_from_text("Jane Doe\n\n  \nEngineer\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "Engineer");
        // Later lines sort below earlier ones
        assert!(lines[1].bbox.1 < lines[0].bbox.1);
    }
}
