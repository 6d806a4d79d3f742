//! Markdown splitting on the manual's heading hierarchy

use crate::models::Passage;
use crate::models::PassageMetadata;

/// Paragraph join used when consecutive blocks share a heading trail
const PARAGRAPH_JOIN: &str = "  \n";

/// Splits a markdown manual into one passage per heading trail.
///
/// `#`, `##` and `###` become the title, category and error-code metadata of
/// the text beneath them. A heading replaces any open heading at the same or a
/// deeper level. Lines inside fenced code blocks are never headings, and
/// `####` or deeper is treated as ordinary text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownHeaderSplitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HeadingLevel {
    Title = 1,
    Category = 2,
    ErrorCode = 3,
}

impl HeadingLevel {
    fn parse(line: &str) -> Option<(Self, &str)> {
        let hashes = line.chars().take_while(|c| *c == '#').count();
        let level = match hashes {
            1 => Self::Title,
            2 => Self::Category,
            3 => Self::ErrorCode,
            _ => return None,
        };

        let rest = &line[hashes..];
        if rest.is_empty() {
            return Some((level, ""));
        }
        rest.starts_with(' ').then(|| (level, rest.trim()))
    }
}

#[derive(Default)]
struct SplitState {
    trail: Vec<(HeadingLevel, String)>,
    paragraph: Vec<String>,
    blocks: Vec<(PassageMetadata, String)>,
}

impl SplitState {
    fn metadata(&self) -> PassageMetadata {
        let level = |wanted: HeadingLevel| {
            self.trail
                .iter()
                .find(|(level, _)| *level == wanted)
                .map(|(_, text)| text.clone())
        };

        PassageMetadata {
            title: level(HeadingLevel::Title),
            category: level(HeadingLevel::Category),
            error_code: level(HeadingLevel::ErrorCode),
        }
    }

    fn close_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();

        let metadata = self.metadata();
        match self.blocks.last_mut() {
            Some((last_meta, last_text)) if *last_meta == metadata => {
                last_text.push_str(PARAGRAPH_JOIN);
                last_text.push_str(&text);
            }
            _ => self.blocks.push((metadata, text)),
        }
    }

    fn open_heading(&mut self, level: HeadingLevel, text: &str) {
        self.close_paragraph();
        self.trail.retain(|(open, _)| *open < level);
        self.trail.push((level, text.to_string()));
    }
}

impl MarkdownHeaderSplitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split into passages, heading lines removed from the content
    #[must_use]
    pub fn split(&self, markdown: &str) -> Vec<Passage> {
        let mut state = SplitState::default();
        let mut fence: Option<&str> = None;

        for line in markdown.lines() {
            let stripped = line.trim();

            if let Some(marker) = fence {
                state.paragraph.push(stripped.to_string());
                if stripped.starts_with(marker) {
                    fence = None;
                }
                continue;
            }

            // A backtick line that also closes itself is inline code, not a fence
            let opens_fence = (stripped.starts_with("```") && stripped.matches("```").count() == 1)
                || stripped.starts_with("~~~");
            if opens_fence {
                fence = Some(&stripped[..3]);
                state.paragraph.push(stripped.to_string());
                continue;
            }

            if let Some((level, text)) = HeadingLevel::parse(stripped) {
                state.open_heading(level, text);
            } else if stripped.is_empty() {
                state.close_paragraph();
            } else {
                state.paragraph.push(stripped.to_string());
            }
        }
        state.close_paragraph();

        state
            .blocks
            .into_iter()
            .map(|(metadata, content)| Passage::new(content, metadata))
            .collect()
    }
}

/// Prefix the content with `"{category} - {error_code}\n\n"` so the embedded
/// text carries the code even when the body never repeats it
#[must_use]
pub fn enrich_with_headers(passage: Passage) -> Passage {
    let category = passage.metadata.category.as_deref().unwrap_or_default();
    let error_code = passage.metadata.error_code.as_deref().unwrap_or_default();
    let content = format!("{category} - {error_code}\n\n{}", passage.content);

    Passage::new(content, passage.metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_MANUAL: &str = "# Orbit-5G Troubleshooting Guide

## Hardware Alarms

### E-101: Power Unit Failure

**Description**: Primary power supply has failed.

**Resolution Procedure**:
1. Check voltage at test point TP4
2. Replace the power supply unit

## Software Alarms

### S-304: Fiber Link Degradation

**Description**: Signal loss detected on fiber optic connection.

**Resolution Procedure**:
1. Clean fiber connectors with lint-free cloth
2. Run diagnostic: `nebula-cli check-link`
";

    #[test]
    fn test_one_passage_per_error_code() {
        let passages = MarkdownHeaderSplitter::new().split(SAMPLE_MANUAL);
        assert_eq!(passages.len(), 2);

        let codes: Vec<_> = passages
            .iter()
            .map(|p| p.metadata.error_code.as_deref().unwrap())
            .collect();
        assert_eq!(
            codes,
            vec!["E-101: Power Unit Failure", "S-304: Fiber Link Degradation"]
        );
        assert_eq!(
            passages[1].metadata.category.as_deref(),
            Some("Software Alarms")
        );
        assert_eq!(
            passages[1].metadata.title.as_deref(),
            Some("Orbit-5G Troubleshooting Guide")
        );
    }

    #[test]
    fn test_heading_lines_are_stripped_and_paragraphs_joined() {
        let passages = MarkdownHeaderSplitter::new().split(SAMPLE_MANUAL);
        let first = &passages[0].content;
        assert!(!first.contains('#'));
        assert_eq!(
            first,
            "**Description**: Primary power supply has failed.  \n\
             **Resolution Procedure**:\n\
             1. Check voltage at test point TP4\n\
             2. Replace the power supply unit"
        );
    }

    #[test]
    fn test_shallower_heading_resets_deeper_levels() {
        let markdown = "## Hardware Alarms\n### E-101: Power\nbody one\n## Connectivity Issues\nbody two\n";
        let passages = MarkdownHeaderSplitter::new().split(markdown);
        assert_eq!(passages.len(), 2);
        assert_eq!(passages[1].metadata.error_code, None);
        assert_eq!(
            passages[1].metadata.category.as_deref(),
            Some("Connectivity Issues")
        );
    }

    #[test]
    fn test_fenced_comment_is_not_a_heading() {
        let markdown = "### S-505: Handover Timeout\n```\n# restart the agent\nnebula-cli restart\n```\n";
        let passages = MarkdownHeaderSplitter::new().split(markdown);
        assert_eq!(passages.len(), 1);
        assert!(passages[0].content.contains("# restart the agent"));
        assert_eq!(
            passages[0].metadata.error_code.as_deref(),
            Some("S-505: Handover Timeout")
        );
    }

    #[test]
    fn test_single_line_backtick_block_does_not_swallow_next_heading() {
        let markdown = "## Hardware Alarms\n### E-101: Power\nRun ```nebula-cli reset```\n```nebula-cli reset```\n### E-102: Fan\nbody two\n";
        let passages = MarkdownHeaderSplitter::new().split(markdown);
        assert_eq!(passages.len(), 2);
        assert_eq!(
            passages[0].content,
            "Run ```nebula-cli reset```\n```nebula-cli reset```"
        );
        assert_eq!(
            passages[1].metadata.error_code.as_deref(),
            Some("E-102: Fan")
        );
        assert_eq!(passages[1].content, "body two");
    }

    #[test]
    fn test_deeper_headings_and_hashtags_are_text() {
        let markdown = "### E-102\n#### Notes\n#hashtag\nbody\n";
        let passages = MarkdownHeaderSplitter::new().split(markdown);
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].content, "#### Notes\n#hashtag\nbody");
    }

    #[test]
    fn test_text_before_any_heading_has_empty_metadata() {
        let passages = MarkdownHeaderSplitter::new().split("preamble\n\n# Title\nbody\n");
        assert_eq!(passages.len(), 2);
        assert!(passages[0].metadata.is_empty());
    }

    #[test]
    fn test_enrichment_prefixes_category_and_code() {
        let passages = MarkdownHeaderSplitter::new().split(SAMPLE_MANUAL);
        let enriched = enrich_with_headers(passages[0].clone());
        assert!(enriched
            .content
            .starts_with("Hardware Alarms - E-101: Power Unit Failure\n\n**Description**"));
        assert_eq!(enriched.metadata, passages[0].metadata);
    }

    #[test]
    fn test_enrichment_with_missing_levels() {
        let enriched = enrich_with_headers(Passage::new("body", PassageMetadata::default()));
        assert_eq!(enriched.content, " - \n\nbody");
    }
}
