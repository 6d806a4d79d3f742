//! Context assembly from retrieved passages

use crate::models::Passage;

const CHUNK_SEPARATOR: &str = "\n---\n";

/// Assembler for creating a bounded context window from ranked passages
pub struct ContextAssembler {
    max_context_length: usize,
}

impl ContextAssembler {
    /// Create a new context assembler
    #[must_use]
    pub const fn new(max_context_length: usize) -> Self {
        Self { max_context_length }
    }

    /// Label each passage by 1-based position and join them.
    ///
    /// The first passage is always included; later ones are dropped once the
    /// window would exceed `max_context_length` characters.
    #[must_use]
    pub fn assemble(&self, passages: &[Passage]) -> String {
        self.assemble_with_count(passages).0
    }

    /// Assembled context and how many passages made it into the window
    #[must_use]
    pub fn assemble_with_count(&self, passages: &[Passage]) -> (String, usize) {
        let mut context = String::new();
        let mut included = 0;
        let mut total_length = 0;

        for (idx, passage) in passages.iter().enumerate() {
            let entry = format!("Context Chunk {}:\n{}\n", idx + 1, passage.content);
            let entry_length = entry.chars().count()
                + if idx == 0 { 0 } else { CHUNK_SEPARATOR.len() };

            if idx > 0 && total_length + entry_length > self.max_context_length {
                tracing::debug!(
                    "Context window full after {} of {} passages",
                    idx,
                    passages.len()
                );
                break;
            }

            if idx > 0 {
                context.push_str(CHUNK_SEPARATOR);
            }
            context.push_str(&entry);
            total_length += entry_length;
            included += 1;
        }

        (context, included)
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(crate::config::default_max_context_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PassageMetadata;

    fn passage(content: &str) -> Passage {
        Passage::new(content, PassageMetadata::default())
    }

    #[test]
    fn test_labels_are_one_based_and_separated() {
        let context = ContextAssembler::default().assemble(&[passage("first"), passage("second")]);
        assert_eq!(
            context,
            "Context Chunk 1:\nfirst\n\n---\nContext Chunk 2:\nsecond\n"
        );
    }

    #[test]
    fn test_empty_input_gives_empty_context() {
        assert!(ContextAssembler::default().assemble(&[]).is_empty());
    }

    #[test]
    fn test_window_bound_drops_trailing_passages() {
        let assembler = ContextAssembler::new(40);
        let passages = [passage("short one"), passage(&"x".repeat(100))];
        let (context, included) = assembler.assemble_with_count(&passages);
        assert!(context.contains("Context Chunk 1"));
        assert!(!context.contains("Context Chunk 2"));
        assert_eq!(included, 1);
    }

    #[test]
    fn test_first_passage_survives_tiny_window() {
        let assembler = ContextAssembler::new(5);
        let context = assembler.assemble(&[passage(&"y".repeat(50))]);
        assert!(context.starts_with("Context Chunk 1:\n"));
    }
}
