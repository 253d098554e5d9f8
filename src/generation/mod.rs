//! Content step generation
//!
//! Walks a finished outline and yields one [`GenerationStep`] per section, in
//! section order. The iterator is the handoff contract; the async stream wraps
//! it around a [`SectionWriter`] (the LLM call in a real deployment) and
//! awaits each write before producing the next step.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, Stream};
use tracing::debug;

use crate::types::{ArticleStructure, BriefError, GenerationStep, Result, Section, SerpProfile};

// =============================================================================
// Iterator
// =============================================================================

/// Lazy, in-order steps over an outline. Create a new one to restart
#[derive(Debug, Clone)]
pub struct ContentSteps<'a> {
    keyword: &'a str,
    sections: std::iter::Enumerate<std::slice::Iter<'a, Section>>,
    target_words: Option<usize>,
}

impl<'a> ContentSteps<'a> {
    pub fn new(profile: &'a SerpProfile, structure: &'a ArticleStructure) -> Self {
        let target_words = match (profile.target_word_count, structure.sections.len()) {
            (0, _) | (_, 0) => None,
            (words, sections) => Some(words as usize / sections),
        };

        Self {
            keyword: profile.keyword.as_str(),
            sections: structure.sections.iter().enumerate(),
            target_words,
        }
    }
}

impl Iterator for ContentSteps<'_> {
    type Item = GenerationStep;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, section) = self.sections.next()?;
        Some(GenerationStep {
            index,
            h2: section.h2.clone(),
            role: section.role,
            content: placeholder_content(self.keyword, section),
            target_words: self.target_words,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sections.size_hint()
    }
}

impl ExactSizeIterator for ContentSteps<'_> {}

/// One step per section of `structure`, in order
pub fn iterate_content_steps<'a>(
    profile: &'a SerpProfile,
    structure: &'a ArticleStructure,
) -> ContentSteps<'a> {
    ContentSteps::new(profile, structure)
}

/// Placeholder body naming the keyword, the role and any H3s
pub fn placeholder_content(keyword: &str, section: &Section) -> String {
    let mut content = format!(
        "[{}] {} section for \"{}\".",
        section.role, section.h2, keyword
    );
    if !section.h3.is_empty() {
        content.push_str(&format!(" Covers: {}.", section.h3.join(" / ")));
    }
    content
}

// =============================================================================
// Writer + Stream
// =============================================================================

/// Turns a placeholder step into section prose
#[async_trait]
pub trait SectionWriter: Send + Sync {
    /// Content for `step`; `step.content` holds the placeholder
    async fn write(&self, step: &GenerationStep) -> Result<String>;

    /// Writer name for logging
    fn name(&self) -> &str;
}

/// Writer that keeps the placeholder content
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWriter;

#[async_trait]
impl SectionWriter for PlaceholderWriter {
    async fn write(&self, step: &GenerationStep) -> Result<String> {
        Ok(step.content.clone())
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}

/// Async form of [`iterate_content_steps`].
///
/// Each item is written before the next one starts; `delay` (if non-zero) is
/// slept between consecutive steps. A failed write yields an error item for
/// that section and the stream moves on to the next one.
pub fn stream_content_steps<'a>(
    profile: &'a SerpProfile,
    structure: &'a ArticleStructure,
    writer: &'a dyn SectionWriter,
    delay: Duration,
) -> impl Stream<Item = Result<GenerationStep>> + Send + 'a {
    stream::unfold(
        iterate_content_steps(profile, structure),
        move |mut steps| async move {
            let mut step = steps.next()?;

            if step.index > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            debug!(index = step.index, role = %step.role, writer = writer.name(), "Writing section");
            let result = match writer.write(&step).await {
                Ok(content) => {
                    step.content = content;
                    Ok(step)
                }
                Err(err @ BriefError::Generation { .. }) => Err(err),
                Err(err) => Err(BriefError::generation(step.index, err.to_string())),
            };

            Some((result, steps))
        },
    )
}
