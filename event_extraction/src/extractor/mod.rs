//! Event Extractor - maps dependency-parsed sentences to events.
//!
//! Extraction works as follows:
//! 1. **Trigger**: The first token whose label is a trigger tag (the root)
//! 2. **Arguments**: Every token whose head text equals the trigger text,
//!    classified into modifier, agent or complement by its label
//! 3. **Event**: Trigger plus classified arguments, each with its position
//!
//! Head matching compares surface text, not token identity. When a word
//! repeats in a sentence, children of every occurrence attach to the
//! trigger.

mod parser;
mod sentences;

pub use parser::*;
pub use sentences::*;

use tracing::debug;

use crate::{Event, EventFormatter, ExtractionConfig, ExtractionError, ParsedToken};

/// Extracts events from parsed sentences, stories and whole corpora.
pub struct EventExtractor {
    config: ExtractionConfig,
    formatter: EventFormatter,
}

impl EventExtractor {
    /// Create an extractor, validating the tag tables.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
        config.tags.validate()?;
        let formatter = EventFormatter::new(config.markers.clone());
        Ok(Self { config, formatter })
    }

    /// Create an extractor with the default spaCy tag tables and markers.
    pub fn with_defaults() -> Self {
        let config = ExtractionConfig::default();
        let formatter = EventFormatter::new(config.markers.clone());
        Self { config, formatter }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn formatter(&self) -> &EventFormatter {
        &self.formatter
    }

    /// Extract the event of one parsed sentence.
    ///
    /// Returns `None` when no token carries a trigger label.
    pub fn extract<T: ParsedToken>(&self, tokens: &[T]) -> Option<Event> {
        let tags = &self.config.tags;
        let trigger = tokens
            .iter()
            .find(|token| tags.is_trigger(token.dependency_label()))?;

        let mut event = Event::new(trigger.text(), trigger.index());
        for token in tokens {
            if token.head_text() != trigger.text() {
                continue;
            }
            if let Some(role) = tags.classify(token.dependency_label()) {
                event = event.with_argument(role, token.text(), token.index());
            }
        }

        Some(event)
    }

    /// Parse and extract a single sentence of raw text.
    pub fn extract_text<P: DependencyParser>(
        &self,
        parser: &mut P,
        text: &str,
    ) -> Result<Option<Event>, ExtractionError> {
        let cleaned = self.config.markers.strip(text);
        if cleaned.is_empty() {
            return Ok(None);
        }

        let parsed = parse_in_batches(parser, &[cleaned], 1)?;
        Ok(parsed.first().and_then(|tokens| self.extract(tokens)))
    }

    /// Extract the events of one story, in sentence order.
    ///
    /// Sentences without a trigger are skipped.
    pub fn extract_story<P: DependencyParser>(
        &self,
        parser: &mut P,
        story: &str,
    ) -> Result<Vec<Event>, ExtractionError> {
        let sentences = split_sentences(&self.config.markers.strip(story));
        let parsed = parse_in_batches(parser, &sentences, self.config.batch_size)?;

        Ok(sentences
            .iter()
            .zip(parsed.iter())
            .filter_map(|(sentence, tokens)| self.extract_or_skip(sentence, tokens))
            .collect())
    }

    /// Extract and serialize every story of a corpus.
    ///
    /// Sentences of all stories are parsed together in batches of
    /// `batch_size`; the result holds one event-story line per input story,
    /// in input order, empty for stories without events.
    pub fn extract_corpus<P, S>(
        &self,
        parser: &mut P,
        stories: &[S],
    ) -> Result<Vec<String>, ExtractionError>
    where
        P: DependencyParser,
        S: AsRef<str>,
    {
        let mut sentences = Vec::new();
        let mut owners = Vec::new();
        for (story_index, story) in stories.iter().enumerate() {
            let split = split_sentences(&self.config.markers.strip(story.as_ref()));
            owners.extend(std::iter::repeat(story_index).take(split.len()));
            sentences.extend(split);
        }

        debug!(
            stories = stories.len(),
            sentences = sentences.len(),
            batch_size = self.config.batch_size,
            "extracting events from corpus"
        );

        let parsed = parse_in_batches(parser, &sentences, self.config.batch_size)?;

        let mut story_events: Vec<Vec<Event>> = vec![Vec::new(); stories.len()];
        for ((sentence, tokens), story_index) in sentences.iter().zip(parsed.iter()).zip(owners) {
            if let Some(event) = self.extract_or_skip(sentence, tokens) {
                story_events[story_index].push(event);
            }
        }

        Ok(story_events
            .iter()
            .map(|events| self.formatter.render_story(events))
            .collect())
    }

    fn extract_or_skip<T: ParsedToken>(&self, sentence: &str, tokens: &[T]) -> Option<Event> {
        let event = self.extract(tokens);
        if event.is_none() {
            debug!(sentence, "no trigger found, skipping sentence");
        }
        event
    }
}

impl Default for EventExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
