//! Event-story serialization.
//!
//! A story with events `e1..en` is written as
//! `START e1 SEP e2 SEP ... SEP en END`; a story without events is the
//! empty string.

use crate::{Event, EventMarkers};

/// Serializes event stories with a fixed set of markers.
#[derive(Debug, Clone, Default)]
pub struct EventFormatter {
    markers: EventMarkers,
}

impl EventFormatter {
    /// Create a formatter with the given markers.
    pub fn new(markers: EventMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &EventMarkers {
        &self.markers
    }

    /// Render a single event.
    pub fn render(&self, event: &Event) -> String {
        event.render()
    }

    /// Render the events of one story into a single delimited line.
    pub fn render_story(&self, events: &[Event]) -> String {
        let rendered: Vec<String> = events.iter().map(Event::render).collect();
        self.join_story(&rendered)
    }

    /// Wrap already-rendered event strings in story markers.
    pub fn join_story<S: AsRef<str>>(&self, events: &[S]) -> String {
        if events.is_empty() {
            return String::new();
        }

        let separator = format!(" {} ", self.markers.separator);
        let body = events
            .iter()
            .map(|e| e.as_ref())
            .collect::<Vec<_>>()
            .join(separator.as_str());

        format!("{} {} {}", self.markers.start, body, self.markers.end)
    }

    /// Split a serialized story back into its plain event strings.
    ///
    /// Start and end markers are removed only when present as prefix and
    /// suffix; segments left blank are discarded.
    pub fn parse_story(&self, story: &str) -> Vec<String> {
        let mut segments: Vec<String> = if self.markers.separator.is_empty() {
            vec![story.trim().to_string()]
        } else {
            story
                .split(self.markers.separator.as_str())
                .map(|s| s.trim().to_string())
                .collect()
        };

        if let Some(first) = segments.first_mut() {
            if let Some(rest) = strip_marker_prefix(first, &self.markers.start) {
                *first = rest;
            }
        }
        if let Some(last) = segments.last_mut() {
            if let Some(rest) = strip_marker_suffix(last, &self.markers.end) {
                *last = rest;
            }
        }

        segments.retain(|s| !s.is_empty());
        segments
    }
}

fn strip_marker_prefix(segment: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    segment
        .strip_prefix(marker)
        .map(|rest| rest.trim().to_string())
}

fn strip_marker_suffix(segment: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    segment
        .strip_suffix(marker)
        .map(|rest| rest.trim().to_string())
}
