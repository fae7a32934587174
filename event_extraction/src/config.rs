//! Extraction configuration: dependency-label role tables and marker tokens.
//!
//! The defaults follow the spaCy English dependency scheme. Everything can
//! be overridden from a TOML document:
//!
//! ```toml
//! batch_size = 64
//!
//! [tags]
//! trigger = ["ROOT"]
//! modifier = ["neg", "prt"]
//!
//! [markers]
//! separator = "<sep>"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::{ExtractionError, RoleKind};

/// Dependency-label tables that drive role classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventTags {
    /// Labels marking the trigger (the sentence root).
    pub trigger: BTreeSet<String>,

    /// Negation, particles and adverbial/adjectival modifiers.
    pub modifier: BTreeSet<String>,

    /// Doers of the action: agents and all subject labels.
    pub agent: BTreeSet<String>,

    /// Objects, complements and attributes.
    pub complement: BTreeSet<String>,
}

fn label_set(labels: &[&str]) -> BTreeSet<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

impl Default for EventTags {
    fn default() -> Self {
        Self {
            trigger: label_set(&["ROOT"]),
            modifier: label_set(&["neg", "prt", "advmod", "amod"]),
            agent: label_set(&["agent", "csubj", "csubjpass", "nsubj", "nsubjpass"]),
            complement: label_set(&[
                "dobj", "acomp", "ccomp", "xcomp", "oprd", "attr", "pobj", "dative", "npadvmod",
            ]),
        }
    }
}

impl EventTags {
    /// Check that the trigger set is non-empty, that trigger labels are not
    /// reused as argument labels and that no label belongs to more than one
    /// argument role.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.trigger.is_empty() {
            return Err(ExtractionError::EmptyTriggerTags);
        }

        let roles = [
            (RoleKind::Modifier, &self.modifier),
            (RoleKind::Agent, &self.agent),
            (RoleKind::Complement, &self.complement),
        ];
        for (role, set) in &roles {
            if let Some(label) = self.trigger.intersection(set).next() {
                return Err(ExtractionError::TriggerLabelReused {
                    label: label.clone(),
                    role: role.name(),
                });
            }
        }
        for (i, (first, first_set)) in roles.iter().enumerate() {
            for (second, second_set) in &roles[i + 1..] {
                if let Some(label) = first_set.intersection(second_set).next() {
                    return Err(ExtractionError::OverlappingLabel {
                        label: label.clone(),
                        first: first.name(),
                        second: second.name(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether a label marks the trigger.
    pub fn is_trigger(&self, label: &str) -> bool {
        self.trigger.contains(label)
    }

    /// Classify an argument label. Modifier wins over agent, agent over
    /// complement; unknown labels are ignored.
    pub fn classify(&self, label: &str) -> Option<RoleKind> {
        if self.modifier.contains(label) {
            Some(RoleKind::Modifier)
        } else if self.agent.contains(label) {
            Some(RoleKind::Agent)
        } else if self.complement.contains(label) {
            Some(RoleKind::Complement)
        } else {
            None
        }
    }
}

/// Reserved substrings delimiting a serialized event story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventMarkers {
    pub start: String,
    pub separator: String,
    pub end: String,
}

impl Default for EventMarkers {
    fn default() -> Self {
        Self {
            start: "[EVENT_s]".to_string(),
            separator: "[EVENT_sep]".to_string(),
            end: "[EVENT_e]".to_string(),
        }
    }
}

impl EventMarkers {
    /// Remove every marker occurrence from `text` and trim the result.
    pub fn strip(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for marker in [&self.start, &self.separator, &self.end] {
            if !marker.is_empty() {
                cleaned = cleaned.replace(marker.as_str(), "");
            }
        }
        cleaned.trim().to_string()
    }
}

/// Full extractor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub tags: EventTags,
    pub markers: EventMarkers,

    /// Sentences submitted per parser call during corpus extraction.
    pub batch_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            tags: EventTags::default(),
            markers: EventMarkers::default(),
            batch_size: 256,
        }
    }
}

impl ExtractionConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ExtractionError> {
        let config: Self = toml::from_str(source)?;
        config.tags.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tags_are_valid() {
        let tags = EventTags::default();
        assert!(tags.validate().is_ok());
        assert!(tags.is_trigger("ROOT"));
        assert!(!tags.is_trigger("nsubj"));
    }

    #[test]
    fn test_classify() {
        let tags = EventTags::default();
        assert_eq!(tags.classify("neg"), Some(RoleKind::Modifier));
        assert_eq!(tags.classify("nsubj"), Some(RoleKind::Agent));
        assert_eq!(tags.classify("dobj"), Some(RoleKind::Complement));
        assert_eq!(tags.classify("det"), None);
        assert_eq!(tags.classify("ROOT"), None);
    }

    #[test]
    fn test_overlapping_labels_rejected() {
        let mut tags = EventTags::default();
        tags.complement.insert("nsubj".to_string());

        match tags.validate() {
            Err(ExtractionError::OverlappingLabel { label, first, second }) => {
                assert_eq!(label, "nsubj");
                assert_eq!(first, "agents");
                assert_eq!(second, "comps");
            }
            other => panic!("expected overlapping label error, got {other:?}"),
        }
    }

    #[test]
    fn test_trigger_label_reused_as_argument_rejected() {
        let mut tags = EventTags::default();
        tags.complement.insert("ROOT".to_string());

        match tags.validate() {
            Err(ExtractionError::TriggerLabelReused { label, role }) => {
                assert_eq!(label, "ROOT");
                assert_eq!(role, "comps");
            }
            other => panic!("expected trigger label error, got {other:?}"),
        }

        let result = ExtractionConfig::from_toml_str(
            r#"
            [tags]
            trigger = ["ROOT", "nsubj"]
            "#,
        );
        assert!(matches!(
            result,
            Err(ExtractionError::TriggerLabelReused { role: "agents", .. })
        ));
    }

    #[test]
    fn test_empty_trigger_rejected() {
        let tags = EventTags {
            trigger: BTreeSet::new(),
            ..EventTags::default()
        };
        assert!(matches!(tags.validate(), Err(ExtractionError::EmptyTriggerTags)));
    }

    #[test]
    fn test_strip_markers() {
        let markers = EventMarkers::default();
        assert_eq!(
            markers.strip(" [EVENT_s] He ran [EVENT_sep] away [EVENT_e] "),
            "He ran  away"
        );
        assert_eq!(markers.strip("plain text"), "plain text");
    }

    #[test]
    fn test_config_from_toml_partial() {
        let config = ExtractionConfig::from_toml_str(
            r#"
            batch_size = 8

            [tags]
            modifier = ["neg"]

            [markers]
            separator = "<sep>"
            "#,
        )
        .unwrap();

        assert_eq!(config.batch_size, 8);
        assert_eq!(config.tags.modifier.len(), 1);
        assert_eq!(config.tags.agent, EventTags::default().agent);
        assert_eq!(config.markers.separator, "<sep>");
        assert_eq!(config.markers.start, "[EVENT_s]");
    }

    #[test]
    fn test_config_from_toml_rejects_overlap() {
        let result = ExtractionConfig::from_toml_str(
            r#"
            [tags]
            modifier = ["dobj"]
            "#,
        );
        assert!(matches!(result, Err(ExtractionError::OverlappingLabel { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("extraction.toml");
        std::fs::write(&path, "batch_size = 4\n").unwrap();

        let config = ExtractionConfig::from_file(&path).unwrap();
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.tags, EventTags::default());

        let missing = ExtractionConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ExtractionError::Io(_))));
    }
}
