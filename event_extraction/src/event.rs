//! Event definitions - one clause-level action extracted from a sentence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role a token plays relative to the event trigger.
///
/// Declaration order is also the order roles are flattened in before
/// sorting by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleKind {
    Trigger,
    /// Negation, particle or adverbial/adjectival modifier.
    Modifier,
    /// Doer of the action.
    Agent,
    /// Object or complement.
    Complement,
}

impl RoleKind {
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Trigger,
        RoleKind::Modifier,
        RoleKind::Agent,
        RoleKind::Complement,
    ];

    /// Stable name of the role list.
    pub fn name(&self) -> &'static str {
        match self {
            RoleKind::Trigger => "trigger",
            RoleKind::Modifier => "modifiers",
            RoleKind::Agent => "agents",
            RoleKind::Complement => "comps",
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token captured in a role, with its original sentence position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub text: String,
    pub index: usize,
}

impl RoleEntry {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// An event: a trigger word plus the arguments attached to it.
///
/// Every entry keeps its sentence position so that [`Event::render`] can
/// restore surface word order no matter which role the entry landed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    trigger: String,
    roles: BTreeMap<RoleKind, Vec<RoleEntry>>,
}

impl Event {
    /// Create an event holding only its trigger.
    pub fn new(trigger: impl Into<String>, trigger_index: usize) -> Self {
        let trigger = trigger.into();
        let mut roles: BTreeMap<RoleKind, Vec<RoleEntry>> =
            RoleKind::ALL.iter().map(|kind| (*kind, Vec::new())).collect();
        roles
            .entry(RoleKind::Trigger)
            .or_default()
            .push(RoleEntry::new(trigger.clone(), trigger_index));

        Self { trigger, roles }
    }

    /// Attach an argument under a role.
    ///
    /// `RoleKind::Trigger` is ignored: the single trigger entry is fixed by
    /// [`Event::new`].
    pub fn with_argument(mut self, role: RoleKind, text: impl Into<String>, index: usize) -> Self {
        if role != RoleKind::Trigger {
            self.roles
                .entry(role)
                .or_default()
                .push(RoleEntry::new(text, index));
        }
        self
    }

    /// The trigger text.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Position of the trigger token in its sentence.
    pub fn trigger_index(&self) -> usize {
        self.role(RoleKind::Trigger)
            .first()
            .map(|entry| entry.index)
            .unwrap_or_default()
    }

    /// Entries recorded under a role, in collection order.
    pub fn role(&self, kind: RoleKind) -> &[RoleEntry] {
        self.roles.get(&kind).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of argument entries (trigger excluded).
    pub fn argument_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|(kind, _)| **kind != RoleKind::Trigger)
            .map(|(_, entries)| entries.len())
            .sum()
    }

    /// Surface form of the event.
    ///
    /// All entries are flattened, stably sorted by sentence position,
    /// blank entries are dropped and the trimmed texts are joined with
    /// single spaces.
    pub fn render(&self) -> String {
        let mut entries: Vec<&RoleEntry> = self.roles.values().flatten().collect();
        entries.sort_by_key(|entry| entry.index);

        entries
            .into_iter()
            .map(|entry| entry.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
