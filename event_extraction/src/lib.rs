//! # Event Extraction
//!
//! Turns dependency-parsed sentences into compact symbolic events and
//! serializes the events of a story into a single marker-delimited line.
//! The dependency parser itself lives outside this crate and is reached
//! through the [`DependencyParser`] and [`ParsedToken`] traits.
//!
//! ## Core Components
//!
//! - **token**: The narrow token interface a parser adapter must provide
//! - **config**: Dependency-label role tables and reserved marker tokens
//! - **event**: The `Event` record (trigger plus role-classified arguments)
//! - **extractor**: Trigger location, argument collection, story and corpus extraction
//! - **format**: Event-story serialization with start/separator/end markers

pub mod config;
pub mod error;
pub mod event;
pub mod extractor;
pub mod format;
pub mod token;

pub use config::*;
pub use error::*;
pub use event::*;
pub use extractor::*;
pub use format::*;
pub use token::*;
