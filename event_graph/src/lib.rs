//! # Event Graph
//!
//! Aggregates per-story event sequences into a weighted transition graph:
//! one node per distinct event string, counted by frequency, and one edge
//! per consecutive pair of events within a story, counted by weight.
//!
//! ## Core Components
//!
//! - **graph**: The `EventGraph` value (directed or undirected)
//! - **builder**: Build-once aggregation over a corpus of event stories
//! - **persistence**: Native binary snapshots and portable JSON exchange documents

pub mod builder;
pub mod error;
pub mod graph;
pub mod persistence;

pub use builder::*;
pub use error::*;
pub use graph::*;
pub use persistence::*;
