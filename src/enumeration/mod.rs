//! Enumeration of pickup-before-drop-off stop sequences.
//!
//! - [`Stop`] — A pickup or drop-off of one order, by index
//! - [`LegalSequences`] — Lazy iterator over every legal sequence
//! - [`walk_legal_sequences`] — Visitor-driven walk with subtree skipping
//! - [`enumerate_routes`] — Legal sequences resolved to points

mod sequences;
mod stop;

pub use sequences::{
    enumerate_routes, legal_sequence_count, walk_legal_sequences, LegalSequences,
    SequenceVisitor,
};
pub use stop::{slot_points, Stop, StopKind};
