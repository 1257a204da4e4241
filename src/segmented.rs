//! Segmented-control decomposition.
//!
//! The native segmented primitive renders a whole control of up to four
//! slots at once, while callers ask for one logical segment with its own
//! width, selection, and divider visibility. This module maps such a
//! request to one whole-control backend call plus sub-rectangle extraction.

/// Per-epoch geometry tables.
pub mod layout;
/// The pure decomposition algorithm.
pub mod plan;
/// The segmented button renderer.
pub mod renderer;
