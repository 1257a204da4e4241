//! Renderer composition and raster sizing.

/// Per-renderer raster sizing information.
pub mod description;
/// Visual-bounds-to-raster insets.
pub mod insets;
/// The composable renderer.
pub mod renderer;
