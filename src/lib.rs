//! Aquaraster is the rendering-composition layer of a native widget
//! appearance library for macOS.
//!
//! An external rendering backend, reached through a fixed, version-stable
//! call contract, draws one widget into a raw pixel buffer. This crate is
//! responsible for everything around that call:
//!
//! 1. **Sizing**: the backend's drawing can overflow a widget's nominal
//!    visual box with shadows, halos, or required context. [`RenderInsets`]
//!    and [`RendererDescription`] size the raster so nothing is clipped.
//! 2. **Composition**: one visible widget is often several layered native
//!    renderings (a track plus a thumb, a button plus overlaid arrows).
//!    [`Renderer`] and [`Compositor`] assemble them, including custom
//!    blending via [`PixelOperator`]s.
//! 3. **Segmented-control decomposition**: the native segmented primitive
//!    only renders a whole multi-slot control, while callers want one
//!    logical segment. The [`segmented`] module maps such a request to one
//!    whole-control call plus sub-rectangle extraction.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Synchronous**: a render runs to completion on the calling thread and
//!   yields one buffer or fails; there is no internal concurrency.
//! - **Fail fast**: configuration and geometry problems are rejected before
//!   any backend call; backend faults propagate unmodified, with no retries
//!   and no fallbacks.
//! - **Explicit appearance**: light/dark is a parameter of every request,
//!   never ambient state.
//! - **Premultiplied ARGB end-to-end**: one packed 32-bit pixel per
//!   element, row-major, alpha in the top byte.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// The native backend call contract.
pub mod backend;
/// Weak-retention render caching.
pub mod cache;
/// Widget-configuration value types.
pub mod config;
/// Platform epoch ids.
pub mod epoch;
/// The top-level painting API.
pub mod painter;
/// Pixel buffers, blending, and the compositor.
pub mod raster;
/// Renderer composition and raster sizing.
pub mod render;
/// Segmented-control decomposition.
pub mod segmented;

pub use backend::{
    BackendPrimitive, ParamValue, PrimitiveCall, PrimitiveSource, RasterTarget, SegmentGeometry,
    SegmentedControlRequest1, SegmentedControlRequest4, WidgetBackend,
};
pub use cache::{RenderCache, RenderCacheKey};
pub use config::{
    Appearance, ControlSize, ControlState, DividerState, SegmentPosition,
    SegmentedButtonConfiguration, SegmentedStyle, SwitchTracking,
};
pub use epoch::PlatformEpoch;
pub use foundation::error::{AquaError, AquaResult};
pub use foundation::geom::{MAX_SCALE, MIN_SCALE, Point, Rect, Scale, Size, Vec2, pixel_aligned_rect};
pub use painter::{PainterOpts, SegmentedControlPainter};
pub use raster::blend::{MaskTintOperator, OpaqueThumbOperator, PixelOperator, over};
pub use raster::compositor::Compositor;
pub use raster::{RasterImage, alpha, blue, green, pack_argb, premultiply, red};
pub use render::description::{RasterAdjustment, RasterBounds, RendererDescription};
pub use render::insets::RenderInsets;
pub use render::renderer::{PixelSource, Renderer};
pub use segmented::layout::{
    DividerPosition, SegmentedLayout1, SegmentedLayout4, segment1_layout, segment4_layout,
    segmented_render_insets,
};
pub use segmented::plan::{
    PLACEHOLDER_SLOT_WIDTH, SegmentRenderPlan1, SegmentRenderPlan4, SegmentRequest, plan_segment1,
    plan_segment4,
};
pub use segmented::renderer::SegmentedButtonRenderer;
