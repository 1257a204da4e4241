//! The native rendering backend contract.
//!
//! The backend is an externally supplied component that draws widget chrome
//! into a raw pixel buffer through a fixed, version-stable call contract.
//! This module models that contract as a trait so the composition layer can
//! be tested against recording fakes.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::config::{
    Appearance, ControlState, ControlSize, SegmentedStyle, SwitchTracking,
};
use crate::foundation::error::{AquaError, AquaResult};
use crate::foundation::geom::{Rect, Scale};

/// The destination raster handed to a backend call.
///
/// The buffer is row-major packed ARGB with premultiplied alpha. The
/// nominal visual size in points is derived from the raster size and the
/// scale factor.
#[derive(Debug)]
pub struct RasterTarget<'a> {
    /// The destination pixels.
    pub data: &'a mut [u32],
    /// Raster width in device pixels.
    pub width: u32,
    /// Raster height in device pixels.
    pub height: u32,
    /// The display scale factor.
    pub scale: Scale,
    /// Nominal width in points.
    pub visual_width: f64,
    /// Nominal height in points.
    pub visual_height: f64,
}

impl<'a> RasterTarget<'a> {
    /// Wrap and validate a destination raster.
    ///
    /// Degenerate sizes and undersized buffers are geometry errors,
    /// detected before any backend call is made.
    pub fn new(data: &'a mut [u32], width: u32, height: u32, scale: Scale) -> AquaResult<Self> {
        if width < 1 || height < 1 {
            return Err(AquaError::geometry(format!(
                "invalid raster size {width}x{height}"
            )));
        }
        if data.len() < (width as usize) * (height as usize) {
            return Err(AquaError::geometry(format!(
                "raster buffer of {} pixels is too small for {width}x{height}",
                data.len()
            )));
        }
        let visual_width = f64::from(width) / scale.factor();
        let visual_height = f64::from(height) / scale.factor();
        Ok(Self {
            data,
            width,
            height,
            scale,
            visual_width,
            visual_height,
        })
    }
}

/// One widget-specific parameter code of a backend call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    /// An integer code (widget kind, size class, state, ...).
    Int(i32),
    /// A float parameter (value, thickness, ...).
    Float(f64),
    /// A boolean flag.
    Bool(bool),
}

/// A named, style-specific backend call with its flat parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveCall {
    /// The backend entry point name.
    pub op: &'static str,
    /// The positional widget-specific codes.
    pub params: SmallVec<[ParamValue; 8]>,
}

impl PrimitiveCall {
    /// Build a call from an entry point name and parameter codes.
    pub fn new(op: &'static str, params: impl IntoIterator<Item = ParamValue>) -> Self {
        Self {
            op,
            params: params.into_iter().collect(),
        }
    }
}

/// Parameters for rendering a whole one-segment native control.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedControlRequest1 {
    /// The control style.
    pub style: SegmentedStyle,
    /// True when rendering for a toolbar context.
    pub in_toolbar: bool,
    /// The size class.
    pub size: ControlSize,
    /// The interaction state.
    pub state: ControlState,
    /// The appearance to render for.
    pub appearance: Appearance,
    /// The nominal width of the single segment, in points.
    pub segment_width: f64,
    /// True if the segment is selected.
    pub is_selected: bool,
}

/// Parameters for rendering a whole four-slot native control.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentedControlRequest4 {
    /// The control style.
    pub style: SegmentedStyle,
    /// True when rendering for a toolbar context.
    pub in_toolbar: bool,
    /// The size class.
    pub size: ControlSize,
    /// The interaction state.
    pub state: ControlState,
    /// The appearance to render for.
    pub appearance: Appearance,
    /// The selection-tracking mode.
    pub tracking: SwitchTracking,
    /// The nominal width of each slot, in points, left to right.
    pub slot_widths: [f64; 4],
    /// Which slots are selected, left to right.
    pub selected: [bool; 4],
}

impl SegmentedControlRequest4 {
    /// The native selection bitmask: slot 0 is the high bit of the low
    /// nibble, slot 3 the low bit.
    pub fn selection_flags(&self) -> u32 {
        let mut flags = 0;
        for (i, &sel) in self.selected.iter().enumerate() {
            if sel {
                flags |= 1 << (3 - i);
            }
        }
        flags
    }
}

/// Best-effort debug geometry reported by a backend: per-sub-shape bounding
/// boxes in points. A backend that cannot supply it simply leaves the list
/// empty; that is not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentGeometry {
    /// One bounding box per rendered segment, in points.
    pub segment_bounds: Vec<Rect>,
}

/// The externally supplied component that draws widget chrome.
///
/// Implementations are assumed non-reentrant; the composition layer issues
/// one call at a time per render and never retries. A non-zero native
/// status surfaces as [`AquaError::Backend`] and propagates unmodified.
pub trait WidgetBackend {
    /// Draw one widget into the raster.
    fn paint_primitive(&self, target: RasterTarget<'_>, call: &PrimitiveCall) -> AquaResult<()>;

    /// Draw a whole one-segment control into the raster.
    fn paint_segmented1(
        &self,
        target: RasterTarget<'_>,
        request: &SegmentedControlRequest1,
        debug: Option<&mut SegmentGeometry>,
    ) -> AquaResult<()>;

    /// Draw a whole four-slot control into the raster.
    fn paint_segmented4(
        &self,
        target: RasterTarget<'_>,
        request: &SegmentedControlRequest4,
        debug: Option<&mut SegmentGeometry>,
    ) -> AquaResult<()>;
}

/// A source of primitive output: either a backend-bound call or a test
/// fake. Sources are pure with respect to the destination raster size.
pub trait PrimitiveSource {
    /// Render into the destination raster.
    fn render_into(&self, target: RasterTarget<'_>) -> AquaResult<()>;
}

/// A [`PrimitiveSource`] wrapping exactly one backend call.
pub struct BackendPrimitive {
    backend: Arc<dyn WidgetBackend>,
    call: PrimitiveCall,
}

impl BackendPrimitive {
    /// Bind a call to a backend.
    pub fn new(backend: Arc<dyn WidgetBackend>, call: PrimitiveCall) -> Self {
        Self { backend, call }
    }
}

impl PrimitiveSource for BackendPrimitive {
    fn render_into(&self, target: RasterTarget<'_>) -> AquaResult<()> {
        self.backend.paint_primitive(target, &self.call)
    }
}

#[cfg(test)]
#[path = "../tests/unit/backend.rs"]
mod tests;
