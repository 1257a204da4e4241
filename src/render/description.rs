use crate::foundation::geom::{Rect, Scale};

/// The raster region a primitive renderer needs in order to render into a
/// target region: size plus the translation aligning the rendering with the
/// target. All values in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterBounds {
    /// X origin, in points.
    pub x: f64,
    /// Y origin, in points.
    pub y: f64,
    /// Raster width, in points.
    pub width: f64,
    /// Raster height, in points.
    pub height: f64,
}

/// Fixed offsets and size adjustments mapping a target region to the raster
/// a primitive renderer must be given.
///
/// Some native renderers use only a portion of the provided raster, or use
/// the raster size itself to shape the rendering; without the adjustment
/// the drawing would be clipped or distorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RasterAdjustment {
    /// X offset of the raster origin from the target origin. Negative
    /// shifts the raster left before painting.
    pub x_offset: f64,
    /// Y offset of the raster origin from the target origin.
    pub y_offset: f64,
    /// Added to the target width to obtain the raster width.
    pub width_adjust: f64,
    /// Added to the target height to obtain the raster height.
    pub height_adjust: f64,
}

impl RasterAdjustment {
    /// No offset, no size adjustment.
    pub const NONE: Self = Self {
        x_offset: 0.0,
        y_offset: 0.0,
        width_adjust: 0.0,
        height_adjust: 0.0,
    };

    /// Create an adjustment.
    pub fn new(x_offset: f64, y_offset: f64, width_adjust: f64, height_adjust: f64) -> Self {
        Self {
            x_offset,
            y_offset,
            width_adjust,
            height_adjust,
        }
    }

    /// True if the adjustment does nothing.
    pub fn is_trivial(&self) -> bool {
        *self == Self::NONE
    }

    /// A copy with deltas added to each field.
    pub fn with_adjustments(&self, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x_offset: self.x_offset + x,
            y_offset: self.y_offset + y,
            width_adjust: self.width_adjust + w,
            height_adjust: self.height_adjust + h,
        }
    }

    /// The raster bounds for a target region, each edge value rounded to
    /// the device-pixel grid of `scale`.
    pub fn raster_bounds(&self, target: Rect, scale: Scale) -> RasterBounds {
        RasterBounds {
            x: scale.round_to_pixel(target.x0 + self.x_offset),
            y: scale.round_to_pixel(target.y0 + self.y_offset),
            width: scale.round_to_pixel(target.width() + self.width_adjust),
            height: scale.round_to_pixel(target.height() + self.height_adjust),
        }
    }
}

/// Per-renderer raster sizing information, possibly varying by scale.
///
/// Native renderers produce different renderings per display scale, and the
/// differences are sometimes more than a linear scale-up; a multi-resolution
/// description therefore carries one adjustment per supported scale instead
/// of interpolating.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum RendererDescription {
    /// No adjustment at any scale.
    Trivial,
    /// One scale-independent adjustment.
    Fixed(RasterAdjustment),
    /// Distinct adjustments for 1x and 2x rendering.
    MultiResolution {
        /// The adjustment used at 1x.
        at_1x: RasterAdjustment,
        /// The adjustment used at 2x (and any non-unit scale).
        at_2x: RasterAdjustment,
    },
}

impl RendererDescription {
    /// True if the description never adjusts the raster.
    pub fn is_trivial(&self) -> bool {
        match self {
            Self::Trivial => true,
            Self::Fixed(a) => a.is_trivial(),
            Self::MultiResolution { at_1x, at_2x } => at_1x.is_trivial() && at_2x.is_trivial(),
        }
    }

    /// The adjustment for a concrete scale, resolved once per render.
    pub fn resolve(&self, scale: Scale) -> RasterAdjustment {
        match self {
            Self::Trivial => RasterAdjustment::NONE,
            Self::Fixed(a) => *a,
            Self::MultiResolution { at_1x, at_2x } => {
                if scale.is_unit() {
                    *at_1x
                } else {
                    *at_2x
                }
            }
        }
    }

    /// The raster bounds for rendering into `target` at `scale`.
    pub fn raster_bounds(&self, target: Rect, scale: Scale) -> RasterBounds {
        self.resolve(scale).raster_bounds(target, scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/description.rs"]
mod tests;
