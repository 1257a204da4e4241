use crate::foundation::error::{AquaError, AquaResult};
use crate::foundation::geom::Scale;

/// The relationship between a widget's visual bounds and the raster needed
/// to capture its rendering.
///
/// Native renderers can overflow a widget's nominal box with shadows, halos,
/// or required context; the width and height adjustments size the raster so
/// that drawing is never clipped, and the left/top offsets locate the visual
/// box inside the raster. All values are in points.
///
/// This shape was chosen over four-sided insets because the size adjustments
/// are scale independent while the origin offsets may be scale dependent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderInsets {
    /// X offset of the visual box inside the raster. Never negative.
    pub left: f64,
    /// Y offset of the visual box inside the raster. Never negative.
    pub top: f64,
    /// Added to the visual width to obtain the raster width. Any sign.
    pub width_adjust: f64,
    /// Added to the visual height to obtain the raster height. Any sign.
    pub height_adjust: f64,
}

impl RenderInsets {
    /// Create render insets, rejecting a raster that would start after the
    /// visual box.
    pub fn new(left: f64, top: f64, width_adjust: f64, height_adjust: f64) -> AquaResult<Self> {
        if left < 0.0 {
            return Err(AquaError::geometry(format!("invalid left inset {left}")));
        }
        if top < 0.0 {
            return Err(AquaError::geometry(format!("invalid top inset {top}")));
        }
        Ok(Self {
            left,
            top,
            width_adjust,
            height_adjust,
        })
    }

    /// Round the origin offsets to the device-pixel grid of `scale`.
    ///
    /// Rounding happens before the raster box is finalized so repeated
    /// conversions cannot accumulate drift at 2x.
    pub fn snapped(&self, scale: Scale) -> Self {
        if scale.is_unit() {
            return Self {
                left: self.left.round(),
                top: self.top.round(),
                ..*self
            };
        }
        Self {
            left: scale.round_to_pixel(self.left),
            top: scale.round_to_pixel(self.top),
            ..*self
        }
    }

    /// The exact raster size for a visual size: `ceil(scale * (visual +
    /// adjust))` per dimension.
    pub fn raster_size(&self, visual_width: f64, visual_height: f64, scale: Scale) -> (u32, u32) {
        (
            scale.pixel_ceil(visual_width + self.width_adjust),
            scale.pixel_ceil(visual_height + self.height_adjust),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/insets.rs"]
mod tests;
