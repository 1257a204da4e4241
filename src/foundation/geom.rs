use crate::foundation::error::{AquaError, AquaResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// The accepted range of display scale factors.
///
/// Anything outside this range is a geometry error, rejected before any
/// raster is allocated or any backend call is made.
pub const MIN_SCALE: f64 = 0.01;
/// Upper bound of the accepted scale range.
pub const MAX_SCALE: f64 = 100.0;

/// A validated display scale factor relating points to device pixels.
///
/// Typical values are 1 and 2. Fractional scales are accepted because the
/// native renderers support them, but all placement math rounds to the
/// device-pixel grid of this one scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale(f64);

impl Scale {
    /// Validate and wrap a scale factor.
    pub fn new(factor: f64) -> AquaResult<Self> {
        if !factor.is_finite() || factor < MIN_SCALE || factor > MAX_SCALE {
            return Err(AquaError::geometry(format!(
                "invalid or unsupported scale factor {factor}"
            )));
        }
        Ok(Self(factor))
    }

    /// The raw scale factor.
    pub fn factor(self) -> f64 {
        self.0
    }

    /// True for 1x rendering, where dividers sit flush on the pixel grid
    /// and no sub-pixel placement exists.
    pub fn is_unit(self) -> bool {
        self.0 == 1.0
    }

    /// Round a point value to the device-pixel grid, staying in points.
    ///
    /// Idempotent after the first application: re-rounding an already
    /// grid-aligned value does not drift.
    pub fn round_to_pixel(self, v: f64) -> f64 {
        if self.is_unit() {
            return v.round();
        }
        (v * self.0).round() / self.0
    }

    /// Convert a point value to a device-pixel count, rounding up.
    pub fn pixel_ceil(self, v: f64) -> u32 {
        let px = (v * self.0).ceil();
        if px <= 0.0 { 0 } else { px as u32 }
    }

    /// Convert a point offset to a device-pixel offset, rounding to nearest.
    pub fn pixel_round(self, v: f64) -> i32 {
        (v * self.0).round() as i32
    }
}

/// Round a rectangle's edges independently to the device-pixel grid.
///
/// Edge rounding (rather than rounding the origin and the size) keeps two
/// rectangles that share an edge sharing it after alignment.
pub fn pixel_aligned_rect(scale: Scale, x: f64, y: f64, w: f64, h: f64) -> Rect {
    let x0 = scale.round_to_pixel(x);
    let y0 = scale.round_to_pixel(y);
    let x1 = scale.round_to_pixel(x + w);
    let y1 = scale.round_to_pixel(y + h);
    Rect::new(x0, y0, x1, y1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
