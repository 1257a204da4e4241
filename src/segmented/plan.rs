//! The pure decomposition algorithm.
//!
//! Maps "render segment K of an N-segment control" to the parameters of one
//! whole-control backend call plus the sub-rectangle to extract from it.
//! Everything here is a pure function of its inputs, so the algorithm is
//! testable against a recording fake instead of the real backend.

use tracing::trace;

use crate::config::{DividerState, SegmentPosition};
use crate::foundation::error::{AquaError, AquaResult};
use crate::foundation::geom::{Rect, Scale, pixel_aligned_rect};
use crate::render::insets::RenderInsets;
use crate::segmented::layout::{DividerPosition, SegmentedLayout1, SegmentedLayout4};

/// The nominal width given to every slot that is not the designated one.
///
/// The value is arbitrary as long as it is wide enough for the native
/// control to lay the slot out normally; the placeholder slots exist only
/// so the primitive computes the same per-slot insets it would for a real
/// control of this style.
pub const PLACEHOLDER_SLOT_WIDTH: f64 = 20.0;

/// The inputs the decomposition needs about one segment request.
#[derive(Clone, Copy, Debug)]
pub struct SegmentRequest {
    /// The segment's position in the logical control. Must not be `Only`
    /// for the four-slot path.
    pub position: SegmentPosition,
    /// True if the segment itself is selected.
    pub is_selected: bool,
    /// True for visually separated styles.
    pub is_separated: bool,
    /// The requested state of the left divider.
    pub left_divider: DividerState,
    /// The requested state of the right divider.
    pub right_divider: DividerState,
}

/// The result of decomposing a four-slot render: everything needed for the
/// backend call and the extraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRenderPlan4 {
    /// The slot holding the real width and selection, 0 to 3.
    pub designated_slot: usize,
    /// The slot to render as selected, if any.
    pub selected_slot: Option<usize>,
    /// The nominal width of the designated slot, in points.
    pub designated_width: f64,
    /// The whole-control width in points, before raster insets.
    pub control_width: f64,
    /// Raster width in device pixels.
    pub raster_width: u32,
    /// Raster height in device pixels.
    pub raster_height: u32,
    /// The designated segment's bounds within the raster, in points, with
    /// each edge rounded to the device-pixel grid.
    pub extraction: Rect,
}

impl SegmentRenderPlan4 {
    /// The four slot widths for the backend call: the designated slot gets
    /// its computed width, every other slot the placeholder width.
    pub fn slot_widths(&self) -> [f64; 4] {
        let mut widths = [PLACEHOLDER_SLOT_WIDTH; 4];
        widths[self.designated_slot] = self.designated_width;
        widths
    }

    /// The per-slot selection mask for the backend call.
    ///
    /// When the designated segment is itself selected, a divider requested
    /// as `Selected` additionally marks the adjacent slot, reproducing the
    /// native appearance of a divider between two selected segments. When
    /// the segment is unselected, the selected slot already encodes the
    /// divider request and no other slot is marked.
    pub fn selection_mask(&self, request: &SegmentRequest) -> [bool; 4] {
        let mut mask = [false; 4];
        let Some(selected) = self.selected_slot else {
            return mask;
        };
        mask[selected] = true;
        if request.is_selected {
            if request.left_divider == DividerState::Selected && selected > 0 {
                mask[selected - 1] = true;
            }
            if request.right_divider == DividerState::Selected && selected < 3 {
                mask[selected + 1] = true;
            }
        }
        mask
    }
}

/// The result of decomposing a one-segment ("only") render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRenderPlan1 {
    /// The nominal width of the single segment, in points.
    pub segment_width: f64,
    /// True if the segment is selected.
    pub is_selected: bool,
    /// Raster width in device pixels.
    pub raster_width: u32,
    /// Raster height in device pixels.
    pub raster_height: u32,
    /// The segment's bounds within the raster, in points.
    pub extraction: Rect,
}

/// Decompose a one-segment render: a single native slot, no divider or
/// neighbor logic.
pub fn plan_segment1(
    is_selected: bool,
    insets: &RenderInsets,
    layout: &SegmentedLayout1,
    scale: Scale,
    button_width: f64,
    button_height: f64,
) -> AquaResult<SegmentRenderPlan1> {
    let segment_width = button_width - layout.width_adjust;
    let (raster_width, raster_height) = insets.raster_size(button_width, button_height, scale);
    if raster_width == 0 || raster_height == 0 {
        return Err(AquaError::geometry(format!(
            "degenerate raster for a {button_width}x{button_height} pt segment"
        )));
    }
    Ok(SegmentRenderPlan1 {
        segment_width,
        is_selected,
        raster_width,
        raster_height,
        extraction: pixel_aligned_rect(scale, insets.left, insets.top, button_width, button_height),
    })
}

/// Decompose a four-slot render, implementing the whole geometry problem:
/// slot mapping, neighbor-selection propagation, and the divider
/// hide/reveal budget.
pub fn plan_segment4(
    request: &SegmentRequest,
    insets: &RenderInsets,
    layout: &SegmentedLayout4,
    scale: Scale,
    segment_width: f64,
    control_height: f64,
) -> AquaResult<SegmentRenderPlan4> {
    let divider_position = layout.divider_position;
    let divider_width = layout.divider_visual_width;

    // Position-based slot mapping. One per-position table row serves
    // controls of any real length: only the designated slot's width and
    // selection matter, the other three get the placeholder width.
    let (mut designated, width_delta) = match request.position {
        SegmentPosition::First => (0usize, layout.first_adjust),
        SegmentPosition::Middle => (1, layout.middle_adjust),
        SegmentPosition::Last => (3, layout.last_adjust),
        SegmentPosition::Only => {
            return Err(AquaError::configuration(
                "a one-segment control cannot be rendered via the four-slot path",
            ));
        }
    };
    let mut rendered_width = segment_width - width_delta;

    // Divider appearance is a property of which neighboring segment is
    // selected, so an unselected segment with a "selected" divider request
    // marks the adjacent slot instead.
    let mut selected = None;
    if request.is_selected {
        selected = Some(designated);
    } else if request.left_divider == DividerState::Selected {
        if designated > 0 {
            selected = Some(designated - 1);
        }
    } else if request.right_divider == DividerState::Selected {
        if designated == 1 {
            // The right neighbor of slot 1 is the placeholder; re-home the
            // segment to slot 2 so the selected neighbor is the last slot.
            designated = 2;
            selected = Some(3);
        } else if designated == 0 {
            selected = Some(1);
        }
    }

    let mut x_offset = 0.0;
    let mut width_adjustment = 0.0;

    if designated > 0 {
        // The first slot is one placeholder width plus its adjustment.
        x_offset = designated as f64 * (PLACEHOLDER_SLOT_WIDTH + layout.middle_adjust)
            + (layout.first_adjust - layout.middle_adjust);
        width_adjustment += layout.first_adjust;
    }
    if designated < 3 {
        width_adjustment += layout.last_adjust;
    }
    if designated == 0 || designated == 3 {
        width_adjustment += 2.0 * layout.middle_adjust;
    } else {
        width_adjustment += layout.middle_adjust;
    }

    // Hide or reveal dividers by widening/shifting the extracted region.
    // Dividers occupy space whether drawn or not, so the region is first
    // widened so no divider shows, then narrowed per explicitly revealed
    // side. Separated styles at 2x with straddling dividers keep the whole
    // segment: the half divider on either side is visible border space.
    let separated_centered_2x =
        request.is_separated && !scale.is_unit() && divider_position == DividerPosition::Center;
    if !separated_centered_2x && divider_width > 0.0 {
        if designated > 0 && divider_position != DividerPosition::Left {
            trace!("shifting and widening to hide the left divider");
            x_offset += divider_width;
            rendered_width += divider_width;
            width_adjustment += divider_width;
        }
        if designated < 3 && divider_position != DividerPosition::Right {
            trace!("widening to hide the right divider");
            rendered_width += divider_width;
            width_adjustment += divider_width;
        }

        let draw_leading = designated > 0 && request.left_divider != DividerState::None;
        let draw_trailing = designated < 3 && request.right_divider != DividerState::None;
        if draw_leading {
            trace!("shifting to reveal the left divider");
            x_offset -= divider_width;
            let mut adjustment = divider_width.ceil();
            if divider_position == DividerPosition::Center {
                x_offset -= divider_width;
                adjustment += divider_width;
            }
            rendered_width -= adjustment;
            width_adjustment -= adjustment;
        }
        if draw_trailing {
            trace!("shrinking to reveal the right divider");
            rendered_width -= divider_width;
            width_adjustment -= divider_width;
            if divider_position == DividerPosition::Center {
                rendered_width -= divider_width;
                width_adjustment -= divider_width;
            }
        }
    }

    let control_width = 3.0 * PLACEHOLDER_SLOT_WIDTH + segment_width + width_adjustment;
    let raster_width = scale.pixel_ceil(control_width + insets.width_adjust);
    let raster_height = scale.pixel_ceil(control_height + insets.height_adjust);
    if raster_width == 0 || raster_height == 0 {
        return Err(AquaError::geometry(format!(
            "degenerate raster for a {segment_width}x{control_height} pt segment"
        )));
    }

    let extraction = pixel_aligned_rect(
        scale,
        insets.left + x_offset,
        insets.top,
        segment_width,
        control_height,
    );

    Ok(SegmentRenderPlan4 {
        designated_slot: designated,
        selected_slot: selected,
        designated_width: rendered_width,
        control_width,
        raster_width,
        raster_height,
        extraction,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/segmented/plan.rs"]
mod tests;
