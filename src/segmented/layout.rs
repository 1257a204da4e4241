//! Per-epoch segmented-control geometry.
//!
//! Each platform epoch changed the native control metrics. Rather than a
//! dispatch chain of per-release subclasses, the numbers live in flat
//! lookups keyed by (epoch, style, size): which epoch contributed which
//! value is visible at the use site.

use crate::config::{ControlSize, SegmentedStyle};
use crate::epoch::PlatformEpoch;
use crate::foundation::error::{AquaError, AquaResult};
use crate::foundation::geom::Scale;
use crate::render::insets::RenderInsets;

/// The position of a divider relative to the boundary where two segments
/// meet.
///
/// In 1x rendering the divider always sits flush left of the boundary. In
/// 2x rendering it may sit on either side or straddle the boundary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum DividerPosition {
    /// Flush left of the boundary.
    Left,
    /// Flush right of the boundary.
    Right,
    /// Straddling the boundary.
    Center,
}

/// Layout of a four-slot native control rendering within its raster.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentedLayout4 {
    /// Where dividers sit relative to segment boundaries.
    pub divider_position: DividerPosition,
    /// The visual width of one divider, in points.
    pub divider_visual_width: f64,
    /// Width adjustment of the first slot.
    pub first_adjust: f64,
    /// Width adjustment of a middle slot.
    pub middle_adjust: f64,
    /// Width adjustment of the last slot.
    pub last_adjust: f64,
}

/// Layout of a one-segment native control rendering within its raster.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentedLayout1 {
    /// Width adjustment of the single segment.
    pub width_adjust: f64,
}

fn check_supported(
    epoch: PlatformEpoch,
    style: SegmentedStyle,
    size: ControlSize,
) -> AquaResult<()> {
    if size == ControlSize::Large && epoch != PlatformEpoch::MacOS11 {
        return Err(AquaError::configuration(format!(
            "large {style:?} segmented controls are not supported by the {epoch} tables"
        )));
    }
    Ok(())
}

/// The render insets for a segmented control: the relationship between the
/// control's visual bounds and the raster the native renderer needs.
pub fn segmented_render_insets(
    epoch: PlatformEpoch,
    style: SegmentedStyle,
    size: ControlSize,
    scale: Scale,
) -> AquaResult<RenderInsets> {
    use SegmentedStyle::*;

    check_supported(epoch, style, size)?;

    let (left, top, height_adjust) = match epoch {
        PlatformEpoch::MacOS10_10 => match style {
            Tab | Rounded | Separated => (
                size.pick(2.0, 2.0, 1.0),
                size.pick(0.0, 1.0, 0.51),
                1.0,
            ),
            Inset => (1.0, 0.0, size.pick(3.0, 2.0, 2.0)),
            SmallSquare => (0.0, size.pick(0.0, 1.0, 1.0), 2.0),
            Textured | TexturedToolbar | TexturedSeparated | TexturedSeparatedToolbar => {
                (0.0, size.pick(0.0, 0.0, 0.51), size.pick(1.0, 0.0, 1.0))
            }
            Toolbar => (0.0, size.pick(0.0, 0.0, 0.51), 1.0),
        },
        PlatformEpoch::MacOS10_11 => match style {
            Tab | Rounded | Separated => (
                size.pick(2.0, 2.0, 1.0),
                size.pick(0.0, 1.0, 0.51),
                1.0,
            ),
            Inset => (1.0, 0.0, size.pick(3.0, 2.0, 2.0)),
            SmallSquare => (0.0, size.pick(0.0, 1.0, 1.0), 2.0),
            Textured | TexturedSeparated => {
                (0.0, size.pick(0.49, 0.49, 0.0), size.pick(2.0, 1.0, 1.0))
            }
            TexturedToolbar | TexturedSeparatedToolbar => (0.0, 0.49, 1.0),
            Toolbar => (0.0, size.pick(0.0, 0.49, 1.0), 2.0),
        },
        PlatformEpoch::MacOS10_13 => match style {
            Tab | Rounded => (
                size.pick(2.0, 2.0, 1.0),
                size.pick(1.0, 1.0, 0.0),
                size.pick(1.0, 1.0, 0.0),
            ),
            Separated => (
                size.pick(2.0, 2.0, 1.0),
                size.pick(1.0, 1.49, 0.0),
                size.pick(1.0, 2.0, 0.0),
            ),
            Inset => (1.0, size.pick(3.0, 2.0, 1.0), size.pick(3.0, 2.0, 1.0)),
            SmallSquare => (0.0, size.pick(1.0, 1.0, 0.0), size.pick(1.0, 1.0, 0.0)),
            Textured | TexturedSeparated | Toolbar => (
                0.0,
                size.pick(0.49, 1.49, 0.49),
                size.pick(0.0, 1.0, 0.0),
            ),
            TexturedToolbar | TexturedSeparatedToolbar => (0.0, 0.49, 0.0),
        },
        PlatformEpoch::MacOS10_14 => match style {
            Tab | Rounded | Separated => (
                size.pick(2.0, 2.0, 1.0),
                size.pick(1.0, 1.0, 0.0),
                size.pick(1.0, 1.0, 0.0),
            ),
            Inset => (1.0, size.pick(3.0, 2.0, 1.0), size.pick(3.0, 2.0, 1.0)),
            SmallSquare => (0.0, size.pick(1.0, 1.0, 0.0), size.pick(1.0, 1.0, 0.0)),
            TexturedToolbar | TexturedSeparatedToolbar => (1.0, 1.0, 1.0),
            Textured | TexturedSeparated | Toolbar => {
                (0.0, size.pick(0.0, 1.0, 0.0), size.pick(0.0, 1.0, 0.0))
            }
        },
        PlatformEpoch::MacOS11 => match style {
            Tab | Rounded | Separated => (
                size.pick4(5.0, 2.0, 2.0, 1.0),
                size.pick4(5.0, 1.0, 1.0, 0.0),
                size.pick4(5.0, 1.0, 1.0, 0.0),
            ),
            Inset => (1.0, size.pick(3.0, 2.0, 1.0), size.pick(3.0, 2.0, 1.0)),
            SmallSquare => (0.0, size.pick(1.0, 1.0, 0.0), size.pick(1.0, 1.0, 0.0)),
            Textured | Toolbar | TexturedSeparated | TexturedSeparatedToolbar => (
                1.0,
                size.pick4(10.0, 1.0, 2.0, 1.0),
                size.pick4(11.0, 1.0, 2.0, 1.0),
            ),
            TexturedToolbar => (
                1.0,
                size.pick4(10.0, 1.0, 2.0, 1.0),
                size.pick4(11.0, 0.0, 0.0, 0.0),
            ),
        },
    };

    Ok(RenderInsets::new(left, top, left * 2.0, height_adjust)?.snapped(scale))
}

/// The four-slot layout table for an epoch, style, and size.
///
/// At 1x the divider position collapses to [`DividerPosition::Left`]
/// regardless of the 2x table value.
pub fn segment4_layout(
    epoch: PlatformEpoch,
    style: SegmentedStyle,
    size: ControlSize,
    scale: Scale,
) -> AquaResult<SegmentedLayout4> {
    use DividerPosition::*;
    use SegmentedStyle::*;

    check_supported(epoch, style, size)?;

    let layout = match epoch {
        PlatformEpoch::MacOS10_10 => {
            let (first, last, at_2x) = match style {
                Tab | Rounded | Separated => {
                    (size.pick(2.0, 2.0, 3.0), size.pick(1.0, 1.0, 2.0), Center)
                }
                Inset => (3.0, 2.0, Center),
                SmallSquare => (2.0, 1.0, Left),
                Textured | TexturedToolbar => (2.0, 1.0, Center),
                TexturedSeparated | TexturedSeparatedToolbar | Toolbar => {
                    (size.pick(4.0, 2.0, 2.0), size.pick(3.0, 1.0, 1.0), Center)
                }
            };
            SegmentedLayout4 {
                divider_position: if scale.is_unit() { Left } else { at_2x },
                divider_visual_width: 1.0,
                first_adjust: first,
                middle_adjust: 1.0,
                last_adjust: last,
            }
        }
        PlatformEpoch::MacOS10_11 => {
            let (first, last, at_2x) = match style {
                Tab | Rounded | Separated => {
                    (size.pick(2.0, 2.0, 3.0), size.pick(1.0, 1.0, 2.0), Center)
                }
                Inset => (3.0, 2.0, Center),
                SmallSquare => (2.0, 1.0, Left),
                Textured | TexturedToolbar => (2.0, 1.0, Right),
                TexturedSeparated | TexturedSeparatedToolbar => {
                    (size.pick(4.0, 2.0, 2.0), size.pick(3.0, 1.0, 1.0), Center)
                }
                Toolbar => (size.pick(4.0, 2.0, 2.0), size.pick(3.0, 1.0, 1.0), Right),
            };
            SegmentedLayout4 {
                divider_position: if scale.is_unit() { Left } else { at_2x },
                divider_visual_width: 1.0,
                first_adjust: first,
                middle_adjust: 1.0,
                last_adjust: last,
            }
        }
        PlatformEpoch::MacOS10_13 => {
            let at_2x = match style {
                Separated | TexturedSeparated | TexturedSeparatedToolbar => Center,
                _ => Left,
            };
            let (first, last) = match style {
                Tab | Rounded => (size.pick(2.0, 2.0, 3.0), size.pick(1.0, 1.0, 2.0)),
                Separated | Inset | SmallSquare => (2.0, 1.0),
                TexturedToolbar => (size.pick(4.0, 2.0, 2.0), size.pick(3.0, 1.0, 1.0)),
                Textured | Toolbar | TexturedSeparated | TexturedSeparatedToolbar => (4.0, 3.0),
            };
            SegmentedLayout4 {
                divider_position: if scale.is_unit() { Left } else { at_2x },
                divider_visual_width: if scale.is_unit() { 1.0 } else { 0.5 },
                first_adjust: first,
                middle_adjust: 1.0,
                last_adjust: last,
            }
        }
        PlatformEpoch::MacOS10_14 => {
            let (first, last) = match style {
                Tab | Rounded => (size.pick(2.0, 2.0, 3.0), size.pick(1.0, 1.0, 2.0)),
                Separated | Inset | SmallSquare => (2.0, 1.0),
                TexturedToolbar => (size.pick(3.0, 1.0, 1.0), size.pick(2.0, 0.0, 0.0)),
                TexturedSeparatedToolbar => (3.0, 2.0),
                Textured | Toolbar | TexturedSeparated => (4.0, 3.0),
            };
            SegmentedLayout4 {
                divider_position: Left,
                divider_visual_width: 1.0,
                first_adjust: first,
                middle_adjust: 1.0,
                last_adjust: last,
            }
        }
        PlatformEpoch::MacOS11 => {
            let (first, middle, last) = match style {
                Tab | Rounded | Toolbar => (
                    size.pick4(13.0, 3.0, 3.0, 5.0),
                    size.pick4(13.0, 3.0, 3.0, 5.0),
                    size.pick4(12.0, 2.0, 2.0, 4.0),
                ),
                Separated => (
                    size.pick4(12.0, 2.0, 2.0, 4.0),
                    size.pick4(11.0, 1.0, 1.0, 3.0),
                    size.pick4(11.0, 1.0, 1.0, 3.0),
                ),
                Inset | SmallSquare => (3.0, 3.0, 2.0),
                Textured | TexturedToolbar | TexturedSeparated | TexturedSeparatedToolbar => (
                    size.pick4(16.0, 5.0, 5.0, 5.0),
                    size.pick4(11.0, 5.0, 5.0, 5.0),
                    size.pick4(15.0, 4.0, 4.0, 4.0),
                ),
            };
            SegmentedLayout4 {
                divider_position: Left,
                divider_visual_width: 1.0,
                first_adjust: first,
                middle_adjust: middle,
                last_adjust: last,
            }
        }
    };

    Ok(layout)
}

/// The one-segment layout for an epoch, style, and size.
///
/// Derived from the four-slot table, except where an epoch supplies its own
/// numbers.
pub fn segment1_layout(
    epoch: PlatformEpoch,
    style: SegmentedStyle,
    size: ControlSize,
    scale: Scale,
) -> AquaResult<SegmentedLayout1> {
    use SegmentedStyle::*;

    check_supported(epoch, style, size)?;

    if epoch == PlatformEpoch::MacOS11 {
        let width_adjust = match style {
            Tab | Rounded | Separated => {
                let base = size.pick4(12.0, 2.0, 2.0, 4.0);
                if scale.is_unit() { base } else { base + 0.5 }
            }
            Inset | SmallSquare => 2.0,
            Textured | TexturedToolbar | Toolbar => 4.0,
            TexturedSeparated | TexturedSeparatedToolbar => 6.0,
        };
        return Ok(SegmentedLayout1 { width_adjust });
    }

    let four = segment4_layout(epoch, style, size, scale)?;
    Ok(SegmentedLayout1 {
        width_adjust: four.first_adjust + four.last_adjust - four.divider_visual_width,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/segmented/layout.rs"]
mod tests;
