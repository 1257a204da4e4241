use std::sync::Arc;

use tracing::trace;

use crate::backend::{
    RasterTarget, SegmentGeometry, SegmentedControlRequest1, SegmentedControlRequest4,
    WidgetBackend,
};
use crate::config::{Appearance, SegmentPosition, SegmentedButtonConfiguration};
use crate::epoch::PlatformEpoch;
use crate::foundation::error::AquaResult;
use crate::foundation::geom::{Rect, Scale};
use crate::raster::compositor::Compositor;
use crate::render::renderer::PixelSource;
use crate::segmented::layout::{segment1_layout, segment4_layout, segmented_render_insets};
use crate::segmented::plan::{SegmentRequest, plan_segment1, plan_segment4};

/// Renders one segmented button by driving the whole-control native
/// primitive and extracting the designated segment's image.
///
/// The destination compositor's point size is the button's visual size; the
/// whole-control raster is allocated internally and discarded after the
/// extraction. All configuration and geometry validation happens before the
/// single backend call; a failed decomposition never falls back to a
/// full-control render.
pub struct SegmentedButtonRenderer {
    backend: Arc<dyn WidgetBackend>,
    epoch: PlatformEpoch,
    config: SegmentedButtonConfiguration,
    appearance: Appearance,
}

impl SegmentedButtonRenderer {
    /// Create a renderer for one segmented button configuration.
    pub fn new(
        backend: Arc<dyn WidgetBackend>,
        epoch: PlatformEpoch,
        config: SegmentedButtonConfiguration,
        appearance: Appearance,
    ) -> Self {
        Self {
            backend,
            epoch,
            config,
            appearance,
        }
    }

    fn request(&self) -> SegmentRequest {
        SegmentRequest {
            position: self.config.position,
            is_selected: self.config.is_selected,
            is_separated: self.config.style.is_separated(),
            left_divider: self.config.left_divider,
            right_divider: self.config.right_divider,
        }
    }

    fn render_whole_control(
        &self,
        scale: Scale,
        button_width: f64,
        button_height: f64,
        mut debug: Option<&mut SegmentGeometry>,
    ) -> AquaResult<(Vec<u32>, u32, u32, Rect)> {
        let g = &self.config;
        let insets = segmented_render_insets(self.epoch, g.style, g.size, scale)?;

        if g.position == SegmentPosition::Only {
            let layout = segment1_layout(self.epoch, g.style, g.size, scale)?;
            let plan = plan_segment1(
                g.is_selected,
                &insets,
                &layout,
                scale,
                button_width,
                button_height,
            )?;
            trace!(?plan, "one-segment render");
            let mut raster = vec![0u32; (plan.raster_width as usize) * (plan.raster_height as usize)];
            let target =
                RasterTarget::new(&mut raster, plan.raster_width, plan.raster_height, scale)?;
            let request = SegmentedControlRequest1 {
                style: g.style,
                in_toolbar: g.style.in_toolbar(),
                size: g.size,
                state: g.state,
                appearance: self.appearance,
                segment_width: plan.segment_width,
                is_selected: plan.is_selected,
            };
            self.backend
                .paint_segmented1(target, &request, debug.take())?;
            Ok((raster, plan.raster_width, plan.raster_height, plan.extraction))
        } else {
            let layout = segment4_layout(self.epoch, g.style, g.size, scale)?;
            let request = self.request();
            let plan = plan_segment4(
                &request,
                &insets,
                &layout,
                scale,
                button_width,
                button_height,
            )?;
            trace!(?plan, "four-slot render");
            let mut raster = vec![0u32; (plan.raster_width as usize) * (plan.raster_height as usize)];
            let target =
                RasterTarget::new(&mut raster, plan.raster_width, plan.raster_height, scale)?;
            let control = SegmentedControlRequest4 {
                style: g.style,
                in_toolbar: g.style.in_toolbar(),
                size: g.size,
                state: g.state,
                appearance: self.appearance,
                tracking: g.tracking,
                slot_widths: plan.slot_widths(),
                selected: plan.selection_mask(&request),
            };
            self.backend
                .paint_segmented4(target, &control, debug.take())?;
            Ok((raster, plan.raster_width, plan.raster_height, plan.extraction))
        }
    }

    /// Render the whole control once, requesting the backend's per-segment
    /// bounding boxes. Best-effort: a backend without debug support yields
    /// empty geometry, not an error.
    pub fn debug_geometry(
        &self,
        scale: Scale,
        button_width: f64,
        button_height: f64,
    ) -> AquaResult<SegmentGeometry> {
        let mut geometry = SegmentGeometry::default();
        self.render_whole_control(scale, button_width, button_height, Some(&mut geometry))?;
        Ok(geometry)
    }
}

impl PixelSource for SegmentedButtonRenderer {
    fn compose_to(&self, compositor: &mut Compositor) -> AquaResult<()> {
        let scale = compositor.scale();
        let button_width = compositor.width_points().round();
        let button_height = compositor.height_points().round();

        let (raster, raster_width, raster_height, extraction) =
            self.render_whole_control(scale, button_width, button_height, None)?;

        let sx = scale.pixel_round(extraction.x0);
        let sy = scale.pixel_round(extraction.y0);
        let dw = scale.pixel_round(extraction.width()).max(0) as u32;
        let dh = scale.pixel_round(extraction.height()).max(0) as u32;
        compositor.compose_raster_region(
            &raster,
            raster_width,
            raster_height,
            sx,
            sy,
            0,
            0,
            dw,
            dh,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segmented/renderer.rs"]
mod tests;
