use std::cell::RefCell;
use std::sync::Arc;

use super::*;
use crate::config::{
    ControlSize, ControlState, DividerState, SegmentedStyle, SwitchTracking,
};
use crate::foundation::error::AquaError;
use crate::foundation::geom::Rect;
use crate::raster::pack_argb;

#[derive(Default)]
struct RecordingBackend {
    calls1: RefCell<Vec<(SegmentedControlRequest1, u32, u32)>>,
    calls4: RefCell<Vec<(SegmentedControlRequest4, u32, u32)>>,
    with_debug_bounds: bool,
}

impl RecordingBackend {
    fn with_debug() -> Self {
        Self {
            with_debug_bounds: true,
            ..Self::default()
        }
    }

    fn pattern(x: u32, y: u32) -> u32 {
        pack_argb(255, x % 256, y % 256, 7)
    }

    fn paint_pattern(target: &mut RasterTarget<'_>) {
        for y in 0..target.height {
            for x in 0..target.width {
                target.data[(y * target.width + x) as usize] = Self::pattern(x, y);
            }
        }
    }
}

impl WidgetBackend for RecordingBackend {
    fn paint_primitive(
        &self,
        _target: RasterTarget<'_>,
        _call: &crate::backend::PrimitiveCall,
    ) -> crate::AquaResult<()> {
        unreachable!("segmented rendering never uses the generic primitive entry point")
    }

    fn paint_segmented1(
        &self,
        mut target: RasterTarget<'_>,
        request: &SegmentedControlRequest1,
        debug: Option<&mut SegmentGeometry>,
    ) -> crate::AquaResult<()> {
        self.calls1
            .borrow_mut()
            .push((request.clone(), target.width, target.height));
        Self::paint_pattern(&mut target);
        if let Some(geometry) = debug
            && self.with_debug_bounds
        {
            geometry.segment_bounds =
                vec![Rect::new(0.0, 0.0, request.segment_width, target.visual_height)];
        }
        Ok(())
    }

    fn paint_segmented4(
        &self,
        mut target: RasterTarget<'_>,
        request: &SegmentedControlRequest4,
        debug: Option<&mut SegmentGeometry>,
    ) -> crate::AquaResult<()> {
        self.calls4
            .borrow_mut()
            .push((request.clone(), target.width, target.height));
        Self::paint_pattern(&mut target);
        if let Some(geometry) = debug
            && self.with_debug_bounds
        {
            let mut x = 0.0;
            geometry.segment_bounds = request
                .slot_widths
                .iter()
                .map(|w| {
                    let r = Rect::new(x, 0.0, x + w, target.visual_height);
                    x += w;
                    r
                })
                .collect();
        }
        Ok(())
    }
}

struct FailingBackend {
    calls: RefCell<u32>,
}

impl WidgetBackend for FailingBackend {
    fn paint_primitive(
        &self,
        _target: RasterTarget<'_>,
        _call: &crate::backend::PrimitiveCall,
    ) -> crate::AquaResult<()> {
        unreachable!()
    }

    fn paint_segmented1(
        &self,
        _target: RasterTarget<'_>,
        _request: &SegmentedControlRequest1,
        _debug: Option<&mut SegmentGeometry>,
    ) -> crate::AquaResult<()> {
        *self.calls.borrow_mut() += 1;
        Err(AquaError::backend("native renderer returned status 2"))
    }

    fn paint_segmented4(
        &self,
        _target: RasterTarget<'_>,
        _request: &SegmentedControlRequest4,
        _debug: Option<&mut SegmentGeometry>,
    ) -> crate::AquaResult<()> {
        *self.calls.borrow_mut() += 1;
        Err(AquaError::backend("native renderer returned status 2"))
    }
}

fn config(position: SegmentPosition) -> SegmentedButtonConfiguration {
    SegmentedButtonConfiguration {
        style: SegmentedStyle::Rounded,
        size: ControlSize::Regular,
        state: ControlState::Active,
        position,
        is_selected: false,
        left_divider: DividerState::None,
        right_divider: DividerState::None,
        tracking: SwitchTracking::SelectOne,
    }
}

fn renderer(
    backend: Arc<dyn WidgetBackend>,
    position: SegmentPosition,
) -> SegmentedButtonRenderer {
    SegmentedButtonRenderer::new(
        backend,
        PlatformEpoch::MacOS10_14,
        config(position),
        Appearance::Aqua,
    )
}

#[test]
fn only_position_makes_exactly_one_single_segment_call() {
    let backend = Arc::new(RecordingBackend::default());
    let r = renderer(backend.clone(), SegmentPosition::Only);
    let mut c = Compositor::new(40, 20, Scale::new(1.0).unwrap()).unwrap();
    r.compose_to(&mut c).unwrap();

    let calls1 = backend.calls1.borrow();
    assert_eq!(calls1.len(), 1);
    assert!(backend.calls4.borrow().is_empty());

    let (request, raster_width, raster_height) = &calls1[0];
    // macOS 10.14 rounded regular: widthAdjust 4, heightAdjust 1
    assert_eq!(*raster_width, 44);
    assert_eq!(*raster_height, 21);
    // one-segment adjustment: first + last - divider = 2
    assert_eq!(request.segment_width, 38.0);
    assert!(!request.is_selected);
}

#[test]
fn only_position_extracts_the_visual_box_at_the_inset_origin() {
    let backend = Arc::new(RecordingBackend::default());
    let r = renderer(backend.clone(), SegmentPosition::Only);
    let mut c = Compositor::new(40, 20, Scale::new(1.0).unwrap()).unwrap();
    r.compose_to(&mut c).unwrap();

    // insets place the visual box at (2, 1) within the raster
    assert_eq!(c.pixel(0, 0), RecordingBackend::pattern(2, 1));
    assert_eq!(c.pixel(39, 19), RecordingBackend::pattern(41, 20));
}

#[test]
fn first_position_drives_the_four_slot_primitive() {
    let backend = Arc::new(RecordingBackend::default());
    let r = renderer(backend.clone(), SegmentPosition::First);
    let mut c = Compositor::new(80, 40, Scale::new(2.0).unwrap()).unwrap();
    r.compose_to(&mut c).unwrap();

    let calls4 = backend.calls4.borrow();
    assert_eq!(calls4.len(), 1);
    assert!(backend.calls1.borrow().is_empty());

    let (request, raster_width, raster_height) = &calls4[0];
    // both dividers hidden by widening: declared 40 - first 2 + divider 1
    assert_eq!(request.slot_widths, [39.0, 20.0, 20.0, 20.0]);
    assert_eq!(request.selected, [false; 4]);
    assert_eq!(request.selection_flags(), 0);
    // control = 3*20 + 40 + (last 1 + 2*middle 2 + divider 1), plus insets
    assert_eq!(*raster_width, 216);
    assert_eq!(*raster_height, 42);
}

#[test]
fn middle_position_with_selected_left_divider_selects_slot_zero() {
    let backend = Arc::new(RecordingBackend::default());
    let mut g = config(SegmentPosition::Middle);
    g.left_divider = DividerState::Selected;
    let r = SegmentedButtonRenderer::new(
        backend.clone(),
        PlatformEpoch::MacOS10_14,
        g,
        Appearance::Aqua,
    );
    let mut c = Compositor::new(40, 20, Scale::new(1.0).unwrap()).unwrap();
    r.compose_to(&mut c).unwrap();

    let calls4 = backend.calls4.borrow();
    let (request, _, _) = &calls4[0];
    assert_eq!(request.selected, [true, false, false, false]);
}

#[test]
fn backend_failure_propagates_without_fallback() {
    let backend = Arc::new(FailingBackend {
        calls: RefCell::new(0),
    });
    let r = renderer(backend.clone(), SegmentPosition::Last);
    let mut c = Compositor::new(40, 20, Scale::new(1.0).unwrap()).unwrap();
    let err = r.compose_to(&mut c).unwrap_err();
    assert!(matches!(err, AquaError::Backend(_)));
    assert_eq!(*backend.calls.borrow(), 1);
    // nothing was composed
    assert_eq!(c.pixel(0, 0), 0);
}

#[test]
fn unsupported_configuration_is_rejected_before_any_backend_call() {
    let backend = Arc::new(RecordingBackend::default());
    let mut g = config(SegmentPosition::First);
    g.size = ControlSize::Large;
    let r = SegmentedButtonRenderer::new(
        backend.clone(),
        PlatformEpoch::MacOS10_10,
        g,
        Appearance::Aqua,
    );
    let mut c = Compositor::new(40, 20, Scale::new(1.0).unwrap()).unwrap();
    let err = r.compose_to(&mut c).unwrap_err();
    assert!(matches!(err, AquaError::Configuration(_)));
    assert!(backend.calls1.borrow().is_empty());
    assert!(backend.calls4.borrow().is_empty());
}

#[test]
fn debug_geometry_is_best_effort() {
    let with = Arc::new(RecordingBackend::with_debug());
    let r = renderer(with, SegmentPosition::First);
    let geometry = r
        .debug_geometry(Scale::new(1.0).unwrap(), 40.0, 20.0)
        .unwrap();
    assert_eq!(geometry.segment_bounds.len(), 4);

    let without = Arc::new(RecordingBackend::default());
    let r = renderer(without, SegmentPosition::First);
    let geometry = r
        .debug_geometry(Scale::new(1.0).unwrap(), 40.0, 20.0)
        .unwrap();
    assert!(geometry.segment_bounds.is_empty());
}
