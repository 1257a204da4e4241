use std::cell::RefCell;
use std::sync::Arc;

use super::*;
use crate::raster::pack_argb;

#[test]
fn raster_target_rejects_degenerate_sizes() {
    let scale = Scale::new(1.0).unwrap();
    let mut data = vec![0u32; 4];
    assert!(RasterTarget::new(&mut data, 0, 2, scale).is_err());
    assert!(RasterTarget::new(&mut data, 2, 0, scale).is_err());
    assert!(RasterTarget::new(&mut data, 2, 2, scale).is_ok());
}

#[test]
fn raster_target_rejects_undersized_buffers() {
    let scale = Scale::new(1.0).unwrap();
    let mut data = vec![0u32; 3];
    let err = RasterTarget::new(&mut data, 2, 2, scale).unwrap_err();
    assert!(matches!(err, AquaError::Geometry(_)));
}

#[test]
fn raster_target_derives_the_visual_size_from_the_scale() {
    let scale = Scale::new(2.0).unwrap();
    let mut data = vec![0u32; 24 * 16];
    let target = RasterTarget::new(&mut data, 24, 16, scale).unwrap();
    assert_eq!(target.visual_width, 12.0);
    assert_eq!(target.visual_height, 8.0);
}

#[test]
fn selection_flags_use_the_native_bit_order() {
    let mut request = SegmentedControlRequest4 {
        style: SegmentedStyle::Rounded,
        in_toolbar: false,
        size: ControlSize::Regular,
        state: ControlState::Active,
        appearance: Appearance::Aqua,
        tracking: SwitchTracking::SelectOne,
        slot_widths: [20.0; 4],
        selected: [false; 4],
    };
    assert_eq!(request.selection_flags(), 0);

    request.selected = [true, false, false, false];
    assert_eq!(request.selection_flags(), 0b1000);

    request.selected = [false, false, false, true];
    assert_eq!(request.selection_flags(), 0b0001);

    request.selected = [false, true, true, false];
    assert_eq!(request.selection_flags(), 0b0110);
}

struct CallRecorder {
    seen: RefCell<Vec<PrimitiveCall>>,
}

impl WidgetBackend for CallRecorder {
    fn paint_primitive(&self, target: RasterTarget<'_>, call: &PrimitiveCall) -> AquaResult<()> {
        self.seen.borrow_mut().push(call.clone());
        target.data.fill(pack_argb(255, 1, 1, 1));
        Ok(())
    }

    fn paint_segmented1(
        &self,
        _target: RasterTarget<'_>,
        _request: &SegmentedControlRequest1,
        _debug: Option<&mut SegmentGeometry>,
    ) -> AquaResult<()> {
        unreachable!()
    }

    fn paint_segmented4(
        &self,
        _target: RasterTarget<'_>,
        _request: &SegmentedControlRequest4,
        _debug: Option<&mut SegmentGeometry>,
    ) -> AquaResult<()> {
        unreachable!()
    }
}

#[test]
fn backend_primitive_forwards_its_call_unchanged() {
    let backend = Arc::new(CallRecorder {
        seen: RefCell::new(Vec::new()),
    });
    let call = PrimitiveCall::new(
        "paint_push_button",
        [
            ParamValue::Int(3),
            ParamValue::Float(0.5),
            ParamValue::Bool(true),
        ],
    );
    let primitive = BackendPrimitive::new(backend.clone(), call.clone());

    let scale = Scale::new(1.0).unwrap();
    let mut data = vec![0u32; 4];
    let target = RasterTarget::new(&mut data, 2, 2, scale).unwrap();
    primitive.render_into(target).unwrap();

    assert_eq!(backend.seen.borrow().as_slice(), &[call]);
    assert_eq!(data[0], pack_argb(255, 1, 1, 1));
}
