use super::*;
use crate::raster::premultiply;

#[test]
fn over_transparent_source_is_noop() {
    let dst = pack_argb(200, 10, 20, 30);
    assert_eq!(over(dst, 0), dst);
}

#[test]
fn over_opaque_source_replaces_destination() {
    let dst = pack_argb(200, 10, 20, 30);
    let src = pack_argb(255, 40, 50, 60);
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_onto_transparent_destination_keeps_source() {
    let src = premultiply(128, 100, 150, 200);
    assert_eq!(over(0, src), src);
}

#[test]
fn over_accumulates_alpha() {
    let dst = premultiply(128, 255, 0, 0);
    let src = premultiply(128, 0, 0, 255);
    let out = over(dst, src);
    assert!(alpha(out) > alpha(dst));
    assert!(alpha(out) <= 255);
}

#[test]
fn mask_tint_ignores_transparent_mask_pixels() {
    let op = MaskTintOperator::new(5, 73);
    let dst = pack_argb(255, 1, 2, 3);
    assert_eq!(op.combine(dst, 0), dst);
}

#[test]
fn mask_tint_boosts_and_clamps_alpha() {
    let op = MaskTintOperator::new(5, 73);
    // mask coverage 60 boosts to 255: the tint fully replaces
    let out = op.combine(0, pack_argb(60, 0, 0, 0));
    assert_eq!(alpha(out), 255);
    assert_eq!(red(out), 73);
    assert_eq!(green(out), 73);
    assert_eq!(blue(out), 73);
}

#[test]
fn mask_tint_scales_gray_with_boosted_coverage() {
    let op = MaskTintOperator::new(5, 73);
    let out = op.combine(0, pack_argb(20, 0, 0, 0));
    assert_eq!(alpha(out), 100);
    // premultiplied gray at 100/255 coverage
    assert_eq!(red(out), 73 * 100 / 255);
}

#[test]
fn mask_tint_appearance_grays_differ() {
    let light = MaskTintOperator::for_appearance(crate::config::Appearance::Aqua);
    let dark = MaskTintOperator::for_appearance(crate::config::Appearance::DarkAqua);
    let src = pack_argb(60, 0, 0, 0);
    assert_ne!(light.combine(0, src), dark.combine(0, src));
}

#[test]
fn opaque_thumb_blends_below_threshold() {
    let op = OpaqueThumbOperator::new(16);
    let dst = pack_argb(255, 100, 100, 100);
    let src = premultiply(10, 0, 0, 0);
    assert_eq!(op.combine(dst, src), over(dst, src));
}

#[test]
fn opaque_thumb_replaces_above_threshold() {
    let op = OpaqueThumbOperator::new(16);
    let dst = pack_argb(255, 100, 100, 100);
    let src = premultiply(200, 0, 0, 0);
    assert_eq!(op.combine(dst, src), src);
}

#[test]
fn opaque_thumb_keeps_destination_under_transparent_source() {
    let op = OpaqueThumbOperator::default();
    let dst = pack_argb(255, 100, 100, 100);
    assert_eq!(op.combine(dst, 0), dst);
}
