use std::sync::Arc;

use super::*;
use crate::foundation::geom::Scale;

fn key(width: u32, config: u32) -> RenderCacheKey<u32> {
    RenderCacheKey::new(
        Scale::new(2.0).unwrap(),
        width,
        20,
        config,
        Appearance::Aqua,
    )
}

fn image() -> Arc<RasterImage> {
    Arc::new(RasterImage::new(
        2,
        2,
        Scale::new(2.0).unwrap(),
        vec![0; 4],
    ))
}

#[test]
fn equal_inputs_make_equal_keys() {
    assert_eq!(key(40, 7), key(40, 7));
    assert_ne!(key(40, 7), key(41, 7));
    assert_ne!(key(40, 7), key(40, 8));
}

#[test]
fn appearance_distinguishes_keys() {
    let scale = Scale::new(1.0).unwrap();
    let light = RenderCacheKey::new(scale, 10, 10, 1u32, Appearance::Aqua);
    let dark = RenderCacheKey::new(scale, 10, 10, 1u32, Appearance::DarkAqua);
    assert_ne!(light, dark);
}

#[test]
fn hash_is_stable_for_equal_keys() {
    use std::hash::{DefaultHasher, Hash, Hasher};
    let mut a = DefaultHasher::new();
    let mut b = DefaultHasher::new();
    key(40, 7).hash(&mut a);
    key(40, 7).hash(&mut b);
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn live_entries_are_returned() {
    let cache = RenderCache::new();
    let im = image();
    cache.insert(key(40, 1), &im);
    let hit = cache.get(&key(40, 1)).unwrap();
    assert!(Arc::ptr_eq(&hit, &im));
}

#[test]
fn entries_are_reclaimed_once_unreferenced() {
    let cache = RenderCache::new();
    let im = image();
    cache.insert(key(40, 1), &im);
    drop(im);
    assert!(cache.get(&key(40, 1)).is_none());
}

#[test]
fn dead_entries_are_pruned_on_insert() {
    let cache = RenderCache::new();
    let dead = image();
    cache.insert(key(40, 1), &dead);
    drop(dead);
    assert_eq!(cache.len(), 1);

    let live = image();
    cache.insert(key(40, 2), &live);
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&key(40, 2)).is_some());
}

#[test]
fn overwriting_a_key_is_harmless() {
    let cache = RenderCache::new();
    let first = image();
    let second = image();
    cache.insert(key(40, 1), &first);
    cache.insert(key(40, 1), &second);
    let hit = cache.get(&key(40, 1)).unwrap();
    assert!(Arc::ptr_eq(&hit, &second));
}
