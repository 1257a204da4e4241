//! Weak-retention cache of finished renderings.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, Mutex, Weak};

use tracing::trace;

use crate::config::Appearance;
use crate::foundation::geom::Scale;
use crate::raster::RasterImage;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The key under which a finished rendering is cached.
///
/// A rendering is a pure function of (configuration, appearance, scale,
/// raster size), so the key combines exactly those. The hash is computed
/// once at construction; equality is structural.
#[derive(Clone, Debug)]
pub struct RenderCacheKey<C> {
    scale_bits: u64,
    width: u32,
    height: u32,
    config: C,
    appearance: Appearance,
    hash: u64,
}

impl<C: Hash> RenderCacheKey<C> {
    /// Build a key, precomputing its hash.
    pub fn new(scale: Scale, width: u32, height: u32, config: C, appearance: Appearance) -> Self {
        let scale_bits = scale.factor().to_bits();
        let mut hash = scale_bits;
        hash = hash.wrapping_mul(31).wrapping_add(u64::from(width));
        hash = hash.wrapping_mul(31).wrapping_add(u64::from(height));
        hash = hash.wrapping_mul(31).wrapping_add(hash_of(&config));
        hash = hash.wrapping_mul(31).wrapping_add(hash_of(&appearance));
        Self {
            scale_bits,
            width,
            height,
            config,
            appearance,
            hash,
        }
    }
}

impl<C: PartialEq> PartialEq for RenderCacheKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.scale_bits == other.scale_bits
            && self.width == other.width
            && self.height == other.height
            && self.appearance == other.appearance
            && self.config == other.config
    }
}

impl<C: Eq> Eq for RenderCacheKey<C> {}

impl<C> Hash for RenderCacheKey<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A shared cache of renderings with weak image retention.
///
/// Entries hold [`Weak`] references, so a rendering is reclaimed as soon as
/// no caller keeps it alive; no explicit eviction is needed. The cache may
/// be read from multiple paint turns; racing writers for the same key are
/// harmless because a render is idempotent for its key, so the later write
/// simply overwrites an identical image.
pub struct RenderCache<C> {
    entries: Mutex<HashMap<RenderCacheKey<C>, Weak<RasterImage>>>,
}

impl<C: Hash + Eq> Default for RenderCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Hash + Eq> RenderCache<C> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a live rendering.
    pub fn get(&self, key: &RenderCacheKey<C>) -> Option<Arc<RasterImage>> {
        let entries = self.entries.lock().ok()?;
        let image = entries.get(key).and_then(Weak::upgrade);
        trace!(hit = image.is_some(), "render cache lookup");
        image
    }

    /// Store a rendering, pruning entries whose images have been dropped.
    pub fn insert(&self, key: RenderCacheKey<C>, image: &Arc<RasterImage>) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.retain(|_, weak| weak.strong_count() > 0);
        entries.insert(key, Arc::downgrade(image));
    }

    /// The number of entries currently stored, live or not.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../tests/unit/cache.rs"]
mod tests;
