//! The top-level segmented-control painting API.

use std::sync::Arc;

use tracing::debug;

use crate::backend::WidgetBackend;
use crate::cache::{RenderCache, RenderCacheKey};
use crate::config::{Appearance, SegmentedButtonConfiguration};
use crate::epoch::PlatformEpoch;
use crate::foundation::error::AquaResult;
use crate::foundation::geom::Scale;
use crate::raster::RasterImage;
use crate::raster::compositor::Compositor;
use crate::render::renderer::Renderer;
use crate::segmented::renderer::SegmentedButtonRenderer;

/// Options for a [`SegmentedControlPainter`].
#[derive(Debug, Clone, Copy)]
pub struct PainterOpts {
    pub(crate) caching: bool,
}

impl Default for PainterOpts {
    fn default() -> Self {
        let disabled = std::env::var("AQUARASTER_NO_CACHE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self { caching: !disabled }
    }
}

impl PainterOpts {
    /// Return options with caching enabled or disabled.
    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }
}

/// Renders segmented buttons through a native backend, with a shared cache
/// of finished images.
///
/// Rendering is synchronous and runs to completion on the calling thread;
/// compositors and renderers are created per request and discarded. The
/// cache is the only shared state.
pub struct SegmentedControlPainter {
    backend: Arc<dyn WidgetBackend>,
    epoch: PlatformEpoch,
    cache: RenderCache<SegmentedButtonConfiguration>,
    opts: PainterOpts,
}

impl SegmentedControlPainter {
    /// Create a painter for a backend and platform epoch.
    pub fn new(backend: Arc<dyn WidgetBackend>, epoch: PlatformEpoch) -> Self {
        Self::with_opts(backend, epoch, PainterOpts::default())
    }

    /// Create a painter with explicit options.
    pub fn with_opts(
        backend: Arc<dyn WidgetBackend>,
        epoch: PlatformEpoch,
        opts: PainterOpts,
    ) -> Self {
        if !opts.caching {
            debug!("render caching disabled");
        }
        Self {
            backend,
            epoch,
            cache: RenderCache::new(),
            opts,
        }
    }

    /// A renderer for one segmented button, for embedding into larger
    /// compositions.
    pub fn renderer_for(
        &self,
        config: SegmentedButtonConfiguration,
        appearance: Appearance,
    ) -> Renderer {
        Renderer::custom(SegmentedButtonRenderer::new(
            self.backend.clone(),
            self.epoch,
            config,
            appearance,
        ))
    }

    /// Render one segmented button at the given visual size and scale.
    ///
    /// The returned image's raster covers exactly the button's visual box.
    /// Results are cached by (configuration, appearance, scale, raster
    /// size) and reused while any caller keeps the image alive.
    #[tracing::instrument(skip(self, config))]
    pub fn render(
        &self,
        config: &SegmentedButtonConfiguration,
        appearance: Appearance,
        width: f64,
        height: f64,
        scale: Scale,
    ) -> AquaResult<Arc<RasterImage>> {
        let raster_width = scale.pixel_ceil(width);
        let raster_height = scale.pixel_ceil(height);

        let key = self.opts.caching.then(|| {
            RenderCacheKey::new(scale, raster_width, raster_height, config.clone(), appearance)
        });
        if let Some(key) = &key
            && let Some(image) = self.cache.get(key)
        {
            return Ok(image);
        }

        let mut compositor = Compositor::new(raster_width, raster_height, scale)?;
        let renderer = self.renderer_for(config.clone(), appearance);
        renderer.compose(&mut compositor)?;
        let image = Arc::new(compositor.into_image());

        if let Some(key) = key {
            self.cache.insert(key, &image);
        }
        Ok(image)
    }
}

#[cfg(test)]
#[path = "../tests/unit/painter.rs"]
mod tests;
