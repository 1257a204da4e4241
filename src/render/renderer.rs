use std::sync::Arc;

use crate::backend::PrimitiveSource;
use crate::foundation::error::AquaResult;
use crate::foundation::geom::Rect;
use crate::raster::blend::PixelOperator;
use crate::raster::compositor::Compositor;
use crate::render::description::RendererDescription;

/// An additional pixel source, for renderers implemented outside this
/// module in terms of the standard compositor operations.
pub trait PixelSource {
    /// Compose this source's content into the compositor.
    fn compose_to(&self, compositor: &mut Compositor) -> AquaResult<()>;
}

/// A composable unit producing content into a destination raster.
///
/// Renderers are stateless after construction and are consumed by a single
/// [`Renderer::compose`] run against a request-scoped [`Compositor`].
pub enum Renderer {
    /// Paints nothing. Used when a state legitimately has no content.
    Null,
    /// Exactly one backend call, parameterized by the compositor's raster
    /// size and scale. Backend faults propagate; there are no retries.
    Primitive {
        /// The primitive output source.
        source: Box<dyn PrimitiveSource>,
        /// The raster sizing information for the source.
        description: RendererDescription,
    },
    /// Renders a child into a target rectangle of the destination, via a
    /// correctly scaled sub-buffer composed at the rectangle's rounded
    /// pixel origin.
    Offset {
        /// The child renderer.
        child: Box<Renderer>,
        /// The target rectangle, in points.
        target: Rect,
    },
    /// An ordered sequence of children painted back-to-front into the same
    /// destination.
    Sequence(Vec<Renderer>),
    /// One renderer per supported scale, resolved from the compositor's
    /// declared scale at compose time.
    MultiResolution {
        /// The renderer used at 1x.
        at_1x: Box<Renderer>,
        /// The renderer used at 2x (and any non-unit scale).
        at_2x: Box<Renderer>,
    },
    /// Renders the child into an intermediate buffer and merges it with a
    /// caller-supplied pixel operator instead of plain "over".
    Blended {
        /// The child renderer.
        child: Box<Renderer>,
        /// The per-pixel combinator.
        operator: Arc<dyn PixelOperator>,
    },
    /// An externally implemented source.
    Custom(Box<dyn PixelSource>),
}

impl Renderer {
    /// A primitive renderer with a sizing description.
    pub fn primitive(
        source: impl PrimitiveSource + 'static,
        description: RendererDescription,
    ) -> Self {
        Self::Primitive {
            source: Box::new(source),
            description,
        }
    }

    /// An offset renderer targeting a rectangle in points.
    pub fn offset(child: Renderer, target: Rect) -> Self {
        Self::Offset {
            child: Box::new(child),
            target,
        }
    }

    /// A composite of the given renderers, painted in order.
    ///
    /// Null children are dropped; an empty result collapses to
    /// [`Renderer::Null`] and a single survivor is returned unchanged.
    pub fn composite(children: Vec<Renderer>) -> Self {
        let mut kept: Vec<Renderer> = children
            .into_iter()
            .filter(|r| !matches!(r, Renderer::Null))
            .collect();
        match kept.len() {
            0 => Renderer::Null,
            1 => kept.remove(0),
            _ => Renderer::Sequence(kept),
        }
    }

    /// A renderer with distinct 1x and 2x variants.
    pub fn multi_resolution(at_1x: Renderer, at_2x: Renderer) -> Self {
        Self::MultiResolution {
            at_1x: Box::new(at_1x),
            at_2x: Box::new(at_2x),
        }
    }

    /// A renderer whose output is merged via a pixel operator.
    pub fn blended(child: Renderer, operator: Arc<dyn PixelOperator>) -> Self {
        Self::Blended {
            child: Box::new(child),
            operator,
        }
    }

    /// Wrap an external pixel source.
    pub fn custom(source: impl PixelSource + 'static) -> Self {
        Self::Custom(Box::new(source))
    }

    /// Compose this renderer's content into the compositor.
    pub fn compose(&self, compositor: &mut Compositor) -> AquaResult<()> {
        let scale = compositor.scale();
        match self {
            Renderer::Null => Ok(()),
            Renderer::Primitive {
                source,
                description,
            } => {
                if description.is_trivial() {
                    return compositor.compose_primitive(source.as_ref());
                }
                let target = Rect::new(
                    0.0,
                    0.0,
                    compositor.width_points(),
                    compositor.height_points(),
                );
                let bounds = description.raster_bounds(target, scale);
                compositor.compose_primitive_in_region(
                    source.as_ref(),
                    scale.pixel_round(bounds.x),
                    scale.pixel_round(bounds.y),
                    scale.pixel_ceil(bounds.width),
                    scale.pixel_ceil(bounds.height),
                )
            }
            Renderer::Offset { child, target } => match child.as_ref() {
                // A primitive child renders straight into the adjusted
                // region; anything else renders into a sub-buffer first.
                Renderer::Primitive {
                    source,
                    description,
                } => {
                    if description.is_trivial() {
                        return compositor.compose_primitive_in_region(
                            source.as_ref(),
                            scale.pixel_round(target.x0),
                            scale.pixel_round(target.y0),
                            scale.pixel_ceil(target.width()),
                            scale.pixel_ceil(target.height()),
                        );
                    }
                    let bounds = description.raster_bounds(*target, scale);
                    compositor.compose_primitive_in_region(
                        source.as_ref(),
                        scale.pixel_round(bounds.x),
                        scale.pixel_round(bounds.y),
                        scale.pixel_ceil(bounds.width),
                        scale.pixel_ceil(bounds.height),
                    )
                }
                other => {
                    let w = scale.pixel_ceil(target.width());
                    let h = scale.pixel_ceil(target.height());
                    if w == 0 || h == 0 {
                        return Ok(());
                    }
                    let mut sub = Compositor::new(w, h, scale)?;
                    other.compose(&mut sub)?;
                    compositor.compose_from(
                        &sub,
                        scale.pixel_round(target.x0),
                        scale.pixel_round(target.y0),
                    );
                    Ok(())
                }
            },
            Renderer::Sequence(children) => {
                for child in children {
                    child.compose(compositor)?;
                }
                Ok(())
            }
            Renderer::MultiResolution { at_1x, at_2x } => {
                let chosen = if scale.is_unit() { at_1x } else { at_2x };
                chosen.compose(compositor)
            }
            Renderer::Blended { child, operator } => {
                let mut intermediate = compositor.create_similar();
                child.compose(&mut intermediate)?;
                compositor.blend_from(&intermediate, operator.as_ref())
            }
            Renderer::Custom(source) => source.compose_to(compositor),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
