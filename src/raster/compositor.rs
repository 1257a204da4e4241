use crate::backend::{PrimitiveSource, RasterTarget};
use crate::foundation::error::{AquaError, AquaResult};
use crate::foundation::geom::Scale;
use crate::raster::blend::{PixelOperator, over};
use crate::raster::{RasterImage, alpha};

/// A compositor renders into a premultiplied ARGB raster from various
/// sources. Multiple renderings can be composed into the same raster.
///
/// The compositor has a scale factor relating raster pixels to points. The
/// scale is available to sources so they can produce renderings at the
/// appropriate resolution. Scale, width, and height are fixed at creation;
/// every placement argument expressed in points is converted to device
/// pixels with that one scale for the buffer's whole lifetime.
///
/// Compositors are cheap, request-scoped, single-use values; create one per
/// render and discard it (or turn it into a [`RasterImage`]).
pub struct Compositor {
    data: Vec<u32>,
    width: u32,
    height: u32,
    scale: Scale,
    is_empty: bool,
}

impl Compositor {
    /// Create a compositor with an explicit raster size, in device pixels.
    pub fn new(width: u32, height: u32, scale: Scale) -> AquaResult<Self> {
        if width == 0 || height == 0 {
            return Err(AquaError::geometry(format!(
                "invalid raster size {width}x{height}"
            )));
        }
        Ok(Self {
            data: vec![0; (width as usize) * (height as usize)],
            width,
            height,
            scale,
            is_empty: true,
        })
    }

    /// Create a compositor sized by the raster-sizing contract: each raster
    /// dimension is `ceil(scale * (visual + adjust))`.
    pub fn for_visual_bounds(
        visual_width: f64,
        visual_height: f64,
        insets: &crate::render::insets::RenderInsets,
        scale: Scale,
    ) -> AquaResult<Self> {
        let (w, h) = insets.raster_size(visual_width, visual_height, scale);
        Self::new(w, h, scale)
    }

    /// The raster width, in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The raster height, in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The scale factor.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The raster width in points, according to the scale factor.
    pub fn width_points(&self) -> f64 {
        f64::from(self.width) / self.scale.factor()
    }

    /// The raster height in points, according to the scale factor.
    pub fn height_points(&self) -> f64 {
        f64::from(self.height) / self.scale.factor()
    }

    /// Read one pixel. Out-of-bounds coordinates read as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Compose primitive output over the whole raster.
    ///
    /// A still-empty raster is rendered into directly; otherwise the source
    /// renders into a temporary raster which is composed over this one.
    pub fn compose_primitive(&mut self, source: &dyn PrimitiveSource) -> AquaResult<()> {
        if self.is_empty {
            let target = RasterTarget::new(&mut self.data, self.width, self.height, self.scale)?;
            source.render_into(target)?;
            self.is_empty = false;
            return Ok(());
        }
        let (w, h) = (self.width, self.height);
        self.compose_primitive_in_region(source, 0, 0, w, h)
    }

    /// Render a primitive into a region of the raster, composing with the
    /// existing contents.
    pub fn compose_primitive_in_region(
        &mut self,
        source: &dyn PrimitiveSource,
        dx: i32,
        dy: i32,
        dw: u32,
        dh: u32,
    ) -> AquaResult<()> {
        if dw == 0 || dh == 0 {
            return Ok(());
        }
        let mut temp = Compositor::new(dw, dh, self.scale)?;
        temp.compose_primitive(source)?;
        self.compose_from(&temp, dx, dy);
        Ok(())
    }

    /// Compose a whole child buffer over this raster at a pixel offset.
    pub fn compose_from(&mut self, source: &Compositor, dx: i32, dy: i32) {
        self.compose_raster_region(
            &source.data,
            source.width,
            source.height,
            0,
            0,
            dx,
            dy,
            source.width,
            source.height,
        );
    }

    /// Compose a region of a raw raster over a region of this raster.
    ///
    /// Rows and columns falling outside either raster are clipped. Opaque
    /// source pixels replace the destination; translucent ones are
    /// composited "over".
    #[allow(clippy::too_many_arguments)]
    pub fn compose_raster_region(
        &mut self,
        source: &[u32],
        source_width: u32,
        source_height: u32,
        sx: i32,
        sy: i32,
        dx: i32,
        dy: i32,
        dw: u32,
        dh: u32,
    ) {
        let sw = source_width as i64;
        let sh = source_height as i64;
        for row_offset in 0..dh as i64 {
            let source_row = i64::from(sy) + row_offset;
            let row = i64::from(dy) + row_offset;
            if row < 0 || row >= i64::from(self.height) || source_row < 0 || source_row >= sh {
                continue;
            }
            for col_offset in 0..dw as i64 {
                let source_col = i64::from(sx) + col_offset;
                let col = i64::from(dx) + col_offset;
                if col < 0 || col >= i64::from(self.width) || source_col < 0 || source_col >= sw {
                    continue;
                }
                let pixel = source[(source_row * sw + source_col) as usize];
                if alpha(pixel) == 0 {
                    continue;
                }
                let index = (row * i64::from(self.width) + col) as usize;
                self.data[index] = if alpha(pixel) == 0xFF {
                    pixel
                } else {
                    over(self.data[index], pixel)
                };
                self.is_empty = false;
            }
        }
    }

    /// Blend a secondary buffer in via a caller-supplied pixel operator.
    ///
    /// The source must have the same raster size; it is typically produced
    /// with [`Compositor::create_similar`].
    pub fn blend_from(
        &mut self,
        source: &Compositor,
        operator: &dyn PixelOperator,
    ) -> AquaResult<()> {
        if source.width != self.width || source.height != self.height {
            return Err(AquaError::geometry(format!(
                "blend source {}x{} does not match destination {}x{}",
                source.width, source.height, self.width, self.height
            )));
        }
        for (dst, src) in self.data.iter_mut().zip(source.data.iter()) {
            *dst = operator.combine(*dst, *src);
        }
        self.is_empty = false;
        Ok(())
    }

    /// An empty buffer with the same width, height, and scale, for
    /// intermediate renderings that must be blended rather than drawn
    /// directly.
    pub fn create_similar(&self) -> Compositor {
        Compositor {
            data: vec![0; self.data.len()],
            width: self.width,
            height: self.height,
            scale: self.scale,
            is_empty: true,
        }
    }

    /// Erase a pixel region back to transparent.
    pub fn erase(&mut self, dx: i32, dy: i32, dw: u32, dh: u32) {
        for row_offset in 0..dh as i64 {
            let row = i64::from(dy) + row_offset;
            if row < 0 || row >= i64::from(self.height) {
                continue;
            }
            for col_offset in 0..dw as i64 {
                let col = i64::from(dx) + col_offset;
                if col < 0 || col >= i64::from(self.width) {
                    continue;
                }
                self.data[(row * i64::from(self.width) + col) as usize] = 0;
            }
        }
    }

    /// Consume the compositor, producing the finished image.
    pub fn into_image(self) -> RasterImage {
        RasterImage::new(self.width, self.height, self.scale, self.data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/compositor.rs"]
mod tests;
