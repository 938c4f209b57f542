use std::sync::Arc;

use vello_cpu::kurbo::Shape as _;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, Point, Rect, Rgba, Viewport};
use crate::foundation::error::{StardriftError, StardriftResult};
use crate::render::composite::fill_in_place;
use crate::render::frame::FrameRGBA;

/// One component's drawable area: a `vello_cpu` pixmap sized to the viewport.
///
/// This is the analogue of a full-viewport `<canvas>`; it is recreated whenever the viewport
/// changes size.
pub struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    /// Allocate a surface for `viewport`.
    ///
    /// Returns `None` when the viewport is empty or exceeds the rasterizer's `u16` limits. Callers
    /// treat a missing surface as "skip this frame".
    pub fn new(viewport: Viewport) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        let width: u16 = viewport.width.try_into().ok()?;
        let height: u16 = viewport.height.try_into().ok()?;
        Some(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Viewport this surface was allocated for.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(u32::from(self.width), u32::from(self.height))
    }

    /// Clear to transparent, run `draw` against a fresh render context, and rasterize the result.
    pub fn render<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        fill_in_place(self.pixmap.data_as_u8_slice_mut(), [0, 0, 0, 0]);

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        {
            let mut painter = Painter::new(&mut ctx);
            draw(&mut painter);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
    }

    /// Like [`Surface::render`], for surfaces that stand in for an opaque canvas.
    ///
    /// Gradient blending can leave alpha a step short of 255 over an opaque fill; every pixel is
    /// forced back to full alpha.
    pub fn render_opaque<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Painter<'_>),
    {
        self.render(draw);
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px[3] = 255;
        }
    }

    /// Premultiplied RGBA8 bytes of the last rendered frame.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Copy the surface into an owned frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.data().to_vec(),
            premultiplied: true,
        }
    }
}

/// Image paint ready to be drawn by a [`Painter`].
#[derive(Clone)]
pub struct ImagePaint {
    paint: vello_cpu::Image,
    width: u32,
    height: u32,
}

impl ImagePaint {
    /// Wrap a decoded premultiplied image.
    pub fn from_prepared(img: &PreparedImage) -> StardriftResult<Self> {
        let pixmap =
            image_premul_bytes_to_pixmap(img.rgba8_premul.as_slice(), img.width, img.height)?;
        Ok(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width: img.width,
            height: img.height,
        })
    }
}

/// Immediate-mode drawing facade over a `vello_cpu` render context.
///
/// Mirrors the handful of canvas-2D calls the animations need: rects, discs, polygons, radial
/// gradients, images, a current transform and opacity layers.
pub struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
}

impl<'a> Painter<'a> {
    fn new(ctx: &'a mut vello_cpu::RenderContext) -> Self {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Self { ctx }
    }

    /// Replace the current transform.
    pub fn set_transform(&mut self, transform: Affine) {
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    /// Reset the current transform to identity.
    pub fn reset_transform(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Fill an axis-aligned rectangle (in current-transform space).
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if color.alpha_u8() == 0 {
            return;
        }
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Fill a disc.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if color.alpha_u8() == 0 || radius <= 0.0 {
            return;
        }
        let path = vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(0.1);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
    }

    /// Fill a closed polygon.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if color.alpha_u8() == 0 {
            return;
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
    }

    /// Fill `area` with a radial gradient centred at `center`.
    ///
    /// `stops` are `(offset, color)` pairs with offsets in `[0, 1]`.
    pub fn fill_radial<const N: usize>(
        &mut self,
        area: Rect,
        center: Point,
        radius: f64,
        stops: [(f32, Rgba); N],
    ) {
        if radius <= 0.0 || !radius.is_finite() {
            return;
        }
        let gradient =
            vello_cpu::peniko::Gradient::new_radial(point_to_cpu(center), radius as f32)
                .with_stops(stops.map(|(offset, c)| (offset, color_to_cpu(c))));
        self.ctx.set_paint(gradient);
        self.ctx.fill_rect(&rect_to_cpu(area));
    }

    /// Draw `image` stretched into `dest`.
    pub fn draw_image(&mut self, image: &ImagePaint, dest: Rect) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let sx = dest.width() / f64::from(image.width);
        let sy = dest.height() / f64::from(image.height);
        let placement = Affine::translate((dest.x0, dest.y0)) * Affine::scale_non_uniform(sx, sy);

        self.ctx.set_transform(affine_to_cpu(placement));
        self.ctx.set_paint(image.paint.clone());
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        self.reset_transform();
    }

    /// Run `draw` inside an opacity layer.
    pub fn with_opacity<F>(&mut self, opacity: f32, draw: F)
    where
        F: FnOnce(&mut Self),
    {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        if opacity >= 1.0 {
            draw(self);
            return;
        }
        self.ctx.push_opacity_layer(opacity);
        draw(self);
        self.ctx.pop_layer();
    }
}

fn color_to_cpu(c: Rgba) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.alpha_u8())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> StardriftResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| StardriftError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| StardriftError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(StardriftError::render(
            "prepared image byte length mismatch",
        ));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
