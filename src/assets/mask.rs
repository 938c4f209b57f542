use std::fmt::Write as _;

use crate::assets::fonts::FontLibrary;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::{StardriftError, StardriftResult};
use crate::foundation::math::Rng64;

/// Alpha above which a mask pixel counts as part of the text.
pub const OPAQUE_THRESHOLD: u8 = 128;

/// How a string is laid out before it is rasterized into a [`TextMask`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// String to render.
    pub text: String,
    /// Font size in pixels.
    pub font_px: f64,
    /// CSS-style family list, e.g. `Arial, sans-serif`.
    pub family: String,
    /// Numeric weight (`700` is bold).
    pub weight: u16,
}

impl TextStyle {
    /// Bold sans-serif text at `font_px`.
    pub fn bold(text: impl Into<String>, font_px: f64) -> Self {
        Self {
            text: text.into(),
            font_px,
            family: "Arial, sans-serif".to_owned(),
            weight: 700,
        }
    }
}

/// Per-pixel alpha of text rendered centred in a viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
    opaque: usize,
}

impl TextMask {
    /// Build a mask from a row-major alpha buffer.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> StardriftResult<Self> {
        if alpha.len() != width as usize * height as usize {
            return Err(StardriftError::validation(format!(
                "mask of {width}x{height} needs {} alpha bytes, got {}",
                width as usize * height as usize,
                alpha.len()
            )));
        }
        let opaque = alpha.iter().filter(|&&a| a > OPAQUE_THRESHOLD).count();
        Ok(Self {
            width,
            height,
            alpha,
            opaque,
        })
    }

    /// A mask with no opaque pixels.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
            opaque: 0,
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`; zero outside the mask.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.alpha_at(x, y) > OPAQUE_THRESHOLD
    }

    /// Number of opaque pixels.
    pub fn opaque_count(&self) -> usize {
        self.opaque
    }

    pub fn has_opaque(&self) -> bool {
        self.opaque > 0
    }

    /// Opaque pixels visited on a regular grid of `stride` pixels, in row-major order.
    pub fn grid_samples(&self, stride: u32) -> Vec<Point> {
        let stride = stride.max(1) as usize;
        let mut out = Vec::new();
        for y in (0..self.height).step_by(stride) {
            for x in (0..self.width).step_by(stride) {
                if self.is_opaque(x, y) {
                    out.push(Point::new(f64::from(x), f64::from(y)));
                }
            }
        }
        out
    }
}

/// Rejection-sample an opaque pixel of `mask`.
///
/// Draws up to `max_attempts` uniformly random pixels and returns the first opaque one. `None`
/// means the caller should skip the particle.
pub fn sample_home(mask: &TextMask, rng: &mut Rng64, max_attempts: u32) -> Option<Point> {
    if mask.width == 0 || mask.height == 0 {
        return None;
    }
    for _ in 0..max_attempts {
        let x = rng.below(mask.width);
        let y = rng.below(mask.height);
        if mask.is_opaque(x, y) {
            return Some(Point::new(f64::from(x), f64::from(y)));
        }
    }
    None
}

/// Reusable offscreen buffer that rasterizes centred text into a [`TextMask`].
///
/// The buffer is kept between calls and only reallocated when the viewport size changes; it is
/// cleared after every extraction.
pub struct OffscreenText {
    fonts: FontLibrary,
    pixmap: Option<resvg::tiny_skia::Pixmap>,
}

impl OffscreenText {
    pub fn new(fonts: FontLibrary) -> Self {
        Self {
            fonts,
            pixmap: None,
        }
    }

    /// Render `style` centred in `viewport` and extract its alpha.
    #[tracing::instrument(skip(self, style), fields(text = %style.text, font_px = style.font_px))]
    pub fn render(&mut self, style: &TextStyle, viewport: Viewport) -> StardriftResult<TextMask> {
        if viewport.is_empty() {
            return Ok(TextMask::empty(viewport.width, viewport.height));
        }

        let reuse = self
            .pixmap
            .as_ref()
            .is_some_and(|p| p.width() == viewport.width && p.height() == viewport.height);
        if !reuse {
            self.pixmap = Some(
                resvg::tiny_skia::Pixmap::new(viewport.width, viewport.height).ok_or_else(
                    || StardriftError::render("could not allocate offscreen text buffer"),
                )?,
            );
        }
        let Some(pixmap) = self.pixmap.as_mut() else {
            return Err(StardriftError::render("offscreen text buffer missing"));
        };

        let svg = text_svg(style, viewport);
        let opts = self.fonts.svg_options();
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| StardriftError::render(format!("text layout failed: {e}")))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let alpha: Vec<u8> = pixmap.data().chunks_exact(4).map(|px| px[3]).collect();
        pixmap.fill(resvg::tiny_skia::Color::TRANSPARENT);

        let mask = TextMask::from_alpha(viewport.width, viewport.height, alpha)?;
        tracing::debug!(opaque = mask.opaque_count(), "text mask rebuilt");
        Ok(mask)
    }
}

fn text_svg(style: &TextStyle, viewport: Viewport) -> String {
    let c = viewport.center();
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = viewport.width,
        h = viewport.height,
    );
    let _ = write!(
        svg,
        r##"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" text-anchor="middle" dominant-baseline="central" fill="#ffffff">{text}</text></svg>"##,
        x = c.x,
        y = c.y,
        family = xml_escape(&style.family),
        size = style.font_px,
        weight = style.weight,
        text = xml_escape(&style.text),
    );
    svg
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/mask.rs"]
mod tests;
