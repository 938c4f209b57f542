use crate::foundation::core::{Point, Rect, Rgba, Viewport};
use crate::render::surface::Painter;

/// Placement of the profile section for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileLayout {
    pub viewport: Viewport,
    /// Top edge in pixels.
    pub top: f64,
    /// Section opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Content revealed after the name has formed.
///
/// The landing page only decides when it is shown and where; what it draws is up to the
/// implementation.
pub trait ProfileSection {
    fn set_show(&mut self, show: bool);

    fn is_shown(&self) -> bool;

    fn draw(&self, p: &mut Painter<'_>, layout: ProfileLayout);
}

/// Static card: an avatar disc above a few text-line bars.
#[derive(Clone, Debug)]
pub struct ProfileCard {
    show: bool,
    accent: Rgba,
    lines: usize,
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self::new(Rgba::rgb(147, 112, 219), 3)
    }
}

impl ProfileCard {
    pub fn new(accent: Rgba, lines: usize) -> Self {
        Self {
            show: false,
            accent,
            lines,
        }
    }
}

impl ProfileSection for ProfileCard {
    fn set_show(&mut self, show: bool) {
        self.show = show;
    }

    fn is_shown(&self) -> bool {
        self.show
    }

    fn draw(&self, p: &mut Painter<'_>, layout: ProfileLayout) {
        if !self.show {
            return;
        }
        let w = f64::from(layout.viewport.width);
        let card_w = (w * 0.6).min(640.0);
        let x0 = (w - card_w) / 2.0;
        let avatar_r = (card_w * 0.08).max(4.0);
        let accent = self.accent;
        let lines = self.lines;

        p.with_opacity(layout.opacity as f32, |p| {
            let avatar = Point::new(w / 2.0, layout.top + avatar_r);
            p.fill_circle(avatar, avatar_r, accent);

            let mut y = layout.top + avatar_r * 2.0 + 16.0;
            for i in 0..lines {
                let line_w = if i == 0 { card_w } else { card_w * 0.7 };
                let lx = x0 + (card_w - line_w) / 2.0;
                p.fill_rect(
                    Rect::new(lx, y, lx + line_w, y + 8.0),
                    Rgba::WHITE.with_alpha(if i == 0 { 0.9 } else { 0.5 }),
                );
                y += 20.0;
            }
        });
    }
}
