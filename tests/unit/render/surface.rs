use super::*;

fn pixel(s: &Surface, x: usize, y: usize) -> [u8; 4] {
    let w = s.viewport().width as usize;
    let i = (y * w + x) * 4;
    let d = s.data();
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

#[test]
fn empty_or_oversized_viewport_has_no_surface() {
    assert!(Surface::new(Viewport::new(0, 100)).is_none());
    assert!(Surface::new(Viewport::new(100, 0)).is_none());
    assert!(Surface::new(Viewport::new(70_000, 10)).is_none());
    assert!(Surface::new(Viewport::new(16, 16)).is_some());
}

#[test]
fn fill_rect_covers_target_pixels_only() {
    let mut s = Surface::new(Viewport::new(16, 16)).unwrap();
    s.render(|p| p.fill_rect(Rect::new(0.0, 0.0, 8.0, 16.0), Rgba::WHITE));
    assert_eq!(pixel(&s, 2, 8), [255, 255, 255, 255]);
    assert_eq!(pixel(&s, 12, 8)[3], 0);
}

#[test]
fn render_starts_from_transparent() {
    let mut s = Surface::new(Viewport::new(8, 8)).unwrap();
    s.render(|p| p.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgba::WHITE));
    s.render(|_| {});
    assert!(s.data().iter().all(|&b| b == 0));
}

#[test]
fn circle_and_opacity_layer_draw_translucent_pixels() {
    let mut s = Surface::new(Viewport::new(32, 32)).unwrap();
    s.render(|p| {
        p.with_opacity(0.5, |p| {
            p.fill_circle(Point::new(16.0, 16.0), 8.0, Rgba::WHITE);
        });
    });
    let center = pixel(&s, 16, 16);
    assert!(center[3] > 100 && center[3] < 160, "alpha was {}", center[3]);
    assert_eq!(pixel(&s, 1, 1)[3], 0);
}

#[test]
fn radial_gradient_fades_outward() {
    let mut s = Surface::new(Viewport::new(64, 64)).unwrap();
    s.render(|p| {
        p.fill_radial(
            Rect::new(0.0, 0.0, 64.0, 64.0),
            Point::new(32.0, 32.0),
            30.0,
            [(0.0, Rgba::WHITE), (1.0, Rgba::TRANSPARENT)],
        );
    });
    let inner = pixel(&s, 32, 32)[3];
    let outer = pixel(&s, 32, 58)[3];
    assert!(inner > outer);
}

#[test]
fn render_opaque_keeps_gradients_over_black_fully_opaque() {
    let vp = Viewport::new(64, 48);
    let mut s = Surface::new(vp).unwrap();
    s.render_opaque(|p| {
        p.fill_rect(vp.rect(), Rgba::BLACK);
        p.fill_radial(
            vp.rect(),
            vp.center(),
            51.2,
            [
                (0.0, Rgba::rgb(147, 112, 219).with_alpha(0.1)),
                (0.3, Rgba::rgb(72, 61, 139).with_alpha(0.06)),
                (1.0, Rgba::TRANSPARENT),
            ],
        );
    });
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
    // The glow is still there.
    assert!(pixel(&s, 32, 24)[0] > 0);
}

#[test]
fn to_frame_copies_dimensions() {
    let s = Surface::new(Viewport::new(10, 6)).unwrap();
    let f = s.to_frame();
    assert_eq!((f.width, f.height), (10, 6));
    assert_eq!(f.data.len(), 10 * 6 * 4);
    assert!(f.premultiplied);
}
