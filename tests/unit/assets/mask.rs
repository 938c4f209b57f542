use super::*;

fn block_mask() -> TextMask {
    // 10x10 mask with an opaque 4x4 block at (3..7, 3..7).
    let mut alpha = vec![0u8; 100];
    for y in 3..7 {
        for x in 3..7 {
            alpha[y * 10 + x] = 255;
        }
    }
    TextMask::from_alpha(10, 10, alpha).unwrap()
}

#[test]
fn from_alpha_rejects_wrong_length() {
    let err = TextMask::from_alpha(4, 4, vec![0; 15]).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn opacity_threshold_is_strictly_above_128() {
    let m = TextMask::from_alpha(3, 1, vec![128, 129, 255]).unwrap();
    assert!(!m.is_opaque(0, 0));
    assert!(m.is_opaque(1, 0));
    assert!(m.is_opaque(2, 0));
    assert_eq!(m.opaque_count(), 2);
    assert!(!m.is_opaque(5, 0));
    assert_eq!(m.alpha_at(5, 5), 0);
}

#[test]
fn grid_samples_visit_only_opaque_pixels() {
    let m = block_mask();
    let all = m.grid_samples(1);
    assert_eq!(all.len(), 16);
    let strided = m.grid_samples(2);
    assert_eq!(
        strided,
        vec![
            Point::new(4.0, 4.0),
            Point::new(6.0, 4.0),
            Point::new(4.0, 6.0),
            Point::new(6.0, 6.0),
        ]
    );
}

#[test]
fn sample_home_lands_on_opaque_pixels() {
    let m = block_mask();
    let mut rng = Rng64::new(7);
    for _ in 0..200 {
        if let Some(p) = sample_home(&m, &mut rng, 100) {
            assert!(m.is_opaque(p.x as u32, p.y as u32));
        }
    }
}

#[test]
fn sample_home_gives_up_on_empty_mask() {
    let m = TextMask::empty(32, 32);
    let mut rng = Rng64::new(1);
    assert!(!m.has_opaque());
    assert_eq!(sample_home(&m, &mut rng, 100), None);
    assert_eq!(sample_home(&TextMask::empty(0, 0), &mut rng, 100), None);
}

#[test]
fn xml_escape_handles_markup() {
    assert_eq!(xml_escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
}

#[test]
fn text_svg_centres_the_text() {
    let svg = text_svg(&TextStyle::bold("GPT-5", 160.0), Viewport::new(200, 100));
    assert!(svg.contains(r#"x="100""#));
    assert!(svg.contains(r#"y="50""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(">GPT-5</text>"));
}

#[test]
fn offscreen_text_renders_glyph_coverage_when_fonts_exist() {
    let fonts = FontLibrary::system();
    let has_fonts = fonts.face_count() > 0;
    let mut off = OffscreenText::new(fonts);
    let vp = Viewport::new(320, 120);

    let mask = off.render(&TextStyle::bold("GPT-5", 80.0), vp).unwrap();
    assert_eq!((mask.width(), mask.height()), (320, 120));
    if has_fonts {
        assert!(mask.opaque_count() > 0);
    }

    // The buffer is cleared between renders.
    let blank = off.render(&TextStyle::bold("", 80.0), vp).unwrap();
    assert_eq!(blank.opaque_count(), 0);
}

#[test]
fn offscreen_text_on_empty_viewport_is_empty() {
    let mut off = OffscreenText::new(FontLibrary::empty());
    let mask = off
        .render(&TextStyle::bold("x", 10.0), Viewport::new(0, 0))
        .unwrap();
    assert!(!mask.has_opaque());
}
