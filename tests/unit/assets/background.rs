use std::time::{Duration, Instant};

use super::*;

fn wait_until_settled(bg: &mut BackgroundImage) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let ready = bg.poll().is_some();
        if !bg.is_pending() || Instant::now() > deadline {
            return ready;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn none_never_yields_an_image() {
    let mut bg = BackgroundImage::none();
    assert!(bg.poll().is_none());
    assert!(!bg.is_pending());
}

#[test]
fn missing_file_falls_back_to_flat_fill() {
    let mut bg = BackgroundImage::spawn_load("/no/such/background.png");
    assert!(!wait_until_settled(&mut bg));
    assert!(!bg.is_pending());
    assert!(bg.poll().is_none());
}

#[test]
fn valid_file_becomes_ready() {
    let path = std::env::temp_dir().join(format!("stardrift-bg-{}.png", std::process::id()));
    image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let mut bg = BackgroundImage::spawn_load(&path);
    assert!(wait_until_settled(&mut bg));
    assert!(bg.poll().is_some());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn ready_wraps_decoded_image() {
    let img = PreparedImage {
        width: 1,
        height: 1,
        rgba8_premul: std::sync::Arc::new(vec![1, 2, 3, 255]),
    };
    let mut bg = BackgroundImage::ready(&img).unwrap();
    assert!(bg.poll().is_some());
}
