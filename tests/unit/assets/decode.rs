use super::*;

fn png_bytes(rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn decode_png_premultiplies() {
    let img = decode_image(&png_bytes([200, 100, 50, 128])).unwrap();
    assert_eq!((img.width, img.height), (2, 2));
    assert_eq!(&img.rgba8_premul[..4], &[100, 50, 25, 128]);
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn load_missing_file_mentions_path() {
    let err = load_image(Path::new("/no/such/space-background.png")).unwrap_err();
    assert!(format!("{err:#}").contains("space-background.png"));
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = [9, 9, 9, 0, 255, 255, 255, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0, 255, 255, 255, 255]);
}
