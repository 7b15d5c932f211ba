use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 100).is_err());
    assert!(Canvas::new(100, 0).is_err());
    assert!(Canvas::new(100, 100).is_ok());
}

#[test]
fn aspect_presets_derive_longer_edge() {
    let square = Canvas::with_aspect(AspectRatio::Square, 400).unwrap();
    assert_eq!((square.width, square.height), (400, 400));

    let pin = Canvas::with_aspect(AspectRatio::PinterestPin, 400).unwrap();
    assert_eq!((pin.width, pin.height), (400, 600));

    let photo = Canvas::with_aspect(AspectRatio::TiktokPhoto, 360).unwrap();
    assert_eq!((photo.width, photo.height), (360, 640));
}

#[test]
fn aspect_rejects_zero_base() {
    assert!(Canvas::with_aspect(AspectRatio::Square, 0).is_err());
}

#[test]
fn coordinate_remap_scales_proportionally() {
    let from = Canvas::new(200, 100).unwrap();
    let to = Canvas::new(400, 400).unwrap();
    let mut c = Coordinate::new(100.0, 50.0);
    c.remap(from, to);
    assert_eq!(c.x, 200.0);
    assert_eq!(c.y, 200.0);
}

#[test]
fn coordinate_remap_identity_is_exact() {
    let canvas = Canvas::new(640, 480).unwrap();
    let mut c = Coordinate::new(123.456, 78.9);
    c.remap(canvas, canvas);
    assert_eq!(c.x, 123.456);
    assert_eq!(c.y, 78.9);
}

#[test]
fn hex_parses_six_and_eight_digits() {
    assert_eq!(Rgba::from_hex("#ff0000").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(Rgba::from_hex("00ff00").unwrap(), Rgba::rgb(0, 255, 0));
    assert_eq!(
        Rgba::from_hex("#0000ff80").unwrap(),
        Rgba::new(0, 0, 255, 128)
    );
}

#[test]
fn hex_rejects_malformed_input() {
    assert!(Rgba::from_hex("#fff").is_err());
    assert!(Rgba::from_hex("#gg0000").is_err());
    assert!(Rgba::from_hex("").is_err());
    assert!(Rgba::from_hex("#ff00001").is_err());
}

#[test]
fn with_alpha_only_touches_alpha() {
    let c = Rgba::rgb(10, 20, 30).with_alpha(40);
    assert_eq!(c, Rgba::new(10, 20, 30, 40));
}

#[test]
fn lerp_midpoint_and_clamping() {
    let a = Rgba::new(0, 0, 0, 0);
    let b = Rgba::new(255, 255, 255, 255);
    assert_eq!(a.lerp(b, 0.5), Rgba::new(128, 128, 128, 128));
    assert_eq!(a.lerp(b, -1.0), a);
    assert_eq!(a.lerp(b, 2.0), b);
}

#[test]
fn range_normalizes_reversed_bounds() {
    let r = Range::new(5.0, 1.0);
    assert_eq!(r.min, 1.0);
    assert_eq!(r.max, 5.0);
}

#[test]
fn luminance_extremes() {
    assert_eq!(Rgba::BLACK.luminance(), 0.0);
    assert!((Rgba::WHITE.luminance() - 255.0).abs() < 1e-9);
}
