use super::*;

#[test]
fn encode_png_roundtrips_straight_alpha() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 128,
        ],
        premultiplied: false,
    };
    let png = encode_png(&frame).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.as_raw().as_slice(), frame.data.as_slice());
}

#[test]
fn encode_png_converts_premultiplied_frames_back_to_straight() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    };
    let png = encode_png(&frame).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    let px = decoded.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    assert!(px[0] >= 254, "red should unpremultiply to ~255, got {}", px[0]);
    assert_eq!(px[1], 0);
    assert_eq!(px[2], 0);
}

#[test]
fn encode_png_rejects_byte_length_mismatch() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 3],
        premultiplied: false,
    };
    assert!(encode_png(&frame).is_err());
}

#[test]
fn unpremultiply_zeroes_rgb_under_zero_alpha() {
    let out = unpremultiply(&[77, 88, 99, 0]);
    assert_eq!(out, vec![0, 0, 0, 0]);
}

#[test]
fn unpremultiply_keeps_opaque_pixels_untouched() {
    let out = unpremultiply(&[10, 20, 30, 255]);
    assert_eq!(out, vec![10, 20, 30, 255]);
}
