use crate::foundation::core::{Canvas, Coordinate, Rgba};
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::line::vertical_gradient::GradientVertex;

/// A drawing host for one composition pass.
///
/// The engine never touches pixels directly; every line is replayed through
/// these primitives. Implementations decide how endpoint colors interpolate
/// along a stroke, which is exactly the difference the two gradient render
/// modes exist to paper over.
pub trait Surface {
    /// Current canvas geometry.
    fn canvas(&self) -> Canvas;

    /// Host-provided base stroke width, in pixels. Line thickness multipliers
    /// apply against this.
    fn base_stroke(&self) -> f64;

    /// Fill the whole canvas with `color`.
    fn clear(&mut self, color: Rgba) -> LinefallResult<()>;

    /// Stroke a straight segment; each endpoint uses its own color.
    fn stroke_line(
        &mut self,
        a: Coordinate,
        b: Coordinate,
        color_a: Rgba,
        color_b: Rgba,
        weight: f64,
    ) -> LinefallResult<()>;

    /// Stroke a continuous poly-line through `vertices`, interpolating colors
    /// between adjacent vertices.
    fn stroke_polyline(&mut self, vertices: &[GradientVertex], weight: f64) -> LinefallResult<()>;
}

/// One rasterized frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, row-major.
    pub data: Vec<u8>,
    /// Whether `data` carries premultiplied alpha.
    pub premultiplied: bool,
}

/// Encode a frame as PNG bytes (in memory; callers own any file writing).
///
/// Premultiplied frames are converted back to straight alpha first, since PNG
/// stores unassociated alpha.
pub fn encode_png(frame: &FrameRGBA) -> LinefallResult<Vec<u8>> {
    use image::ImageEncoder;

    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(LinefallError::render("frame byte length mismatch"));
    }

    let straight;
    let bytes: &[u8] = if frame.premultiplied {
        straight = unpremultiply(&frame.data);
        &straight
    } else {
        &frame.data
    };

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            bytes,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| LinefallError::render(format!("png encode failed: {e}")))?;
    Ok(out)
}

fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = premul.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in px.iter_mut().take(3) {
            let v = (u16::from(*c) * 255 + a / 2) / a;
            *c = v.min(255) as u8;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
