use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::foundation::core::{Canvas, Coordinate, Rgba};
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::line::vertical_gradient::GradientVertex;
use crate::render::surface::{FrameRGBA, Surface};

// Base stroke width scales with the shorter canvas edge, with a 1px floor.
const BASE_STROKE_RATIO: f64 = 0.002;

/// CPU raster surface powered by `vello_cpu`.
///
/// Solid strokes fill a quad with a solid paint; two-color strokes fill the
/// same quad with a 1-by-n gradient image paint aligned along the segment, so
/// each endpoint keeps its own color. Output is premultiplied RGBA8.
pub struct CpuSurface {
    canvas: Canvas,
    base_stroke: f64,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Build a surface for `canvas` with the default base stroke width.
    pub fn new(canvas: Canvas) -> LinefallResult<Self> {
        let base = (f64::from(canvas.width.min(canvas.height)) * BASE_STROKE_RATIO).max(1.0);
        Self::with_base_stroke(canvas, base)
    }

    /// Build a surface with an explicit base stroke width.
    pub fn with_base_stroke(canvas: Canvas, base_stroke: f64) -> LinefallResult<Self> {
        let (w, h) = Self::dims_u16(canvas)?;
        if base_stroke <= 0.0 || !base_stroke.is_finite() {
            return Err(LinefallError::invalid_argument(
                "base stroke width must be positive and finite",
            ));
        }
        Ok(Self {
            canvas,
            base_stroke,
            ctx: vello_cpu::RenderContext::new(w, h),
        })
    }

    fn dims_u16(canvas: Canvas) -> LinefallResult<(u16, u16)> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| LinefallError::render("canvas width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| LinefallError::render("canvas height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(LinefallError::invalid_argument(
                "canvas dimensions must be > 0",
            ));
        }
        Ok((w, h))
    }

    /// Finish the pass and read the frame back.
    pub fn into_frame(mut self) -> LinefallResult<FrameRGBA> {
        let (w, h) = Self::dims_u16(self.canvas)?;
        self.ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn solid_paint(&mut self, color: Rgba) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    // A 1-by-n image holding the premultiplied span from `a` to `b`.
    fn gradient_image(a: Rgba, b: Rgba, rows: u32) -> LinefallResult<vello_cpu::Image> {
        let rows = rows.max(2);
        let mut pixels = Vec::with_capacity(rows as usize);
        for row in 0..rows {
            let t = f64::from(row) / f64::from(rows - 1);
            let c = a.lerp(b, t);
            pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array(
                premul_rgba8([c.r, c.g, c.b, c.a]),
            ));
        }
        let h: u16 = rows
            .try_into()
            .map_err(|_| LinefallError::render("gradient image height exceeds u16"))?;
        let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, 1, h, true);
        Ok(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        })
    }

    fn stroke_quad(a: Coordinate, b: Coordinate, weight: f64) -> vello_cpu::kurbo::BezPath {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len = (dx * dx + dy * dy).sqrt();
        let (px, py) = if len > 0.0 {
            (-dy / len * weight / 2.0, dx / len * weight / 2.0)
        } else {
            (weight / 2.0, 0.0)
        };

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(vello_cpu::kurbo::Point::new(a.x + px, a.y + py));
        path.line_to(vello_cpu::kurbo::Point::new(b.x + px, b.y + py));
        path.line_to(vello_cpu::kurbo::Point::new(b.x - px, b.y - py));
        path.line_to(vello_cpu::kurbo::Point::new(a.x - px, a.y - py));
        path.close_path();
        path
    }
}

impl Surface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn base_stroke(&self) -> f64 {
        self.base_stroke
    }

    fn clear(&mut self, color: Rgba) -> LinefallResult<()> {
        self.solid_paint(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            self.canvas.width_f(),
            self.canvas.height_f(),
        ));
        Ok(())
    }

    fn stroke_line(
        &mut self,
        a: Coordinate,
        b: Coordinate,
        color_a: Rgba,
        color_b: Rgba,
        weight: f64,
    ) -> LinefallResult<()> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 0.0 || weight <= 0.0 {
            return Ok(());
        }

        let quad = Self::stroke_quad(a, b, weight);
        if color_a == color_b {
            self.solid_paint(color_a);
            self.ctx.fill_path(&quad);
            return Ok(());
        }

        let rows = (len.ceil() as u32).max(2);
        let img = Self::gradient_image(color_a, color_b, rows)?;
        // Map the 1-by-n image pixel space onto the segment: x across the
        // stroke width, y along the direction a -> b.
        let angle = dy.atan2(dx);
        let paint_tf = vello_cpu::kurbo::Affine::translate((a.x, a.y))
            * vello_cpu::kurbo::Affine::rotate(angle - FRAC_PI_2)
            * vello_cpu::kurbo::Affine::scale_non_uniform(weight, len / f64::from(rows))
            * vello_cpu::kurbo::Affine::translate((-0.5, 0.0));
        self.ctx.set_paint(img);
        self.ctx.set_paint_transform(paint_tf);
        self.ctx.fill_path(&quad);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn stroke_polyline(&mut self, vertices: &[GradientVertex], weight: f64) -> LinefallResult<()> {
        for pair in vertices.windows(2) {
            self.stroke_line(
                pair[0].coordinate,
                pair[1].coordinate,
                pair[0].color,
                pair[1].color,
                weight,
            )?;
        }
        Ok(())
    }
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
