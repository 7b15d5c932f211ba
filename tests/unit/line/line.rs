use super::*;
use crate::line::vertical_gradient::GradientVertex;

struct RecordingSurface {
    canvas: Canvas,
    base_stroke: f64,
    strokes: Vec<(Coordinate, Coordinate, Rgba, Rgba, f64)>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            canvas: Canvas::new(100, 100).unwrap(),
            base_stroke: 2.0,
            strokes: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn base_stroke(&self) -> f64 {
        self.base_stroke
    }

    fn clear(&mut self, _color: Rgba) -> LinefallResult<()> {
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
        self.strokes.push((a, b, color_a, color_b, weight));
        Ok(())
    }

    fn stroke_polyline(&mut self, _vertices: &[GradientVertex], _weight: f64) -> LinefallResult<()> {
        Ok(())
    }
}

#[test]
fn single_color_constructor_sets_both_endpoints() {
    let color = Rgba::rgb(10, 20, 30);
    let line = Line::new(
        Coordinate::new(5.0, 0.0),
        Coordinate::new(5.0, 50.0),
        color,
        1.0,
    );
    assert_eq!(line.color_a(), color);
    assert_eq!(line.color_b(), color);
}

#[test]
fn draw_scales_weight_by_the_base_stroke() {
    let line = Line::new(
        Coordinate::new(5.0, 0.0),
        Coordinate::new(5.0, 50.0),
        Rgba::WHITE,
        3.0,
    );
    let mut surface = RecordingSurface::new();
    line.draw(&mut surface).unwrap();

    assert_eq!(surface.strokes.len(), 1);
    let (a, b, color_a, color_b, weight) = surface.strokes[0];
    assert_eq!(a, line.start());
    assert_eq!(b, line.end());
    assert_eq!(color_a, Rgba::WHITE);
    assert_eq!(color_b, Rgba::WHITE);
    assert_eq!(weight, 6.0);
}

#[test]
fn two_color_line_keeps_endpoint_colors_apart() {
    let line = Line::with_colors(
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 10.0),
        Rgba::rgb(255, 0, 0),
        Rgba::rgb(0, 0, 255),
        1.0,
    );
    let mut surface = RecordingSurface::new();
    line.draw(&mut surface).unwrap();

    let (_, _, color_a, color_b, _) = surface.strokes[0];
    assert_eq!(color_a, Rgba::rgb(255, 0, 0));
    assert_eq!(color_b, Rgba::rgb(0, 0, 255));
}

#[test]
fn canvas_redraw_remaps_endpoints_only() {
    let mut line = Line::with_colors(
        Coordinate::new(50.0, 10.0),
        Coordinate::new(50.0, 90.0),
        Rgba::rgb(1, 2, 3),
        Rgba::rgb(4, 5, 6),
        2.5,
    );
    let from = Canvas::new(100, 100).unwrap();
    let to = Canvas::new(200, 300).unwrap();
    line.canvas_redraw(from, to);

    assert_eq!(line.start(), Coordinate::new(100.0, 30.0));
    assert_eq!(line.end(), Coordinate::new(100.0, 270.0));
    assert_eq!(line.color_a(), Rgba::rgb(1, 2, 3));
    assert_eq!(line.color_b(), Rgba::rgb(4, 5, 6));
    assert_eq!(line.stroke_weight_multiplier(), 2.5);
}
