use std::sync::Arc;

use crate::color::gradient::MappedGradient;
use crate::foundation::core::{Canvas, Coordinate, Rgba};
use crate::foundation::error::LinefallResult;
use crate::foundation::math::{map_range, normalize};
use crate::foundation::rng::Rng;
use crate::line::line::Line;
use crate::render::surface::Surface;

/// How a gradient line is submitted to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineRenderMode {
    /// One continuous multi-vertex colored poly-line in a single stroke pass.
    Vertices,
    /// Each sub-segment drawn independently as its own two-color stroke.
    Segments,
    /// Resolve to one of the two uniformly at construction.
    Random,
}

/// One emitted point of a gradient line's vertex strip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientVertex {
    /// Canvas-space position.
    pub coordinate: Coordinate,
    /// Resolved gradient color at this position.
    pub color: Rgba,
}

// The strip primitive renders its final segment only for even vertex counts;
// the duplicated closing vertex is nudged by this offset so the extra segment
// is not degenerate. The exact value carries no meaning beyond "negligible".
const EVEN_VERTEX_NUDGE: f64 = 0.001;

/// A vertical stroke colored by walking a [`MappedGradient`] along a mapping
/// range.
///
/// The two endpoints share an x and increase in y. The gradient maps a
/// percentage of the `[min_gradient_y, max_gradient_y]` range (not raw pixel
/// y) to a color; the bounds may equal the line's own extent, or a window
/// shared by several lines so that banding stays continuous across the
/// composition. The derived vertex and segment lists are caches over
/// (endpoints, gradient, bounds) and are regenerated wholesale by
/// [`VerticalGradientLine::rebuild`].
#[derive(Clone, Debug)]
pub struct VerticalGradientLine {
    line: Line,
    gradient: Arc<MappedGradient>,
    render_mode: LineRenderMode,
    min_gradient_y: f64,
    max_gradient_y: f64,
    vertices: Vec<GradientVertex>,
    segments: Vec<Line>,
}

impl VerticalGradientLine {
    /// Build a gradient line.
    ///
    /// `bounds` supplies the `(min, max)` gradient mapping range; `None`
    /// stretches the gradient across the line's own start/end y. A
    /// [`LineRenderMode::Random`] mode is resolved here with a single draw
    /// from `rng`.
    pub fn new(
        start: Coordinate,
        end: Coordinate,
        stroke_weight_multiplier: f64,
        gradient: Arc<MappedGradient>,
        render_mode: LineRenderMode,
        bounds: Option<(f64, f64)>,
        rng: &mut Rng,
    ) -> Self {
        let render_mode = match render_mode {
            LineRenderMode::Random => {
                if rng.next_bool() {
                    LineRenderMode::Segments
                } else {
                    LineRenderMode::Vertices
                }
            }
            resolved => resolved,
        };

        let (min_y, max_y) = bounds.unwrap_or((start.y, end.y));
        let color = gradient.color_at(0.0);
        let mut built = Self {
            line: Line::new(start, end, color, stroke_weight_multiplier),
            gradient,
            render_mode,
            min_gradient_y: min_y,
            max_gradient_y: max_y,
            vertices: Vec::new(),
            segments: Vec::new(),
        };
        built.rebuild(min_y, max_y);
        built
    }

    /// The base line (endpoints, endpoint colors, thickness multiplier).
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// The resolved render mode (never [`LineRenderMode::Random`]).
    pub fn render_mode(&self) -> LineRenderMode {
        self.render_mode
    }

    /// The gradient mapping bounds currently applied.
    pub fn gradient_bounds(&self) -> (f64, f64) {
        (self.min_gradient_y, self.max_gradient_y)
    }

    /// The emitted vertex strip.
    pub fn vertices(&self) -> &[GradientVertex] {
        &self.vertices
    }

    /// The emitted two-color sub-segments.
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Discard and regenerate the vertex and segment lists against new
    /// mapping bounds.
    ///
    /// This is a pure function of (endpoints, gradient, bounds): rebuilding
    /// twice with identical bounds yields identical lists. The composition
    /// builder calls this after the true maximum line length is known.
    pub fn rebuild(&mut self, min_gradient_y: f64, max_gradient_y: f64) {
        self.min_gradient_y = min_gradient_y;
        self.max_gradient_y = max_gradient_y;
        self.vertices.clear();
        self.segments.clear();
        self.walk();

        if let (Some(first), Some(last)) = (self.vertices.first(), self.vertices.last()) {
            self.line = Line::with_colors(
                self.line.start(),
                self.line.end(),
                first.color,
                last.color,
                self.line.stroke_weight_multiplier(),
            );
        }
    }

    /// The vertex strip as submitted for rendering in vertices mode.
    ///
    /// An odd strip gets its final vertex duplicated with a negligible y
    /// offset, guaranteeing the even vertex count the strip primitive needs.
    pub fn render_vertices(&self) -> Vec<GradientVertex> {
        let mut vertices = self.vertices.clone();
        if vertices.len() % 2 == 1
            && let Some(last) = vertices.last().copied()
        {
            vertices.push(GradientVertex {
                coordinate: Coordinate::new(last.coordinate.x, last.coordinate.y + EVEN_VERTEX_NUDGE),
                color: last.color,
            });
        }
        vertices
    }

    /// Render this gradient line onto `surface` in its resolved mode.
    pub fn draw(&self, surface: &mut dyn Surface) -> LinefallResult<()> {
        match self.render_mode {
            LineRenderMode::Segments => {
                for segment in &self.segments {
                    segment.draw(surface)?;
                }
                Ok(())
            }
            _ => {
                let weight = surface.base_stroke() * self.line.stroke_weight_multiplier();
                surface.stroke_polyline(&self.render_vertices(), weight)
            }
        }
    }

    /// Re-map the base line, every vertex, and every sub-segment after a
    /// canvas geometry change. The mapping bounds scale with the vertical
    /// axis so later rebuilds stay consistent with the new geometry.
    pub fn canvas_redraw(&mut self, from: Canvas, to: Canvas) {
        self.line.canvas_redraw(from, to);
        for vertex in &mut self.vertices {
            vertex.coordinate.remap(from, to);
        }
        for segment in &mut self.segments {
            segment.canvas_redraw(from, to);
        }
        self.min_gradient_y = map_range(
            self.min_gradient_y,
            0.0,
            from.height_f(),
            0.0,
            to.height_f(),
        );
        self.max_gradient_y = map_range(
            self.max_gradient_y,
            0.0,
            from.height_f(),
            0.0,
            to.height_f(),
        );
    }

    fn percentage_at(&self, y: f64) -> f64 {
        normalize(y, self.min_gradient_y, self.max_gradient_y)
    }

    fn stop_y(&self, percentage: f64) -> f64 {
        map_range(
            percentage,
            0.0,
            1.0,
            self.min_gradient_y,
            self.max_gradient_y,
        )
    }

    fn push_vertex(&mut self, y: f64, color: Rgba) {
        let x = self.line.start().x;
        self.vertices.push(GradientVertex {
            coordinate: Coordinate::new(x, y),
            color,
        });
    }

    fn push_segment(&mut self, from_y: f64, to_y: f64, color_a: Rgba, color_b: Rgba) {
        let x = self.line.start().x;
        self.segments.push(Line::with_colors(
            Coordinate::new(x, from_y),
            Coordinate::new(x, to_y),
            color_a,
            color_b,
            self.line.stroke_weight_multiplier(),
        ));
    }

    /// Walk the gradient stops from the line's start y toward its end y,
    /// emitting one vertex per crossed stop and a final vertex exactly at the
    /// end y. Consecutive vertices pair up into two-color sub-segments.
    fn walk(&mut self) {
        let line_end_y = self.line.end().y;
        let mut cursor_y = self.line.start().y;
        let mut cursor_color = self.gradient.color_at(self.percentage_at(cursor_y));
        self.push_vertex(cursor_y, cursor_color);

        let mut step_index = 0;
        loop {
            // Skip stops the cursor has already reached or passed.
            let stop = loop {
                match self.gradient.map_max(step_index) {
                    None => break None,
                    Some(percentage) => {
                        let y = self.stop_y(percentage);
                        if cursor_y >= y {
                            step_index += 1;
                        } else {
                            break Some((percentage, y));
                        }
                    }
                }
            };

            let Some((stop_percentage, stop_y)) = stop else {
                break;
            };

            if stop_y < line_end_y {
                let stop_color = self.gradient.color_at(stop_percentage);
                self.push_vertex(stop_y, stop_color);
                self.push_segment(cursor_y, stop_y, cursor_color, stop_color);
                cursor_y = stop_y;
                cursor_color = stop_color;
                step_index += 1;
            } else {
                let end_color = self.gradient.color_at(self.percentage_at(line_end_y));
                self.push_vertex(line_end_y, end_color);
                self.push_segment(cursor_y, line_end_y, cursor_color, end_color);
                cursor_y = line_end_y;
                break;
            }
        }

        // Stops can run out before the end y when the mapping window is
        // shorter than the line; close the strip so the last vertex always
        // lands on the line's own end.
        if cursor_y < line_end_y {
            let end_color = self.gradient.color_at(self.percentage_at(line_end_y));
            self.push_vertex(line_end_y, end_color);
            self.push_segment(cursor_y, line_end_y, cursor_color, end_color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/line/vertical_gradient.rs"]
mod tests;
