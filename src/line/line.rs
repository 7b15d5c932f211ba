use crate::foundation::core::{Canvas, Coordinate, Rgba};
use crate::foundation::error::LinefallResult;
use crate::render::surface::Surface;

/// A straight stroke between two canvas-space endpoints.
///
/// Each endpoint carries its own color; when they differ the stroke is
/// rendered as a two-vertex colored segment (never a flat average). Thickness
/// is a multiplier against the surface-provided base stroke width.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Line {
    start: Coordinate,
    end: Coordinate,
    color_a: Rgba,
    color_b: Rgba,
    stroke_weight_multiplier: f64,
}

impl Line {
    /// Build a single-color line; `color` is applied to both endpoints.
    pub fn new(
        start: Coordinate,
        end: Coordinate,
        color: Rgba,
        stroke_weight_multiplier: f64,
    ) -> Self {
        Self::with_colors(start, end, color, color, stroke_weight_multiplier)
    }

    /// Build a line with distinct endpoint colors.
    pub fn with_colors(
        start: Coordinate,
        end: Coordinate,
        color_a: Rgba,
        color_b: Rgba,
        stroke_weight_multiplier: f64,
    ) -> Self {
        Self {
            start,
            end,
            color_a,
            color_b,
            stroke_weight_multiplier,
        }
    }

    /// Start endpoint.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// End endpoint.
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Color at the start endpoint.
    pub fn color_a(&self) -> Rgba {
        self.color_a
    }

    /// Color at the end endpoint.
    pub fn color_b(&self) -> Rgba {
        self.color_b
    }

    /// Thickness multiplier against the surface base stroke width.
    pub fn stroke_weight_multiplier(&self) -> f64 {
        self.stroke_weight_multiplier
    }

    /// Render this line onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) -> LinefallResult<()> {
        let weight = surface.base_stroke() * self.stroke_weight_multiplier;
        surface.stroke_line(self.start, self.end, self.color_a, self.color_b, weight)
    }

    /// Re-map both endpoints after a canvas geometry change.
    ///
    /// Colors and thickness are untouched.
    pub fn canvas_redraw(&mut self, from: Canvas, to: Canvas) {
        self.start.remap(from, to);
        self.end.remap(from, to);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/line/line.rs"]
mod tests;
