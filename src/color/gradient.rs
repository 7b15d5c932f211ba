use std::cmp::Ordering;

use crate::foundation::core::Rgba;
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::foundation::math::normalize;

/// One color anchor of a [`MappedGradient`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStep {
    /// The color at this anchor.
    pub color: Rgba,
    /// The anchor position in the `[0, 1]` percentage domain. This is the
    /// maximum percentage the color applies to when scanning upward.
    pub position: f64,
}

impl GradientStep {
    /// Build a step.
    pub fn new(color: Rgba, position: f64) -> Self {
        Self { color, position }
    }
}

/// A percentage-keyed color gradient.
///
/// Steps are sorted ascending by position at construction (stable for ties,
/// so duplicate positions collapse to a hard color transition) and the
/// gradient is immutable afterwards. [`MappedGradient::color_at`] resolves an
/// arbitrary percentage to an interpolated color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MappedGradient {
    steps: Vec<GradientStep>,
}

impl MappedGradient {
    /// Build a gradient from its steps.
    ///
    /// Fails with [`LinefallError::InvalidArgument`] when `steps` is empty or
    /// any position is not a finite number.
    pub fn new(steps: Vec<GradientStep>) -> LinefallResult<Self> {
        if steps.is_empty() {
            return Err(LinefallError::invalid_argument(
                "gradient steps cannot be empty",
            ));
        }
        if steps.iter().any(|s| !s.position.is_finite()) {
            return Err(LinefallError::invalid_argument(
                "gradient step positions must be finite",
            ));
        }
        let mut steps = steps;
        steps.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(Ordering::Equal)
        });
        Ok(Self { steps })
    }

    /// Number of steps.
    pub fn step_total(&self) -> usize {
        self.steps.len()
    }

    /// The step at `index`, or `None` when out of bounds.
    pub fn step(&self, index: usize) -> Option<&GradientStep> {
        self.steps.get(index)
    }

    /// The position of the step at `index`, or `None` when out of bounds.
    ///
    /// Consumers use the `None` sentinel to detect end-of-stops while walking
    /// the gradient stop-by-stop.
    pub fn map_max(&self, index: usize) -> Option<f64> {
        self.steps.get(index).map(|s| s.position)
    }

    /// Resolve `value` to a color.
    ///
    /// With a single step the step color is returned unconditionally. With
    /// two or more steps the first step whose position is `>= value` is
    /// located (clamping to the last step when `value` exceeds every
    /// position); values at or below the first stop return the first color
    /// unchanged, and interior values interpolate component-wise (including
    /// alpha) within their interval.
    pub fn color_at(&self, value: f64) -> Rgba {
        if self.steps.len() == 1 {
            return self.steps[0].color;
        }

        let mut index = 0;
        while index < self.steps.len() - 1 && value > self.steps[index].position {
            index += 1;
        }

        if index == 0 {
            return self.steps[0].color;
        }

        let min = &self.steps[index - 1];
        let max = &self.steps[index];
        let fraction = normalize(value, min.position, max.position).clamp(0.0, 1.0);
        min.color.lerp(max.color, fraction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
