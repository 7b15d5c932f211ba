use std::sync::Arc;

use crate::color::gradient::{GradientStep, MappedGradient};
use crate::color::selector::PaletteColorSelector;
use crate::foundation::core::{Canvas, Coordinate, Range, Rgba};
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::foundation::math::map_range;
use crate::foundation::rng::Rng;
use crate::line::line::Line;
use crate::line::vertical_gradient::{LineRenderMode, VerticalGradientLine};
use crate::render::surface::Surface;
use crate::scene::categories::{
    GradientSource, GradientStretch, LineColoring, LineDensity, LineFill, LineLength,
    LineThickness, LineTransparency, LineTrend,
};
use crate::scene::selector::CategorySelector;

/// Configuration for one falling-lines composition.
///
/// Every field is optional; unset fields are resolved exactly once at build
/// entry, either to a documented default or to a uniform draw from the
/// composition's random source (matching the behavior of leaving a feature
/// unpinned).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LinesConfig {
    /// Composition name. Default: `"falling lines"`.
    pub name: Option<String>,
    /// Exact number of lines to request. Default: sampled from the density
    /// category. (Random-overlap fills may realize a different count.)
    pub line_total: Option<u32>,
    /// Density category used when `line_total` is unset. Default: random.
    pub density: Option<LineDensity>,
    /// Horizontal placement strategy. Default: random.
    pub fill: Option<LineFill>,
    /// Length bias across the canvas. Default: random.
    pub trend: Option<LineTrend>,
    /// Thickness category. Default: random.
    pub thickness: Option<LineThickness>,
    /// Cache one thickness for every line. Default: random.
    pub same_thickness: Option<bool>,
    /// Length category. Default: random.
    pub length: Option<LineLength>,
    /// Cache one length for every line. Default: random.
    pub same_length: Option<bool>,
    /// Transparency category. Default: random.
    pub transparency: Option<LineTransparency>,
    /// Cache one alpha for every line. Default: random.
    pub same_transparency: Option<bool>,
    /// Color strategy (solid or gradient). Default: random.
    pub coloring: Option<LineColoring>,
    /// Gradient submission mode. Default: [`LineRenderMode::Random`],
    /// resolved independently per line.
    pub render_mode: Option<LineRenderMode>,
    /// Gradient stop count. Default: sampled in `2..=5`.
    pub gradient_steps: Option<u32>,
    /// Evenly spaced gradient stops instead of random spacing.
    /// Default: random.
    pub even_gradient: Option<bool>,
    /// Background color. Default: opaque black.
    pub background: Option<Rgba>,
}

impl LinesConfig {
    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> LinefallResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LinefallError::invalid_argument(format!("bad config json: {e}")))
    }

    /// The JSON form of this configuration.
    pub fn to_json(&self) -> LinefallResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LinefallError::invalid_argument(format!("config json failed: {e}")))
    }
}

/// One renderable element of a composition.
#[derive(Clone, Debug)]
pub enum LineElement {
    /// A flat-colored stroke.
    Plain(Line),
    /// A gradient-walked stroke.
    Gradient(VerticalGradientLine),
}

impl LineElement {
    /// Render this element onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) -> LinefallResult<()> {
        match self {
            LineElement::Plain(line) => line.draw(surface),
            LineElement::Gradient(line) => line.draw(surface),
        }
    }

    /// Re-map this element after a canvas geometry change.
    pub fn canvas_redraw(&mut self, from: Canvas, to: Canvas) {
        match self {
            LineElement::Plain(line) => line.canvas_redraw(from, to),
            LineElement::Gradient(line) => line.canvas_redraw(from, to),
        }
    }

    /// The element's end y, in canvas space.
    pub fn end_y(&self) -> f64 {
        match self {
            LineElement::Plain(line) => line.end().y,
            LineElement::Gradient(line) => line.line().end().y,
        }
    }
}

/// A complete falling-lines composition.
///
/// Built once from a [`LinesConfig`], a canvas, a palette-backed color
/// selector and a seeded [`Rng`]; immutable afterwards except for
/// [`FallingLines::canvas_resize`]. Rendering replays the line list onto any
/// [`Surface`].
pub struct FallingLines {
    name: String,
    canvas: Canvas,
    fill: LineFill,
    trend: LineTrend,
    coloring: LineColoring,
    render_mode: LineRenderMode,
    even_gradient: bool,
    gradient_steps: u32,
    background: Rgba,
    thickness: CategorySelector<LineThickness>,
    length: CategorySelector<LineLength>,
    transparency: CategorySelector<LineTransparency>,
    color_selector: PaletteColorSelector,
    shared_gradient: Option<Arc<MappedGradient>>,
    lines: Vec<LineElement>,
    line_total: u32,
}

impl FallingLines {
    /// Shortest line, as a fraction of the canvas height.
    pub const MIN_LENGTH_RATIO: f64 = 0.02;
    /// Reference full-height line, as a fraction of the canvas height.
    pub const MAX_LENGTH_RATIO: f64 = 1.0;

    /// Build a composition.
    ///
    /// Feature resolution, line layout and the deferred max-length gradient
    /// fix-up all happen here; the returned value is ready to draw.
    #[tracing::instrument(skip(config, color_selector, rng))]
    pub fn new(
        config: LinesConfig,
        canvas: Canvas,
        color_selector: PaletteColorSelector,
        rng: &mut Rng,
    ) -> LinefallResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(LinefallError::invalid_argument(
                "canvas dimensions must be > 0",
            ));
        }

        let name = config.name.clone().unwrap_or_else(|| "falling lines".into());
        let fill = match config.fill {
            Some(fill) => fill,
            None => *rng.pick(&LineFill::ALL).unwrap_or(&LineFill::EvenOverlap),
        };
        let trend = match config.trend {
            Some(trend) => trend,
            None => *rng.pick(&LineTrend::ALL).unwrap_or(&LineTrend::Constant),
        };
        let coloring = match config.coloring {
            Some(coloring) => coloring,
            None => sample_coloring(rng),
        };
        let render_mode = config.render_mode.unwrap_or(LineRenderMode::Random);
        let even_gradient = config.even_gradient.unwrap_or_else(|| rng.next_bool());
        let gradient_steps = match config.gradient_steps {
            Some(0) => {
                return Err(LinefallError::invalid_argument(
                    "gradient step count must be > 0",
                ));
            }
            Some(steps) => steps,
            None => rng.u32_in(2, 5),
        };
        let background = config.background.unwrap_or(Rgba::BLACK);

        let thickness = build_selector(
            thickness_table(),
            config.thickness,
            config.same_thickness,
            rng,
        )?;
        let length = build_selector(length_table(), config.length, config.same_length, rng)?;
        let transparency = build_selector(
            transparency_table(),
            config.transparency,
            config.same_transparency,
            rng,
        )?;

        let line_total = match config.line_total {
            Some(total) => total,
            None => {
                let mut density = build_selector(density_table(), config.density, None, rng)?;
                density.choice(rng).floor().max(0.0) as u32
            }
        };

        let mut composition = Self {
            name,
            canvas,
            fill,
            trend,
            coloring,
            render_mode,
            even_gradient,
            gradient_steps,
            background,
            thickness,
            length,
            transparency,
            color_selector,
            shared_gradient: None,
            lines: Vec::new(),
            line_total,
        };

        if let LineColoring::Gradient {
            source: GradientSource::Constant,
            ..
        } = composition.coloring
        {
            let gradient = composition.build_gradient(rng)?;
            composition.shared_gradient = Some(Arc::new(gradient));
        }

        composition.build(rng)?;
        composition.log_features();
        Ok(composition)
    }

    /// Composition name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current canvas geometry.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Name of the palette feeding the color selector.
    pub fn palette_name(&self) -> &str {
        self.color_selector.name()
    }

    /// The realized number of lines.
    pub fn line_total(&self) -> u32 {
        self.line_total
    }

    /// The composition's line list, in draw order.
    pub fn lines(&self) -> &[LineElement] {
        &self.lines
    }

    /// The background color cleared before the lines are drawn.
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Render the composition onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) -> LinefallResult<()> {
        surface.clear(self.background)?;
        for line in &self.lines {
            line.draw(surface)?;
        }
        Ok(())
    }

    /// Re-map every line into a new canvas geometry.
    pub fn canvas_resize(&mut self, to: Canvas) -> LinefallResult<()> {
        if to.width == 0 || to.height == 0 {
            return Err(LinefallError::invalid_argument(
                "canvas dimensions must be > 0",
            ));
        }
        let from = self.canvas;
        for line in &mut self.lines {
            line.canvas_redraw(from, to);
        }
        self.canvas = to;
        Ok(())
    }

    // Phase 1 lays every line out against placeholder gradient bounds; phase
    // 2 rebuilds the max-length gradient lines once the tallest end y is
    // known. The boundary is explicit: no line is considered final until the
    // second pass has run.
    fn build(&mut self, rng: &mut Rng) -> LinefallResult<()> {
        match self.fill {
            LineFill::EvenOverlap => self.build_even_overlap(rng)?,
            LineFill::RandomOverlap => self.build_random_overlap(rng)?,
        }

        if let LineColoring::Gradient {
            stretch: GradientStretch::MaxLength,
            ..
        } = self.coloring
        {
            let max_end_y = self
                .lines
                .iter()
                .map(LineElement::end_y)
                .fold(0.0_f64, f64::max);
            for line in &mut self.lines {
                if let LineElement::Gradient(gradient_line) = line {
                    gradient_line.rebuild(0.0, max_end_y);
                }
            }
        }
        Ok(())
    }

    fn build_even_overlap(&mut self, rng: &mut Rng) -> LinefallResult<()> {
        let gap = self.canvas.width_f() / f64::from(self.line_total + 1);
        for i in 0..self.line_total {
            let x = f64::from(i + 1) * gap;
            let line = self.build_line(x, rng)?;
            self.lines.push(line);
        }
        Ok(())
    }

    fn build_random_overlap(&mut self, rng: &mut Rng) -> LinefallResult<()> {
        let gap = self.canvas.width_f() / f64::from(self.line_total + 1);
        let mut x = rng.f64_in(0.0, gap);
        let mut total = 0u32;

        while x < self.canvas.width_f() {
            let line = self.build_line(x, rng)?;
            self.lines.push(line);
            x += rng.f64_in(gap * 0.1, gap * 1.5);
            total += 1;
        }

        self.line_total = total;
        Ok(())
    }

    fn build_line(&mut self, x: f64, rng: &mut Rng) -> LinefallResult<LineElement> {
        let length = self.line_length(x, rng);
        let start = Coordinate::new(x, 0.0);
        let end = Coordinate::new(x, length);
        let thickness = self.thickness.choice(rng);

        match self.coloring {
            LineColoring::Solid => {
                let color = self
                    .color_selector
                    .next_color(rng)
                    .with_alpha(self.sample_alpha(rng));
                Ok(LineElement::Plain(Line::new(start, end, color, thickness)))
            }
            LineColoring::Gradient { stretch, source } => {
                let gradient = match source {
                    GradientSource::Constant => {
                        self.shared_gradient.clone().ok_or_else(|| {
                            LinefallError::invalid_argument("shared gradient missing")
                        })?
                    }
                    GradientSource::PerLine => Arc::new(self.build_gradient(rng)?),
                };
                // Max-length bounds are placeholders until phase 2 of the
                // build learns the tallest end y.
                let bounds = match stretch {
                    GradientStretch::LineLength => None,
                    GradientStretch::Window | GradientStretch::MaxLength => {
                        Some((0.0, self.canvas.height_f()))
                    }
                };
                Ok(LineElement::Gradient(VerticalGradientLine::new(
                    start,
                    end,
                    thickness,
                    gradient,
                    self.render_mode,
                    bounds,
                    rng,
                )))
            }
        }
    }

    fn line_length(&mut self, x: f64, rng: &mut Rng) -> f64 {
        let height = self.canvas.height_f();
        let min_length = height * Self::MIN_LENGTH_RATIO;
        let length = height * self.length.choice(rng);

        match self.trend {
            LineTrend::IncreaseToLeft => {
                map_range(x, 0.0, self.canvas.width_f(), length, min_length)
            }
            LineTrend::IncreaseToRight => {
                map_range(x, 0.0, self.canvas.width_f(), min_length, length)
            }
            LineTrend::Constant => length,
        }
    }

    fn sample_alpha(&mut self, rng: &mut Rng) -> u8 {
        self.transparency.choice(rng).ceil().clamp(0.0, 255.0) as u8
    }

    /// Sample a gradient from the composition's color source: stop colors in
    /// selector order, stop positions evenly spaced or randomly spaced with a
    /// spacing floor of half the even spacing, and the final stop pinned to
    /// exactly 1.0.
    fn build_gradient(&mut self, rng: &mut Rng) -> LinefallResult<MappedGradient> {
        let positions = self.stop_positions(rng);
        let steps = positions
            .into_iter()
            .map(|position| {
                let color = self
                    .color_selector
                    .next_color(rng)
                    .with_alpha(self.sample_alpha(rng));
                GradientStep::new(color, position)
            })
            .collect();
        MappedGradient::new(steps)
    }

    fn stop_positions(&self, rng: &mut Rng) -> Vec<f64> {
        let total = self.gradient_steps as usize;
        if total == 1 {
            return vec![1.0];
        }

        let even_spacing = 1.0 / (total as f64 - 1.0);
        if self.even_gradient {
            let mut positions: Vec<f64> =
                (0..total).map(|i| i as f64 * even_spacing).collect();
            positions[total - 1] = 1.0;
            return positions;
        }

        // Random spacing keeps every pair of stops at least half the even
        // spacing apart and still lands the final stop exactly on 1.0: each
        // interior stop samples within the window that leaves the remaining
        // stops their minimum room.
        let min_spacing = even_spacing / 2.0;
        let mut positions = Vec::with_capacity(total);
        positions.push(0.0);
        for i in 1..total - 1 {
            let lower = positions[i - 1] + min_spacing;
            let upper = 1.0 - (total - 1 - i) as f64 * min_spacing;
            positions.push(rng.f64_in(lower, upper));
        }
        positions.push(1.0);
        positions
    }

    fn log_features(&self) {
        tracing::debug!(
            name = %self.name,
            line_total = self.line_total,
            fill = ?self.fill,
            trend = ?self.trend,
            coloring = ?self.coloring,
            render_mode = ?self.render_mode,
            thickness = ?self.thickness.current_category(),
            same_thickness = self.thickness.same_choice(),
            length = ?self.length.current_category(),
            same_length = self.length.same_choice(),
            transparency = ?self.transparency.current_category(),
            same_transparency = self.transparency.same_choice(),
            palette = %self.color_selector.name(),
            "falling lines features"
        );
    }
}

impl std::fmt::Debug for FallingLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallingLines")
            .field("name", &self.name)
            .field("canvas", &self.canvas)
            .field("line_total", &self.line_total)
            .field("fill", &self.fill)
            .field("coloring", &self.coloring)
            .finish_non_exhaustive()
    }
}

fn sample_coloring(rng: &mut Rng) -> LineColoring {
    if rng.next_bool() {
        LineColoring::Solid
    } else {
        LineColoring::Gradient {
            stretch: *rng
                .pick(&GradientStretch::ALL)
                .unwrap_or(&GradientStretch::LineLength),
            source: *rng
                .pick(&GradientSource::ALL)
                .unwrap_or(&GradientSource::PerLine),
        }
    }
}

fn build_selector<T: Clone + PartialEq>(
    table: Vec<(T, Range)>,
    category: Option<T>,
    same_choice: Option<bool>,
    rng: &mut Rng,
) -> LinefallResult<CategorySelector<T>> {
    let same = same_choice.unwrap_or_else(|| rng.next_bool());
    let mut selector = CategorySelector::new(table, same, rng)?;
    match category {
        Some(category) => selector.set_category(&category),
        None => selector.set_random_category(rng),
    }
    Ok(selector)
}

fn thickness_table() -> Vec<(LineThickness, Range)> {
    vec![
        (LineThickness::Thin, Range::new(0.25, 5.0)),
        (LineThickness::ThinMedium, Range::new(0.25, 25.0)),
        (LineThickness::Medium, Range::new(3.0, 25.0)),
        (LineThickness::Thick, Range::new(20.0, 50.0)),
        (LineThickness::MediumThick, Range::new(3.0, 50.0)),
        (LineThickness::Mixed, Range::new(0.25, 50.0)),
    ]
}

fn length_table() -> Vec<(LineLength, Range)> {
    vec![
        (LineLength::Short, Range::new(0.05, 0.35)),
        (LineLength::Medium, Range::new(0.3, 0.7)),
        (LineLength::Long, Range::new(0.65, 0.9)),
        (LineLength::FullScreen, Range::new(0.85, 1.1)),
        (LineLength::FullScreenOnly, Range::new(1.0, 1.0)),
        (LineLength::Mixed, Range::new(0.05, 1.1)),
    ]
}

fn transparency_table() -> Vec<(LineTransparency, Range)> {
    vec![
        (LineTransparency::Solid, Range::new(255.0, 255.0)),
        (LineTransparency::Low, Range::new(175.0, 255.0)),
        (LineTransparency::Medium, Range::new(95.0, 180.0)),
        (LineTransparency::High, Range::new(5.0, 100.0)),
        (LineTransparency::Mixed, Range::new(5.0, 255.0)),
    ]
}

fn density_table() -> Vec<(LineDensity, Range)> {
    vec![
        (LineDensity::Low, Range::new(5.0, 15.0)),
        (LineDensity::LowMedium, Range::new(10.0, 20.0)),
        (LineDensity::Medium, Range::new(10.0, 30.0)),
        (LineDensity::MediumHigh, Range::new(20.0, 50.0)),
        (LineDensity::High, Range::new(25.0, 200.0)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/falling_lines.rs"]
mod tests;
