//! Named sampling categories for composition features.
//!
//! Each category names a numeric range in the selector tables owned by the
//! composition builder; the builder samples concrete values per line.

/// Stroke thickness classes (multipliers against the base stroke width).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineThickness {
    /// Hairline to light strokes.
    Thin,
    /// Thin through medium strokes.
    ThinMedium,
    /// Medium strokes.
    Medium,
    /// Medium through heavy strokes.
    MediumThick,
    /// Heavy strokes.
    Thick,
    /// The full thickness spectrum.
    Mixed,
}

impl LineThickness {
    /// Every thickness category.
    pub const ALL: [LineThickness; 6] = [
        LineThickness::Thin,
        LineThickness::ThinMedium,
        LineThickness::Medium,
        LineThickness::MediumThick,
        LineThickness::Thick,
        LineThickness::Mixed,
    ];
}

/// Line length classes (fractions of the canvas height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineLength {
    /// Up to roughly a third of the canvas.
    Short,
    /// Around half the canvas.
    Medium,
    /// Most of the canvas.
    Long,
    /// At or slightly past the full canvas height.
    FullScreen,
    /// Exactly the full canvas height.
    FullScreenOnly,
    /// The full length spectrum.
    Mixed,
}

impl LineLength {
    /// Every length category.
    pub const ALL: [LineLength; 6] = [
        LineLength::Short,
        LineLength::Medium,
        LineLength::Long,
        LineLength::FullScreen,
        LineLength::FullScreenOnly,
        LineLength::Mixed,
    ];
}

/// Stroke transparency classes (alpha in `0..=255`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineTransparency {
    /// Fully opaque.
    Solid,
    /// Slightly translucent.
    Low,
    /// Clearly translucent.
    Medium,
    /// Mostly transparent.
    High,
    /// The full alpha spectrum.
    Mixed,
}

impl LineTransparency {
    /// Every transparency category.
    pub const ALL: [LineTransparency; 5] = [
        LineTransparency::Solid,
        LineTransparency::Low,
        LineTransparency::Medium,
        LineTransparency::High,
        LineTransparency::Mixed,
    ];
}

/// Line count classes for a whole composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineDensity {
    /// A handful of lines.
    Low,
    /// A sparse field.
    LowMedium,
    /// A balanced field.
    Medium,
    /// A busy field.
    MediumHigh,
    /// A dense field.
    High,
}

impl LineDensity {
    /// Every density category.
    pub const ALL: [LineDensity; 5] = [
        LineDensity::Low,
        LineDensity::LowMedium,
        LineDensity::Medium,
        LineDensity::MediumHigh,
        LineDensity::High,
    ];
}

/// Horizontal placement strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineFill {
    /// Lines sit at equidistant x positions and may overlap.
    EvenOverlap,
    /// Lines advance by random x steps and may overlap; the realized count
    /// becomes the composition's line total.
    RandomOverlap,
}

impl LineFill {
    /// Every fill strategy.
    pub const ALL: [LineFill; 2] = [LineFill::EvenOverlap, LineFill::RandomOverlap];
}

/// Length bias across the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineTrend {
    /// No bias.
    Constant,
    /// Lines grow toward the left edge.
    IncreaseToLeft,
    /// Lines grow toward the right edge.
    IncreaseToRight,
}

impl LineTrend {
    /// Every trend.
    pub const ALL: [LineTrend; 3] = [
        LineTrend::Constant,
        LineTrend::IncreaseToLeft,
        LineTrend::IncreaseToRight,
    ];
}

/// Which pixel window a line's gradient percentage domain is stretched over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GradientStretch {
    /// The line's own start/end extent.
    LineLength,
    /// The full canvas window, shared by every line.
    Window,
    /// Canvas top through the tallest line's end, resolved after all lines
    /// are built.
    MaxLength,
}

impl GradientStretch {
    /// Every stretch mode.
    pub const ALL: [GradientStretch; 3] = [
        GradientStretch::LineLength,
        GradientStretch::Window,
        GradientStretch::MaxLength,
    ];
}

/// Whether lines share one gradient instance or sample their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GradientSource {
    /// One shared, read-only gradient for the whole composition.
    Constant,
    /// A freshly sampled gradient per line.
    PerLine,
}

impl GradientSource {
    /// Every source mode.
    pub const ALL: [GradientSource; 2] = [GradientSource::Constant, GradientSource::PerLine];
}

/// Per-composition color strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineColoring {
    /// Flat palette colors with sampled alpha.
    Solid,
    /// Vertical gradients walked over a mapping window.
    Gradient {
        /// The pixel window the gradient is stretched over.
        stretch: GradientStretch,
        /// Shared versus per-line gradient instances.
        source: GradientSource,
    },
}
