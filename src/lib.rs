//! Linefall is a procedural "falling lines" composition engine.
//!
//! Linefall v0.1 turns a seed and a [`LinesConfig`] into a still composition of
//! vertical strokes ([`FallingLines`]) and rasterizes it into pixels
//! ([`FrameRGBA`]) through a backend-agnostic drawing surface ([`Surface`]).
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `LinesConfig + Rng -> resolved features` (fill, trend, categories)
//! 2. **Build**: features -> line layout -> per-line color strategy (solid or gradient)
//! 3. **Draw**: the immutable line list is replayed onto a [`Surface`]
//! 4. **Encode** (optional): readback as [`FrameRGBA`], PNG bytes via [`encode_png`]
//!
//! The key design constraints in v0.1:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical seeds yield identical compositions
//!   and identical pixels.
//! - **No IO in the engine**: palette data is built in; file writing stays in
//!   demo binaries.
//! - **Premultiplied RGBA8** at the raster boundary: straight-alpha colors in
//!   the model, premultiplied pixels out of the CPU surface.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod line;
mod render;
mod scene;

pub use color::gradient::{GradientStep, MappedGradient};
pub use color::palette::{Palette, builtin_palettes};
pub use color::selector::PaletteColorSelector;
pub use foundation::core::{AspectRatio, Canvas, Coordinate, Point, Range, Rect, Rgba, Vec2};
pub use foundation::error::{LinefallError, LinefallResult};
pub use foundation::rng::Rng;
pub use line::line::Line;
pub use line::vertical_gradient::{GradientVertex, LineRenderMode, VerticalGradientLine};
pub use render::cpu::CpuSurface;
pub use render::surface::{FrameRGBA, Surface, encode_png};
pub use scene::categories::{
    GradientSource, GradientStretch, LineColoring, LineDensity, LineFill, LineLength,
    LineThickness, LineTransparency, LineTrend,
};
pub use scene::falling_lines::{FallingLines, LineElement, LinesConfig};
pub use scene::selector::CategorySelector;
