use crate::foundation::error::{LinefallError, LinefallResult};
use crate::foundation::math::map_range;

pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> LinefallResult<Self> {
        if width == 0 || height == 0 {
            return Err(LinefallError::invalid_argument(
                "Canvas dimensions must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Build a canvas from an aspect-ratio preset and a base resolution.
    ///
    /// `base` is the length of the shorter edge; the longer edge is derived
    /// from the ratio and rounded to whole pixels.
    pub fn with_aspect(ratio: AspectRatio, base: u32) -> LinefallResult<Self> {
        let (rw, rh) = ratio.ratio();
        if base == 0 {
            return Err(LinefallError::invalid_argument("Canvas base must be > 0"));
        }
        // rw <= rh for every preset; width is the shorter edge.
        let width = base;
        let height = ((f64::from(base) * rh / rw).round() as u32).max(1);
        Ok(Self { width, height })
    }

    /// Width as `f64`, for geometry math.
    pub fn width_f(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for geometry math.
    pub fn height_f(self) -> f64 {
        f64::from(self.height)
    }
}

/// Canvas aspect-ratio presets for common publishing targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// 1:1.
    Square,
    /// 2:3 portrait pin.
    PinterestPin,
    /// 9:16 portrait photo.
    TiktokPhoto,
    /// 9:16 portrait video frame.
    SocialVideo,
}

impl AspectRatio {
    /// The (width, height) proportion of this preset.
    pub fn ratio(self) -> (f64, f64) {
        match self {
            AspectRatio::Square => (1.0, 1.0),
            AspectRatio::PinterestPin => (2.0, 3.0),
            AspectRatio::TiktokPhoto => (9.0, 16.0),
            AspectRatio::SocialVideo => (9.0, 16.0),
        }
    }
}

/// A 2D point in canvas pixel space.
///
/// Coordinates are stored against a concrete canvas geometry; when the host
/// canvas is resized, [`Coordinate::remap`] rescales the stored position
/// proportionally into the new pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Horizontal position in pixels.
    pub x: f64,
    /// Vertical position in pixels.
    pub y: f64,
}

impl Coordinate {
    /// Build a coordinate from canvas-space values.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rescale this coordinate from one canvas geometry to another.
    pub fn remap(&mut self, from: Canvas, to: Canvas) {
        self.x = map_range(self.x, 0.0, from.width_f(), 0.0, to.width_f());
        self.y = map_range(self.y, 0.0, from.height_f(), 0.0, to.height_f());
    }

    /// This coordinate as a [`kurbo::Point`].
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        c.point()
    }
}

/// An inclusive numeric sampling range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Range {
    /// Build a range; reversed bounds are normalized so `min <= max` holds.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

/// Straight-alpha RGBA color, 8 bits per channel.
///
/// Interpolation is component-wise in this space, including alpha.
/// Premultiplication happens at the raster boundary, not in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Build a color from all four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> LinefallResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| -> LinefallResult<u8> {
            let pair = digits
                .get(i..i + 2)
                .ok_or_else(|| LinefallError::invalid_argument(format!("bad hex color '{hex}'")))?;
            u8::from_str_radix(pair, 16)
                .map_err(|_| LinefallError::invalid_argument(format!("bad hex color '{hex}'")))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(LinefallError::invalid_argument(format!(
                "bad hex color '{hex}'"
            ))),
        }
    }

    /// This color with a replacement alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Component-wise linear interpolation toward `other`, including alpha.
    ///
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let af = f64::from(a);
            let bf = f64::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Rec. 601 luminance of the color, ignoring alpha.
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
