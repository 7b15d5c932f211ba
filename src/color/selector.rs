use crate::color::palette::Palette;
use crate::foundation::core::Rgba;
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::foundation::rng::Rng;

/// A palette-backed color source.
///
/// At construction the selector narrows its palette to a working set of
/// 2..=n colors, either the leading run of the palette (preserving the
/// published order) or a random draw without replacement. Colors are then
/// served in rotation or by uniform pick, depending on `random_order`.
#[derive(Clone, Debug)]
pub struct PaletteColorSelector {
    palette_name: String,
    choices: Vec<Rgba>,
    random_order: bool,
    cursor: usize,
}

impl PaletteColorSelector {
    /// Build a selector over `palette`.
    ///
    /// `random_order` controls how [`PaletteColorSelector::next_color`] serves
    /// colors: uniform random picks, or round-robin over the working set.
    pub fn new(palette: &Palette, random_order: bool, rng: &mut Rng) -> LinefallResult<Self> {
        if palette.colors.is_empty() {
            return Err(LinefallError::invalid_argument(
                "palette colors cannot be empty",
            ));
        }

        let len = palette.colors.len() as u32;
        let total = rng.u32_in(2.min(len), len) as usize;

        let in_order = rng.next_bool();
        let choices = if in_order {
            palette.colors[..total].to_vec()
        } else {
            let mut pool = palette.colors.clone();
            let mut picked = Vec::with_capacity(total);
            for _ in 0..total {
                match rng.pick_remove(&mut pool) {
                    Some(c) => picked.push(c),
                    None => break,
                }
            }
            picked
        };

        Ok(Self {
            palette_name: palette.name.clone(),
            choices,
            random_order,
            cursor: 0,
        })
    }

    /// Name of the source palette.
    pub fn name(&self) -> &str {
        &self.palette_name
    }

    /// The working color set selected at construction.
    pub fn choices(&self) -> &[Rgba] {
        &self.choices
    }

    /// Serve the next color: a uniform pick in random-order mode, otherwise
    /// the next color in rotation.
    pub fn next_color(&mut self, rng: &mut Rng) -> Rgba {
        if self.random_order {
            *rng.pick(&self.choices).unwrap_or(&Rgba::BLACK)
        } else {
            let color = self.choices[self.cursor % self.choices.len()];
            self.cursor = (self.cursor + 1) % self.choices.len();
            color
        }
    }

    /// Derive a background color for compositions drawn from this selector.
    ///
    /// Rolls black with probability `chance_black`, white with
    /// `chance_white`, and otherwise a uniform pick from the working set.
    pub fn background_color(&self, chance_black: f64, chance_white: f64, rng: &mut Rng) -> Rgba {
        let roll = rng.next_f64();
        if roll < chance_black {
            Rgba::BLACK
        } else if roll < chance_black + chance_white {
            Rgba::WHITE
        } else {
            *rng.pick(&self.choices).unwrap_or(&Rgba::BLACK)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/selector.rs"]
mod tests;
