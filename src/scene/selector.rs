use crate::foundation::core::Range;
use crate::foundation::error::{LinefallError, LinefallResult};
use crate::foundation::rng::Rng;

/// Maps named categories to numeric sampling ranges and serves values from
/// the current category.
///
/// With `same_choice` enabled the first sampled value is cached and reused
/// until [`CategorySelector::reset_choice`] or a category change; otherwise
/// every call resamples. Selectors are ordinary per-composition owned values;
/// nothing here is shared process-wide.
#[derive(Clone, Debug)]
pub struct CategorySelector<T> {
    choices: Vec<(T, Range)>,
    same_choice: bool,
    current: usize,
    cached: Option<f64>,
}

impl<T: Clone + PartialEq> CategorySelector<T> {
    /// Build a selector; the initial category is drawn uniformly from
    /// `choices`.
    ///
    /// Fails with [`LinefallError::InvalidArgument`] on an empty category
    /// list.
    pub fn new(choices: Vec<(T, Range)>, same_choice: bool, rng: &mut Rng) -> LinefallResult<Self> {
        if choices.is_empty() {
            return Err(LinefallError::invalid_argument(
                "category choices cannot be empty",
            ));
        }
        let current = rng.index(choices.len()).unwrap_or(0);
        Ok(Self {
            choices,
            same_choice,
            current,
            cached: None,
        })
    }

    /// The current category.
    pub fn current_category(&self) -> &T {
        &self.choices[self.current].0
    }

    /// Switch to `category` if it is configured; clears any cached value on a
    /// real change.
    pub fn set_category(&mut self, category: &T) {
        if let Some(index) = self.choices.iter().position(|(c, _)| c == category)
            && index != self.current
        {
            self.current = index;
            self.cached = None;
        }
    }

    /// Switch to a uniformly random category and clear any cached value.
    pub fn set_random_category(&mut self, rng: &mut Rng) {
        self.cached = None;
        if let Some(index) = rng.index(self.choices.len()) {
            self.current = index;
        }
    }

    /// Whether sampled values are cached per category.
    pub fn same_choice(&self) -> bool {
        self.same_choice
    }

    /// Enable or disable per-category value caching.
    pub fn set_same_choice(&mut self, same_choice: bool) {
        self.same_choice = same_choice;
    }

    /// Drop the cached value; the next [`CategorySelector::choice`] resamples.
    pub fn reset_choice(&mut self) {
        self.cached = None;
    }

    /// The raw range of the current category, for callers needing bounds
    /// rather than a sampled point.
    pub fn current_range(&self) -> Range {
        self.choices[self.current].1
    }

    /// A value from the current category's range.
    pub fn choice(&mut self, rng: &mut Rng) -> f64 {
        if self.same_choice {
            if let Some(value) = self.cached {
                value
            } else {
                let value = self.sample(rng);
                self.cached = Some(value);
                value
            }
        } else {
            self.sample(rng)
        }
    }

    fn sample(&self, rng: &mut Rng) -> f64 {
        let range = self.choices[self.current].1;
        rng.f64_in(range.min, range.max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/selector.rs"]
mod tests;
