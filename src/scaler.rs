//! Serving-size scaling and the per-view ingredient state of the detail page.

use std::collections::BTreeSet;

use crate::model::{Ingredient, Recipe};

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 24;

/// `amount * requested / base`. `base_servings` is at least 1 for every
/// validated recipe; no bounds are applied to `requested_servings`.
pub fn scaled_amount(amount: f64, requested_servings: u32, base_servings: u32) -> f64 {
    amount * f64::from(requested_servings) / f64::from(base_servings)
}

/// Integral values without decimals, anything else with exactly one.
///
/// One-decimal output uses Rust's float formatting, which rounds exact binary
/// ties to even (`0.25` -> `"0.2"`, `0.75` -> `"0.8"`).
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

/// Ingredient line for `requested_servings`, e.g. `"3 cups all-purpose flour"`
pub fn scale(ingredient: &Ingredient, requested_servings: u32, base_servings: u32) -> String {
    let amount = scaled_amount(ingredient.amount, requested_servings, base_servings);
    format!(
        "{} {} {}",
        format_amount(amount),
        ingredient.unit,
        ingredient.name
    )
}

/// Every ingredient of `recipe` scaled to `servings`, in display order
pub fn scaled_ingredients(recipe: &Recipe, servings: u32) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|ing| scale(ing, servings, recipe.base_servings))
        .collect()
}

/// Serving counter bounded to `[min, max]`; presses at a bound are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Servings {
    value: u32,
    min: u32,
    max: u32,
}

impl Servings {
    /// Start at the recipe's base servings within the default 1..=24 range
    pub fn new(base_servings: u32) -> Self {
        Self::with_bounds(base_servings, MIN_SERVINGS, MAX_SERVINGS)
    }

    /// `value` is clamped into `[min, max]`
    pub fn with_bounds(value: u32, min: u32, max: u32) -> Self {
        let max = max.max(min);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        if self.value < self.max {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.value > self.min {
            self.value -= 1;
        }
    }
}

/// Ingredients checked off while cooking, by display position
#[derive(Debug, Clone, Default)]
pub struct IngredientChecklist {
    checked: BTreeSet<usize>,
}

impl IngredientChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.1875), "0.2");
        assert_eq!(format_amount(2.0 / 3.0), "0.7");
    }

    #[test]
    fn test_servings_saturate_at_bounds() {
        let mut servings = Servings::new(1);
        servings.decrement();
        assert_eq!(servings.get(), 1);

        let mut servings = Servings::new(24);
        servings.increment();
        assert_eq!(servings.get(), 24);
        servings.decrement();
        assert_eq!(servings.get(), 23);
    }

    #[test]
    fn test_servings_clamp_initial_value() {
        assert_eq!(Servings::new(30).get(), 24);
        assert_eq!(Servings::with_bounds(0, 1, 10).get(), 1);
        assert_eq!(Servings::with_bounds(5, 2, 4).get(), 4);
    }

    #[test]
    fn test_checklist_toggle() {
        let mut checklist = IngredientChecklist::new();
        checklist.toggle(2);
        assert!(checklist.is_checked(2));
        assert!(!checklist.is_checked(0));
        checklist.toggle(2);
        assert!(!checklist.is_checked(2));
        assert_eq!(checklist.checked_count(), 0);
    }
}
