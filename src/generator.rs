//! Pseudo-random recipes for the mocked "create recipe" flow.
//!
//! Ids combine the current time in milliseconds with a 7-character base-36
//! suffix. Two recipes generated in the same millisecond can collide; ids are
//! not checked against the store.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Ingredient, Recipe};

pub const RECIPE_TITLES: &[&str] = &[
    "Classic Chocolate Chip Cookies",
    "Creamy Garlic Pasta",
    "Sheet Pan Lemon Herb Chicken",
    "Avocado Toast with Eggs",
    "Beef Tacos with Lime Crema",
    "Mushroom Risotto",
    "Greek Salad with Feta",
    "Banana Oat Pancakes",
    "Tomato Basil Bruschetta",
    "Honey Sriracha Salmon",
    "Vegetable Stir-Fry",
    "Blueberry Muffins",
    "Caprese Stuffed Chicken",
    "French Onion Soup",
    "Chocolate Brownies",
    "Caesar Salad with Croutons",
    "Beef and Broccoli",
    "Margherita Pizza",
    "Coconut Curry Lentils",
    "Apple Cinnamon Oatmeal",
];

pub const RECIPE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=800&q=80",
    "https://images.unsplash.com/photo-1551183053-bf91a1f81141?w=800&q=80",
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800&q=80",
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=800&q=80",
    "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=800&q=80",
    "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=800&q=80",
    "https://images.unsplash.com/photo-1512621776951-a25141b677cc?w=800&q=80",
    "https://images.unsplash.com/photo-1484723091739-30a097e8f929?w=800&q=80",
    "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=800&q=80",
    "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=800&q=80",
];

/// `(amount, unit, name)` at base servings
pub const INGREDIENT_POOL: &[(f64, &str, &str)] = &[
    (2.0, "cups", "all-purpose flour"),
    (1.0, "tsp", "baking soda"),
    (1.0, "tsp", "salt"),
    (1.0, "cup", "butter, softened"),
    (0.75, "cup", "granulated sugar"),
    (2.0, "large", "eggs"),
    (2.0, "tsp", "vanilla extract"),
    (3.0, "cloves", "garlic, minced"),
    (1.0, "lb", "chicken breast"),
    (2.0, "tbsp", "olive oil"),
    (1.0, "cup", "arborio rice"),
    (4.0, "cups", "vegetable broth"),
    (1.0, "cup", "parmesan, grated"),
    (8.0, "oz", "pasta"),
    (1.0, "bunch", "fresh basil"),
    (2.0, "large", "tomatoes"),
    (1.0, "cup", "mozzarella"),
    (0.5, "cup", "heavy cream"),
    (1.0, "tbsp", "soy sauce"),
    (2.0, "cups", "mixed vegetables"),
];

pub const STEP_POOL: &[&str] = &[
    "Preheat oven to 375°F (190°C).",
    "In a large bowl, combine the dry ingredients.",
    "Add the wet ingredients and mix until just combined.",
    "Heat oil in a large skillet over medium-high heat.",
    "Season with salt and pepper to taste.",
    "Cook for 5–7 minutes until golden.",
    "Reduce heat and simmer for 10 minutes.",
    "Stir in the remaining ingredients.",
    "Serve immediately, garnished as desired.",
    "Let rest for 5 minutes before serving.",
    "Bring to a boil, then reduce to a simmer.",
    "Fold gently to avoid overmixing.",
    "Bake for 20–25 minutes until set.",
    "Chop the vegetables into even pieces.",
    "Whisk together until smooth.",
];

/// Tags a generated recipe can be filed under
pub const COLLECTION_TAGS: &[&str] = &["breakfast", "lunch", "dinner", "desserts"];

/// Weighted draw: 4 is three times and 6 twice as likely as 2 or 8
pub const BASE_SERVINGS_CHOICES: &[u32] = &[2, 4, 4, 4, 6, 6, 8];

const ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct RecipeGenerator<R> {
    rng: R,
}

impl RecipeGenerator<rand::rngs::ThreadRng> {
    /// Generator over the thread-local entropy-seeded RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RecipeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> Recipe {
        let id = format!("recipe-{}-{}", now_millis(), self.id_suffix());
        let ingredient_count = self.rng.gen_range(6..=11);
        let step_count = self.rng.gen_range(4..=7);
        let collection_count = self.rng.gen_range(1..=2);

        let recipe = Recipe {
            id,
            title: self.pick(RECIPE_TITLES).to_string(),
            image_url: self.pick(RECIPE_IMAGES).to_string(),
            base_servings: *self.pick(BASE_SERVINGS_CHOICES),
            ingredients: self
                .pick_many(INGREDIENT_POOL, ingredient_count)
                .into_iter()
                .map(|(amount, unit, name)| Ingredient::new(amount, unit, name))
                .collect(),
            steps: self
                .pick_many(STEP_POOL, step_count)
                .into_iter()
                .map(String::from)
                .collect(),
            collection_ids: Some(
                self.pick_many(COLLECTION_TAGS, collection_count)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
        };
        debug!("Generated recipe '{}' ({})", recipe.title, recipe.id);
        recipe
    }

    fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.rng.gen_range(0..pool.len())]
    }

    /// `count` distinct entries of `pool` in shuffled order
    fn pick_many<T: Clone>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        let mut shuffled = pool.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled.truncate(count.min(pool.len()));
        shuffled
    }

    fn id_suffix(&mut self) -> String {
        (0..ID_SUFFIX_LEN)
            .map(|_| BASE36[self.rng.gen_range(0..BASE36.len())] as char)
            .collect()
    }
}

/// One recipe from a fresh entropy-seeded generator
pub fn generate_random_recipe() -> Recipe {
    RecipeGenerator::from_entropy().generate()
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_many_has_no_duplicates() {
        let mut generator = RecipeGenerator::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let mut picked = generator.pick_many(STEP_POOL, 7);
            assert_eq!(picked.len(), 7);
            picked.sort();
            picked.dedup();
            assert_eq!(picked.len(), 7);
        }
    }

    #[test]
    fn test_pick_many_caps_at_pool_size() {
        let mut generator = RecipeGenerator::new(StdRng::seed_from_u64(1));
        assert_eq!(generator.pick_many(COLLECTION_TAGS, 10).len(), 4);
    }

    #[test]
    fn test_id_suffix_is_base36() {
        let mut generator = RecipeGenerator::new(StdRng::seed_from_u64(3));
        let suffix = generator.id_suffix();
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
