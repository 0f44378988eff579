//! The built-in recipe shown whenever nothing else can be determined.

use crate::model::{Ingredient, Recipe};

pub const SEED_RECIPE_ID: &str = "mock-1";

pub const SEED_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=800&q=80";

/// Classic Chocolate Chip Cookies, defined at 4 servings
pub fn seed_recipe() -> Recipe {
    Recipe {
        id: SEED_RECIPE_ID.to_string(),
        title: "Classic Chocolate Chip Cookies".to_string(),
        image_url: SEED_IMAGE_URL.to_string(),
        base_servings: 4,
        ingredients: vec![
            Ingredient::new(2.0, "cups", "all-purpose flour"),
            Ingredient::new(1.0, "tsp", "baking soda"),
            Ingredient::new(1.0, "tsp", "salt"),
            Ingredient::new(1.0, "cup", "butter, softened"),
            Ingredient::new(0.75, "cup", "granulated sugar"),
            Ingredient::new(0.75, "cup", "packed brown sugar"),
            Ingredient::new(2.0, "large", "eggs"),
            Ingredient::new(2.0, "tsp", "vanilla extract"),
            Ingredient::new(2.0, "cups", "chocolate chips"),
        ],
        steps: vec![
            "Preheat oven to 375°F (190°C). Line baking sheets with parchment paper.".to_string(),
            "In a medium bowl, whisk together flour, baking soda, and salt.".to_string(),
            "In a large bowl, beat butter and both sugars until creamy. Beat in eggs and vanilla."
                .to_string(),
            "Gradually blend in the flour mixture. Fold in chocolate chips.".to_string(),
            "Drop rounded tablespoons of dough onto the prepared sheets, 2 inches apart."
                .to_string(),
            "Bake 9–11 minutes until edges are golden. Cool on the sheet for 2 minutes, then transfer to a wire rack."
                .to_string(),
        ],
        collection_ids: Some(vec!["desserts".to_string()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_recipe_shape() {
        let seed = seed_recipe();
        assert_eq!(seed.id, SEED_RECIPE_ID);
        assert_eq!(seed.base_servings, 4);
        assert_eq!(seed.ingredients.len(), 9);
        assert_eq!(seed.steps.len(), 6);
        assert!(seed.in_collection("desserts"));
    }

    #[test]
    fn test_seed_recipe_survives_validation() {
        let json = seed_recipe().to_json().unwrap();
        assert_eq!(Recipe::from_json(&json).unwrap(), seed_recipe());
    }
}
