//! Search and collection filtering for the saved-recipe list.

use crate::model::Recipe;

/// Collection id that matches every recipe
pub const ALL_COLLECTIONS: &str = "all";

/// Selectable collections as `(id, display name)`, in tab order
pub const COLLECTIONS: &[(&str, &str)] = &[
    (ALL_COLLECTIONS, "All"),
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("desserts", "Desserts"),
];

pub fn collection_name(id: &str) -> Option<&'static str> {
    COLLECTIONS
        .iter()
        .find(|(collection_id, _)| *collection_id == id)
        .map(|(_, name)| *name)
}

pub fn matches_collection(recipe: &Recipe, collection_id: &str) -> bool {
    collection_id == ALL_COLLECTIONS || recipe.in_collection(collection_id)
}

/// Case-insensitive substring match on the title or the joined ingredient
/// names. A blank query matches everything.
pub fn matches_search(recipe: &Recipe, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    recipe.title.to_lowercase().contains(&query)
        || recipe.ingredient_text().to_lowercase().contains(&query)
}

/// Recipes matching both `query` and `collection_id`, in their stored order
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    query: &str,
    collection_id: &str,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| matches_collection(r, collection_id) && matches_search(r, query))
        .collect()
}

/// The list page shows its "share a link to get started" hint until the
/// store holds more than one recipe.
pub fn show_onboarding_hint(recipes: &[Recipe]) -> bool {
    recipes.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_name() {
        assert_eq!(collection_name("all"), Some("All"));
        assert_eq!(collection_name("desserts"), Some("Desserts"));
        assert_eq!(collection_name("snacks"), None);
    }

    #[test]
    fn test_query_is_trimmed() {
        let seed = crate::seed::seed_recipe();
        assert!(matches_search(&seed, "  COOKIES  "));
        assert!(matches_search(&seed, "   "));
    }

    #[test]
    fn test_search_spans_joined_ingredient_names() {
        let seed = crate::seed::seed_recipe();
        // "salt butter" only exists across the boundary of two names
        assert!(matches_search(&seed, "salt butter"));
    }
}
