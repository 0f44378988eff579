use recibook::filter::{matches_collection, show_onboarding_hint};
use recibook::{filter_recipes, seed_recipe, Ingredient, Recipe};

fn recipe(id: &str, title: &str, ingredients: &[&str], collections: Option<&[&str]>) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image_url: String::new(),
        base_servings: 4,
        ingredients: ingredients
            .iter()
            .map(|name| Ingredient::new(1.0, "cup", *name))
            .collect(),
        steps: vec!["Cook".to_string()],
        collection_ids: collections.map(|c| c.iter().map(|s| s.to_string()).collect()),
    }
}

fn sample() -> Vec<Recipe> {
    vec![
        seed_recipe(),
        recipe(
            "pasta",
            "Creamy Garlic Pasta",
            &["pasta", "garlic, minced", "heavy cream"],
            Some(&["dinner"]),
        ),
        recipe(
            "mole",
            "Chicken Mole",
            &["chicken breast", "dark CHOCOLATE"],
            Some(&["dinner", "lunch"]),
        ),
        recipe("toast", "Avocado Toast with Eggs", &["eggs", "bread"], None),
    ]
}

fn ids(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_blank_query_and_all_returns_everything() {
    let recipes = sample();
    let result = filter_recipes(&recipes, "", "all");
    assert_eq!(result.len(), recipes.len());
    for (filtered, original) in result.iter().zip(&recipes) {
        assert_eq!(*filtered, original);
    }
    assert_eq!(filter_recipes(&recipes, "  \t ", "all").len(), recipes.len());
}

#[test]
fn test_search_title_and_ingredients_case_insensitive() {
    let recipes = sample();
    assert_eq!(
        ids(&filter_recipes(&recipes, "choc", "all")),
        vec!["mock-1", "mole"]
    );
    assert_eq!(ids(&filter_recipes(&recipes, "GARLIC", "all")), vec!["pasta"]);
    assert_eq!(ids(&filter_recipes(&recipes, "eggs", "all")), vec!["mock-1", "toast"]);
    assert!(filter_recipes(&recipes, "tofu", "all").is_empty());
}

#[test]
fn test_collection_filter() {
    let recipes = sample();
    assert_eq!(ids(&filter_recipes(&recipes, "", "dinner")), vec!["pasta", "mole"]);
    assert_eq!(ids(&filter_recipes(&recipes, "", "desserts")), vec!["mock-1"]);
    assert!(filter_recipes(&recipes, "", "breakfast").is_empty());
}

#[test]
fn test_untagged_recipe_only_matches_all() {
    let toast = &sample()[3];
    assert!(matches_collection(toast, "all"));
    for tag in ["breakfast", "lunch", "dinner", "desserts"] {
        assert!(!matches_collection(toast, tag));
    }
}

#[test]
fn test_search_and_collection_combine_with_and() {
    let recipes = sample();
    assert_eq!(ids(&filter_recipes(&recipes, "chicken", "lunch")), vec!["mole"]);
    assert!(filter_recipes(&recipes, "choc", "breakfast").is_empty());
    assert!(filter_recipes(&recipes, "garlic", "lunch").is_empty());
}

#[test]
fn test_onboarding_hint() {
    assert!(show_onboarding_hint(&[seed_recipe()]));
    assert!(!show_onboarding_hint(&sample()));
}
