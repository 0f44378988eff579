use recibook::scaler::{format_amount, scaled_amount, scaled_ingredients};
use recibook::{scale, seed_recipe, Ingredient};

#[test]
fn test_identity_at_base_servings() {
    let flour = Ingredient::new(2.0, "cups", "flour");
    assert_eq!(scale(&flour, 4, 4), "2 cups flour");

    let sugar = Ingredient::new(0.75, "cup", "granulated sugar");
    assert_eq!(scale(&sugar, 4, 4), "0.8 cup granulated sugar");
}

#[test]
fn test_scaling_up_and_down() {
    let flour = Ingredient::new(2.0, "cups", "all-purpose flour");
    assert_eq!(scale(&flour, 8, 4), "4 cups all-purpose flour");
    assert_eq!(scale(&flour, 6, 4), "3 cups all-purpose flour");
    assert_eq!(scale(&flour, 1, 4), "0.5 cups all-purpose flour");
    assert_eq!(scale(&flour, 3, 4), "1.5 cups all-purpose flour");
}

#[test]
fn test_non_terminating_results_use_one_decimal() {
    let eggs = Ingredient::new(2.0, "large", "eggs");
    assert_eq!(scale(&eggs, 1, 3), "0.7 large eggs");
    assert_eq!(scale(&eggs, 5, 3), "3.3 large eggs");
}

#[test]
fn test_rounding_of_exact_ties_is_half_to_even() {
    // 0.5 * 1 / 2 = 0.25 and 0.5 * 3 / 2 = 0.75 are exact binary ties
    let cream = Ingredient::new(0.5, "cup", "heavy cream");
    assert_eq!(scale(&cream, 1, 2), "0.2 cup heavy cream");
    assert_eq!(scale(&cream, 3, 2), "0.8 cup heavy cream");
    assert_eq!(format_amount(1.25), "1.2");
    assert_eq!(format_amount(1.75), "1.8");
}

#[test]
fn test_zero_servings_is_not_rejected() {
    let salt = Ingredient::new(1.0, "tsp", "salt");
    assert_eq!(scale(&salt, 0, 4), "0 tsp salt");
}

#[test]
fn test_unit_and_name_pass_through_verbatim() {
    let butter = Ingredient::new(1.0, "cup", "butter, softened");
    assert_eq!(scale(&butter, 8, 4), "2 cup butter, softened");
}

#[test]
fn test_doubling_servings_doubles_amounts() {
    for amount in [0.75, 1.0, 2.0, 3.0, 8.0] {
        for base in 1..=8 {
            for servings in 1..=12 {
                let single = scaled_amount(amount, servings, base);
                let double = scaled_amount(amount, servings * 2, base);
                assert!((double - 2.0 * single).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_numeric_part_matches_formula() {
    for base in 1..=8u32 {
        for servings in 0..=24u32 {
            let ingredient = Ingredient::new(0.75, "cup", "sugar");
            let line = scale(&ingredient, servings, base);
            let number: f64 = line.split(' ').next().unwrap().parse().unwrap();
            let exact = 0.75 * servings as f64 / base as f64;
            if exact.fract() == 0.0 {
                assert_eq!(number, exact);
            } else {
                assert!((number - exact).abs() <= 0.05 + 1e-9, "{} vs {}", line, exact);
            }
        }
    }
}

#[test]
fn test_scaled_ingredients_keeps_display_order() {
    let seed = seed_recipe();
    let lines = scaled_ingredients(&seed, 8);
    assert_eq!(lines.len(), seed.ingredients.len());
    assert_eq!(lines[0], "4 cups all-purpose flour");
    assert_eq!(lines[4], "1.5 cup granulated sugar");
    assert_eq!(lines[8], "4 cups chocolate chips");
}
