use recipe_cart::{normalize, normalize_all, parse_number, NormalizedIngredient, UnitCode};

fn assert_normalized(line: &str, name: &str, amount: f64, unit: UnitCode) {
    let ingredient = normalize(line);
    assert_eq!(ingredient.name, name, "name of {line:?}");
    assert_eq!(ingredient.quantity.amount, amount, "amount of {line:?}");
    assert_eq!(ingredient.quantity.unit, unit, "unit of {line:?}");
}

#[test]
fn test_common_lines() {
    assert_normalized("2 cups all-purpose flour", "all-purpose flour", 2.0, UnitCode::Cup);
    assert_normalized("1 1/2 teaspoons salt", "salt", 1.5, UnitCode::Teaspoon);
    assert_normalized("½ cup milk", "milk", 0.5, UnitCode::Cup);
    assert_normalized("3 tbsp olive oil", "olive oil", 3.0, UnitCode::Tablespoon);
    assert_normalized("1 lb chicken thighs", "chicken thighs", 1.0, UnitCode::Pound);
    assert_normalized("500 g pasta", "pasta", 500.0, UnitCode::Gram);
}

#[test]
fn test_compound_container() {
    assert_normalized(
        "1 (28 oz) can diced tomatoes",
        "canned diced tomatoes",
        28.0,
        UnitCode::Ounce,
    );
    assert_normalized(
        "2 (14.5 ounce) cans diced tomatoes, drained",
        "canned diced tomatoes",
        29.0,
        UnitCode::Ounce,
    );
    assert_normalized(
        "2 (14.5 ounce) cans diced tomatoes, undrained",
        "canned diced tomatoes",
        29.0,
        UnitCode::Ounce,
    );
}

#[test]
fn test_bare_counts_stay_one() {
    // the leading number is not a unit amount
    assert_normalized("2 eggs", "eggs", 1.0, UnitCode::Count);
    assert_normalized("3 large carrots", "large carrots", 1.0, UnitCode::Count);
}

#[test]
fn test_trailing_clauses() {
    assert_normalized("Salt to taste", "Salt", 1.0, UnitCode::Count);
    assert_normalized("1 cup sugar, divided", "sugar", 1.0, UnitCode::Cup);
    assert_normalized(
        "2 tablespoons butter, plus more for the pan",
        "butter",
        2.0,
        UnitCode::Tablespoon,
    );
    assert_normalized("1/4 cup walnuts, optional", "walnuts", 0.25, UnitCode::Cup);
}

#[test]
fn test_percentages_stay_in_name() {
    assert_normalized("2% milk", "2% milk", 1.0, UnitCode::Count);
    assert_normalized("1 cup 2% milk", "2% milk", 1.0, UnitCode::Cup);
    assert_normalized(
        "2 tablespoons 100% maple syrup",
        "100% maple syrup",
        2.0,
        UnitCode::Tablespoon,
    );
}

#[test]
fn test_preparation_words() {
    assert_normalized("1 cup chopped onion", "onion", 1.0, UnitCode::Cup);
    assert_normalized(
        "2 tablespoons finely minced garlic",
        "garlic",
        2.0,
        UnitCode::Tablespoon,
    );
}

#[test]
fn test_name_never_empty() {
    for line in ["2", "1 cup", "½", "   ", ""] {
        let ingredient = normalize(line);
        assert!(
            !ingredient.name.is_empty() || line.is_empty(),
            "empty name for {line:?}"
        );
    }
    assert_eq!(normalize("   ").name, "   ");
}

#[test]
fn test_amount_always_positive() {
    let lines = [
        "0 (0 oz) cans beans",
        "0/0 cup water",
        "pinch of salt",
        "1.5 kg potatoes",
        "⅓ cup cream",
    ];
    for ingredient in normalize_all(lines) {
        assert!(
            ingredient.quantity.amount > 0.0 && ingredient.quantity.amount.is_finite(),
            "bad amount for {}",
            ingredient.name
        );
    }
}

#[test]
fn test_zero_amount_falls_back_to_default() {
    assert_normalized("0 cups water", "water", 1.0, UnitCode::Count);
    assert_normalized("0/0 cup water", "water", 1.0, UnitCode::Count);
}

#[test]
fn test_normalize_all_keeps_order() {
    let lines = vec!["1 onion", "2 cups rice", "Salt to taste"];
    let names: Vec<String> = normalize_all(&lines)
        .into_iter()
        .map(|NormalizedIngredient { name, .. }| name)
        .collect();

    assert_eq!(names, vec!["onion", "rice", "Salt"]);
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("3"), Some(3.0));
    assert_eq!(parse_number("2.5"), Some(2.5));
    assert_eq!(parse_number("1 1/2"), Some(1.5));
    assert_eq!(parse_number("3/4"), Some(0.75));
    assert_eq!(parse_number("½"), Some(0.5));
    assert_eq!(parse_number("¾"), Some(0.75));
    assert_eq!(parse_number("1¼"), Some(1.25));
    assert_eq!(parse_number("1½"), Some(1.5));
    assert_eq!(parse_number("1/0"), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("2 cups"), Some(2.0));
    assert_eq!(parse_number("1.5kg"), Some(1.5));
    assert_eq!(parse_number("about 1/2"), Some(0.5));
}
