use recipe_cart::{extract, RecipeExtractor};

fn create_recipe_html(head: &str, body: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            {head}
        </head>
        <body>
            {body}
        </body>
        </html>
        "#
    )
}

fn json_ld_script(json: &str) -> String {
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

#[test]
fn test_json_ld_recipe() {
    let html = create_recipe_html(
        &format!(
            "<title>Best Lasagna | Food Blog</title>{}",
            json_ld_script(
                r#"{
                    "@context": "https://schema.org",
                    "@type": "Recipe",
                    "name": "Best Lasagna",
                    "recipeIngredient": [
                        "1 pound sweet Italian sausage",
                        "1 (28 ounce) can crushed tomatoes",
                        "2 tablespoons white sugar"
                    ]
                }"#
            )
        ),
        "",
    );

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Best Lasagna");
    assert_eq!(
        recipe.ingredients,
        vec![
            "1 pound sweet Italian sausage",
            "1 (28 ounce) can crushed tomatoes",
            "2 tablespoons white sugar"
        ]
    );
}

#[test]
fn test_malformed_block_skipped() {
    let html = create_recipe_html(
        &format!(
            "{}{}",
            json_ld_script(r#"{ this is { not json"#),
            json_ld_script(
                r#"{"@type": "Recipe", "name": "Pesto", "recipeIngredient": ["2 cups basil", "1/2 cup olive oil"]}"#
            )
        ),
        "",
    );

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Pesto");
    assert_eq!(recipe.ingredients, vec!["2 cups basil", "1/2 cup olive oil"]);
}

#[test]
fn test_first_recipe_with_ingredients_wins() {
    let html = create_recipe_html(
        &format!(
            "{}{}",
            json_ld_script(r#"{"@type": "Recipe", "name": "Teaser", "recipeIngredient": []}"#),
            json_ld_script(
                r#"{"@type": "Recipe", "name": "Full Recipe", "recipeIngredient": ["3 eggs"]}"#
            )
        ),
        "",
    );

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Teaser");
    assert_eq!(recipe.ingredients, vec!["3 eggs"]);
}

#[test]
fn test_html_list_fallback() {
    let html = create_recipe_html(
        "<title>Grandma's Cookies</title>",
        r#"
        <nav><ul class="menu"><li>Home</li><li>Recipes</li></ul></nav>
        <ul class="recipe-ingredients">
            <li>2 cups   flour</li>
            <li></li>
            <li><strong>1</strong> cup sugar</li>
        </ul>
        "#,
    );

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Grandma's Cookies");
    assert_eq!(recipe.ingredients, vec!["2 cups flour", "1 cup sugar"]);
}

#[test]
fn test_json_ld_without_ingredients_falls_back_to_lists() {
    let html = create_recipe_html(
        &json_ld_script(r#"{"@type": "Recipe", "name": "Quick Salad"}"#),
        r#"<ol id="ingredientList"><li>1 head lettuce</li><li>2 tomatoes</li></ol>"#,
    );

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Quick Salad");
    assert_eq!(recipe.ingredients, vec!["1 head lettuce", "2 tomatoes"]);
}

#[test]
fn test_no_recipe_on_page() {
    let html = create_recipe_html("", "<p>Nothing to cook here.</p>");

    let recipe = extract(&html);
    assert_eq!(recipe.title, "Recipe");
    assert!(recipe.ingredients.is_empty());
    assert!(!recipe.has_ingredients());
}

#[test]
fn test_empty_document() {
    let recipe = extract("");
    assert_eq!(recipe.title, "Recipe");
    assert!(recipe.ingredients.is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let html = create_recipe_html(
        "<title>Chili</title>",
        r#"<div class="ingredients"><ul><li>1 lb beef</li><li>1 onion</li></ul></div>"#,
    );

    let extractor = RecipeExtractor::default();
    assert_eq!(extractor.extract(&html), extractor.extract(&html));
}
