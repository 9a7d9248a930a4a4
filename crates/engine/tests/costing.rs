use engine::{Engine, EngineError, FormulaPatch, IngredientPatch, RecipePatch, Unit};
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::Database;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[tokio::test]
async fn create_ingredient_rejects_non_positive_amounts() {
    let engine = engine_with_db().await;

    let err = engine
        .new_ingredient("Flour", 1, dec("-1"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("0"), Unit::Kilogram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    // Rejected creates leave the table untouched.
    assert!(engine.list_ingredients().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_ingredient_rejects_out_of_range_decimals() {
    let engine = engine_with_db().await;

    // More than two fraction digits.
    let err = engine
        .new_ingredient("Saffron", 1, dec("2.555"), dec("1.00"), Unit::Gram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .new_ingredient("Salt", 2, dec("2.00"), dec("0.004"), Unit::Gram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    // More than six digits in total.
    let err = engine
        .new_ingredient("Gold", 3, dec("12345678.99"), dec("1.00"), Unit::Gram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    assert!(engine.list_ingredients().await.unwrap().is_empty());

    // The top of the range itself is fine.
    engine
        .new_ingredient("Feast", 4, dec("9999.99"), dec("1.00"), Unit::Gram)
        .await
        .unwrap();
}

#[tokio::test]
async fn formula_rejects_out_of_range_quantity() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let err = engine
        .new_formula(recipe.id, flour.id, dec("1.234"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .new_formula(recipe.id, flour.id, dec("10000"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    assert!(engine.list_formulas().await.unwrap().is_empty());
}

#[tokio::test]
async fn names_are_capped_at_eighty_characters() {
    let engine = engine_with_db().await;

    let long = "x".repeat(200);
    let err = engine
        .new_ingredient(&long, 1, dec("2.00"), dec("1.00"), Unit::Gram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    let err = engine.new_recipe(&long).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));

    // Exactly the limit is fine.
    engine.new_recipe(&"y".repeat(80)).await.unwrap();
}

#[tokio::test]
async fn create_ingredient_rejects_empty_name() {
    let engine = engine_with_db().await;

    let err = engine
        .new_ingredient("   ", 1, dec("2.00"), dec("1.00"), Unit::Gram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidName(_)));
}

#[tokio::test]
async fn ingredient_name_and_article_number_are_unique() {
    let engine = engine_with_db().await;

    engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let err = engine
        .new_ingredient("Flour", 2, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));

    let err = engine
        .new_ingredient("Sugar", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));

    assert_eq!(engine.list_ingredients().await.unwrap().len(), 1);
}

#[tokio::test]
async fn recipe_names_are_unique() {
    let engine = engine_with_db().await;

    engine.new_recipe("Bread").await.unwrap();
    let err = engine.new_recipe("Bread").await.unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));
}

#[tokio::test]
async fn update_ingredient_applies_partial_patch() {
    let engine = engine_with_db().await;

    let ingredient = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let updated = engine
        .update_ingredient(
            ingredient.id,
            IngredientPatch {
                cost_per_amount: Some(dec("3.50")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.cost_per_amount, dec("3.50"));
    assert_eq!(updated.name, "Flour");
    assert_eq!(updated.amount, dec("1.00"));
}

#[tokio::test]
async fn update_ingredient_rejects_taken_name() {
    let engine = engine_with_db().await;

    engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();
    let sugar = engine
        .new_ingredient("Sugar", 2, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let err = engine
        .update_ingredient(
            sugar.id,
            IngredientPatch {
                name: Some("Flour".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));

    // Re-setting its own name is not a conflict.
    engine
        .update_ingredient(
            sugar.id,
            IngredientPatch {
                name: Some("Sugar".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn formula_rejects_non_positive_quantity_and_missing_references() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let err = engine
        .new_formula(recipe.id, flour.id, dec("0"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let err = engine
        .new_formula(9999, flour.id, dec("1.00"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    let err = engine
        .new_formula(recipe.id, 9999, dec("1.00"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));

    assert!(engine.list_formulas().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_formula_retargets_and_revalidates() {
    let engine = engine_with_db().await;

    let bread = engine.new_recipe("Bread").await.unwrap();
    let cake = engine.new_recipe("Cake").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();

    let formula = engine
        .new_formula(bread.id, flour.id, dec("1.00"))
        .await
        .unwrap();

    let moved = engine
        .update_formula(
            formula.id,
            FormulaPatch {
                recipe_id: Some(cake.id),
                amount_per_recipe: Some(dec("2.50")),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.recipe_id, cake.id);
    assert_eq!(moved.amount_per_recipe, dec("2.50"));

    let err = engine
        .update_formula(
            formula.id,
            FormulaPatch {
                amount_per_recipe: Some(dec("-1")),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
}

#[tokio::test]
async fn deleting_recipe_cascades_to_formulas() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();
    engine
        .new_formula(recipe.id, flour.id, dec("1.00"))
        .await
        .unwrap();

    engine.delete_recipe(recipe.id).await.unwrap();

    assert!(engine.list_formulas().await.unwrap().is_empty());
    // The ingredient itself survives.
    assert_eq!(engine.list_ingredients().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_ingredient_cascades_to_formulas() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2.00"), dec("1.00"), Unit::Kilogram)
        .await
        .unwrap();
    engine
        .new_formula(recipe.id, flour.id, dec("1.00"))
        .await
        .unwrap();

    engine.delete_ingredient(flour.id).await.unwrap();

    assert!(engine.list_formulas().await.unwrap().is_empty());
    assert_eq!(engine.list_recipes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn double_delete_returns_not_found_every_time() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    engine.delete_recipe(recipe.id).await.unwrap();

    let err = engine.delete_recipe(recipe.id).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
    let err = engine.delete_recipe(recipe.id).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn empty_and_unknown_recipes_cost_zero() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();

    assert_eq!(engine.total_cost(recipe.id).await.unwrap(), "0.00");
    assert!(engine.list_recipe_details(recipe.id).await.unwrap().is_empty());

    // Unknown recipe ids degrade the same way instead of erroring.
    assert_eq!(engine.total_cost(9999).await.unwrap(), "0.00");
    assert!(engine.list_recipe_details(9999).await.unwrap().is_empty());
}

#[tokio::test]
async fn total_cost_sums_line_costs() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Stew").await.unwrap();
    let a = engine
        .new_ingredient("Carrot", 1, dec("2"), dec("1"), Unit::Kilogram)
        .await
        .unwrap();
    let b = engine
        .new_ingredient("Beef", 2, dec("3"), dec("1"), Unit::Kilogram)
        .await
        .unwrap();

    engine.new_formula(recipe.id, a.id, dec("10")).await.unwrap();
    engine.new_formula(recipe.id, b.id, dec("100")).await.unwrap();

    // 2/1 * 10 + 3/1 * 100 = 320
    assert_eq!(engine.total_cost(recipe.id).await.unwrap(), "320.00");
}

#[tokio::test]
async fn recipe_details_expose_unit_and_line_costs() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2"), dec("1"), Unit::Gram)
        .await
        .unwrap();
    engine
        .new_formula(recipe.id, flour.id, dec("10.00"))
        .await
        .unwrap();

    let details = engine.list_recipe_details(recipe.id).await.unwrap();
    assert_eq!(details.len(), 1);

    let detail = &details[0];
    assert_eq!(detail.ingredient, "Flour");
    assert_eq!(detail.unit, Unit::Gram);
    assert_eq!(detail.unit_cost, 2.0);
    assert_eq!(detail.amount_per_recipe, dec("10.00"));
    assert_eq!(detail.cost, 20.0);
}

#[tokio::test]
async fn details_only_include_the_requested_recipe() {
    let engine = engine_with_db().await;

    let bread = engine.new_recipe("Bread").await.unwrap();
    let cake = engine.new_recipe("Cake").await.unwrap();
    let flour = engine
        .new_ingredient("Flour", 1, dec("2"), dec("1"), Unit::Kilogram)
        .await
        .unwrap();

    engine.new_formula(bread.id, flour.id, dec("1")).await.unwrap();
    engine.new_formula(cake.id, flour.id, dec("5")).await.unwrap();

    assert_eq!(engine.list_recipe_details(bread.id).await.unwrap().len(), 1);
    assert_eq!(engine.total_cost(bread.id).await.unwrap(), "2.00");
    assert_eq!(engine.total_cost(cake.id).await.unwrap(), "10.00");
}

#[tokio::test]
async fn update_recipe_renames() {
    let engine = engine_with_db().await;

    let recipe = engine.new_recipe("Bread").await.unwrap();
    let renamed = engine
        .update_recipe(
            recipe.id,
            RecipePatch {
                name: Some("Sourdough".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Sourdough");

    let err = engine.recipe(9999).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}
