use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Measurement unit of an ingredient, as it travels on the wire.
///
/// Mirrors the engine's unit enum; the server converts between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Centiliter,
    Liter,
}

pub mod ingredient {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IngredientNew {
        pub name: String,
        pub article_number: i32,
        /// Decimal with 2 fraction digits, serialized as a string.
        pub cost_per_amount: Decimal,
        /// Decimal with 2 fraction digits, serialized as a string.
        pub amount: Decimal,
        pub unit: Unit,
    }

    /// Partial update; absent fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct IngredientUpdate {
        pub name: Option<String>,
        pub article_number: Option<i32>,
        pub cost_per_amount: Option<Decimal>,
        pub amount: Option<Decimal>,
        pub unit: Option<Unit>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Ingredient {
        pub id: i32,
        pub name: String,
        pub article_number: i32,
        pub cost_per_amount: Decimal,
        pub amount: Decimal,
        pub unit: Unit,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IngredientsResponse {
        pub ingredients: Vec<Ingredient>,
    }
}

pub mod recipe {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeNew {
        pub name: String,
    }

    /// Partial update; absent fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RecipeUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Recipe {
        pub id: i32,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipesResponse {
        pub recipes: Vec<Recipe>,
    }
}

pub mod formula {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FormulaNew {
        pub recipe_id: i32,
        pub ingredient_id: i32,
        /// Decimal with 2 fraction digits, serialized as a string.
        pub amount_per_recipe: Decimal,
    }

    /// Partial update; absent fields are left unchanged.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct FormulaUpdate {
        pub recipe_id: Option<i32>,
        pub ingredient_id: Option<i32>,
        pub amount_per_recipe: Option<Decimal>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Formula {
        pub id: i32,
        pub recipe_id: i32,
        pub ingredient_id: i32,
        pub amount_per_recipe: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FormulasResponse {
        pub formulas: Vec<Formula>,
    }
}

pub mod costing {
    use super::*;

    /// One costed formula line of a recipe.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeDetail {
        /// Ingredient name.
        pub ingredient: String,
        pub unit: Unit,
        /// Cost of a single `unit` of the ingredient.
        pub cost_per_amount: f64,
        pub amount_per_recipe: Decimal,
        /// Line cost: unit cost times `amount_per_recipe`.
        pub cost: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeDetailsResponse {
        pub details: Vec<RecipeDetail>,
    }

    /// Total recipe cost rendered with exactly two fraction digits.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecipeCost {
        pub total: String,
    }
}
