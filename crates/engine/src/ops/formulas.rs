//! Recipe formula CRUD operations.

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, ResultEngine, recipe_formulas};

use super::{Engine, require_amount};

/// Partial update for a formula row.
#[derive(Clone, Debug, Default)]
pub struct FormulaPatch {
    pub recipe_id: Option<i32>,
    pub ingredient_id: Option<i32>,
    pub amount_per_recipe: Option<Decimal>,
}

impl Engine {
    /// Add a formula row linking a recipe and an ingredient.
    ///
    /// Both referenced records must exist and `amount_per_recipe` must be
    /// strictly positive.
    pub async fn new_formula(
        &self,
        recipe_id: i32,
        ingredient_id: i32,
        amount_per_recipe: Decimal,
    ) -> ResultEngine<recipe_formulas::Model> {
        let amount_per_recipe = require_amount(amount_per_recipe, "amount_per_recipe")?;
        self.recipe(recipe_id).await?;
        self.ingredient(ingredient_id).await?;

        let active = recipe_formulas::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(ingredient_id),
            amount_per_recipe: ActiveValue::Set(amount_per_recipe),
            ..Default::default()
        };
        Ok(active.insert(&self.database).await?)
    }

    /// Return a formula row by id.
    pub async fn formula(&self, id: i32) -> ResultEngine<recipe_formulas::Model> {
        recipe_formulas::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("formula not exists".to_string()))
    }

    /// List all formula rows, ordered by recipe.
    pub async fn list_formulas(&self) -> ResultEngine<Vec<recipe_formulas::Model>> {
        Ok(recipe_formulas::Entity::find()
            .order_by_asc(recipe_formulas::Column::RecipeId)
            .all(&self.database)
            .await?)
    }

    /// List the formula rows belonging to one recipe.
    ///
    /// An unknown recipe id yields an empty list.
    pub async fn list_formulas_for_recipe(
        &self,
        recipe_id: i32,
    ) -> ResultEngine<Vec<recipe_formulas::Model>> {
        Ok(recipe_formulas::Entity::find()
            .filter(recipe_formulas::Column::RecipeId.eq(recipe_id))
            .order_by_asc(recipe_formulas::Column::Id)
            .all(&self.database)
            .await?)
    }

    /// Apply a partial update to a formula row.
    pub async fn update_formula(
        &self,
        id: i32,
        patch: FormulaPatch,
    ) -> ResultEngine<recipe_formulas::Model> {
        let current = self.formula(id).await?;
        let mut active: recipe_formulas::ActiveModel = current.into();

        if let Some(recipe_id) = patch.recipe_id {
            self.recipe(recipe_id).await?;
            active.recipe_id = ActiveValue::Set(recipe_id);
        }
        if let Some(ingredient_id) = patch.ingredient_id {
            self.ingredient(ingredient_id).await?;
            active.ingredient_id = ActiveValue::Set(ingredient_id);
        }
        if let Some(amount_per_recipe) = patch.amount_per_recipe {
            active.amount_per_recipe =
                ActiveValue::Set(require_amount(amount_per_recipe, "amount_per_recipe")?);
        }

        Ok(active.update(&self.database).await?)
    }

    /// Delete a formula row.
    pub async fn delete_formula(&self, id: i32) -> ResultEngine<()> {
        self.formula(id).await?;
        recipe_formulas::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(())
    }
}
