//! Recipe CRUD operations.

use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, recipe_formulas, recipes};

use super::{Engine, normalize_required_name, with_tx};

/// Partial update for a recipe.
#[derive(Clone, Debug, Default)]
pub struct RecipePatch {
    pub name: Option<String>,
}

impl Engine {
    /// Add a new recipe. The name must be non-empty and free.
    pub async fn new_recipe(&self, name: &str) -> ResultEngine<recipes::Model> {
        let name = normalize_required_name(name, "recipe name")?;
        self.ensure_recipe_name_free(&name, None).await?;

        let active = recipes::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        };
        Ok(active.insert(&self.database).await?)
    }

    /// Return a recipe by id.
    pub async fn recipe(&self, id: i32) -> ResultEngine<recipes::Model> {
        recipes::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("recipe not exists".to_string()))
    }

    /// List all recipes, ordered by name.
    pub async fn list_recipes(&self) -> ResultEngine<Vec<recipes::Model>> {
        Ok(recipes::Entity::find()
            .order_by_asc(recipes::Column::Name)
            .all(&self.database)
            .await?)
    }

    /// Apply a partial update to a recipe.
    pub async fn update_recipe(&self, id: i32, patch: RecipePatch) -> ResultEngine<recipes::Model> {
        let current = self.recipe(id).await?;
        let mut active: recipes::ActiveModel = current.into();

        if let Some(name) = patch.name {
            let name = normalize_required_name(&name, "recipe name")?;
            self.ensure_recipe_name_free(&name, Some(id)).await?;
            active.name = ActiveValue::Set(name);
        }

        Ok(active.update(&self.database).await?)
    }

    /// Delete a recipe together with its formula rows.
    pub async fn delete_recipe(&self, id: i32) -> ResultEngine<()> {
        self.recipe(id).await?;

        with_tx!(self, |tx| {
            recipe_formulas::Entity::delete_many()
                .filter(recipe_formulas::Column::RecipeId.eq(id))
                .exec(&tx)
                .await?;
            recipes::Entity::delete_by_id(id).exec(&tx).await?;
            Ok(())
        })
    }

    async fn ensure_recipe_name_free(&self, name: &str, exclude: Option<i32>) -> ResultEngine<()> {
        let mut query = recipes::Entity::find().filter(recipes::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(recipes::Column::Id.ne(id));
        }
        if query.one(&self.database).await?.is_some() {
            return Err(EngineError::ExistingKey(format!("recipe name {name}")));
        }
        Ok(())
    }
}
