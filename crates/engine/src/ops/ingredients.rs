//! Ingredient CRUD operations.

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, Unit, ingredients, recipe_formulas};

use super::{Engine, normalize_required_name, require_amount, with_tx};

/// Partial update for an ingredient. `None` fields are left unchanged; a
/// patch with every field present is a full update.
#[derive(Clone, Debug, Default)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub article_number: Option<i32>,
    pub cost_per_amount: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub unit: Option<Unit>,
}

impl Engine {
    /// Add a new ingredient.
    ///
    /// Name and article number must be free, `cost_per_amount` and `amount`
    /// strictly positive.
    pub async fn new_ingredient(
        &self,
        name: &str,
        article_number: i32,
        cost_per_amount: Decimal,
        amount: Decimal,
        unit: Unit,
    ) -> ResultEngine<ingredients::Model> {
        let name = normalize_required_name(name, "ingredient name")?;
        let cost_per_amount = require_amount(cost_per_amount, "cost_per_amount")?;
        let amount = require_amount(amount, "amount")?;

        self.ensure_ingredient_name_free(&name, None).await?;
        self.ensure_article_number_free(article_number, None).await?;

        let active = ingredients::ActiveModel {
            name: ActiveValue::Set(name),
            article_number: ActiveValue::Set(article_number),
            cost_per_amount: ActiveValue::Set(cost_per_amount),
            amount: ActiveValue::Set(amount),
            unit: ActiveValue::Set(unit.as_str().to_string()),
            ..Default::default()
        };
        Ok(active.insert(&self.database).await?)
    }

    /// Return an ingredient by id.
    pub async fn ingredient(&self, id: i32) -> ResultEngine<ingredients::Model> {
        ingredients::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("ingredient not exists".to_string()))
    }

    /// List all ingredients, ordered by name.
    pub async fn list_ingredients(&self) -> ResultEngine<Vec<ingredients::Model>> {
        Ok(ingredients::Entity::find()
            .order_by_asc(ingredients::Column::Name)
            .all(&self.database)
            .await?)
    }

    /// Apply a partial update to an ingredient.
    pub async fn update_ingredient(
        &self,
        id: i32,
        patch: IngredientPatch,
    ) -> ResultEngine<ingredients::Model> {
        let current = self.ingredient(id).await?;
        let mut active: ingredients::ActiveModel = current.into();

        if let Some(name) = patch.name {
            let name = normalize_required_name(&name, "ingredient name")?;
            self.ensure_ingredient_name_free(&name, Some(id)).await?;
            active.name = ActiveValue::Set(name);
        }
        if let Some(article_number) = patch.article_number {
            self.ensure_article_number_free(article_number, Some(id))
                .await?;
            active.article_number = ActiveValue::Set(article_number);
        }
        if let Some(cost_per_amount) = patch.cost_per_amount {
            active.cost_per_amount =
                ActiveValue::Set(require_amount(cost_per_amount, "cost_per_amount")?);
        }
        if let Some(amount) = patch.amount {
            active.amount = ActiveValue::Set(require_amount(amount, "amount")?);
        }
        if let Some(unit) = patch.unit {
            active.unit = ActiveValue::Set(unit.as_str().to_string());
        }

        Ok(active.update(&self.database).await?)
    }

    /// Delete an ingredient together with the formula rows that reference it.
    ///
    /// The dependent rows go first, in the same database transaction.
    pub async fn delete_ingredient(&self, id: i32) -> ResultEngine<()> {
        self.ingredient(id).await?;

        with_tx!(self, |tx| {
            recipe_formulas::Entity::delete_many()
                .filter(recipe_formulas::Column::IngredientId.eq(id))
                .exec(&tx)
                .await?;
            ingredients::Entity::delete_by_id(id).exec(&tx).await?;
            Ok(())
        })
    }

    async fn ensure_ingredient_name_free(
        &self,
        name: &str,
        exclude: Option<i32>,
    ) -> ResultEngine<()> {
        let mut query =
            ingredients::Entity::find().filter(ingredients::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(ingredients::Column::Id.ne(id));
        }
        if query.one(&self.database).await?.is_some() {
            return Err(EngineError::ExistingKey(format!("ingredient name {name}")));
        }
        Ok(())
    }

    async fn ensure_article_number_free(
        &self,
        article_number: i32,
        exclude: Option<i32>,
    ) -> ResultEngine<()> {
        let mut query = ingredients::Entity::find()
            .filter(ingredients::Column::ArticleNumber.eq(article_number));
        if let Some(id) = exclude {
            query = query.filter(ingredients::Column::Id.ne(id));
        }
        if query.one(&self.database).await?.is_some() {
            return Err(EngineError::ExistingKey(format!(
                "article_number {article_number}"
            )));
        }
        Ok(())
    }
}
