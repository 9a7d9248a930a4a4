//! Cost aggregation over a recipe's formula lines.
//!
//! Read-only: joins `recipe_formulas` with `ingredients` and derives
//!
//! - `unit_cost = cost_per_amount / amount` (cost of one measurement unit)
//! - `line_cost = unit_cost * amount_per_recipe`
//!
//! Intermediate values stay in `f64` without per-line rounding; only the
//! rendered total is rounded to two fraction digits. An unknown recipe id
//! degrades to an empty listing / `"0.00"` instead of an error.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{ResultEngine, Unit, ingredients, recipe_formulas};

use super::Engine;

/// One costed formula line of a recipe.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetail {
    pub ingredient: String,
    pub unit: Unit,
    /// Cost of a single `unit` of the ingredient.
    pub unit_cost: f64,
    pub amount_per_recipe: Decimal,
    /// `unit_cost * amount_per_recipe`.
    pub cost: f64,
}

impl Engine {
    /// Return every formula line of a recipe with its derived costs.
    pub async fn list_recipe_details(&self, recipe_id: i32) -> ResultEngine<Vec<RecipeDetail>> {
        let rows: Vec<(recipe_formulas::Model, Option<ingredients::Model>)> =
            recipe_formulas::Entity::find()
                .filter(recipe_formulas::Column::RecipeId.eq(recipe_id))
                .order_by_asc(recipe_formulas::Column::Id)
                .find_also_related(ingredients::Entity)
                .all(&self.database)
                .await?;

        let mut out = Vec::with_capacity(rows.len());
        for (formula, ingredient) in rows {
            let Some(ingredient) = ingredient else { continue };
            let unit_cost = unit_cost(ingredient.cost_per_amount, ingredient.amount);
            let cost = unit_cost * decimal_to_f64(formula.amount_per_recipe);
            out.push(RecipeDetail {
                ingredient: ingredient.name,
                unit: Unit::try_from(ingredient.unit.as_str())?,
                unit_cost,
                amount_per_recipe: formula.amount_per_recipe,
                cost,
            });
        }
        Ok(out)
    }

    /// Sum of line costs for a recipe, rendered with two fraction digits.
    pub async fn total_cost(&self, recipe_id: i32) -> ResultEngine<String> {
        let total: f64 = self
            .list_recipe_details(recipe_id)
            .await?
            .iter()
            .map(|detail| detail.cost)
            .sum();
        Ok(render_total(total))
    }
}

fn unit_cost(cost_per_amount: Decimal, amount: Decimal) -> f64 {
    // amount > 0 is enforced at write time, so the division is safe.
    decimal_to_f64(cost_per_amount) / decimal_to_f64(amount)
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn render_total(total: f64) -> String {
    format!("{total:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn unit_cost_divides_cost_by_amount() {
        assert_eq!(unit_cost(dec("2.00"), dec("1.00")), 2.0);
        assert_eq!(unit_cost(dec("5.00"), dec("2.00")), 2.5);
    }

    #[test]
    fn render_total_always_shows_two_fraction_digits() {
        assert_eq!(render_total(0.0), "0.00");
        assert_eq!(render_total(320.0), "320.00");
        assert_eq!(render_total(1.005e2), "100.50");
    }
}
