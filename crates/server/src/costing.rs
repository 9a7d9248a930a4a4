//! Read-only recipe costing endpoints.
//!
//! Both endpoints degrade to empty/zero results for an unknown recipe id
//! instead of returning 404.

use api_types::costing::{RecipeCost, RecipeDetail, RecipeDetailsResponse};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, api_unit, server::ServerState, two_dp};

/// Handle requests for a recipe's costed ingredient lines.
pub async fn details(
    Path(recipe_id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<Json<RecipeDetailsResponse>, ServerError> {
    let details = state
        .engine
        .list_recipe_details(recipe_id)
        .await?
        .into_iter()
        .map(|detail| RecipeDetail {
            ingredient: detail.ingredient,
            unit: api_unit(detail.unit),
            cost_per_amount: detail.unit_cost,
            amount_per_recipe: two_dp(detail.amount_per_recipe),
            cost: detail.cost,
        })
        .collect();

    Ok(Json(RecipeDetailsResponse { details }))
}

/// Handle requests for a recipe's total cost.
pub async fn total(
    Path(recipe_id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<Json<RecipeCost>, ServerError> {
    let total = state.engine.total_cost(recipe_id).await?;
    Ok(Json(RecipeCost { total }))
}
