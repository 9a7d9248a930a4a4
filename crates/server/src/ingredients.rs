//! Ingredient API endpoints

use api_types::ingredient::{Ingredient, IngredientNew, IngredientUpdate, IngredientsResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, api_unit, engine_unit, server::ServerState, two_dp};
use engine::IngredientPatch;

fn view(model: engine::ingredients::Model) -> Result<Ingredient, ServerError> {
    let unit = engine::Unit::try_from(model.unit.as_str())?;
    Ok(Ingredient {
        id: model.id,
        name: model.name,
        article_number: model.article_number,
        cost_per_amount: two_dp(model.cost_per_amount),
        amount: two_dp(model.amount),
        unit: api_unit(unit),
    })
}

/// Handle requests for creating a new ingredient.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<IngredientNew>,
) -> Result<(StatusCode, Json<Ingredient>), ServerError> {
    let model = state
        .engine
        .new_ingredient(
            &payload.name,
            payload.article_number,
            payload.cost_per_amount,
            payload.amount,
            engine_unit(payload.unit),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view(model)?)))
}

/// Handle requests for listing ingredients.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<IngredientsResponse>, ServerError> {
    let ingredients = state
        .engine
        .list_ingredients()
        .await?
        .into_iter()
        .map(view)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(IngredientsResponse { ingredients }))
}

/// Handle requests for a single ingredient.
pub async fn get(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<Json<Ingredient>, ServerError> {
    let model = state.engine.ingredient(id).await?;
    Ok(Json(view(model)?))
}

/// Handle requests for updating an ingredient.
pub async fn update(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
    Json(payload): Json<IngredientUpdate>,
) -> Result<Json<Ingredient>, ServerError> {
    let patch = IngredientPatch {
        name: payload.name,
        article_number: payload.article_number,
        cost_per_amount: payload.cost_per_amount,
        amount: payload.amount,
        unit: payload.unit.map(engine_unit),
    };
    let model = state.engine.update_ingredient(id, patch).await?;
    Ok(Json(view(model)?))
}

/// Handle requests for deleting an ingredient (cascades to its formulas).
pub async fn remove(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_ingredient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
