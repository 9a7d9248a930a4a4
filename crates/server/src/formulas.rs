//! Recipe formula API endpoints

use api_types::formula::{Formula, FormulaNew, FormulaUpdate, FormulasResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{ServerError, server::ServerState, two_dp};
use engine::FormulaPatch;

fn view(model: engine::recipe_formulas::Model) -> Formula {
    Formula {
        id: model.id,
        recipe_id: model.recipe_id,
        ingredient_id: model.ingredient_id,
        amount_per_recipe: two_dp(model.amount_per_recipe),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one recipe's rows.
    pub recipe: Option<i32>,
}

/// Handle requests for creating a new formula row.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FormulaNew>,
) -> Result<(StatusCode, Json<Formula>), ServerError> {
    let model = state
        .engine
        .new_formula(
            payload.recipe_id,
            payload.ingredient_id,
            payload.amount_per_recipe,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(view(model))))
}

/// Handle requests for listing formula rows, optionally filtered by recipe.
pub async fn list(
    Query(query): Query<ListQuery>,
    State(state): State<ServerState>,
) -> Result<Json<FormulasResponse>, ServerError> {
    let models = match query.recipe {
        Some(recipe_id) => state.engine.list_formulas_for_recipe(recipe_id).await?,
        None => state.engine.list_formulas().await?,
    };

    Ok(Json(FormulasResponse {
        formulas: models.into_iter().map(view).collect(),
    }))
}

/// Handle requests for a single formula row.
pub async fn get(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<Json<Formula>, ServerError> {
    let model = state.engine.formula(id).await?;
    Ok(Json(view(model)))
}

/// Handle requests for updating a formula row.
pub async fn update(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
    Json(payload): Json<FormulaUpdate>,
) -> Result<Json<Formula>, ServerError> {
    let patch = FormulaPatch {
        recipe_id: payload.recipe_id,
        ingredient_id: payload.ingredient_id,
        amount_per_recipe: payload.amount_per_recipe,
    };
    let model = state.engine.update_formula(id, patch).await?;
    Ok(Json(view(model)))
}

/// Handle requests for deleting a formula row.
pub async fn remove(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_formula(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
