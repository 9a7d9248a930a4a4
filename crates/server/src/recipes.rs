//! Recipe API endpoints

use api_types::recipe::{Recipe, RecipeNew, RecipeUpdate, RecipesResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};
use engine::RecipePatch;

fn view(model: engine::recipes::Model) -> Recipe {
    Recipe {
        id: model.id,
        name: model.name,
    }
}

/// Handle requests for creating a new recipe.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RecipeNew>,
) -> Result<(StatusCode, Json<Recipe>), ServerError> {
    let model = state.engine.new_recipe(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(view(model))))
}

/// Handle requests for listing recipes.
pub async fn list(State(state): State<ServerState>) -> Result<Json<RecipesResponse>, ServerError> {
    let recipes = state
        .engine
        .list_recipes()
        .await?
        .into_iter()
        .map(view)
        .collect();

    Ok(Json(RecipesResponse { recipes }))
}

/// Handle requests for a single recipe.
pub async fn get(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<Json<Recipe>, ServerError> {
    let model = state.engine.recipe(id).await?;
    Ok(Json(view(model)))
}

/// Handle requests for updating a recipe.
pub async fn update(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
    Json(payload): Json<RecipeUpdate>,
) -> Result<Json<Recipe>, ServerError> {
    let patch = RecipePatch { name: payload.name };
    let model = state.engine.update_recipe(id, patch).await?;
    Ok(Json(view(model)))
}

/// Handle requests for deleting a recipe (cascades to its formulas).
pub async fn remove(
    Path(id): Path<i32>,
    State(state): State<ServerState>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
