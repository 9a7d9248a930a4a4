use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, router, run_with_listener};

mod costing;
mod formulas;
mod ingredients;
mod recipes;
mod server;

pub mod types {
    pub mod ingredient {
        pub use api_types::ingredient::{
            Ingredient, IngredientNew, IngredientUpdate, IngredientsResponse,
        };
    }

    pub mod recipe {
        pub use api_types::recipe::{Recipe, RecipeNew, RecipeUpdate, RecipesResponse};
    }

    pub mod formula {
        pub use api_types::formula::{Formula, FormulaNew, FormulaUpdate, FormulasResponse};
    }

    pub mod costing {
        pub use api_types::costing::{RecipeCost, RecipeDetail, RecipeDetailsResponse};
    }
}

pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidAmount(_) | EngineError::InvalidName(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

fn api_unit(unit: engine::Unit) -> api_types::Unit {
    match unit {
        engine::Unit::Gram => api_types::Unit::Gram,
        engine::Unit::Kilogram => api_types::Unit::Kilogram,
        engine::Unit::Centiliter => api_types::Unit::Centiliter,
        engine::Unit::Liter => api_types::Unit::Liter,
    }
}

/// Pin a decimal to exactly two fraction digits for the wire.
///
/// The sqlite backend round-trips decimals through `f64`, which drops
/// trailing zeros ("2.00" comes back as "2"); responses re-apply the
/// column scale so clients always see two fraction digits.
fn two_dp(mut value: rust_decimal::Decimal) -> rust_decimal::Decimal {
    value.rescale(2);
    value
}

fn engine_unit(unit: api_types::Unit) -> engine::Unit {
    match unit {
        api_types::Unit::Gram => engine::Unit::Gram,
        api_types::Unit::Kilogram => engine::Unit::Kilogram,
        api_types::Unit::Centiliter => engine::Unit::Centiliter,
        api_types::Unit::Liter => engine::Unit::Liter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidAmount("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = ServerError::from(EngineError::InvalidName("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
