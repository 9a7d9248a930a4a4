use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{costing, formulas, ingredients, recipes};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/ingredients",
            get(ingredients::list).post(ingredients::create),
        )
        .route(
            "/ingredients/{id}",
            get(ingredients::get)
                .patch(ingredients::update)
                .delete(ingredients::remove),
        )
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/{id}",
            get(recipes::get)
                .patch(recipes::update)
                .delete(recipes::remove),
        )
        .route("/recipes/{id}/details", get(costing::details))
        .route("/recipes/{id}/cost", get(costing::total))
        .route("/formulas", get(formulas::list).post(formulas::create))
        .route(
            "/formulas/{id}",
            get(formulas::get)
                .patch(formulas::update)
                .delete(formulas::remove),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
