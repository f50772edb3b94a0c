use crate::{modules, types::Context};
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    let api = Router::new()
        .merge(modules::health::routes::get_api_router())
        .merge(modules::food_item::routes::get_router());

    Router::new()
        .merge(modules::health::routes::get_router())
        .nest("/api", api)
}
