use super::{service::service, types::request};
use crate::{types::Context, utils::validation::ValidatedQuery};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    ValidatedQuery(query): ValidatedQuery<request::Query>,
) -> impl IntoResponse {
    service(ctx, request::Payload { query }).await
}
