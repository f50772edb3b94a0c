use super::types::{
    request,
    response::{self, FoodItemDto},
};
use crate::{
    modules::food_item::{
        filters::{resolve_enum, resolve_text},
        repository::Filters,
    },
    types::Context,
    utils::{
        error::ApiError,
        pagination::{self, PageRequest, Paginated},
    },
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let query = payload.query;

    let page = PageRequest::from_one_based(query.page, query.page_size).map_err(|err| match err {
        pagination::Error::PageOutOfRange(_) => ApiError::validation("page must be at least 1"),
        pagination::Error::PageSizeOutOfRange(_) => {
            ApiError::validation("pageSize must be between 1 and 100")
        }
    })?;

    let filters = Filters {
        rating_sentiment: resolve_enum(query.rating_sentiment.as_deref()),
        data_completeness: resolve_enum(query.data_completeness.as_deref()),
        dish_name: resolve_text(query.dish_name),
        vendor_name: resolve_text(query.vendor_name),
    };

    tracing::debug!(
        "Querying food items: page={}, size={}, filters={:?}",
        page.index,
        page.size,
        filters
    );

    let items = ctx
        .food_items
        .find_many(page, filters)
        .await
        .map_err(|err| ApiError::unexpected(format!("failed to fetch food items: {:?}", err)))?;

    Ok(response::Success::FoodItems(Paginated::new(
        items.map(FoodItemDto::from),
        page,
    )))
}
