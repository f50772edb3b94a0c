#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use food_items_backend_rs::{
    app,
    modules::food_item::repository::{
        DataCompleteness, Error, FoodItem, FoodItemRepository, Filters, RatingSentiment,
    },
    types::{AppContext, Context},
    utils::pagination::{Page, PageRequest},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Filters items in memory with the same semantics as the SQL predicate.
#[derive(Default)]
pub struct InMemoryFoodItems {
    pub items: Vec<FoodItem>,
    pub last_call: Mutex<Option<(PageRequest, Filters)>>,
}

fn contains_ignore_case(haystack: &Option<String>, needle: &Option<String>) -> bool {
    match (haystack, needle) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(haystack), Some(needle)) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

impl InMemoryFoodItems {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items,
            last_call: Mutex::new(None),
        }
    }

    pub fn last_call(&self) -> Option<(PageRequest, Filters)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodItemRepository for InMemoryFoodItems {
    async fn find_many(&self, page: PageRequest, filters: Filters) -> Result<Page<FoodItem>, Error> {
        *self.last_call.lock().unwrap() = Some((page, filters.clone()));

        let matching = self
            .items
            .iter()
            .filter(|item| {
                filters
                    .rating_sentiment
                    .map_or(true, |wanted| item.rating_sentiment == Some(wanted))
            })
            .filter(|item| {
                filters
                    .data_completeness
                    .map_or(true, |wanted| item.data_completeness == Some(wanted))
            })
            .filter(|item| contains_ignore_case(&item.dish_name, &filters.dish_name))
            .filter(|item| contains_ignore_case(&item.vendor_name, &filters.vendor_name))
            .cloned()
            .collect::<Vec<_>>();

        Ok(Page {
            total: matching.len() as i64,
            items: matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect(),
        })
    }
}

/// Stands in for an unreachable database.
pub struct UnavailableFoodItems;

#[async_trait]
impl FoodItemRepository for UnavailableFoodItems {
    async fn find_many(&self, _: PageRequest, _: Filters) -> Result<Page<FoodItem>, Error> {
        Err(Error::UnexpectedError)
    }
}

pub struct PanickingFoodItems;

#[async_trait]
impl FoodItemRepository for PanickingFoodItems {
    async fn find_many(&self, _: PageRequest, _: Filters) -> Result<Page<FoodItem>, Error> {
        panic!("pool exhausted: connection reset by peer")
    }
}

/// 25 items cycling through every sentiment and completeness value,
/// including absent ones.
pub fn sample_items() -> Vec<FoodItem> {
    let sentiments = [
        Some(RatingSentiment::Positive),
        Some(RatingSentiment::Negative),
        Some(RatingSentiment::Neutral),
        None,
    ];
    let completeness = [
        Some(DataCompleteness::Complete),
        Some(DataCompleteness::Partial),
        Some(DataCompleteness::Minimal),
    ];
    let dishes = ["Beef Noodle Soup", "Pork Rice", "Bubble Tea", "Oyster Omelette", "Tofu"];
    let vendors = ["Lin's Stall", "Night Market Corner", "Auntie Chen"];

    (1..=25)
        .map(|i| FoodItem {
            id: i,
            review_id: 100 + i,
            dish_name: Some(format!("{} #{}", dishes[(i as usize) % dishes.len()], i)),
            vendor_name: if i % 7 == 0 {
                None
            } else {
                Some(vendors[(i as usize) % vendors.len()].to_string())
            },
            description: Some(format!("Extracted description {}", i)),
            price: if i % 2 == 0 { Some(format!("NT${}", i * 10)) } else { None },
            rating_sentiment: sentiments[(i as usize) % sentiments.len()],
            data_completeness: completeness[(i as usize) % completeness.len()],
            extracted_at: None,
        })
        .collect()
}

pub fn router(repository: Arc<dyn FoodItemRepository>) -> Router {
    let ctx = Context::new(
        AppContext {
            name: "Food Items API".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        repository,
    );
    app::router(Arc::new(ctx))
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
