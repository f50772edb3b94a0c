use crate::utils::pagination::{Page, PageRequest};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::str::FromStr;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingSentiment {
    Positive,
    Negative,
    Neutral,
}

impl RatingSentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl FromStr for RatingSentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Positive, Self::Negative, Self::Neutral]
            .into_iter()
            .find(|member| member.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("'{}' is not a valid RatingSentiment", s))
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataCompleteness {
    Complete,
    Partial,
    Minimal,
}

impl DataCompleteness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Minimal => "minimal",
        }
    }
}

impl FromStr for DataCompleteness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Complete, Self::Partial, Self::Minimal]
            .into_iter()
            .find(|member| member.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("'{}' is not a valid DataCompleteness", s))
    }
}

/// One row of `extracted_food_items`. Rows are written by the extraction
/// pipeline; this service only reads them.
#[derive(Clone, Debug)]
pub struct FoodItem {
    pub id: i64,
    pub review_id: i64,
    pub dish_name: Option<String>,
    pub vendor_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub rating_sentiment: Option<RatingSentiment>,
    pub data_completeness: Option<DataCompleteness>,
    pub extracted_at: Option<NaiveDateTime>,
}

#[derive(FromRow)]
struct DatabaseFoodItem {
    id: i64,
    review_id: i64,
    dish_name: Option<String>,
    vendor_name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    rating_sentiment: Option<String>,
    data_completeness: Option<String>,
    extracted_at: Option<NaiveDateTime>,
}

fn parse_stored<T: FromStr<Err = String>>(id: i64, value: Option<String>) -> Option<T> {
    value?
        .parse()
        .map_err(|err| tracing::warn!("Ignoring stored value on food item {}: {}", id, err))
        .ok()
}

impl From<DatabaseFoodItem> for FoodItem {
    fn from(row: DatabaseFoodItem) -> Self {
        FoodItem {
            id: row.id,
            review_id: row.review_id,
            dish_name: row.dish_name,
            vendor_name: row.vendor_name,
            description: row.description,
            price: row.price,
            rating_sentiment: parse_stored(row.id, row.rating_sentiment),
            data_completeness: parse_stored(row.id, row.data_completeness),
            extracted_at: row.extracted_at,
        }
    }
}

/// Resolved filters; `None` means the predicate is not applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub rating_sentiment: Option<RatingSentiment>,
    pub data_completeness: Option<DataCompleteness>,
    pub dish_name: Option<String>,
    pub vendor_name: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    /// Returns the requested slice of matching items, ordered by id, along
    /// with the number of matches ignoring the slice.
    async fn find_many(&self, page: PageRequest, filters: Filters)
        -> Result<Page<FoodItem>, Error>;
}

pub struct PgFoodItemRepository {
    pool: PgPool,
}

impl PgFoodItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the needle is matched literally.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_predicate(query: &mut QueryBuilder<'_, Postgres>, filters: &Filters) {
    query.push(" WHERE TRUE");

    if let Some(sentiment) = filters.rating_sentiment {
        query.push(" AND rating_sentiment = ").push_bind(sentiment.as_str());
    }
    if let Some(completeness) = filters.data_completeness {
        query
            .push(" AND data_completeness = ")
            .push_bind(completeness.as_str());
    }
    if let Some(dish_name) = &filters.dish_name {
        query
            .push(" AND dish_name ILIKE CONCAT('%', ")
            .push_bind(escape_like(dish_name))
            .push(", '%')");
    }
    if let Some(vendor_name) = &filters.vendor_name {
        query
            .push(" AND vendor_name ILIKE CONCAT('%', ")
            .push_bind(escape_like(vendor_name))
            .push(", '%')");
    }
}

/// Matching rows for one page, in stable id order.
fn select_query(page: PageRequest, filters: &Filters) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT id, review_id, dish_name, vendor_name, description, price, \
         rating_sentiment, data_completeness, extracted_at FROM extracted_food_items",
    );
    push_predicate(&mut query, filters);
    query
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
    query
}

fn count_query(filters: &Filters) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT COUNT(id) FROM extracted_food_items");
    push_predicate(&mut query, filters);
    query
}

#[async_trait]
impl FoodItemRepository for PgFoodItemRepository {
    async fn find_many(
        &self,
        page: PageRequest,
        filters: Filters,
    ) -> Result<Page<FoodItem>, Error> {
        let mut select = select_query(page, &filters);

        let items = select
            .build_query_as::<DatabaseFoodItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch food items: {}", err);
                Error::UnexpectedError
            })?;

        let mut count = count_query(&filters);

        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to count food items: {}", err);
                Error::UnexpectedError
            })?;

        Ok(Page {
            items: items.into_iter().map(FoodItem::from).collect(),
            total,
        })
    }
}
