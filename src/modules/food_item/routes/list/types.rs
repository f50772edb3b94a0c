pub mod request {
    use crate::utils::validation::integer;
    use serde::{Deserialize, Deserializer};
    use validator::Validate;

    fn default_page() -> i64 {
        1
    }

    fn default_page_size() -> i64 {
        20
    }

    fn page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        integer(deserializer, "page must be an integer")
    }

    fn page_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        integer(deserializer, "pageSize must be an integer")
    }

    #[derive(Deserialize, Validate, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct Query {
        #[serde(default = "default_page", deserialize_with = "page")]
        #[validate(range(min = 1, message = "page must be at least 1"))]
        pub page: i64,
        #[serde(default = "default_page_size", deserialize_with = "page_size")]
        #[validate(range(min = 1, max = 100, message = "pageSize must be between 1 and 100"))]
        pub page_size: i64,
        pub rating_sentiment: Option<String>,
        pub data_completeness: Option<String>,
        pub dish_name: Option<String>,
        pub vendor_name: Option<String>,
    }

    pub struct Payload {
        pub query: Query,
    }
}

pub mod response {
    use crate::{
        modules::food_item::repository::{DataCompleteness, FoodItem, RatingSentiment},
        utils::{error::ApiError, pagination::Paginated, response::ApiResponse},
    };
    use axum::response::IntoResponse;
    use serde::Serialize;

    /// Public projection of a food item; internal ids and the extraction
    /// timestamp are not exposed.
    #[derive(Serialize, Clone, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct FoodItemDto {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub dish_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vendor_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub price: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub rating_sentiment: Option<RatingSentiment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub data_completeness: Option<DataCompleteness>,
    }

    impl From<FoodItem> for FoodItemDto {
        fn from(item: FoodItem) -> Self {
            FoodItemDto {
                dish_name: item.dish_name,
                vendor_name: item.vendor_name,
                description: item.description,
                price: item.price,
                rating_sentiment: item.rating_sentiment,
                data_completeness: item.data_completeness,
            }
        }
    }

    pub enum Success {
        FoodItems(Paginated<FoodItemDto>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodItems(items) => ApiResponse::success(items).into_response(),
            }
        }
    }

    pub type Response = Result<Success, ApiError>;
}
