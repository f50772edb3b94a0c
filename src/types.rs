pub use crate::utils::database;
use crate::modules::food_item::repository::{FoodItemRepository, PgFoodItemRepository};
use async_trait::async_trait;
use std::{env, sync::Arc};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            4,
        )?;
        let name = lookup("APP_NAME").unwrap_or_else(|| "Food Items API".to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("PORT", lookup("PORT"), 8080)?;

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            app: AppConfig { name, host, port },
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl From<AppConfig> for AppContext {
    fn from(config: AppConfig) -> Self {
        Self {
            name: config.name,
            host: config.host,
            port: config.port,
        }
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub food_items: Arc<dyn FoodItemRepository>,
}

impl Context {
    pub fn new(app: AppContext, food_items: Arc<dyn FoodItemRepository>) -> Self {
        Self { app, food_items }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, sqlx::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, sqlx::Error> {
        let db_conn =
            database::connect(&self.database.url, self.database.max_connections).await?;

        Ok(Context::new(
            self.app.into(),
            Arc::new(PgFoodItemRepository::new(db_conn.pool)),
        ))
    }
}
