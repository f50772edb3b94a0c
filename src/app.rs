use crate::{
    modules,
    types::{Config, ConfigError, Context, ToContext},
    utils::error::ApiError,
};
use axum::{
    http::{header, Method},
    response::{IntoResponse, Response},
    Router,
};
use std::{any::Any, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors, trace};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::unexpected(format!("handler panicked: {}", detail)).into_response()
}

/// Builds the full route table with its middleware stack.
pub fn router(ctx: Arc<Context>) -> Router {
    modules::get_router()
        .with_state(ctx)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([Method::OPTIONS, Method::GET])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, Error> {
        let ctx: Arc<Context> = Arc::new(config.to_context().await?);
        let router = router(ctx.clone());

        Ok(Self { ctx, router })
    }

    pub async fn serve(self) -> Result<(), Error> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
