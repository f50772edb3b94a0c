use food_items_backend_rs::{
    app::{App, Error},
    types::Config,
};
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env().map_err(|err| {
        tracing::error!("{}", err);
        err
    })?;

    App::new(config).await?.serve().await
}
