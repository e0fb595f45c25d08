#![forbid(unsafe_code)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]

use armory_market::{config::Config, routes, seed, AppState, ListingStore};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let listings = seed::load(config.seed_path.as_deref())?;
    let store = ListingStore::new(listings);
    info!("Session catalog seeded with {} listings", store.len());

    let state = AppState::new(store, &config);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = routes::router(state)
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);

    info!("listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("could not listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
