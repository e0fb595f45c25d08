#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

use std::sync::Arc;

use moka::future::Cache;
use routes::stats::Stats;
use tokio::sync::RwLock;

pub use store::{ListingStore, Upserted};

pub mod config;
pub mod entities;
pub mod error;
pub mod filter;
pub mod form;
pub mod routes;
pub mod seed;
pub mod store;

pub type SharedStore = Arc<RwLock<ListingStore>>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    // Stats is a single object, the unit key is enough.
    pub stats_cache: Cache<(), Stats>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ListingStore, config: &config::Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            stats_cache: Cache::builder()
                .max_capacity(1)
                .time_to_live(config.stats_cache_ttl)
                .build(),
        }
    }

    /// Drops anything derived from the listings. Call after every mutation.
    pub async fn invalidate(&self) {
        self.stats_cache.invalidate(&()).await;
    }
}
