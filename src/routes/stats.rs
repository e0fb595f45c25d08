use axum::{extract::State, Json};
use metrics::increment_counter;
use serde::Serialize;

use crate::{entities::Listing, AppState};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Stats {
    pub total_listings: usize,
    pub categories: Vec<CategoryCount>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub average_price: Option<f64>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl Stats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(listings: &[Listing]) -> Self {
        // categories are listed in order of first appearance
        let mut categories: Vec<CategoryCount> = Vec::new();
        for listing in listings {
            match categories.iter_mut().find(|c| c.category == listing.category) {
                Some(entry) => entry.count += 1,
                None => categories.push(CategoryCount {
                    category: listing.category.clone(),
                    count: 1,
                }),
            }
        }

        let prices = listings.iter().map(|l| l.price);
        let min_price = prices.clone().reduce(f64::min);
        let max_price = prices.clone().reduce(f64::max);
        let average_price = if listings.is_empty() {
            None
        } else {
            Some(prices.sum::<f64>() / listings.len() as f64)
        };

        Self {
            total_listings: listings.len(),
            categories,
            min_price,
            max_price,
            average_price,
        }
    }
}

pub async fn stats(State(state): State<AppState>) -> Json<Stats> {
    // The read guard spans the cache insert, so a writer can only invalidate
    // after the value computed here has landed.
    let store = state.store.read().await;
    let stats_value = state
        .stats_cache
        .get_with((), async {
            increment_counter!("armory_stats_cache_miss");
            Stats::compute(store.list())
        })
        .await;
    drop(store);

    Json(stats_value)
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct CacheStats {
    pub stats_cache_entry_count: u64,
}

#[allow(clippy::unused_async)]
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(CacheStats {
        stats_cache_entry_count: state.stats_cache.entry_count(),
    })
}
