#![forbid(unsafe_code)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::nursery)]
#![deny(clippy::pedantic)]

use std::path::PathBuf;

use armory_market::{
    entities::KNOWN_CATEGORIES, form::ListingForm, routes::stats::Stats, seed, ListingStore,
};
use color_eyre::eyre::eyre;
use tracing::{info, warn};
use validator::Validate;

// Tool to check a seed file before serving it. Uses the embedded mock products
// when no path is given.
fn main() -> color_eyre::Result<()> {
    dotenvy::dotenv().ok();
    std::env::set_var(
        "RUST_LOG",
        std::env::var("RUST_LOG").unwrap_or_else(|_| String::from("info")),
    );

    // initialize tracing
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let listings = seed::load(path.as_deref())?;
    let seeded = listings.len();

    let mut problems = 0;
    for listing in &listings {
        let form = ListingForm {
            name: listing.name.clone(),
            price: listing.price,
            category: Some(listing.category.clone()),
            description: listing.description.clone(),
            image: Some(listing.image.clone()),
        };
        if let Err(errors) = form.validate() {
            warn!(id = listing.id, "{errors}");
            problems += 1;
        }
        if !KNOWN_CATEGORIES.contains(&listing.category.as_str()) {
            warn!(id = listing.id, category = %listing.category, "unknown category");
        }
    }

    let store = ListingStore::new(listings);
    if store.len() != seeded {
        warn!("{} listings share an id and will be dropped", seeded - store.len());
    }

    let stats = Stats::compute(store.list());
    info!("total_listings = {}", stats.total_listings);
    for category in &stats.categories {
        info!("{} = {}", category.category, category.count);
    }
    if let Some(average) = stats.average_price {
        info!("average_price = {average:.2}");
    }
    match store.next_id() {
        Some(next_id) => info!("next_id = {next_id}"),
        None => warn!("seed uses id {}, new listings cannot be created", i64::MAX),
    }

    if problems > 0 {
        return Err(eyre!("{problems} listings failed validation"));
    }

    Ok(())
}
