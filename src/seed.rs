use std::path::Path;

use color_eyre::eyre::WrapErr;
use tracing::info;

use crate::entities::Listing;

const MOCK_PRODUCTS: &str = include_str!("../assets/mock_products.json");

/// The mock products every session starts from when no seed file is configured.
pub fn embedded() -> serde_json::Result<Vec<Listing>> {
    serde_json::from_str(MOCK_PRODUCTS)
}

pub fn from_path(path: &Path) -> color_eyre::Result<Vec<Listing>> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading seed file {}", path.display()))?;
    let listings: Vec<Listing> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("parsing seed file {}", path.display()))?;

    info!("Loaded {} listings from {}", listings.len(), path.display());
    Ok(listings)
}

pub fn load(path: Option<&Path>) -> color_eyre::Result<Vec<Listing>> {
    match path {
        Some(path) => from_path(path),
        None => Ok(embedded()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::KNOWN_CATEGORIES;
    use std::io::Write;

    #[test]
    fn embedded_seed_parses_with_unique_ids() {
        let listings = embedded().unwrap();
        assert!(!listings.is_empty());

        let mut ids: Vec<i64> = listings.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());

        for listing in &listings {
            assert!(!listing.name.is_empty());
            assert!(listing.price >= 0.0);
            assert!(KNOWN_CATEGORIES.contains(&listing.category.as_str()));
        }
    }

    #[test]
    fn seed_file_overrides_embedded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":10,"name":"Scope","price":90.5,"category":"Gear","image":"x","description":""}}]"#
        )
        .unwrap();

        let listings = load(Some(file.path())).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, 10);
        assert!((listings[0].price - 90.5).abs() < f64::EPSILON);
    }

    #[test]
    fn broken_seed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load(Some(file.path())).is_err());
    }
}
