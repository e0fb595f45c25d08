use serde::{Deserialize, Serialize};

use crate::entities::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
}

/// Products page query. Every field is optional; an empty filter returns the
/// listings in store order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortBy>,
    pub limit: Option<usize>,
}

impl ListingFilter {
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = non_blank(self.category.as_deref()) {
            if !listing.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(search) = non_blank(self.search.as_deref()) {
            let needle = search.to_lowercase();
            if !listing.name.to_lowercase().contains(&needle)
                && !listing.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }

        !self.max_price.is_some_and(|max| listing.price > max)
    }

    /// Clones out the listings this filter selects, sorted and truncated.
    #[must_use]
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut selected: Vec<Listing> = listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect();

        // sort_by is stable, equal prices keep store order.
        match self.sort {
            Some(SortBy::PriceAsc) => selected.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(SortBy::PriceDesc) => selected.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }

        selected
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, name: &str, category: &str, price: f64, description: &str) -> Listing {
        Listing {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            image: String::new(),
            description: description.to_string(),
        }
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing(4, "Glock 19", "Pistol", 550.0, "Compact 9mm"),
            listing(3, "Remington 870", "Shotgun", 480.0, "Pump action"),
            listing(2, "AR-15 Carbine", "Rifle", 1200.0, "Includes red dot"),
            listing(1, "Plate Carrier", "Gear", 480.0, "Fits rifle plates"),
        ]
    }

    fn ids(listings: &[Listing]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[test]
    fn empty_filter_keeps_order() {
        let filter = ListingFilter::default();
        assert_eq!(ids(&filter.apply(&catalog())), vec![4, 3, 2, 1]);
    }

    #[test]
    fn category_ignores_case() {
        let filter = ListingFilter {
            category: Some("pistol".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![4]);
    }

    #[test]
    fn blank_category_is_ignored() {
        let filter = ListingFilter {
            category: Some("  ".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(filter.apply(&catalog()).len(), 4);
    }

    #[test]
    fn search_matches_name_or_description() {
        let filter = ListingFilter {
            search: Some("RIFLE".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![1]);

        let filter = ListingFilter {
            search: Some("carbine".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![2]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filter = ListingFilter {
            min_price: Some(480.0),
            max_price: Some(550.0),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![4, 3, 1]);
    }

    #[test]
    fn sort_is_stable_and_limit_applies_last() {
        let filter = ListingFilter {
            sort: Some(SortBy::PriceAsc),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![3, 1, 4, 2]);

        let filter = ListingFilter {
            sort: Some(SortBy::PriceDesc),
            limit: Some(2),
            ..ListingFilter::default()
        };
        assert_eq!(ids(&filter.apply(&catalog())), vec![2, 4]);
    }
}
