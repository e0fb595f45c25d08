use serde::Deserialize;
use validator::Validate;

use crate::entities::{Draft, Listing, KNOWN_CATEGORIES, PLACEHOLDER_IMAGE};

/// Fields submitted by the sell and admin forms.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListingForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ListingForm {
    pub fn into_draft(self) -> Draft {
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| KNOWN_CATEGORIES[0].to_string());
        let image = self
            .image
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Draft {
            name: self.name.trim().to_string(),
            price: self.price,
            category,
            image,
            description: self.description,
        }
    }

    pub fn into_listing(self, id: i64) -> Listing {
        self.into_draft().with_id(id)
    }

    /// Applies an edit to `existing`. The edit form has no image field, so the
    /// stored image and category survive unless the form sends new ones.
    pub fn merge_into(self, existing: &Listing) -> Listing {
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| existing.category.clone());
        let image = self
            .image
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| existing.image.clone());

        Listing {
            id: existing.id,
            name: self.name.trim().to_string(),
            price: self.price,
            category,
            image,
            description: self.description,
        }
    }
}
