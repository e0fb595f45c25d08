use serde::{Deserialize, Serialize};

/// Tags offered by the listing form. Stored categories are free text and are
/// not checked against this list.
pub const KNOWN_CATEGORIES: [&str; 5] = ["Rifle", "Pistol", "Shotgun", "Sniper", "Gear"];

pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/id/10/600/400";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub description: String,
}

/// A listing that has not been given an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub description: String,
}

impl Draft {
    #[must_use]
    pub fn with_id(self, id: i64) -> Listing {
        Listing {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            image: self.image,
            description: self.description,
        }
    }
}
