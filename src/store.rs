use std::collections::HashSet;

use tracing::debug;

use crate::entities::{Draft, Listing};

/// Outcome of [`ListingStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Created,
    Updated,
}

/// The session's listings, newest-created first.
///
/// Nothing here is persisted: a store lives as long as the process that built
/// it and starts again from its seed snapshot.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
    // Greater than every id in `listings`. `None` once an id of `i64::MAX`
    // has been stored and nothing above it is left to hand out.
    next_id: Option<i64>,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ListingStore {
    /// Builds a store from an initial snapshot. Later entries reusing an id
    /// already seen are dropped.
    #[must_use]
    pub fn new(seed: Vec<Listing>) -> Self {
        let mut seen = HashSet::with_capacity(seed.len());
        let listings: Vec<Listing> = seed
            .into_iter()
            .filter(|listing| {
                let fresh = seen.insert(listing.id);
                if !fresh {
                    debug!(id = listing.id, "dropping duplicate seed listing");
                }
                fresh
            })
            .collect();

        let next_id = listings
            .iter()
            .map(|l| l.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self { listings, next_id }
    }

    #[must_use]
    pub fn list(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Identifier the next [`create`](Self::create) will use, `None` when the
    /// id space is exhausted.
    #[must_use]
    pub const fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    /// Replaces the listing with the same id in place, or puts it at the front
    /// when the id is new.
    pub fn upsert(&mut self, listing: Listing) -> Upserted {
        if let Some(next) = self.next_id {
            if listing.id >= next {
                self.next_id = listing.id.checked_add(1);
            }
        }

        if let Some(slot) = self.listings.iter_mut().find(|l| l.id == listing.id) {
            *slot = listing;
            Upserted::Updated
        } else {
            self.listings.insert(0, listing);
            Upserted::Created
        }
    }

    /// Assigns the next identifier to `draft` and inserts it at the front.
    /// Returns `None`, leaving the store untouched, when no identifier above
    /// the stored ones is left.
    pub fn create(&mut self, draft: Draft) -> Option<Listing> {
        let listing = draft.with_id(self.next_id?);
        self.upsert(listing.clone());
        Some(listing)
    }

    /// Removes the listing with `id`. An unknown id leaves the store as it was.
    pub fn delete(&mut self, id: i64) -> Option<Listing> {
        let index = self.listings.iter().position(|l| l.id == id)?;
        Some(self.listings.remove(index))
    }
}
