//! In-memory record stores.
//!
//! One store per domain (users, products, orders). Each store owns an
//! ordered collection of records and a monotonic id counter. Absence is
//! a normal outcome (`Option`/`bool`), never an error: the gRPC adapter
//! layer turns it into a success-flagged payload.
//!
//! Stores are plain structs with `&mut self` mutation; the owning
//! service serializes access behind a `tokio::sync::RwLock`.

mod orders;
mod products;
mod users;

pub use orders::{Order, OrderItem, OrderStore};
pub use products::{Product, ProductFields, ProductStore};
pub use users::{User, UserStore};

/// Default page number when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE: i32 = 1;
/// Default page size when the caller supplies none (or a non-positive one).
pub const DEFAULT_LIMIT: i32 = 10;

/// One page of a filtered listing.
///
/// `total` is the filtered count, not the page length.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: i32,
    pub page: i32,
    pub limit: i32,
}

/// Normalize pagination parameters: non-positive values fall back to defaults.
pub(crate) fn normalize_page(page: i32, limit: i32) -> (i32, i32) {
    let page = if page <= 0 { DEFAULT_PAGE } else { page };
    let limit = if limit <= 0 { DEFAULT_LIMIT } else { limit };
    (page, limit)
}

/// Slice one page out of a filtered sequence.
///
/// Out-of-range pages yield an empty page with the correct total.
pub(crate) fn paginate<T: Clone>(filtered: Vec<&T>, page: i32, limit: i32) -> Listing<T> {
    let (page, limit) = normalize_page(page, limit);
    let total = filtered.len() as i32;

    let start = ((page - 1) as usize).saturating_mul(limit as usize);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    Listing {
        items,
        total,
        page,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page_defaults() {
        assert_eq!(normalize_page(0, 0), (1, 10));
        assert_eq!(normalize_page(-3, -1), (1, 10));
        assert_eq!(normalize_page(2, 25), (2, 25));
    }

    #[test]
    fn test_paginate_window() {
        let data: Vec<i32> = (1..=15).collect();
        let listing = paginate(data.iter().collect(), 2, 10);
        assert_eq!(listing.items, vec![11, 12, 13, 14, 15]);
        assert_eq!(listing.total, 15);
        assert_eq!(listing.page, 2);
        assert_eq!(listing.limit, 10);
    }

    #[test]
    fn test_paginate_out_of_range_page() {
        let data: Vec<i32> = (1..=5).collect();
        let listing = paginate(data.iter().collect(), 9, 10);
        assert!(listing.items.is_empty());
        assert_eq!(listing.total, 5);
    }
}
