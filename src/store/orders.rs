//! Order record store.

use chrono::{DateTime, Utc};

use super::{paginate, Listing};

/// One line of an order.
///
/// `product_name` and `price` are snapshots taken at creation; later
/// product edits do not rewrite past orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

/// A stored order record.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    /// Not validated against the user store: cross-service trust boundary.
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Initial status for freshly created orders.
pub const STATUS_PENDING: &str = "pending";

/// In-memory order store with user filtering.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        let first = store.create(
            "1".to_string(),
            vec![
                OrderItem {
                    product_id: "1".to_string(),
                    product_name: "Laptop".to_string(),
                    quantity: 1,
                    price: 999.99,
                },
                OrderItem {
                    product_id: "3".to_string(),
                    product_name: "Coffee Mug".to_string(),
                    quantity: 2,
                    price: 12.99,
                },
            ],
        );
        store.update(&first.id, "confirmed");
        let second = store.create(
            "2".to_string(),
            vec![OrderItem {
                product_id: "2".to_string(),
                product_name: "Smartphone".to_string(),
                quantity: 1,
                price: 699.99,
            }],
        );
        store.update(&second.id, "shipped");
        store.create(
            "1".to_string(),
            vec![OrderItem {
                product_id: "3".to_string(),
                product_name: "Coffee Mug".to_string(),
                quantity: 5,
                price: 12.99,
            }],
        );
        store
    }

    /// Create an order; always succeeds.
    ///
    /// `total_amount` is computed here, once, from the submitted items and
    /// never recomputed afterwards. Status starts as [`STATUS_PENDING`].
    pub fn create(&mut self, user_id: String, items: Vec<OrderItem>) -> Order {
        self.next_id += 1;
        let now = Utc::now();
        let total_amount = items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum();
        let order = Order {
            id: self.next_id.to_string(),
            user_id,
            items,
            total_amount,
            status: STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.orders.push(order.clone());
        order
    }

    /// Look up an order by id.
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Update an order's status.
    ///
    /// Only `status` is mutable. An empty status leaves the record (and its
    /// `updated_at`) untouched, but still counts as found.
    pub fn update(&mut self, id: &str, status: &str) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        if !status.is_empty() {
            order.status = status.to_string();
            order.updated_at = Utc::now();
        }
        Some(order.clone())
    }

    /// Remove an order; returns false if the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() < before
    }

    /// List orders in insertion order.
    ///
    /// A non-empty `user_id` filters by equality before pagination.
    pub fn list(&self, page: i32, limit: i32, user_id: &str) -> Listing<Order> {
        let filtered: Vec<&Order> = if user_id.is_empty() {
            self.orders.iter().collect()
        } else {
            self.orders.iter().filter(|o| o.user_id == user_id).collect()
        };
        paginate(filtered, page, limit)
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i32, price: f64) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            product_name: format!("Product {product_id}"),
            quantity,
            price,
        }
    }

    #[test]
    fn test_create_computes_total_and_pending_status() {
        let mut store = OrderStore::new();
        let order = store.create("1".into(), vec![item("1", 2, 10.0), item("2", 1, 5.5)]);
        assert_eq!(order.total_amount, 25.5);
        assert_eq!(order.status, STATUS_PENDING);
        assert_eq!(order.items.len(), 2);
    }

    #[test]
    fn test_update_changes_only_status() {
        let mut store = OrderStore::new();
        let order = store.create("1".into(), vec![item("1", 1, 10.0)]);
        let updated = store.update(&order.id, "shipped").unwrap();
        assert_eq!(updated.status, "shipped");
        assert_eq!(updated.total_amount, order.total_amount);
        assert_eq!(updated.items, order.items);
        assert!(updated.updated_at >= order.updated_at);
    }

    #[test]
    fn test_update_empty_status_is_a_no_op() {
        let mut store = OrderStore::new();
        let order = store.create("1".into(), vec![item("1", 1, 10.0)]);
        let updated = store.update(&order.id, "").unwrap();
        assert_eq!(updated.status, STATUS_PENDING);
        assert_eq!(updated.updated_at, order.updated_at);
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = OrderStore::new();
        assert!(store.update("999", "shipped").is_none());
    }

    #[test]
    fn test_item_snapshots_survive_source_changes() {
        let mut store = OrderStore::new();
        let order = store.create("1".into(), vec![item("1", 1, 10.0)]);
        // The store holds copies; mutating the caller's items has no effect.
        let fetched = store.get(&order.id).unwrap();
        assert_eq!(fetched.items[0].product_name, "Product 1");
        assert_eq!(fetched.items[0].price, 10.0);
    }

    #[test]
    fn test_list_filters_by_user() {
        let mut store = OrderStore::new();
        store.create("1".into(), vec![item("1", 1, 10.0)]);
        store.create("2".into(), vec![item("2", 1, 20.0)]);
        store.create("1".into(), vec![item("3", 1, 30.0)]);

        let listing = store.list(1, 10, "1");
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.total, 2);
        assert!(listing.items.iter().all(|o| o.user_id == "1"));

        let all = store.list(1, 10, "");
        assert_eq!(all.total, 3);
    }

    #[test]
    fn test_seed_data_statuses() {
        let store = OrderStore::with_seed_data();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("1").unwrap().status, "confirmed");
        assert_eq!(store.get("2").unwrap().status, "shipped");
        assert_eq!(store.get("3").unwrap().status, STATUS_PENDING);
        assert!((store.get("1").unwrap().total_amount - 1025.97).abs() < 1e-9);
    }
}
