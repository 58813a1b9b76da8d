//! Product record store.

use chrono::{DateTime, Utc};

use super::{paginate, Listing};

/// A stored product record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product fields supplied by the caller on create/update.
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: String,
}

/// In-memory product store with category filtering.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        store.create(ProductFields {
            name: "Laptop".to_string(),
            description: "High-performance laptop".to_string(),
            price: 999.99,
            quantity: 10,
            category: "Electronics".to_string(),
        });
        store.create(ProductFields {
            name: "Smartphone".to_string(),
            description: "Latest smartphone model".to_string(),
            price: 699.99,
            quantity: 25,
            category: "Electronics".to_string(),
        });
        store.create(ProductFields {
            name: "Coffee Mug".to_string(),
            description: "Ceramic coffee mug".to_string(),
            price: 12.99,
            quantity: 50,
            category: "Home".to_string(),
        });
        store
    }

    /// Create a product; always succeeds.
    pub fn create(&mut self, fields: ProductFields) -> Product {
        self.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: self.next_id.to_string(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
            category: fields.category,
            created_at: now,
            updated_at: now,
        };
        self.products.push(product.clone());
        product
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replace all mutable fields; id and created_at are immutable.
    pub fn update(&mut self, id: &str, fields: ProductFields) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.name = fields.name;
        product.description = fields.description;
        product.price = fields.price;
        product.quantity = fields.quantity;
        product.category = fields.category;
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Remove a product; returns false if the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() < before
    }

    /// List products in insertion order.
    ///
    /// A non-blank `category` filters by case-insensitive equality before
    /// pagination; `total` is the filtered count.
    pub fn list(&self, page: i32, limit: i32, category: &str) -> Listing<Product> {
        let category = category.trim();
        let filtered: Vec<&Product> = if category.is_empty() {
            self.products.iter().collect()
        } else {
            self.products
                .iter()
                .filter(|p| p.category.eq_ignore_ascii_case(category))
                .collect()
        };
        paginate(filtered, page, limit)
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, category: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 9.99,
            quantity: 5,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut store = ProductStore::new();
        let created = store.create(fields("Pen", "Office"));
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(*fetched, created);
        assert_eq!(fetched.category, "Office");
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let mut store = ProductStore::new();
        store.create(fields("Pen", "Office"));
        store.create(fields("Desk", "Furniture"));
        store.create(fields("Stapler", "office"));

        let listing = store.list(1, 10, "OFFICE");
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.total, 2);
        assert!(listing.items.iter().all(|p| p.category.eq_ignore_ascii_case("office")));
    }

    #[test]
    fn test_blank_filter_lists_everything() {
        let mut store = ProductStore::new();
        store.create(fields("Pen", "Office"));
        store.create(fields("Desk", "Furniture"));

        assert_eq!(store.list(1, 10, "").total, 2);
        assert_eq!(store.list(1, 10, "   ").total, 2);
    }

    #[test]
    fn test_filtered_total_with_pagination() {
        let mut store = ProductStore::new();
        for i in 0..12 {
            store.create(fields(&format!("P{i}"), "Bulk"));
        }
        store.create(fields("Other", "Misc"));

        let listing = store.list(2, 10, "bulk");
        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.total, 12);
    }

    #[test]
    fn test_update_replaces_mutable_fields() {
        let mut store = ProductStore::new();
        let created = store.create(fields("Pen", "Office"));
        let updated = store
            .update(
                &created.id,
                ProductFields {
                    name: "Gel Pen".to_string(),
                    description: "Smooth".to_string(),
                    price: 2.5,
                    quantity: 100,
                    category: "Stationery".to_string(),
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Gel Pen");
        assert_eq!(updated.quantity, 100);
    }

    #[test]
    fn test_delete_then_create_keeps_ids_unique() {
        let mut store = ProductStore::with_seed_data();
        assert!(store.delete("3"));
        let next = store.create(fields("New", "Misc"));
        assert_eq!(next.id, "4");
    }
}
