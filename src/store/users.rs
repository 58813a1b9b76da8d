//! User record store.

use chrono::{DateTime, Utc};

use super::{paginate, Listing};

/// A stored user record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory user store.
///
/// Ids come from a counter that only increments, so a delete followed by
/// a create never reuses an id.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with demo records.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        store.create("john@example.com".to_string(), "John Doe".to_string());
        store.create("jane@example.com".to_string(), "Jane Smith".to_string());
        store
    }

    /// Create a user; always succeeds.
    pub fn create(&mut self, email: String, name: String) -> User {
        self.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: self.next_id.to_string(),
            email,
            name,
            created_at: now,
            updated_at: now,
        };
        self.users.push(user.clone());
        user
    }

    /// Look up a user by id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Replace all mutable fields; id and created_at are immutable.
    pub fn update(&mut self, id: &str, email: String, name: String) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.email = email;
        user.name = name;
        user.updated_at = Utc::now();
        Some(user.clone())
    }

    /// Remove a user; returns false if the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() < before
    }

    /// List users in insertion order. No filter for this domain.
    pub fn list(&self, page: i32, limit: i32) -> Listing<User> {
        paginate(self.users.iter().collect(), page, limit)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
