//! The in-memory record store backing the roster.

use juniper::GraphQLObject;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A member of the roster.
///
/// The default value (empty `id`, empty `username`) doubles as the "empty
/// user" returned for lookups that match nothing.
#[derive(GraphQLObject, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,
    /// Display name. Mutable, and not required to be unique.
    pub username: String,
}

/// Insertion-ordered collection of [`User`] records.
///
/// Every method takes `&self`; the backing vector sits behind an [`RwLock`]
/// so overlapping requests serialize on the guard. Nothing is persisted,
/// a restart starts over from the seed records.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create a store seeded with the initial roster.
    pub fn new() -> Self {
        let users = vec![
            User {
                id: String::from("a"),
                username: String::from("Felix"),
            },
            User {
                id: String::from("b"),
                username: String::from("Jan"),
            },
            User {
                id: String::from("c"),
                username: String::from("Gregor"),
            },
        ];
        Self {
            users: RwLock::new(users),
        }
    }

    /// Find a user by id. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.read().iter().find(|user| user.id == id).cloned()
    }

    /// Append a record to the end of the roster.
    ///
    /// Uniqueness of the id is the caller's business; the resolver layer
    /// always supplies a freshly generated one.
    pub fn append(&self, user: User) {
        self.users.write().push(user);
    }

    /// Overwrite the username of the record with the given id, in place.
    ///
    /// Returns the updated record, or `None` when no record matches. The
    /// store is left untouched in that case.
    pub fn update_username(&self, id: &str, username: String) -> Option<User> {
        let mut users = self.users.write();
        let user = users.iter_mut().find(|user| user.id == id)?;
        user.username = username;
        Some(user.clone())
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.read().clone()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usernames(store: &UserStore) -> Vec<String> {
        store.list().into_iter().map(|user| user.username).collect()
    }

    #[test]
    fn seeds_three_records_in_order() {
        let store = UserStore::new();
        assert_eq!(store.len(), 3);
        assert_eq!(usernames(&store), ["Felix", "Jan", "Gregor"]);
    }

    #[test]
    fn finds_by_id() {
        let store = UserStore::new();
        let user = store.find_by_id("b").unwrap();
        assert_eq!(user.username, "Jan");
        assert!(store.find_by_id("nope").is_none());
    }

    #[test]
    fn append_preserves_order() {
        let store = UserStore::new();
        store.append(User {
            id: String::from("d"),
            username: String::from("Hans"),
        });
        assert_eq!(store.len(), 4);
        assert_eq!(store.list().last().unwrap().username, "Hans");
    }

    #[test]
    fn update_rewrites_in_place() {
        let store = UserStore::new();
        let updated = store
            .update_username("a", String::from("HansNeu"))
            .unwrap();
        assert_eq!(updated.id, "a");
        assert_eq!(updated.username, "HansNeu");
        assert_eq!(usernames(&store), ["HansNeu", "Jan", "Gregor"]);
    }

    #[test]
    fn update_of_unknown_id_leaves_store_untouched() {
        let store = UserStore::new();
        assert!(store.update_username("zz", String::from("X")).is_none());
        assert_eq!(usernames(&store), ["Felix", "Jan", "Gregor"]);
    }
}
