//! Read-only resolvers.

use juniper::graphql_object;

use crate::schema::StoreContext;
use crate::store::User;

/// Root type for all queries against the roster.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryRoot;

#[graphql_object(context = StoreContext)]
impl QueryRoot {
    /// Get single user.
    ///
    /// Without an id, or with an id that matches nothing, the empty user
    /// is returned instead of an error.
    fn user(context: &StoreContext, id: Option<String>) -> User {
        match id {
            Some(id) => context.store.find_by_id(&id).unwrap_or_default(),
            None => User::default(),
        }
    }

    /// List of users.
    fn user_list(context: &StoreContext) -> Vec<User> {
        context.store.list()
    }
}
