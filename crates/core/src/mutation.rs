//! Write resolvers.

use juniper::graphql_object;

use crate::ident::DEFAULT_ID_LEN;
use crate::schema::StoreContext;
use crate::store::User;

/// Root type for all mutations against the roster.
#[derive(Clone, Copy, Debug, Default)]
pub struct MutationRoot;

#[graphql_object(context = StoreContext)]
impl MutationRoot {
    /// Create new user.
    fn create_user(context: &StoreContext, username: String) -> User {
        let user = User {
            id: context.idents.generate(DEFAULT_ID_LEN),
            username,
        };
        context.store.append(user.clone());
        user
    }

    /// Update existing user.
    ///
    /// The username is overwritten in place; leaving it out overwrites
    /// with the empty string. An unknown id changes nothing and yields
    /// the empty user.
    fn update_user(context: &StoreContext, id: String, username: Option<String>) -> User {
        context
            .store
            .update_username(&id, username.unwrap_or_default())
            .unwrap_or_default()
    }
}
