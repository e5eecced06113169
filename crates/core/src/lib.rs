//! GraphQL schema and resolvers over an in-memory user roster.
//!
//! The schema exposes two query fields (`user`, `userList`) and two
//! mutation fields (`createUser`, `updateUser`). All four resolve against
//! a [`StoreContext`] that owns the record store and the identifier
//! generator; the context is built at process start (or per test) and
//! handed to the executor with every request.
//!
//! Resolvers never fail: a lookup for an unknown id yields the default
//! empty [`User`] instead of an error, so the `errors` array of a response
//! only ever reports parse and validation problems.

pub mod ident;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod store;

pub use ident::{DEFAULT_ID_LEN, IdentGen};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{Schema, StoreContext, create_schema};
pub use store::{User, UserStore};
