//! Schema assembly and the resolver context.

use juniper::{EmptySubscription, RootNode};

use crate::ident::IdentGen;
use crate::store::UserStore;
use crate::{mutation::MutationRoot, query::QueryRoot};

/// The executable schema: roster query and mutation roots, no subscriptions.
pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<StoreContext>>;

/// Build the schema. The field tables are assembled statically by the
/// juniper macros, there is no runtime registration step.
pub fn create_schema() -> Schema {
    Schema::new(
        QueryRoot,
        MutationRoot,
        EmptySubscription::<StoreContext>::default(),
    )
}

/// Everything the resolvers need: the record store and the identifier
/// generator. Owned here, never global; callers construct one at startup
/// (or per test) and pass it to the executor with each request.
#[derive(Debug)]
pub struct StoreContext {
    /// The shared roster.
    pub store: UserStore,
    /// Source of identifiers for created records.
    pub idents: IdentGen,
}

impl juniper::Context for StoreContext {}

impl StoreContext {
    /// Context over a freshly seeded store and a clock-seeded generator.
    pub fn new() -> Self {
        Self {
            store: UserStore::new(),
            idents: IdentGen::new(),
        }
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}
