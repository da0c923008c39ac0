//! GraphQL API over the in-memory store.
//!
//! - [`QueryRoot`]: list and lookup-by-id for every entity
//! - [`MutationRoot`]: add, update, delete and delete-all for every entity
//! - `relations`: the `user`, `location` and `participant` fields of `Event`

mod mutation;
mod query;
mod relations;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{Context, EmptySubscription, Result, Schema};

use crate::store::SharedStore;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `store` available to every resolver.
pub fn build_schema(store: SharedStore) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn shared_store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}
