use async_graphql::{Context, Object, Result, ID};

use super::shared_store;
use crate::models::{Event, Location, Participant, User};

/// Read operations. Lookups by id resolve to `null` when nothing matches.
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.events.list().to_vec())
    }

    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Event>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.events.get(&id).cloned())
    }

    async fn locations(&self, ctx: &Context<'_>) -> Result<Vec<Location>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.locations.list().to_vec())
    }

    async fn location(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Location>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.locations.get(&id).cloned())
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.users.list().to_vec())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn participants(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.participants.list().to_vec())
    }

    async fn participant(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Participant>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store.participants.get(&id).cloned())
    }
}
