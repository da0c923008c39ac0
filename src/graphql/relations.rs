use async_graphql::{ComplexObject, Context, Result};

use super::shared_store;
use crate::models::{Event, Location, Participant, User};

#[ComplexObject]
impl Event {
    /// The user owning this event, if `user_id` is set and still exists.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(user_id) = &self.user_id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        Ok(store.users.get(user_id).cloned())
    }

    /// The location of this event, if `location_id` is set and still exists.
    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        let Some(location_id) = &self.location_id else {
            return Ok(None);
        };
        let store = shared_store(ctx)?.read().await;
        Ok(store.locations.get(location_id).cloned())
    }

    /// Participants registered for this event.
    async fn participant(&self, ctx: &Context<'_>) -> Result<Vec<Participant>> {
        let store = shared_store(ctx)?.read().await;
        Ok(store
            .participants
            .filter(|participant| participant.event_id == self.id))
    }
}
