use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::info;

use super::shared_store;
use crate::models::{
    AddEventInput, AddLocationInput, AddParticipantInput, AddUserInput, DeleteAllOutput, Event,
    Location, Participant, UpdateEventInput, UpdateLocationInput, UpdateParticipantInput,
    UpdateUserInput, User,
};

/// Write operations. Update and delete fail with a `NOT_FOUND` error carrying
/// the entity name and id when no record matches.
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // User

    async fn add_user(&self, ctx: &Context<'_>, data: AddUserInput) -> Result<User> {
        let mut store = shared_store(ctx)?.write().await;
        let user = store.users.create(data);
        info!(id = user.id.as_str(), "User added");
        Ok(user)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> Result<User> {
        let mut store = shared_store(ctx)?.write().await;
        let user = store.users.update(&id, data).map_err(|e| e.extend())?;
        info!(id = user.id.as_str(), "User updated");
        Ok(user)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        let mut store = shared_store(ctx)?.write().await;
        let user = store.users.remove(&id).map_err(|e| e.extend())?;
        info!(id = user.id.as_str(), "User deleted");
        Ok(user)
    }

    async fn delete_all_users(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let mut store = shared_store(ctx)?.write().await;
        let count = store.users.clear();
        info!(count, "All users deleted");
        Ok(DeleteAllOutput { count })
    }

    // Event

    async fn add_event(&self, ctx: &Context<'_>, data: AddEventInput) -> Result<Event> {
        let mut store = shared_store(ctx)?.write().await;
        let event = store.events.create(data);
        info!(id = event.id.as_str(), "Event added");
        Ok(event)
    }

    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateEventInput,
    ) -> Result<Event> {
        let mut store = shared_store(ctx)?.write().await;
        let event = store.events.update(&id, data).map_err(|e| e.extend())?;
        info!(id = event.id.as_str(), "Event updated");
        Ok(event)
    }

    async fn delete_event(&self, ctx: &Context<'_>, id: ID) -> Result<Event> {
        let mut store = shared_store(ctx)?.write().await;
        let event = store.events.remove(&id).map_err(|e| e.extend())?;
        info!(id = event.id.as_str(), "Event deleted");
        Ok(event)
    }

    async fn delete_all_events(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let mut store = shared_store(ctx)?.write().await;
        let count = store.events.clear();
        info!(count, "All events deleted");
        Ok(DeleteAllOutput { count })
    }

    // Location

    async fn add_location(&self, ctx: &Context<'_>, data: AddLocationInput) -> Result<Location> {
        let mut store = shared_store(ctx)?.write().await;
        let location = store.locations.create(data);
        info!(id = location.id.as_str(), "Location added");
        Ok(location)
    }

    async fn update_location(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateLocationInput,
    ) -> Result<Location> {
        let mut store = shared_store(ctx)?.write().await;
        let location = store.locations.update(&id, data).map_err(|e| e.extend())?;
        info!(id = location.id.as_str(), "Location updated");
        Ok(location)
    }

    async fn delete_location(&self, ctx: &Context<'_>, id: ID) -> Result<Location> {
        let mut store = shared_store(ctx)?.write().await;
        let location = store.locations.remove(&id).map_err(|e| e.extend())?;
        info!(id = location.id.as_str(), "Location deleted");
        Ok(location)
    }

    async fn delete_all_locations(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let mut store = shared_store(ctx)?.write().await;
        let count = store.locations.clear();
        info!(count, "All locations deleted");
        Ok(DeleteAllOutput { count })
    }

    // Participant

    async fn add_participant(
        &self,
        ctx: &Context<'_>,
        data: AddParticipantInput,
    ) -> Result<Participant> {
        let mut store = shared_store(ctx)?.write().await;
        let participant = store.participants.create(data);
        info!(
            id = participant.id.as_str(),
            event_id = participant.event_id.as_str(),
            "Participant added"
        );
        Ok(participant)
    }

    async fn update_participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateParticipantInput,
    ) -> Result<Participant> {
        let mut store = shared_store(ctx)?.write().await;
        let participant = store
            .participants
            .update(&id, data)
            .map_err(|e| e.extend())?;
        info!(id = participant.id.as_str(), "Participant updated");
        Ok(participant)
    }

    async fn delete_participant(&self, ctx: &Context<'_>, id: ID) -> Result<Participant> {
        let mut store = shared_store(ctx)?.write().await;
        let participant = store.participants.remove(&id).map_err(|e| e.extend())?;
        info!(id = participant.id.as_str(), "Participant deleted");
        Ok(participant)
    }

    async fn delete_all_participants(&self, ctx: &Context<'_>) -> Result<DeleteAllOutput> {
        let mut store = shared_store(ctx)?.write().await;
        let count = store.participants.clear();
        info!(count, "All participants deleted");
        Ok(DeleteAllOutput { count })
    }
}
