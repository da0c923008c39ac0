use async_graphql::{InputObject, MaybeUndefined, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use super::{merge_nullable, merge_required, Entity};
use crate::store::{Merge, NewRecord, Record};

/// An event, optionally held at a location and owned by a user.
///
/// `user`, `location` and `participant` are resolved against the store, see
/// `graphql::relations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Event {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<ID>,
    pub user_id: Option<ID>,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "addEventInput", rename_fields = "snake_case")]
pub struct AddEventInput {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<ID>,
    pub user_id: Option<ID>,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "updateEventInput", rename_fields = "snake_case")]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub from: MaybeUndefined<String>,
    pub to: MaybeUndefined<String>,
    pub location_id: MaybeUndefined<ID>,
    pub user_id: MaybeUndefined<ID>,
}

impl Record for Event {
    const ENTITY: Entity = Entity::Event;

    fn id(&self) -> &ID {
        &self.id
    }
}

impl NewRecord<Event> for AddEventInput {
    fn into_record(self, id: ID) -> Event {
        Event {
            id,
            title: self.title,
            desc: self.desc,
            date: self.date,
            from: self.from,
            to: self.to,
            location_id: self.location_id,
            user_id: self.user_id,
        }
    }
}

impl Merge<Event> for UpdateEventInput {
    fn merge_into(self, event: &mut Event) {
        merge_required(&mut event.title, self.title);
        merge_required(&mut event.desc, self.desc);
        merge_required(&mut event.date, self.date);
        merge_nullable(&mut event.from, self.from);
        merge_nullable(&mut event.to, self.to);
        merge_nullable(&mut event.location_id, self.location_id);
        merge_nullable(&mut event.user_id, self.user_id);
    }
}
