use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use super::{merge_required, Entity};
use crate::store::{Merge, NewRecord, Record};

/// Attendance of a user at an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Participant {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "addParticipantInput", rename_fields = "snake_case")]
pub struct AddParticipantInput {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "updateParticipantInput", rename_fields = "snake_case")]
pub struct UpdateParticipantInput {
    pub user_id: Option<ID>,
    pub event_id: Option<ID>,
}

impl Record for Participant {
    const ENTITY: Entity = Entity::Participant;

    fn id(&self) -> &ID {
        &self.id
    }
}

impl NewRecord<Participant> for AddParticipantInput {
    fn into_record(self, id: ID) -> Participant {
        Participant {
            id,
            user_id: self.user_id,
            event_id: self.event_id,
        }
    }
}

impl Merge<Participant> for UpdateParticipantInput {
    fn merge_into(self, participant: &mut Participant) {
        merge_required(&mut participant.user_id, self.user_id);
        merge_required(&mut participant.event_id, self.event_id);
    }
}
