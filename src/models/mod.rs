use std::fmt;

use async_graphql::{MaybeUndefined, SimpleObject};

pub mod event;
pub mod location;
pub mod participant;
pub mod user;

pub use event::{AddEventInput, Event, UpdateEventInput};
pub use location::{AddLocationInput, Location, UpdateLocationInput};
pub use participant::{AddParticipantInput, Participant, UpdateParticipantInput};
pub use user::{AddUserInput, UpdateUserInput, User};

/// The four kinds of record held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Event,
    Location,
    Participant,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::User => "User",
            Entity::Event => "Event",
            Entity::Location => "Location",
            Entity::Participant => "Participant",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the `deleteAll*` mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
#[graphql(name = "deleteAllOutput")]
pub struct DeleteAllOutput {
    pub count: usize,
}

/// Applies a patch for a nullable field: an omitted field keeps the current
/// value, an explicit `null` clears it.
pub(crate) fn merge_nullable<T>(slot: &mut Option<T>, patch: MaybeUndefined<T>) {
    match patch {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *slot = None,
        MaybeUndefined::Value(value) => *slot = Some(value),
    }
}

/// Applies a patch for a non-nullable field.
pub(crate) fn merge_required<T>(slot: &mut T, patch: Option<T>) {
    if let Some(value) = patch {
        *slot = value;
    }
}
