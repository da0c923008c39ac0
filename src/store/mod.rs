//! In-memory record store.
//!
//! A [`Store`] holds one [`Collection`] per entity. It is shared with the
//! GraphQL schema as [`SharedStore`]; queries take the read lock, mutations
//! the write lock, for the whole of their (synchronous) body.

use std::sync::Arc;

use async_graphql::ID;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::{Entity, Event, Location, Participant, User};
use crate::utils::error::AppError;

mod collection;
pub mod seed;

pub use collection::Collection;
pub use seed::Seed;

pub type SharedStore = Arc<RwLock<Store>>;

/// A record kept in a [`Collection`].
pub trait Record: Clone {
    const ENTITY: Entity;

    fn id(&self) -> &ID;
}

/// Input that becomes a new record once an id is assigned.
pub trait NewRecord<T> {
    fn into_record(self, id: ID) -> T;
}

/// Partial update shallow-merged over an existing record.
pub trait Merge<T> {
    fn merge_into(self, target: &mut T);
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Collection<User>,
    pub events: Collection<Event>,
    pub locations: Collection<Location>,
    pub participants: Collection<Participant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub users: usize,
    pub events: usize,
    pub locations: usize,
    pub participants: usize,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `seed`, rejecting duplicate ids.
    pub fn from_seed(seed: Seed) -> Result<Self, AppError> {
        let mut store = Self::new();
        for user in seed.users {
            store.users.insert(user)?;
        }
        for event in seed.events {
            store.events.insert(event)?;
        }
        for location in seed.locations {
            store.locations.insert(location)?;
        }
        for participant in seed.participants {
            store.participants.insert(participant)?;
        }
        Ok(store)
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            events: self.events.len(),
            locations: self.locations.len(),
            participants: self.participants.len(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }
}
