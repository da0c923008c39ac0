use async_graphql::ID;
use uuid::Uuid;

use super::{Merge, NewRecord, Record};
use crate::utils::error::AppError;

/// An ordered, in-memory collection of records of one entity.
///
/// Lookups are linear scans with exact id equality; insertion order is kept.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &ID) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Appends a record that already carries its id.
    pub fn insert(&mut self, record: T) -> Result<(), AppError> {
        if self.get(record.id()).is_some() {
            return Err(AppError::InvalidSeed(format!(
                "duplicate {} id '{}'",
                T::ENTITY,
                record.id().as_str()
            )));
        }
        self.items.push(record);
        Ok(())
    }

    /// Builds a record from `input` under a freshly generated id and appends it.
    pub fn create<I>(&mut self, input: I) -> T
    where
        I: NewRecord<T>,
    {
        let record = input.into_record(next_id());
        self.items.push(record.clone());
        record
    }

    pub fn update<P>(&mut self, id: &ID, patch: P) -> Result<T, AppError>
    where
        P: Merge<T>,
    {
        let index = self.position(id)?;
        let record = &mut self.items[index];
        patch.merge_into(record);
        Ok(record.clone())
    }

    pub fn remove(&mut self, id: &ID) -> Result<T, AppError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Empties the collection, returning how many records it held.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    fn position(&self, id: &ID) -> Result<usize, AppError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| AppError::not_found(T::ENTITY, id.as_str()))
    }
}

fn next_id() -> ID {
    ID(Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddUserInput, Entity, UpdateUserInput, User};

    fn user(id: &str, username: &str) -> User {
        User {
            id: ID::from(id),
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    fn seeded() -> Collection<User> {
        let mut users = Collection::new();
        users.insert(user("1", "ada")).unwrap();
        users.insert(user("2", "grace")).unwrap();
        users.insert(user("3", "linus")).unwrap();
        users
    }

    #[test]
    fn test_create_assigns_fresh_ids() {
        let mut users = Collection::new();
        let a = users.create(AddUserInput {
            username: "a".to_string(),
            email: "a@x.com".to_string(),
        });
        let b = users.create(AddUserInput {
            username: "b".to_string(),
            email: "b@x.com".to_string(),
        });

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(users.get(&a.id), Some(&a));
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_get_uses_exact_id_match() {
        let users = seeded();
        assert_eq!(users.get(&ID::from("2")).map(|u| u.username.as_str()), Some("grace"));
        assert!(users.get(&ID::from("02")).is_none());
        assert!(users.get(&ID::from(" 2")).is_none());
    }

    #[test]
    fn test_update_merges_and_keeps_position() {
        let mut users = seeded();
        let updated = users
            .update(
                &ID::from("2"),
                UpdateUserInput {
                    email: Some("hopper@navy.mil".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.username, "grace");
        assert_eq!(updated.email, "hopper@navy.mil");
        assert_eq!(users.list()[1], updated);
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let mut users = seeded();
        let err = users
            .update(&ID::from("42"), UpdateUserInput::default())
            .unwrap_err();

        match err {
            AppError::NotFound { entity, id } => {
                assert_eq!(entity, Entity::User);
                assert_eq!(id, "42");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_remove_returns_prior_value_and_preserves_order() {
        let mut users = seeded();
        let removed = users.remove(&ID::from("2")).unwrap();

        assert_eq!(removed, user("2", "grace"));
        let ids: Vec<&str> = users.list().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(matches!(
            users.remove(&ID::from("2")),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn test_clear_reports_count() {
        let mut users = seeded();
        assert_eq!(users.clear(), 3);
        assert!(users.is_empty());
        assert_eq!(users.clear(), 0);
    }

    #[test]
    fn test_insert_rejects_duplicate_ids() {
        let mut users = seeded();
        let err = users.insert(user("3", "other")).unwrap_err();
        assert_eq!(err.code(), "INVALID_SEED");
    }
}
