use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Event, Location, Participant, User};
use crate::utils::error::AppError;

/// Initial contents of the store, read from a JSON document. Missing
/// collections default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub locations: Vec<Location>,
    pub participants: Vec<Participant>,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let json = tokio::fs::read_to_string(path).await?;
        let seed = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            users = seed.users.len(),
            events = seed.events.len(),
            locations = seed.locations.len(),
            participants = seed.participants.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    const SEED: &str = r#"{
        "users": [{ "id": "7", "username": "ada", "email": "ada@example.com" }],
        "locations": [{ "id": "3", "name": "Hall", "desc": "Main hall", "lat": 52.52, "lng": 13.40 }],
        "events": [{
            "id": "1", "title": "Launch", "desc": "Kickoff", "date": "2024-01-01",
            "location_id": "3", "user_id": "7"
        }]
    }"#;

    #[test]
    fn test_missing_collections_default_to_empty() {
        let seed = Seed::from_json(SEED).unwrap();
        assert_eq!(seed.users.len(), 1);
        assert!(seed.participants.is_empty());
        assert_eq!(seed.events[0].from, None);

        let store = Store::from_seed(seed).unwrap();
        let counts = store.counts();
        assert_eq!((counts.users, counts.events, counts.participants), (1, 1, 0));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Seed::from_json("{ \"users\": [ { \"id\": 1 } ] }").unwrap_err();
        assert_eq!(err.code(), "JSON_ERROR");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let seed = Seed::from_json(
            r#"{ "participants": [
                { "id": "p", "user_id": "1", "event_id": "1" },
                { "id": "p", "user_id": "2", "event_id": "1" }
            ] }"#,
        )
        .unwrap();

        let err = Store::from_seed(seed).unwrap_err();
        assert!(matches!(err, AppError::InvalidSeed(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = Seed::load(Path::new("/nonexistent/seed.json"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
