use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use super::{merge_required, Entity};
use crate::store::{Merge, NewRecord, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Location {
    pub id: ID,
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "addLocationInput")]
pub struct AddLocationInput {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "updateLocationInput")]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Record for Location {
    const ENTITY: Entity = Entity::Location;

    fn id(&self) -> &ID {
        &self.id
    }
}

impl NewRecord<Location> for AddLocationInput {
    fn into_record(self, id: ID) -> Location {
        Location {
            id,
            name: self.name,
            desc: self.desc,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl Merge<Location> for UpdateLocationInput {
    fn merge_into(self, location: &mut Location) {
        merge_required(&mut location.name, self.name);
        merge_required(&mut location.desc, self.desc);
        merge_required(&mut location.lat, self.lat);
        merge_required(&mut location.lng, self.lng);
    }
}
