use async_graphql::{InputObject, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use super::{merge_required, Entity};
use crate::store::{Merge, NewRecord, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "addUserInput")]
pub struct AddUserInput {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "updateUserInput")]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Record for User {
    const ENTITY: Entity = Entity::User;

    fn id(&self) -> &ID {
        &self.id
    }
}

impl NewRecord<User> for AddUserInput {
    fn into_record(self, id: ID) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
        }
    }
}

impl Merge<User> for UpdateUserInput {
    fn merge_into(self, user: &mut User) {
        merge_required(&mut user.username, self.username);
        merge_required(&mut user.email, self.email);
    }
}
