use crate::models;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonForm {
    pub firstname: String,
    pub lastname: String,
}

impl Into<models::Person> for PersonForm {
    fn into(self) -> models::Person {
        models::Person {
            firstname: self.firstname,
            lastname: self.lastname,
            ..Default::default()
        }
    }
}
