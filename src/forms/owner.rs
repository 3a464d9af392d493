use crate::models;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerForm {
    pub name: String,
}

impl Into<models::Owner> for OwnerForm {
    fn into(self) -> models::Owner {
        models::Owner {
            name: self.name,
            ..Default::default()
        }
    }
}
