use serde_derive::{Deserialize, Serialize};

/// Login-capable user stored in `public."user"`. Only `email` and `password`
/// take part in authentication.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub phone: Option<i64>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<i32>,
}
