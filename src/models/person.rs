use serde_derive::{Deserialize, Serialize};

/// Listing-only user record from the `users` table. Unrelated to [`super::Account`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
}
