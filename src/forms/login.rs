use serde::Deserialize;
use serde_valid::Validate;

#[derive(Default, Deserialize, Validate)]
pub struct Login {
    #[serde(default)]
    #[validate(min_length = 1)]
    pub email: String,
    #[serde(default)]
    #[validate(min_length = 1)]
    pub password: String,
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}
