pub mod error;
pub mod json;
pub mod jwt;

pub use error::*;
pub use json::*;
pub use jwt::{Claims, JwtManager};
