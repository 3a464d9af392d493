pub mod health_checks;
pub mod login;
pub mod lookup;
pub mod owner;
pub mod person;
pub mod product;

pub use health_checks::*;
