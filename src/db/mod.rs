pub mod account;
pub mod filter;
pub mod lookup;
pub mod owner;
pub mod person;
pub mod product;
