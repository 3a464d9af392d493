mod account;
mod lookup;
mod owner;
mod person;
mod product;

pub use account::*;
pub use lookup::*;
pub use owner::*;
pub use person::*;
pub use product::*;
