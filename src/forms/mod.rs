pub mod login;
pub mod owner;
pub mod page;
pub mod person;
pub mod product;

pub use login::*;
pub use owner::*;
pub use page::*;
pub use person::*;
pub use product::*;
