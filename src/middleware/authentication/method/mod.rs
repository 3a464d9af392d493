mod f_jwt;

pub use f_jwt::*;
