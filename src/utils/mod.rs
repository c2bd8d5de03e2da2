pub mod error;
pub mod validate;
