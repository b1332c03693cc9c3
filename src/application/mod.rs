//! Application services orchestrating domain logic and repositories.

pub mod admin;
pub mod error;
pub mod export;
pub mod repos;
