//! Repository implementations.

pub mod role;
pub mod user;
