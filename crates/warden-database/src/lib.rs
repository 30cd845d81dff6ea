//! # warden-database
//!
//! PostgreSQL persistence for Warden. Implements the credential-store
//! contract from `warden-auth` and the durable role registry, plus
//! connection pooling and the migrations runner.

pub mod connection;
pub mod migration;
pub mod registry;
pub mod repositories;

pub use registry::{RegistrySink, RoleRegistry};
pub use repositories::role::RoleRepository;
pub use repositories::user::UserRepository;
