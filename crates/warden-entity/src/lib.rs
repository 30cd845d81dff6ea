//! # warden-entity
//!
//! Domain entity models for Warden: users, roles, and the persisted
//! role/permission registry rows.

pub mod registry;
pub mod user;

pub use registry::{PermissionRecord, RoleRecord};
pub use user::{CreateUser, Role, User};
