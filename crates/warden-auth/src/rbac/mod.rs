//! Role-based access control: the fixed role catalog and the access
//! decision engine.

pub mod catalog;
pub mod engine;

pub use catalog::{Permission, RoleCatalog};
pub use engine::AccessEngine;
