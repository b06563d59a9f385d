//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod affiliation;
pub mod asset;
pub mod assignment;
pub mod organization;
pub mod package;
pub mod request;
pub mod roster;
pub mod user;
