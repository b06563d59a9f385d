//! Domain logic for the AssetFlow asset-management service.
//!
//! Pure types and validation helpers shared by the `db` and `api` crates.
//! Nothing in this crate performs I/O.

pub mod affiliations;
pub mod assets;
pub mod assignments;
pub mod error;
pub mod quota;
pub mod requests;
pub mod roles;
pub mod types;
