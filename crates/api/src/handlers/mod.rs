//! HTTP request handlers, grouped by entity.

pub mod assets;
pub mod me;
pub mod organizations;
pub mod packages;
pub mod requests;
