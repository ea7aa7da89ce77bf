//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod appointment;
pub mod business;
pub mod contact;
pub mod service;
pub mod user;
pub mod vacancy;
