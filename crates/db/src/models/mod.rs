//! Row structs and insert DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the table and a
//! `Deserialize` create DTO for inserts.

pub mod sponsor_time;
