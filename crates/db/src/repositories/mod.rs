//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod sponsor_time_repo;

pub use sponsor_time_repo::SponsorTimeRepo;
