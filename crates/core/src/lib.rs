//! Skip-segment selection engine.
//!
//! Pure domain logic with no HTTP or SQL dependencies. Given a raw query and
//! the rows stored for one video, decides which segments a client should
//! apply: query normalization, visibility suppression, overlap resolution
//! and response shaping.

pub mod error;
pub mod filter;
pub mod formatter;
pub mod overlap;
pub mod segment;
pub mod selection;
pub mod service;
pub mod source;
pub mod types;
pub mod visibility;
