pub mod health;
pub mod skip_segments;
