//! Search command output formatting modules

pub mod human;
pub mod json;

pub use human::{output_bfs_human, output_ucs_human};
pub use json::{output_bfs_json, output_ucs_json};
