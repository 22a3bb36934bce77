//! CLI commands for frontier

pub mod dispatch;
pub mod generate;
pub mod helpers;
pub mod info;
pub mod render;
pub mod search;
pub mod source;
pub mod validate;
