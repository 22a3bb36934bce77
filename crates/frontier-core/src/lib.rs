//! Core library for frontier
//!
//! Uninformed graph search engines (eager/lazy BFS, re-expanding and
//! non-re-expanding UCS), an exhaustive backtracking oracle, and the
//! harness that cross-checks them on random and fixture graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod harness;
pub mod logging;
pub mod render;
pub mod search;
