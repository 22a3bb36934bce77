//! Uninformed search engines
//!
//! - `bfs`: eager and lazy breadth-first search
//! - `ucs`: re-expanding and non-re-expanding uniform-cost search
//! - `backtracking`: exhaustive simple-path oracle for small graphs
//! - `queue`: min-priority frontier for UCS
//! - `path`: parent-chain reconstruction and path cost accounting
//!
//! Every engine call owns a fresh `SearchState` side map; the graph is
//! only read, so independent searches never share mutable state.

pub mod backtracking;
pub mod bfs;
pub mod path;
pub mod queue;
pub mod types;
pub mod ucs;

pub use backtracking::{backtracking_shortest_path, OraclePath};
pub use bfs::{bfs_eager, bfs_lazy};
pub use path::{path_cost, reconstruct_path, verify_path};
pub use queue::PriorityQueue;
pub use types::{BfsOutcome, Cost, NodeRecord, SearchState, UcsOutcome};
pub use ucs::{ucs_non_re_expanding, ucs_re_expanding};
