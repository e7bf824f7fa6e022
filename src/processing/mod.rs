//! Management group tree processing.
//!
//! - [`tree`] - Building the parent/child index from the flat descendants list

mod tree;

pub use tree::build_node_table;
