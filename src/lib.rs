//! Family tree construction and kinship queries.
//!
//! Parses line-oriented lineage declarations (`parent:child1,child2`)
//! into an arena-backed tree and answers ancestor queries over it:
//! name lookup, ancestor chains, and most-recent-common-ancestor.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod query;
pub mod select;
pub mod tree_traits;
pub mod util;

pub use arena::{FamilyTree, Person, TreeNode};
pub use builder::TreeBuilder;
pub use errors::{TreeError, TreeResult};
pub use query::most_recent_common_ancestor;
