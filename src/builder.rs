//! Tree builder: parses lineage declaration lines into a family tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::arena::{FamilyTree, Person};
use crate::errors::{TreeError, TreeResult};

/// Constructs a family tree from `parent:child1,child2,...` declaration
/// lines, one line at a time.
///
/// The first line's parent becomes the root unconditionally; every later
/// line must name a parent that is already in the tree.
pub struct TreeBuilder {
    tree: FamilyTree,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: FamilyTree::new(),
        }
    }

    /// Read all lines from `path` and build the tree.
    ///
    /// A malformed line aborts the whole build.
    #[instrument(level = "debug")]
    pub fn build_from_path(path: &Path) -> TreeResult<FamilyTree> {
        let file = File::open(path).map_err(TreeError::FileReadError)?;
        Self::build_from_reader(BufReader::new(file))
    }

    /// Drain `reader` line by line into a fresh tree.
    pub fn build_from_reader(reader: impl BufRead) -> TreeResult<FamilyTree> {
        let mut builder = Self::new();
        for line in reader.lines() {
            let line = line.map_err(TreeError::FileReadError)?;
            builder.add_line(&line)?;
        }
        Ok(builder.into_tree())
    }

    /// Parse one `parent:child1,child2,...` declaration and insert its
    /// children.
    ///
    /// The parent name is the substring before the first ':', taken
    /// verbatim (no trimming). Child names are trimmed; tokens that are
    /// empty after trimming are skipped. Every remaining token becomes a
    /// brand-new node, duplicates included, appended left-to-right.
    ///
    /// On error nothing is inserted: a line without ':' fails with
    /// [`TreeError::MissingSeparator`], an unresolvable parent with
    /// [`TreeError::ParentNotFound`].
    #[instrument(level = "trace", skip(self))]
    pub fn add_line(&mut self, line: &str) -> TreeResult<()> {
        let colon = line
            .find(':')
            .ok_or_else(|| TreeError::MissingSeparator(line.to_string()))?;
        let parent = &line[..colon];
        let children = &line[colon + 1..];

        let parent_idx = match self.tree.root() {
            None => self.tree.insert_node(Person::new(parent), None),
            Some(_) => self
                .tree
                .find_by_name(parent)
                .ok_or_else(|| TreeError::ParentNotFound(parent.to_string()))?,
        };

        for name in children.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            self.tree.insert_node(Person::new(name), Some(parent_idx));
        }
        debug!("added children of {:?}", parent);
        Ok(())
    }

    /// The tree built so far.
    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// Finish an incremental build.
    pub fn into_tree(self) -> FamilyTree {
        self.tree
    }
}
