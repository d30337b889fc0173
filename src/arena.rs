use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for tree nodes: one named individual.
#[derive(Debug, Clone)]
pub struct Person {
    /// Name exactly as declared in the lineage file
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based genealogy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Individual recorded at this node
    pub person: Person,
    /// Index of the parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, insertion order preserved
    pub children: Vec<Index>,
}

/// Arena-based family tree.
///
/// Uses generational arena for memory-safe node references. The parent
/// link is a plain index into the arena, so parent and child never own
/// each other; the arena owns every node for the lifetime of the tree.
#[derive(Debug)]
pub struct FamilyTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, person: Person, parent: Option<Index>) -> Index {
        let node = TreeNode {
            person,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of people recorded in the tree.
    pub fn person_count(&self) -> usize {
        self.arena.len()
    }

    /// Pre-order iterator over the whole tree, children left-to-right.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Find the first node with the given name, pre-order.
    ///
    /// Matching is exact and case-sensitive. Names are not required to
    /// be unique; with duplicates the first pre-order match wins.
    /// Absence is a normal outcome, not an error.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, name: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.person.name == name)
            .map(|(idx, _)| idx)
    }

    /// Ancestor chain of a node: parent first, root last.
    ///
    /// The node itself is never part of its own chain; the root's chain
    /// is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn ancestors(&self, idx: Index) -> Vec<Index> {
        let mut chain = Vec::new();
        let mut cur = self.get_node(idx).and_then(|node| node.parent);
        while let Some(parent_idx) = cur {
            chain.push(parent_idx);
            cur = self.get_node(parent_idx).and_then(|node| node.parent);
        }
        chain
    }

    /// Number of generations recorded (0 for an empty tree, 1 for a
    /// lone root).
    #[instrument(level = "debug", skip(self))]
    pub fn generations(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                max_depth = max_depth.max(depth);
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Names of people with no recorded children, pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.person.name.clone())
            .collect()
    }

    /// Plain text rendering: pre-order, one name per line, two spaces
    /// of indent per generation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            stack.push((root, 0usize));
        }
        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                out.push_str(&"  ".repeat(depth));
                out.push_str(&node.person.name);
                out.push('\n');
                for &child in node.children.iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }
        out
    }
}

pub struct TreeIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a FamilyTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bungo
    // ├── Bilbo
    // │   └── Frodo
    // └── Belladonna

    //      Bungo
    //      /   \
    //  Bilbo  Belladonna
    //    |
    //  Frodo
    fn sample_tree() -> FamilyTree {
        let mut tree = FamilyTree::new();
        let bungo = tree.insert_node(Person::new("Bungo"), None);
        let bilbo = tree.insert_node(Person::new("Bilbo"), Some(bungo));
        tree.insert_node(Person::new("Frodo"), Some(bilbo));
        tree.insert_node(Person::new("Belladonna"), Some(bungo));
        tree
    }

    #[test]
    fn test_preorder_iteration() {
        let tree = sample_tree();

        let names: Vec<&str> = tree
            .iter()
            .map(|(_, node)| node.person.name.as_str())
            .collect();
        assert_eq!(names, ["Bungo", "Bilbo", "Frodo", "Belladonna"]);
    }

    #[test]
    fn test_ancestors_walk_to_root() {
        let tree = sample_tree();

        let frodo = tree.find_by_name("Frodo").unwrap();
        let chain: Vec<&str> = tree
            .ancestors(frodo)
            .iter()
            .map(|&idx| tree.get_node(idx).unwrap().person.name.as_str())
            .collect();
        assert_eq!(chain, ["Bilbo", "Bungo"]);

        let root = tree.root().unwrap();
        assert!(tree.ancestors(root).is_empty());
    }

    #[test]
    fn test_render_indents_by_generation() {
        let tree = sample_tree();

        assert_eq!(tree.render(), "Bungo\n  Bilbo\n    Frodo\n  Belladonna\n");
    }
}
