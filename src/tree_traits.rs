use generational_arena::Index;
use termtree::Tree;

use crate::arena::FamilyTree;

/// Conversion into termtree's displayable tree.
pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeConvert for FamilyTree {
    fn to_tree_string(&self) -> Tree<String> {
        if let Some(root_idx) = self.root() {
            let mut tree = Tree::new(self.get_node(root_idx).unwrap().person.name.clone());

            fn build_tree(family: &FamilyTree, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = family.get_node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = family.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.person.name.clone());
                            build_tree(family, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(self, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty tree".to_string())
        }
    }
}
