//! Tests for TreeBuilder

use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

use kintree::util::testing::init_test_setup;
use kintree::{TreeBuilder, TreeError};

fn create_lineage_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write lineage file");
    path
}

#[test]
fn given_single_line_when_building_then_first_parent_becomes_root() {
    // Arrange
    init_test_setup();
    let mut builder = TreeBuilder::new();

    // Act
    builder.add_line("Bungo:Bilbo,Belladonna").unwrap();
    let tree = builder.into_tree();

    // Assert
    let root = tree.root().expect("root");
    let node = tree.get_node(root).unwrap();
    assert_eq!(node.person.name, "Bungo");
    assert_eq!(node.children.len(), 2);
}

#[test]
fn given_several_children_when_building_then_insertion_order_is_preserved() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    builder.add_line("Bungo:Bilbo,Belladonna,Longo").unwrap();
    let tree = builder.into_tree();

    // Assert
    let root = tree.root().unwrap();
    let names: Vec<&str> = tree
        .get_node(root)
        .unwrap()
        .children
        .iter()
        .map(|&idx| tree.get_node(idx).unwrap().person.name.as_str())
        .collect();
    assert_eq!(names, ["Bilbo", "Belladonna", "Longo"]);
}

#[test]
fn given_line_without_separator_when_building_then_errors_and_tree_unchanged() {
    // Arrange
    let mut builder = TreeBuilder::new();
    builder.add_line("Bungo:Bilbo").unwrap();

    // Act
    let result = builder.add_line("no separator here");

    // Assert
    assert!(matches!(result, Err(TreeError::MissingSeparator(_))));
    assert_eq!(builder.tree().person_count(), 2);
}

#[test]
fn given_unknown_parent_when_building_then_errors_and_no_children_added() {
    // Arrange
    let mut builder = TreeBuilder::new();
    builder.add_line("Bungo:Bilbo").unwrap();

    // Act
    let result = builder.add_line("Gandalf:Shadowfax,Gwaihir");

    // Assert
    assert!(matches!(result, Err(TreeError::ParentNotFound(name)) if name == "Gandalf"));
    assert_eq!(builder.tree().person_count(), 2);
    assert!(builder.tree().find_by_name("Shadowfax").is_none());
}

#[test]
fn given_whitespace_around_children_when_building_then_child_names_are_trimmed() {
    // Arrange
    let mut builder = TreeBuilder::new();

    // Act
    builder.add_line("Bungo: Bilbo ,  Belladonna").unwrap();
    let tree = builder.into_tree();

    // Assert
    assert!(tree.find_by_name("Bilbo").is_some());
    assert!(tree.find_by_name("Belladonna").is_some());
    assert!(tree.find_by_name(" Bilbo ").is_none());
}

#[test]
fn given_padded_parent_reference_when_building_then_it_does_not_resolve() {
    // Arrange: parent names are taken verbatim, children are trimmed
    let mut builder = TreeBuilder::new();
    builder.add_line("Bungo:Bilbo").unwrap();

    // Act
    let result = builder.add_line(" Bilbo:Frodo");

    // Assert
    assert!(matches!(result, Err(TreeError::ParentNotFound(name)) if name == " Bilbo"));
}

#[test]
fn given_duplicate_name_when_building_then_a_new_node_is_created() {
    // Arrange
    let mut builder = TreeBuilder::new();
    builder.add_line("Bungo:Bilbo").unwrap();

    // Act: a second child also named Bilbo
    builder.add_line("Bungo:Bilbo").unwrap();
    let tree = builder.into_tree();

    // Assert
    assert_eq!(tree.person_count(), 3);
    let root = tree.root().unwrap();
    assert_eq!(tree.get_node(root).unwrap().children.len(), 2);
}

#[test]
fn given_reader_input_when_building_then_all_lines_are_consumed() {
    // Arrange
    let input = "Bungo:Bilbo,Belladonna\nBilbo:Frodo\n";

    // Act
    let tree = TreeBuilder::build_from_reader(Cursor::new(input)).unwrap();

    // Assert
    assert_eq!(tree.person_count(), 4);
    assert!(tree.find_by_name("Frodo").is_some());
}

#[test]
fn given_lineage_file_when_building_then_tree_matches_file() {
    // Arrange
    init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = create_lineage_file(&temp, "baggins.txt", "Bungo:Bilbo,Belladonna\nBilbo:Frodo\n");

    // Act
    let tree = TreeBuilder::build_from_path(&path).unwrap();

    // Assert
    assert_eq!(tree.person_count(), 4);
    assert_eq!(tree.generations(), 3);
}

#[test]
fn given_malformed_file_when_building_then_build_is_fatal() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_lineage_file(&temp, "bad.txt", "Bungo:Bilbo\nnot a declaration\n");

    // Act
    let result = TreeBuilder::build_from_path(&path);

    // Assert
    assert!(matches!(result, Err(TreeError::MissingSeparator(_))));
}

#[test]
fn given_nonexistent_file_when_building_then_errors() {
    // Act
    let result = TreeBuilder::build_from_path(&PathBuf::from("/nonexistent/lineage.txt"));

    // Assert
    assert!(matches!(result, Err(TreeError::FileReadError(_))));
}
