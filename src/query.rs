//! Most-recent-common-ancestor queries over a family tree.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::FamilyTree;
use crate::errors::{TreeError, TreeResult};

/// Find the deepest node that is an ancestor of both named people.
///
/// "Ancestor" excludes the person themselves, so querying a person
/// against themselves yields their parent. Fails with
/// [`TreeError::UnknownPerson`] when either name does not resolve.
/// `Ok(None)` means the two share no ancestor, which in a single-rooted
/// tree only happens when one of them is the root.
#[instrument(level = "debug", skip(tree))]
pub fn most_recent_common_ancestor(
    tree: &FamilyTree,
    name1: &str,
    name2: &str,
) -> TreeResult<Option<Index>> {
    let node1 = tree
        .find_by_name(name1)
        .ok_or_else(|| TreeError::UnknownPerson(name1.to_string()))?;
    let node2 = tree
        .find_by_name(name2)
        .ok_or_else(|| TreeError::UnknownPerson(name2.to_string()))?;

    let ancestors1 = tree.ancestors(node1);
    let ancestors2 = tree.ancestors(node2);

    // Both chains are ordered most-recent-first, so the first entry of
    // chain 1 that also appears in chain 2 is the deepest common one.
    Ok(ancestors1.into_iter().find(|idx| ancestors2.contains(idx)))
}
