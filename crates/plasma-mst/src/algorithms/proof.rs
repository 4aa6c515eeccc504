//! Inclusion proof generation.

use plasma_merkle::{Node, Tree, TreeError};

/// Generates the inclusion proof for the leaf at `index`.
///
/// Element 0 is a synthetic `(0x00...00, leaf_sum)` entry carrying the
/// leaf's own sum, since the leaf hash alone does not reveal it.
/// Elements `1..depth` are the sibling nodes encountered walking from
/// the leaf to the root, in leaf-to-root order; a missing sibling from
/// odd-row padding is materialized as the empty leaf.
pub fn get_inclusion_proof(tree: &Tree, index: usize) -> Result<Vec<Node>, TreeError> {
    let leaf_count = tree.leaf_count();
    if index >= leaf_count {
        return Err(TreeError::IndexOutOfRange {
            index,
            len: leaf_count,
        });
    }

    let depth = tree.depth();
    let leaf_sum = tree
        .node_at(0, index)
        .expect("index already bounds-checked against leaf_count")
        .sum;

    let mut proof = Vec::with_capacity(depth);
    proof.push(Node::new([0u8; 32], leaf_sum));

    let mut position = index;
    for level in 0..depth - 1 {
        let sibling_index = position ^ 1;
        let sibling = tree
            .node_at(level, sibling_index)
            .unwrap_or_else(Tree::empty_leaf);
        proof.push(sibling);
        position /= 2;
    }

    Ok(proof)
}
