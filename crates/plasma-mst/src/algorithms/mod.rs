//! Plasma Merkle Sum Tree algorithms: leaf construction, proof
//! generation, and verification.

mod leaves;
mod proof;
mod verify;

pub use leaves::parse_leaves;
pub use proof::get_inclusion_proof;
pub use verify::{check_inclusion, check_inclusion_and_get_bounds, check_non_inclusion};
