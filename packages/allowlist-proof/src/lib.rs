//! Allowlist membership proofs.
//!
//! An allowlist is committed to as the root of a binary SHA-256 Merkle tree.
//! Leaves are `sha256(address)`. Internal nodes hash their two children with
//! the smaller one first, so a proof is just the list of siblings from the
//! leaf up to the root, without left/right flags.

use cosmwasm_std::HexBinary;
use sha2::{Digest, Sha256};

#[cfg(any(test, feature = "tree"))]
pub mod tree;

pub const HASH_LENGTH: usize = 32;

pub type Hash = [u8; HASH_LENGTH];

/// Hashes an allowlisted address into a leaf.
pub fn leaf_hash(member: &str) -> Hash {
    Sha256::digest(member.as_bytes()).into()
}

/// Hashes two nodes in sorted order.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Returns true when `proof` links `member` to `root`.
///
/// Malformed input (a root or sibling that is not 32 bytes) is treated as a
/// failed membership check.
pub fn verify(root: &[u8], member: &str, proof: &[HexBinary]) -> bool {
    if root.len() != HASH_LENGTH {
        return false;
    }
    let mut current = leaf_hash(member);
    for sibling in proof {
        let sibling: Hash = match sibling.as_slice().try_into() {
            Ok(sibling) => sibling,
            Err(_) => return false,
        };
        current = hash_pair(&current, &sibling);
    }
    current.as_slice() == root
}
