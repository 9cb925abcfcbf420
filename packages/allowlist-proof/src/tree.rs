use cosmwasm_std::HexBinary;

use crate::{hash_pair, leaf_hash, Hash};

/// Off-chain builder for allowlist trees.
///
/// Levels are stored bottom-up. When a level has an odd number of nodes the
/// last one is carried to the next level unchanged.
#[derive(Clone, Debug)]
pub struct AllowlistTree {
    members: Vec<String>,
    levels: Vec<Vec<Hash>>,
}

impl AllowlistTree {
    pub fn new<T: AsRef<str>>(members: &[T]) -> Self {
        let members: Vec<String> = members.iter().map(|m| m.as_ref().to_string()).collect();
        let mut level: Vec<Hash> = members.iter().map(|m| leaf_hash(m)).collect();
        let mut levels = vec![level.clone()];

        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
            levels.push(level.clone());
        }

        AllowlistTree { members, levels }
    }

    /// Root of the tree, all zeroes for an empty allowlist.
    pub fn root(&self) -> Hash {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    pub fn root_binary(&self) -> HexBinary {
        HexBinary::from(self.root().to_vec())
    }

    /// Sibling path for `member`, or `None` when it is not on the list.
    pub fn proof(&self, member: &str) -> Option<Vec<HexBinary>> {
        let mut index = self.members.iter().position(|m| m == member)?;
        let mut proof = vec![];

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(HexBinary::from(node.to_vec()));
            }
            index /= 2;
        }
        Some(proof)
    }
}
