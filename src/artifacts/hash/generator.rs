use crate::artifacts::hash::content_hash::ContentHash;
use crate::artifacts::hash::hash_list::HashList;
use derive_new::new;
use fake::Fake;

pub const DEFAULT_HASH_COUNT: usize = 10;
pub const DEFAULT_HASH_LENGTH: usize = 10;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random hash list generator
///
/// Produces sample input for the differ: `count` tokens of `length`
/// uppercase ASCII letters each. Collisions are possible and intentionally
/// left in, since real hash lists can repeat.
#[derive(Debug, Clone, Copy, new)]
pub struct HashGenerator {
    count: usize,
    length: usize,
}

impl Default for HashGenerator {
    fn default() -> Self {
        HashGenerator::new(DEFAULT_HASH_COUNT, DEFAULT_HASH_LENGTH)
    }
}

impl HashGenerator {
    pub fn generate(&self) -> HashList {
        (0..self.count).map(|_| self.generate_one()).collect()
    }

    fn generate_one(&self) -> ContentHash {
        let hash = (0..self.length)
            .map(|_| ALPHABET[(0..ALPHABET.len()).fake::<usize>()] as char)
            .collect::<String>();

        ContentHash::from(hash)
    }
}
