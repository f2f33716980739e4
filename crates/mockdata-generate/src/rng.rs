use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::errors::SynthesisError;

/// Where column random streams come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RandomSource {
    /// Reproducible: each column stream is derived from the seed and the field key.
    Seeded(u64),
    /// Fresh OS entropy per column.
    #[default]
    Entropy,
}

impl RandomSource {
    /// Random stream for the column keyed by `field_key` (the lowercased field type).
    pub fn rng_for(&self, field_key: &str) -> Result<ChaCha8Rng, SynthesisError> {
        match self {
            RandomSource::Seeded(seed) => {
                Ok(ChaCha8Rng::seed_from_u64(hash_seed(*seed, field_key)))
            }
            RandomSource::Entropy => ChaCha8Rng::try_from_os_rng()
                .map_err(|err| SynthesisError::Entropy(err.to_string())),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        match self {
            RandomSource::Seeded(seed) => Some(*seed),
            RandomSource::Entropy => None,
        }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// FNV-1a over `key`, starting from `seed`.
pub fn hash_seed(seed: u64, key: &str) -> u64 {
    key.bytes().fold(seed ^ FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
