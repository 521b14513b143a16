use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::CryptoError;

/// Number of random bytes fetched from the OS per refill in `random_indices`.
const RANDOM_CHUNK: usize = 64;

/// Trait defining the secure random operations used by the generator.
pub trait CryptoServiceTrait {
    /// Generates cryptographically secure random bytes of the specified length.
    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError>;

    /// Returns `count` indices, each uniformly distributed over `0..bound`.
    ///
    /// `bound` must be in `1..=256`.
    fn random_indices(&self, bound: usize, count: usize) -> Result<Vec<usize>, CryptoError>;

    /// Securely clears sensitive data from memory by overwriting with zeros.
    fn zeroize_memory(&self, data: &mut [u8]);
}

/// Secure randomness backed by the operating system through `ring`.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Largest byte value (exclusive) that maps onto `0..bound` without modulo bias.
    fn rejection_limit(bound: usize) -> usize {
        256 - (256 % bound)
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoServiceTrait for CryptoService {
    fn generate_random_bytes(&self, length: usize) -> Result<Vec<u8>, CryptoError> {
        let mut bytes = vec![0u8; length];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| CryptoError::RandomGeneration("System random source unavailable".to_string()))?;
        Ok(bytes)
    }

    fn random_indices(&self, bound: usize, count: usize) -> Result<Vec<usize>, CryptoError> {
        if bound == 0 || bound > 256 {
            return Err(CryptoError::InvalidBound(bound));
        }

        let limit = Self::rejection_limit(bound);
        let mut indices = Vec::with_capacity(count);
        while indices.len() < count {
            let mut chunk = self.generate_random_bytes(RANDOM_CHUNK)?;
            indices.extend(
                chunk
                    .iter()
                    .map(|b| *b as usize)
                    .filter(|b| *b < limit)
                    .map(|b| b % bound)
                    .take(count - indices.len()),
            );
            self.zeroize_memory(&mut chunk);
        }
        Ok(indices)
    }

    fn zeroize_memory(&self, data: &mut [u8]) {
        data.zeroize();
    }
}
