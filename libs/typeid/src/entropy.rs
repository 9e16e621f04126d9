//! Pluggable entropy for identifier generation.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::TypeIdError;

/// A source of cryptographically strong random bytes.
///
/// Production code uses [`OsEntropy`]; tests substitute a deterministic
/// source such as [`FixedEntropy`] for reproducible fixtures.
pub trait EntropySource: Send + Sync {
    /// Fills `buf` with random bytes.
    ///
    /// Failure means the source is unavailable or exhausted. It
    /// surfaces as [`TypeIdError::Generation`] and is never retried
    /// here; retries, if any, are the caller's decision.
    fn fill(&self, buf: &mut [u8]) -> Result<(), TypeIdError>;
}

/// The operating system's CSPRNG.
///
/// Safe for concurrent use from any number of threads; the OS owns all
/// shared state.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TypeIdError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| TypeIdError::Generation(e.to_string()))
    }
}

/// A fixed byte pattern, cycled to fill any request.
///
/// Every call returns the same bytes. For tests and fixtures only.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    bytes: [u8; crate::uuid7::RANDOM_LEN],
}

impl FixedEntropy {
    /// Creates a source that always yields `bytes`, repeated as needed.
    #[must_use]
    pub const fn new(bytes: [u8; crate::uuid7::RANDOM_LEN]) -> Self {
        Self { bytes }
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), TypeIdError> {
        for (i, b) in buf.iter_mut().enumerate() {
            *b = self.bytes[i % self.bytes.len()];
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills() {
        let mut buf = [0u8; 32];
        OsEntropy.fill(&mut buf).unwrap();
        // 32 zero bytes from a healthy CSPRNG is a 1-in-2^256 event.
        assert_ne!(buf, [0u8; 32]);
    }

    #[test]
    fn test_fixed_entropy_is_deterministic() {
        let source = FixedEntropy::new([0xab; 10]);
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        source.fill(&mut a).unwrap();
        source.fill(&mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, [0xab; 16]);
    }
}
