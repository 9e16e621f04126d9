//! Time-ordered 128-bit value generation.
//!
//! Values follow the UUIDv7 layout from RFC 9562: the high 48 bits are
//! the Unix timestamp in milliseconds, the version and variant bits are
//! fixed, and everything else is random. A value generated in a later
//! millisecond always compares greater than one generated earlier;
//! within a single millisecond only the random tail differs and the
//! relative order of concurrent values is unspecified.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::entropy::EntropySource;
use crate::error::TypeIdError;

/// Random bytes consumed per generated value.
pub const RANDOM_LEN: usize = 10;

/// Generates a fresh time-ordered value from the system clock and the
/// given entropy source.
///
/// The only failure modes are an unavailable entropy source and a
/// system clock before the Unix epoch; both surface as
/// [`TypeIdError::Generation`] without retry.
pub fn generate(entropy: &dyn EntropySource) -> Result<Uuid, TypeIdError> {
    let millis = unix_millis()?;
    let mut random = [0u8; RANDOM_LEN];
    entropy.fill(&mut random)?;
    Ok(uuid::Builder::from_unix_timestamp_millis(millis, &random).into_uuid())
}

fn unix_millis() -> Result<u64, TypeIdError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| TypeIdError::Generation(format!("system clock before Unix epoch: {e}")))?;
    Ok(elapsed.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{FixedEntropy, OsEntropy};

    struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn fill(&self, _buf: &mut [u8]) -> Result<(), TypeIdError> {
            Err(TypeIdError::Generation("entropy pool exhausted".into()))
        }
    }

    #[test]
    fn test_timestamp_in_high_bits() {
        let before = unix_millis().unwrap();
        let value = generate(&OsEntropy).unwrap();
        let after = unix_millis().unwrap();
        let millis = (value.as_u128() >> 80) as u64;
        assert!(millis >= before);
        assert!(millis <= after);
    }

    #[test]
    fn test_version_and_variant_bits() {
        let value = generate(&FixedEntropy::new([0; RANDOM_LEN])).unwrap();
        assert_eq!(value.get_version_num(), 7);
        assert_eq!(value.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_random_tail_is_deterministic_under_fixed_entropy() {
        let source = FixedEntropy::new([0xab; RANDOM_LEN]);
        let a = generate(&source).unwrap();
        let b = generate(&source).unwrap();
        // Only the timestamp may differ between the two values.
        let tail_mask = (1u128 << 80) - 1;
        assert_eq!(a.as_u128() & tail_mask, b.as_u128() & tail_mask);
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let result = generate(&FailingEntropy);
        assert!(matches!(result, Err(TypeIdError::Generation(_))));
    }
}
