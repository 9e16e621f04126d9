//! The [`TypeId`] value type: a validated tag plus a time-ordered,
//! base32-encoded 128-bit value.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::codec::{self, ENCODED_LEN};
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{TagError, TypeIdError};
use crate::tag::Tag;
use crate::uuid7;

/// A type-prefixed, time-ordered identifier.
///
/// The canonical string form is `tag_suffix`, or the bare suffix when
/// the tag is empty. A constructed `TypeId` is always valid and never
/// mutated, so sharing one across threads needs no synchronization.
///
/// Ordering is by tag, then by underlying value. Because the encoding
/// is order-preserving, identifiers sharing a tag sort exactly as their
/// canonical strings do, which follows creation order at millisecond
/// granularity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId {
    tag: Tag,
    value: Uuid,
}

impl TypeId {
    /// Generates a fresh identifier with the given tag, using the OS
    /// entropy source.
    pub fn generate(tag: &str) -> Result<Self, TypeIdError> {
        let tag = Tag::new(tag)?;
        Self::generate_with(tag, &OsEntropy)
    }

    /// Generates a fresh identifier from an already-validated tag and a
    /// caller-chosen entropy source.
    pub fn generate_with(tag: Tag, entropy: &dyn EntropySource) -> Result<Self, TypeIdError> {
        let value = uuid7::generate(entropy)?;
        Ok(Self::from_uuid(tag, value))
    }

    /// Builds an identifier from a validated tag and an existing
    /// 128-bit value.
    ///
    /// Infallible: the `Tag` is already proven and every 128-bit value
    /// has a canonical encoding.
    #[must_use]
    pub const fn from_uuid(tag: Tag, value: Uuid) -> Self {
        Self { tag, value }
    }

    /// Parses the canonical string form.
    ///
    /// The string splits on the last `_` that leaves exactly 26
    /// trailing characters. With no such separator the whole string is
    /// the suffix and the tag is empty; a separator with an empty tag
    /// is rejected. The error identifies which half failed.
    pub fn parse(s: &str) -> Result<Self, TypeIdError> {
        if s.is_empty() {
            return Err(TypeIdError::Parse("identifier cannot be empty".into()));
        }
        let sep = s
            .len()
            .checked_sub(ENCODED_LEN + 1)
            .filter(|&i| s.as_bytes()[i] == b'_');
        let (tag_str, suffix_str) = match sep {
            Some(i) => {
                if i == 0 {
                    return Err(TagError::Empty.into());
                }
                (&s[..i], &s[i + 1..])
            }
            None => ("", s),
        };
        let tag = Tag::new(tag_str)?;
        let value = codec::decode(suffix_str)?;
        Ok(Self {
            tag,
            value: Uuid::from_u128(value),
        })
    }

    /// The tag half; empty for bare identifiers.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The 26-character encoded suffix.
    #[must_use]
    pub fn suffix(&self) -> String {
        codec::encode(self.value.as_u128())
    }

    /// The underlying 128-bit value.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.value
    }

    /// The embedded Unix timestamp in milliseconds.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        (self.value.as_u128() >> 80) as u64
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.is_empty() {
            write!(f, "{}", self.suffix())
        } else {
            write!(f, "{}_{}", self.tag, self.suffix())
        }
    }
}

impl FromStr for TypeId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for TypeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TypeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
