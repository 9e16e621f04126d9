//! # typeid-persist
//!
//! Pre-insert identifier assignment for persistence frameworks.
//!
//! A host integration layer (ORM hook, repository wrapper, or
//! service-layer interceptor) calls [`IdAssigner::assign_if_absent`]
//! exactly once per record, at the point the record first becomes
//! durable. Records that already carry an identifier keep it, so
//! client-assigned and migrated identifiers are never overwritten;
//! records without one get a fresh [`TypeId`] with the tag configured
//! for their record type.
//!
//! ## Design Principles
//!
//! - One tag per record type, validated once at configuration time
//! - The assigner holds no per-record state; concurrent assignment for
//!   different records needs no coordination
//! - The record's own identifier field is the only state consulted;
//!   the framework's single-writer discipline per record instance is
//!   what prevents double assignment
//! - Generation failures surface unchanged and are never retried here;
//!   aborting or retrying the record creation is the framework's call

use tracing::debug;
use typeid::{EntropySource, OsEntropy, Tag, TypeId, TypeIdError};

/// A record carrying an optional identifier field.
///
/// The host framework guarantees at most one creation hook runs per
/// record instance.
pub trait IdentifiedRecord {
    /// The currently assigned identifier, if any.
    fn type_id(&self) -> Option<&TypeId>;

    /// Stores a freshly assigned identifier.
    fn set_type_id(&mut self, id: TypeId);
}

/// Per-record-type identifier assignment.
///
/// Holds the tag configured for one record type and the entropy source
/// used for generation. Stateless between calls and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct IdAssigner<S = OsEntropy> {
    tag: Tag,
    entropy: S,
}

impl IdAssigner {
    /// Creates an assigner for the given record-type tag, using the OS
    /// entropy source.
    ///
    /// The tag is validated here, once; every later assignment reuses
    /// the proven value.
    pub fn new(tag: &str) -> Result<Self, TypeIdError> {
        Self::with_entropy(tag, OsEntropy)
    }
}

impl<S: EntropySource> IdAssigner<S> {
    /// Creates an assigner with a caller-chosen entropy source.
    pub fn with_entropy(tag: &str, entropy: S) -> Result<Self, TypeIdError> {
        Ok(Self {
            tag: Tag::new(tag)?,
            entropy,
        })
    }

    /// The tag configured for this record type.
    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the record's identifier, generating one first if absent.
    ///
    /// An already-assigned identifier is returned unchanged and no
    /// entropy is consumed. A fresh identifier is generated, stored on
    /// the record, and returned otherwise.
    pub fn assign_if_absent<R>(&self, record: &mut R) -> Result<TypeId, TypeIdError>
    where
        R: IdentifiedRecord,
    {
        if let Some(existing) = record.type_id() {
            return Ok(existing.clone());
        }
        let id = TypeId::generate_with(self.tag.clone(), &self.entropy)?;
        debug!(id = %id, tag = %self.tag, "assigned identifier");
        record.set_type_id(id.clone());
        Ok(id)
    }
}
