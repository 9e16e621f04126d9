//! # typeid
//!
//! Type-prefixed, time-ordered identifiers for primary keys.
//!
//! ## Design Principles
//!
//! - Every constructed [`TypeId`] is valid; construction is the only validation gate
//! - The canonical string is strict: parsing rejects any deviation instead of normalizing
//! - All components are stateless; concurrent use needs no synchronization
//! - Malformed input and entropy faults are distinct error kinds, so callers
//!   can answer a client differently than they report an internal failure
//!
//! ## Identifier Format
//!
//! All identifiers use a prefixed format: `{tag}_{suffix}`
//!
//! Examples:
//! - `user_01h455vb4pex5vsknk084sn02q`
//! - `order_01h455vcjns8r8zhmkyq2rsvm9`
//! - `01h455vb4pex5vsknk084sn02q` (bare, empty tag)
//!
//! The `tag` names the record type: up to 63 lowercase ASCII letters with
//! inner underscores. The `suffix` is 26 characters of order-preserving
//! base32 over a 128-bit time-ordered value whose high 48 bits are the
//! Unix timestamp in milliseconds. Identifiers generated in a later
//! millisecond always sort lexicographically after earlier ones, so
//! primary-key order follows creation order.

pub mod codec;
mod entropy;
mod error;
mod id;
mod macros;
mod tag;
pub mod uuid7;

pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use error::{SuffixError, TagError, TypeIdError};
pub use id::TypeId;
pub use tag::{validate_tag, Tag, MAX_TAG_LEN};
