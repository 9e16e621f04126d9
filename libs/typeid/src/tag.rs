//! Tag validation and the validated [`Tag`] newtype.

use std::fmt;
use std::str::FromStr;

use crate::error::TagError;

/// Maximum tag length in characters.
pub const MAX_TAG_LEN: usize = 63;

/// Checks a tag string against the syntactic rules.
///
/// Rules: at most 63 characters; only `a`-`z` and `_`; when non-empty,
/// the first and last character must not be `_`. The empty string is
/// the legal "no tag" case; call sites that require a tag reject it
/// themselves with [`TagError::Empty`].
pub fn validate_tag(tag: &str) -> Result<(), TagError> {
    let len = tag.chars().count();
    if len > MAX_TAG_LEN {
        return Err(TagError::TooLong(len));
    }
    if tag.is_empty() {
        return Ok(());
    }
    if tag.starts_with('_') || tag.ends_with('_') {
        return Err(TagError::UnderscoreEdge);
    }
    if let Some(ch) = tag.chars().find(|c| !matches!(c, 'a'..='z' | '_')) {
        return Err(TagError::IllegalChar(ch));
    }
    Ok(())
}

/// A validated identifier tag.
///
/// Holding a `Tag` is proof that [`validate_tag`] passed; construction
/// is the only gate, so a tag configured for a record type is validated
/// exactly once and reused for every identifier generated after that.
/// The empty tag is legal and renders as a bare suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// The empty ("no tag") value.
    pub const EMPTY: Tag = Tag(String::new());

    /// Validates and wraps a tag string.
    pub fn new(tag: impl Into<String>) -> Result<Self, TagError> {
        let tag = tag.into();
        validate_tag(&tag)?;
        Ok(Self(tag))
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the "no tag" case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
