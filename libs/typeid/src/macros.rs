//! Macro for defining identifier types with a fixed, compile-time tag.

/// Defines a newtype identifier bound to one tag.
///
/// Hosts that know their record types at compile time get a distinct
/// Rust type per tag, so identifiers of different record types cannot
/// be mixed. The generated type wraps [`TypeId`](crate::TypeId) with:
/// - a `TAG` constant
/// - `generate()` for a fresh identifier
/// - `parse()` that rejects identifiers carrying any other tag
/// - `Display`, `FromStr`, `Serialize`, and `Deserialize`
/// - `Ord`, `Hash`, and the other standard traits
///
/// # Example
///
/// ```
/// use typeid::define_typed_id;
///
/// define_typed_id!(UserId, "user");
/// define_typed_id!(OrderId, "order");
///
/// let id = UserId::generate()?;
/// assert!(id.to_string().starts_with("user_"));
/// # Ok::<(), typeid::TypeIdError>(())
/// ```
#[macro_export]
macro_rules! define_typed_id {
    ($name:ident, $tag:literal) => {
        /// A typed identifier for this record type.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::TypeId);

        impl $name {
            /// The tag for this identifier type.
            pub const TAG: &'static str = $tag;

            /// Generates a fresh identifier.
            pub fn generate() -> Result<Self, $crate::TypeIdError> {
                $crate::TypeId::generate(Self::TAG).map(Self)
            }

            /// Parses from the canonical string form.
            ///
            /// A syntactically valid identifier carrying a different
            /// tag fails with a tag-mismatch error.
            pub fn parse(s: &str) -> Result<Self, $crate::TypeIdError> {
                let id = $crate::TypeId::parse(s)?;
                if id.tag().as_str() != Self::TAG {
                    return Err($crate::TypeIdError::TagMismatch {
                        expected: Self::TAG,
                        actual: id.tag().as_str().to_string(),
                    });
                }
                Ok(Self(id))
            }

            /// The wrapped identifier.
            #[must_use]
            pub fn as_type_id(&self) -> &$crate::TypeId {
                &self.0
            }

            /// The embedded Unix timestamp in milliseconds.
            #[must_use]
            pub fn timestamp_ms(&self) -> u64 {
                self.0.timestamp_ms()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::TypeIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::TypeId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::TypeIdError;

    define_typed_id!(UserId, "user");
    define_typed_id!(OrderId, "order");

    #[test]
    fn test_generate_carries_tag() {
        let id = UserId::generate().unwrap();
        assert!(id.to_string().starts_with("user_"));
        assert_eq!(id.as_type_id().tag().as_str(), UserId::TAG);
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = OrderId::generate().unwrap();
        let parsed: OrderId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_foreign_tag() {
        let result = UserId::parse("order_00000000000000000000000000");
        assert_eq!(
            result.unwrap_err(),
            TypeIdError::TagMismatch {
                expected: "user",
                actual: "order".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_suffix() {
        assert!(UserId::parse("user_not_a_suffix").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let id = UserId::generate().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
