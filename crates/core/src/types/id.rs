//! Newtype IDs for type-safe entity references.
//!
//! All entities are keyed by strings: products use human-readable slugs
//! (`ayam-geprek-original`), generated records use a short prefixed UUID.
//! The `define_id!` macro creates string wrappers that prevent accidentally
//! mixing IDs from different entity types.

use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` / `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use warung_core::define_id;
/// define_id!(TableId);
///
/// let id = TableId::new("meja-4");
/// assert_eq!(id.as_str(), "meja-4");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Standard entity IDs
define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);
define_id!(ReviewId);
define_id!(ThreadId);

fn generate(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

impl UserId {
    /// Generate a fresh user ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate("usr"))
    }
}

impl OrderId {
    /// Generate a fresh order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate("ord"))
    }

    /// Short display form (last six characters), used on receipts
    /// and order lists.
    #[must_use]
    pub fn short(&self) -> &str {
        let split = self.0.len().saturating_sub(6);
        self.0.get(split..).unwrap_or(&self.0)
    }
}

impl ReviewId {
    /// Generate a fresh review ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate("rev"))
    }
}

impl ThreadId {
    /// Derive the thread ID for a customer's conversation with the admin.
    ///
    /// One thread per customer, so the ID is a pure function of the user.
    #[must_use]
    pub fn for_user(user: &UserId) -> Self {
        Self(format!("chat-{user}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let product = ProductId::new("mie-ayam-original");
        assert_eq!(product.as_str(), "mie-ayam-original");
        assert_eq!(format!("{product}"), "mie-ayam-original");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn test_order_short_id() {
        let id = OrderId::new("ord-0123456789abcdef");
        assert_eq!(id.short(), "abcdef");

        let tiny = OrderId::new("ord");
        assert_eq!(tiny.short(), "ord");
    }

    #[test]
    fn test_thread_id_is_stable_per_user() {
        let user = UserId::new("usr-abc");
        assert_eq!(ThreadId::for_user(&user), ThreadId::for_user(&user));
        assert_eq!(ThreadId::for_user(&user).as_str(), "chat-usr-abc");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("es-teh-manis");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"es-teh-manis\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
