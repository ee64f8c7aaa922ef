//! Provider traits and lifetimes
//!
//! These define what can back a service definition and how the consuming
//! container is expected to share the instances it builds.

use std::any::TypeId;

/// Marker trait for types that can be stored as a service target.
///
/// This is automatically implemented for all types that are `Send + Sync + 'static`.
/// You never need to implement this manually.
///
/// # Examples
///
/// ```rust
/// use service_definition::ServiceDefinition;
///
/// // Any type that is Send + Sync + 'static works as a target
/// struct MailerFactory;
///
/// let definition = ServiceDefinition::new("mailer", MailerFactory);
/// assert!(definition.target().is::<MailerFactory>());
/// ```
pub trait Injectable: Send + Sync + 'static {
    /// Returns the TypeId of this type (for internal use)
    #[inline]
    fn type_id_of() -> TypeId
    where
        Self: Sized,
    {
        TypeId::of::<Self>()
    }

    /// Returns the type name for debugging
    #[inline]
    fn type_name_of() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

// Blanket implementation - everything that's Send + Sync + 'static is Injectable
impl<T: Send + Sync + 'static> Injectable for T {}

/// How the consuming container should share instances of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    /// Single instance cached and reused for every resolve
    #[default]
    Singleton,

    /// New instance constructed on every resolve
    Transient,
}

impl Lifetime {
    /// Whether this lifetime caches one instance
    #[inline]
    pub fn is_singleton(self) -> bool {
        matches!(self, Lifetime::Singleton)
    }

    /// Short name used in log fields and `Display`
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Lifetime::Singleton => "singleton",
            Lifetime::Transient => "transient",
        }
    }
}

impl From<bool> for Lifetime {
    #[inline]
    fn from(is_singleton: bool) -> Self {
        if is_singleton {
            Lifetime::Singleton
        } else {
            Lifetime::Transient
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
