//! Opaque service targets
//!
//! A target is the class or factory object the container will later use to
//! produce the service. It is stored type-erased behind an `Arc` so cloning a
//! definition shares the target rather than copying it.

use crate::{DefinitionError, Injectable, Result};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Type-erased handle to a constructible type or factory object.
///
/// The handle is never invoked or inspected by this crate. Consumers recover
/// the concrete type with [`downcast`](Self::downcast) or
/// [`downcast_ref`](Self::downcast_ref).
///
/// # Examples
///
/// ```rust
/// use service_definition::ServiceTarget;
///
/// struct LoggerFactory { prefix: &'static str }
///
/// let target = ServiceTarget::new(LoggerFactory { prefix: "app" });
/// assert!(target.is::<LoggerFactory>());
///
/// let factory = target.downcast_ref::<LoggerFactory>().unwrap();
/// assert_eq!(factory.prefix, "app");
/// ```
#[derive(Clone)]
pub struct ServiceTarget {
    /// Erased target, shared across clones
    inner: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl ServiceTarget {
    /// Wrap a target value
    #[inline]
    pub fn new<T: Injectable>(target: T) -> Self {
        Self::from_arc(Arc::new(target))
    }

    /// Wrap an already shared target without copying it
    #[inline]
    pub fn from_arc<T: Injectable>(target: Arc<T>) -> Self {
        Self {
            inner: target as Arc<dyn Any + Send + Sync>,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the erased type
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// TypeId of the erased type
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Check whether the target holds a `T`
    #[inline]
    pub fn is<T: Injectable>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Borrow the target as `T`
    #[inline]
    pub fn downcast_ref<T: Injectable>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Get a shared handle to the target as `T`
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>> {
        Arc::clone(&self.inner)
            .downcast::<T>()
            .map_err(|_| DefinitionError::target_mismatch::<T>(self.type_name))
    }

    /// Check whether two handles share the same target allocation
    #[inline]
    pub fn ptr_eq(&self, other: &ServiceTarget) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ServiceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceTarget")
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl<T: Injectable> From<Arc<T>> for ServiceTarget {
    #[inline]
    fn from(target: Arc<T>) -> Self {
        Self::from_arc(target)
    }
}
