//! Service definitions
//!
//! A `ServiceDefinition` records how a container should build one named
//! service: the target to instantiate, whether the result is shared, the
//! constructor arguments and the method calls to make afterwards. It never
//! builds anything itself.

use crate::{Argument, Injectable, Lifetime, MethodCall, ServiceTarget};

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Build recipe for one named service.
///
/// Mutators append and return `&mut Self`, so calls chain. Nothing is
/// validated or deduplicated; that is the consuming container's job.
///
/// # Examples
///
/// ```rust
/// use service_definition::{Argument, MethodCall, ServiceDefinition};
///
/// struct Logger;
///
/// let mut definition = ServiceDefinition::with_singleton("logger", Logger, false);
/// definition
///     .add_argument("debug")
///     .add_method_call_with_args("setLevel", ["info"]);
///
/// assert_eq!(definition.name(), "logger");
/// assert!(!definition.is_singleton());
/// assert!(definition.target().is::<Logger>());
/// assert_eq!(definition.constructor_args(), &[Argument::from("debug")]);
/// assert_eq!(
///     definition.method_calls(),
///     &[MethodCall::with_args("setLevel", ["info"])]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    name: String,
    is_singleton: bool,
    target: ServiceTarget,
    constructor_args: Vec<Argument>,
    method_calls: Vec<MethodCall>,
}

impl ServiceDefinition {
    /// Create a singleton definition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use service_definition::ServiceDefinition;
    ///
    /// struct Mailer;
    ///
    /// let definition = ServiceDefinition::new("mailer", Mailer);
    /// assert!(definition.is_singleton());
    /// assert!(definition.constructor_args().is_empty());
    /// assert!(definition.method_calls().is_empty());
    /// ```
    #[inline]
    pub fn new<T: Injectable>(name: impl Into<String>, target: T) -> Self {
        Self::from_target(name, ServiceTarget::new(target), true)
    }

    /// Create a definition with an explicit singleton flag
    #[inline]
    pub fn with_singleton<T: Injectable>(
        name: impl Into<String>,
        target: T,
        is_singleton: bool,
    ) -> Self {
        Self::from_target(name, ServiceTarget::new(target), is_singleton)
    }

    /// Create a definition from an existing target handle.
    ///
    /// Use this to share one target between definitions, or to pass an
    /// `Arc` without wrapping it a second time.
    pub fn from_target(
        name: impl Into<String>,
        target: impl Into<ServiceTarget>,
        is_singleton: bool,
    ) -> Self {
        let name = name.into();
        let target = target.into();

        #[cfg(feature = "logging")]
        debug!(
            target: "service_definition",
            service = %name,
            singleton = is_singleton,
            target_type = target.type_name(),
            "Creating service definition"
        );

        Self {
            name,
            is_singleton,
            target,
            constructor_args: Vec::new(),
            method_calls: Vec::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Append one constructor argument
    pub fn add_argument(&mut self, value: impl Into<Argument>) -> &mut Self {
        self.constructor_args.push(value.into());

        #[cfg(feature = "logging")]
        trace!(
            target: "service_definition",
            service = %self.name,
            arg_count = self.constructor_args.len(),
            "Added constructor argument"
        );

        self
    }

    /// Append constructor arguments in order.
    ///
    /// Existing arguments are kept; an empty iterator changes nothing.
    pub fn add_arguments<I, A>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        #[cfg(feature = "logging")]
        let before = self.constructor_args.len();

        self.constructor_args.extend(args.into_iter().map(Into::into));

        #[cfg(feature = "logging")]
        trace!(
            target: "service_definition",
            service = %self.name,
            added = self.constructor_args.len() - before,
            arg_count = self.constructor_args.len(),
            "Added constructor arguments"
        );

        self
    }

    /// Append a method call with no arguments
    #[inline]
    pub fn add_method_call(&mut self, method: impl Into<String>) -> &mut Self {
        self.push_method_call(MethodCall::new(method))
    }

    /// Append a method call with arguments.
    ///
    /// Repeating a method name adds another entry; earlier ones are kept.
    #[inline]
    pub fn add_method_call_with_args<I, A>(
        &mut self,
        method: impl Into<String>,
        args: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.push_method_call(MethodCall::with_args(method, args))
    }

    /// Append method calls in order
    pub fn add_method_calls<I, C>(&mut self, calls: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<MethodCall>,
    {
        for call in calls {
            self.push_method_call(call.into());
        }
        self
    }

    fn push_method_call(&mut self, call: MethodCall) -> &mut Self {
        #[cfg(feature = "logging")]
        trace!(
            target: "service_definition",
            service = %self.name,
            method = %call.method,
            args = call.args.len(),
            call_count = self.method_calls.len() + 1,
            "Added method call"
        );

        self.method_calls.push(call);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Name the container registers this definition under
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.is_singleton
    }

    #[inline]
    pub fn lifetime(&self) -> Lifetime {
        Lifetime::from(self.is_singleton)
    }

    /// Class or factory the container will instantiate
    #[inline]
    pub fn target(&self) -> &ServiceTarget {
        &self.target
    }

    #[inline]
    pub fn constructor_args(&self) -> &[Argument] {
        &self.constructor_args
    }

    #[inline]
    pub fn method_calls(&self) -> &[MethodCall] {
        &self.method_calls
    }

    /// Names of every service this definition refers to through placeholders.
    ///
    /// Constructor arguments come first, then method-call arguments, each in
    /// recorded order. Duplicates are kept.
    pub fn referenced_services(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for arg in &self.constructor_args {
            arg.collect_references(&mut out);
        }
        for call in &self.method_calls {
            for arg in &call.args {
                arg.collect_references(&mut out);
            }
        }
        out
    }
}
