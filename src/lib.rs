//! # service-definition - Declarative Service Descriptors
//!
//! A `ServiceDefinition` describes how a dependency injection container
//! should build one named service, without building it.
//!
//! ## Features
//!
//! - 📝 **Declarative** - Records the target, lifetime, constructor arguments and method calls
//! - 🔗 **Fluent** - Every mutator returns `&mut Self` for chaining
//! - 📦 **Opaque targets** - Any `Send + Sync + 'static` class or factory, shared via `Arc`
//! - 🧩 **Typed arguments** - A closed `Argument` enum with service placeholders
//! - 📊 **Observable** - Optional tracing integration with JSON or pretty output
//!
//! ## Quick Start
//!
//! ```rust
//! use service_definition::{Argument, ServiceDefinition};
//!
//! struct Mailer;
//!
//! let mut mailer = ServiceDefinition::new("mailer", Mailer);
//! mailer
//!     .add_argument("smtp://localhost")
//!     .add_argument(Argument::reference("logger"))
//!     .add_method_call_with_args("setRetries", [3])
//!     .add_method_call("connect");
//!
//! assert!(mailer.is_singleton());
//! assert_eq!(mailer.constructor_args().len(), 2);
//! assert_eq!(mailer.referenced_services(), vec!["logger"]);
//! ```
//!
//! ## Lifetimes
//!
//! ```rust
//! use service_definition::{Lifetime, ServiceDefinition};
//!
//! struct RequestId;
//!
//! // Singleton - the container builds once and reuses the instance
//! let shared = ServiceDefinition::new("request_id", RequestId);
//! assert_eq!(shared.lifetime(), Lifetime::Singleton);
//!
//! // Transient - the container builds a new instance per resolve
//! let fresh = ServiceDefinition::with_singleton("request_id", RequestId, false);
//! assert_eq!(fresh.lifetime(), Lifetime::Transient);
//! ```
//!
//! ## What this crate does not do
//!
//! Instantiation, placeholder resolution, name uniqueness and cycle
//! detection belong to the container that consumes the definitions.

mod argument;
mod definition;
mod error;
#[cfg(feature = "logging")]
pub mod logging;
mod method_call;
mod provider;
mod target;

pub use argument::*;
pub use definition::*;
pub use error::*;
pub use method_call::*;
pub use provider::*;
pub use target::*;

// Re-export tracing macros for convenience when logging feature is enabled
#[cfg(feature = "logging")]
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Argument, DefinitionError, Injectable, Lifetime, MethodCall, Result, ServiceDefinition,
        ServiceTarget,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct Database {
        url: String,
    }

    struct UserRepository;

    #[test]
    fn test_registration_flow() {
        let mut db = ServiceDefinition::new("db", Database { url: "postgres://localhost".into() });
        db.add_method_call("connect");

        let mut options = BTreeMap::new();
        options.insert("table".to_string(), Argument::from("users"));
        options.insert("pool".to_string(), Argument::reference("db"));

        let mut repo = ServiceDefinition::with_singleton("users", UserRepository, false);
        repo.add_arguments(vec![Argument::reference("db"), Argument::Map(options)]);

        let registry = vec![db, repo];

        // A container would look definitions up by name and follow placeholders
        let users = registry.iter().find(|d| d.name() == "users").unwrap();
        assert_eq!(users.lifetime(), Lifetime::Transient);
        assert_eq!(users.referenced_services(), vec!["db", "db"]);

        let db = registry.iter().find(|d| d.name() == "db").unwrap();
        let target: Arc<Database> = db.target().downcast().unwrap();
        assert_eq!(target.url, "postgres://localhost");
        assert_eq!(db.method_calls()[0].to_string(), "connect()");
    }

    #[test]
    fn test_wrong_downcast_is_error() {
        let definition = ServiceDefinition::new("users", UserRepository);
        let result: Result<Arc<Database>> = definition.target().downcast();
        assert!(matches!(result, Err(DefinitionError::TargetMismatch { .. })));
    }

    #[test]
    fn test_definitions_move_across_threads() {
        let mut definition = ServiceDefinition::new("db", Database { url: "sqlite://".into() });
        definition.add_argument(5);

        let handle = std::thread::spawn(move || definition.constructor_args().to_vec());
        assert_eq!(handle.join().unwrap(), vec![Argument::Int(5)]);
    }
}
