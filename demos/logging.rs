//! Example demonstrating logging while building definitions
//!
//! Run with JSON logging (production):
//! ```bash
//! cargo run --example logging --features logging-json
//! ```
//!
//! Run with pretty logging (development):
//! ```bash
//! cargo run --example logging --features logging-pretty
//! ```

use service_definition::{Argument, MethodCall, ServiceDefinition};

// Example targets
struct LoggerClass;

#[allow(dead_code)]
struct DatabaseFactory {
    driver: &'static str,
}

struct UserRepository;

fn main() {
    // Trace level shows every appended argument and method call
    service_definition::logging::init_definitions_only();

    println!("=== Service Definition Logging Demo ===\n");

    // Transient logger (logs: "Creating service definition")
    let mut logger = ServiceDefinition::with_singleton("logger", LoggerClass, false);
    logger
        .add_argument("debug") // logs: "Added constructor argument"
        .add_method_call_with_args("setLevel", ["info"]); // logs: "Added method call"

    // Singleton database built by a factory object
    let mut database = ServiceDefinition::new("database", DatabaseFactory { driver: "postgres" });
    database
        .add_arguments(["localhost", "app"]) // logs: "Added constructor arguments"
        .add_method_calls([
            MethodCall::with_args("setPoolSize", [16]),
            MethodCall::new("connect"),
        ]);

    // Repository depending on the other two through placeholders
    let mut users = ServiceDefinition::new("user_repository", UserRepository);
    users
        .add_argument(Argument::reference("database"))
        .add_method_call_with_args("setLogger", [Argument::reference("logger")]);

    for definition in [&logger, &database, &users] {
        println!(
            "{} ({}, target {})",
            definition.name(),
            definition.lifetime(),
            definition.target().type_name()
        );
        for arg in definition.constructor_args() {
            println!("  arg  {}", arg);
        }
        for call in definition.method_calls() {
            println!("  call {}", call);
        }
        let deps = definition.referenced_services();
        if !deps.is_empty() {
            println!("  needs {}", deps.join(", "));
        }
    }

    println!("\n=== Demo Complete ===");
    println!("\nTip: Use --features logging-json for production (JSON output)");
    println!("     Use --features logging-pretty for development (colorful output)");
}
