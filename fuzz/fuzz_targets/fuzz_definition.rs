#![no_main]

//! Fuzz target for definition building
//!
//! Replays random builder operations and checks the result against a plain
//! model: arguments and method calls are exactly the appended values, in
//! order, with nothing dropped or merged.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use service_definition::{Argument, MethodCall, ServiceDefinition};

/// Target used for every fuzzed definition
struct FuzzFactory;

/// Argument shapes, kept shallow
#[derive(Debug, Clone, Arbitrary)]
enum FuzzArg {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Ref(String),
    List(Vec<i32>),
}

impl From<FuzzArg> for Argument {
    fn from(arg: FuzzArg) -> Self {
        match arg {
            FuzzArg::Null => Argument::Null,
            FuzzArg::Bool(b) => Argument::Bool(b),
            FuzzArg::Int(i) => Argument::Int(i),
            FuzzArg::Str(s) => Argument::String(s),
            FuzzArg::Ref(name) => Argument::Reference(name),
            FuzzArg::List(items) => Argument::from(items),
        }
    }
}

/// Builder operations
#[derive(Debug, Arbitrary)]
enum DefinitionOp {
    AddArgument(FuzzArg),
    AddArguments(Vec<FuzzArg>),
    AddMethodCall(String),
    AddMethodCallWithArgs(String, Vec<FuzzArg>),
    AddMethodCalls(Vec<(String, Vec<FuzzArg>)>),
    ReadBack,
}

#[derive(Debug, Arbitrary)]
struct Input {
    name: String,
    singleton: Option<bool>,
    ops: Vec<DefinitionOp>,
}

fuzz_target!(|input: Input| {
    let mut definition = match input.singleton {
        Some(flag) => ServiceDefinition::with_singleton(input.name.clone(), FuzzFactory, flag),
        None => ServiceDefinition::new(input.name.clone(), FuzzFactory),
    };

    let mut expected_args: Vec<Argument> = Vec::new();
    let mut expected_calls: Vec<MethodCall> = Vec::new();

    for op in input.ops {
        match op {
            DefinitionOp::AddArgument(arg) => {
                expected_args.push(arg.clone().into());
                definition.add_argument(arg);
            }
            DefinitionOp::AddArguments(args) => {
                expected_args.extend(args.iter().cloned().map(Argument::from));
                definition.add_arguments(args);
            }
            DefinitionOp::AddMethodCall(method) => {
                expected_calls.push(MethodCall::new(method.clone()));
                definition.add_method_call(method);
            }
            DefinitionOp::AddMethodCallWithArgs(method, args) => {
                expected_calls.push(MethodCall::with_args(method.clone(), args.clone()));
                definition.add_method_call_with_args(method, args);
            }
            DefinitionOp::AddMethodCalls(calls) => {
                let calls: Vec<MethodCall> = calls
                    .into_iter()
                    .map(|(method, args)| MethodCall::with_args(method, args))
                    .collect();
                expected_calls.extend(calls.iter().cloned());
                definition.add_method_calls(calls);
            }
            DefinitionOp::ReadBack => {
                let _ = definition.referenced_services();
            }
        }
    }

    assert_eq!(definition.name(), input.name);
    assert_eq!(definition.is_singleton(), input.singleton.unwrap_or(true));
    assert!(definition.target().is::<FuzzFactory>());
    assert_eq!(definition.constructor_args(), expected_args.as_slice());
    assert_eq!(definition.method_calls(), expected_calls.as_slice());
});
