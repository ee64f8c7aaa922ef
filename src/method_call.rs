//! Post-construction method calls

use crate::Argument;
use std::fmt;

/// A call the container must make on a freshly built instance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodCall {
    /// Name of the method to invoke
    pub method: String,
    /// Arguments, in call order
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Vec<Argument>,
}

impl MethodCall {
    /// A call with no arguments
    #[inline]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// A call with the given arguments
    pub fn with_args<I, A>(method: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Self {
            method: method.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

impl From<&str> for MethodCall {
    #[inline]
    fn from(method: &str) -> Self {
        Self::new(method)
    }
}

impl From<String> for MethodCall {
    #[inline]
    fn from(method: String) -> Self {
        Self::new(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_args() {
        let call = MethodCall::new("init");
        assert_eq!(call.method, "init");
        assert!(call.args.is_empty());
        assert_eq!(MethodCall::from("init"), call);
    }

    #[test]
    fn test_with_args_preserves_order() {
        let call = MethodCall::with_args("configure", ["a", "b", "c"]);
        assert_eq!(
            call.args,
            vec![Argument::from("a"), Argument::from("b"), Argument::from("c")]
        );
    }

    #[test]
    fn test_display() {
        let call = MethodCall::with_args(
            "setLevel",
            vec![Argument::from("info"), Argument::reference("sink")],
        );
        assert_eq!(call.to_string(), r#"setLevel("info", @sink)"#);
        assert_eq!(MethodCall::new("init").to_string(), "init()");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_args_default_to_empty() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"init"}"#).unwrap();
        assert_eq!(call, MethodCall::new("init"));
    }
}
