//! Argument values for constructors and method calls
//!
//! Arguments are inert data. A [`Argument::Reference`] names another
//! registered service, but resolving it is left to the container.

use crate::{DefinitionError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A single constructor or method-call argument.
///
/// # Examples
///
/// ```rust
/// use service_definition::Argument;
///
/// let args: Vec<Argument> = vec![
///     "debug".into(),
///     8080.into(),
///     vec!["a", "b"].into(),
///     Argument::reference("logger"),
/// ];
///
/// assert_eq!(args[0].as_str(), Some("debug"));
/// assert_eq!(args[3].as_reference(), Some("logger"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Argument {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Argument>),
    Map(BTreeMap<String, Argument>),
    /// Placeholder for another service, substituted by the container
    Reference(String),
}

impl Argument {
    /// Create a placeholder for the service registered under `name`
    #[inline]
    pub fn reference(name: impl Into<String>) -> Self {
        Argument::Reference(name.into())
    }

    /// Short name of the variant, used in errors and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            Argument::Null => "null",
            Argument::Bool(_) => "bool",
            Argument::Int(_) => "int",
            Argument::Float(_) => "float",
            Argument::String(_) => "string",
            Argument::List(_) => "list",
            Argument::Map(_) => "map",
            Argument::Reference(_) => "reference",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Null)
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Argument::Reference(_))
    }

    /// Service name if this is a placeholder
    #[inline]
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Argument::Reference(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Argument]> {
        match self {
            Argument::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Argument>> {
        match self {
            Argument::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Every placeholder inside this value, depth first.
    ///
    /// Lists yield in order, maps in key order.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    pub(crate) fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Argument::Reference(name) => out.push(name),
            Argument::List(items) => items.iter().for_each(|item| item.collect_references(out)),
            Argument::Map(entries) => entries
                .values()
                .for_each(|value| value.collect_references(out)),
            _ => {}
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Null => f.write_str("null"),
            Argument::Bool(b) => write!(f, "{}", b),
            Argument::Int(i) => write!(f, "{}", i),
            Argument::Float(x) => write!(f, "{}", x),
            Argument::String(s) => write!(f, "{:?}", s),
            Argument::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Argument::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Argument::Reference(name) => write!(f, "@{}", name),
        }
    }
}

// =============================================================================
// Conversions into Argument
// =============================================================================

impl From<bool> for Argument {
    #[inline]
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

macro_rules! int_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                #[inline]
                fn from(value: $ty) -> Self {
                    Argument::Int(i64::from(value))
                }
            }
        )*
    };
}

int_argument!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Argument {
    #[inline]
    fn from(value: f32) -> Self {
        Argument::Float(f64::from(value))
    }
}

impl From<f64> for Argument {
    #[inline]
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<&str> for Argument {
    #[inline]
    fn from(value: &str) -> Self {
        Argument::String(value.to_owned())
    }
}

impl From<String> for Argument {
    #[inline]
    fn from(value: String) -> Self {
        Argument::String(value)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(values: Vec<T>) -> Self {
        Argument::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Argument>> From<BTreeMap<String, T>> for Argument {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Argument::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Argument::Null, Into::into)
    }
}

impl<T: Into<Argument>> FromIterator<T> for Argument {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Argument::List(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Conversions out of Argument
// =============================================================================

impl TryFrom<&Argument> for bool {
    type Error = DefinitionError;

    fn try_from(arg: &Argument) -> Result<Self> {
        match arg {
            Argument::Bool(b) => Ok(*b),
            other => Err(DefinitionError::argument_mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<&Argument> for i64 {
    type Error = DefinitionError;

    fn try_from(arg: &Argument) -> Result<Self> {
        match arg {
            Argument::Int(i) => Ok(*i),
            other => Err(DefinitionError::argument_mismatch("int", other.type_name())),
        }
    }
}

impl TryFrom<&Argument> for f64 {
    type Error = DefinitionError;

    /// Ints widen to floats; nothing else converts.
    fn try_from(arg: &Argument) -> Result<Self> {
        match arg {
            Argument::Float(x) => Ok(*x),
            Argument::Int(i) => Ok(*i as f64),
            other => Err(DefinitionError::argument_mismatch("float", other.type_name())),
        }
    }
}

impl<'a> TryFrom<&'a Argument> for &'a str {
    type Error = DefinitionError;

    fn try_from(arg: &'a Argument) -> Result<Self> {
        arg.as_str()
            .ok_or_else(|| DefinitionError::argument_mismatch("string", arg.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Argument::from(true), Argument::Bool(true));
        assert_eq!(Argument::from(42u32), Argument::Int(42));
        assert_eq!(Argument::from(-7i8), Argument::Int(-7));
        assert_eq!(Argument::from(1.5f64), Argument::Float(1.5));
        assert_eq!(Argument::from("info"), Argument::String("info".into()));
        assert_eq!(Argument::from(None::<i32>), Argument::Null);
        assert_eq!(Argument::from(Some("x")), Argument::String("x".into()));
    }

    #[test]
    fn test_list_and_map_conversions() {
        let list = Argument::from(vec![1, 2, 3]);
        assert_eq!(
            list.as_list().unwrap(),
            &[Argument::Int(1), Argument::Int(2), Argument::Int(3)]
        );

        let mut map = BTreeMap::new();
        map.insert("level".to_string(), "debug");
        let map = Argument::from(map);
        assert_eq!(
            map.as_map().unwrap().get("level"),
            Some(&Argument::String("debug".into()))
        );

        let collected: Argument = ["a", "b"].into_iter().collect();
        assert_eq!(collected, Argument::from(vec!["a", "b"]));
    }

    #[test]
    fn test_reference_is_distinct_from_string() {
        let reference = Argument::reference("logger");
        let string = Argument::from("logger");

        assert_ne!(reference, string);
        assert!(reference.is_reference());
        assert!(!string.is_reference());
        assert_eq!(reference.as_reference(), Some("logger"));
        assert_eq!(string.as_reference(), None);
    }

    #[test]
    fn test_nested_references() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), Argument::reference("cache"));
        map.insert("a".to_string(), Argument::reference("db"));

        let arg = Argument::List(vec![
            Argument::reference("logger"),
            Argument::Int(1),
            Argument::Map(map),
        ]);

        assert_eq!(arg.references(), vec!["logger", "db", "cache"]);
        assert!(Argument::Int(3).references().is_empty());
    }

    #[test]
    fn test_try_from() {
        assert!(bool::try_from(&Argument::Bool(true)).unwrap());
        assert_eq!(i64::try_from(&Argument::Int(9)).unwrap(), 9);
        assert_eq!(f64::try_from(&Argument::Int(2)).unwrap(), 2.0);
        assert_eq!(<&str>::try_from(&Argument::from("x")).unwrap(), "x");

        let err = i64::try_from(&Argument::from("nine")).unwrap_err();
        assert_eq!(err, DefinitionError::argument_mismatch("int", "string"));
    }

    #[test]
    fn test_display() {
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), Argument::Null);

        let arg = Argument::List(vec![
            Argument::from("info"),
            Argument::Int(1),
            Argument::reference("db"),
            Argument::Map(map),
        ]);

        assert_eq!(arg.to_string(), r#"["info", 1, @db, {"k": null}]"#);
    }

    #[test]
    fn test_default_is_null() {
        assert!(Argument::default().is_null());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_reference_distinct() {
        let args = vec![Argument::from("logger"), Argument::reference("logger")];
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"[{"String":"logger"},{"Reference":"logger"}]"#);

        let back: Vec<Argument> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, args);
    }
}
