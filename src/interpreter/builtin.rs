use crate::interpreter::{core::EvalResult, value::core::Value};

/// Signature of a built-in function: one evaluated argument in, one value out.
pub type BuiltinFn = fn(&Value) -> EvalResult<Value>;

/// Lookup table of built-in functions.
static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[("T", Value::transpose as BuiltinFn)];

/// Finds the built-in function called `name`.
///
/// # Example
/// ```
/// use ratmat::interpreter::builtin::lookup;
///
/// assert!(lookup("T").is_some());
/// assert!(lookup("inv").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|(builtin, _)| *builtin == name)
                 .map(|(_, func)| *func)
}
