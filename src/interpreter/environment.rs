use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        core::EvalResult,
        value::{complex::I, core::Value},
    },
};

/// Name of the predefined imaginary unit.
pub const IMAGINARY_UNIT: &str = "i";

/// Stores the variables of one interpreter session.
///
/// An `Environment` is created once per [`Interpreter`](crate::Interpreter),
/// seeded with the constant `i = 0+1i`, and only changed by assignment
/// statements. Rebinding a name replaces the previous value.
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment that only knows the imaginary unit `i`.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::environment::Environment;
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.get("i").unwrap().to_string(), "1.0000000000i");
    /// assert!(env.get("x").is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut variables = HashMap::new();
        variables.insert(IMAGINARY_UNIT.to_string(), Value::from(I));
        Self { variables }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if the name is unbound.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound names, including `i`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Always `false`: `i` is bound from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
