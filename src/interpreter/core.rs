use log::debug;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment, lexer::tokenize, parser::core::Parser, value::core::Value,
    },
};

/// Result type used by value operations.
///
/// All arithmetic returns either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// An interpreter session.
///
/// Each call to [`Interpreter::execute_line`] tokenizes and evaluates one line
/// from scratch; the only state carried between lines is the
/// [`Environment`].
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates a session whose environment only holds `i`.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(), }
    }

    /// The variables of this session.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes one line.
    ///
    /// A line is either an assignment `NAME = expression` or a bare
    /// expression.
    ///
    /// # Returns
    /// - `Ok(None)` for a blank line or an assignment.
    /// - `Ok(Some(value))` for an expression.
    ///
    /// # Errors
    /// Returns the lex, parse or runtime error that aborted the line. The
    /// environment is left exactly as it was before the call.
    ///
    /// # Example
    /// ```
    /// use ratmat::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert!(interpreter.execute_line("R = 1 / 3").unwrap().is_none());
    ///
    /// let value = interpreter.execute_line("R + 1/6").unwrap().unwrap();
    /// assert_eq!(value.to_string(), "1/2");
    ///
    /// assert!(interpreter.execute_line("Z").is_err());
    /// ```
    pub fn execute_line(&mut self, text: &str) -> Result<Option<Value>, Error> {
        let tokens = tokenize(text)?;
        let mut parser = Parser::new(&tokens, &self.environment);

        if parser.at_end() {
            return Ok(None);
        }

        let target = parser.assignment_target().map(str::to_owned);
        let value = parser.parse_expression()?;
        parser.expect_end()?;

        match target {
            Some(name) => {
                debug!("{name} = {value}");
                self.environment.assign(name, value);
                Ok(None)
            },
            None => {
                debug!("evaluated to a {}", value.kind_name());
                Ok(Some(value))
            },
        }
    }
}
