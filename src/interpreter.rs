/// The interpreter session and the `execute_line` entry point.
///
/// Ties the lexer, the evaluating parser and the environment together and
/// commits assignments only once their right-hand side has evaluated.
pub mod core;
/// Built-in functions.
///
/// A lookup table from function names to implementations; currently only the
/// transpose operator `T`.
pub mod builtin;
/// Variable storage.
///
/// The name-to-value table of one session, seeded with the imaginary unit
/// `i`.
pub mod environment;
/// The lexer module tokenizes one line of source code.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text, line and
///   column.
/// - Recognizes numbers, identifiers, brackets and the arithmetic operators.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module parses and evaluates in a single pass.
///
/// There is no syntax tree: each grammar rule returns the value of the
/// sub-expression it recognized.
///
/// # Responsibilities
/// - Enforces operator precedence and associativity.
/// - Resolves variables and built-in function calls.
/// - Parses vector and matrix literals.
/// - Reports parse errors with line and column.
pub mod parser;
/// The value module defines the runtime data types.
///
/// # Responsibilities
/// - Defines the `Value` enum: rationals, complex numbers, vectors and
///   matrices.
/// - Implements the arithmetic operators and their promotion rules.
/// - Renders values in their canonical text form.
pub mod value;
