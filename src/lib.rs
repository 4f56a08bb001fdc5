//! # ratmat
//!
//! ratmat is a small interpreter for exact linear algebra, written in Rust.
//! It evaluates one line at a time: exact rationals, complex numbers, vectors
//! and matrices, with the four arithmetic operators, scalar broadcasting,
//! matrix products and transposition.
//!
//! ```
//! use ratmat::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.execute_line("M = [ 1 2; 3 4 ]").unwrap();
//! let value = interpreter.execute_line("T(M) * [ 1 1 ]").unwrap().unwrap();
//! assert_eq!(value.to_string(), "[ 4 6 ]");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while executing a line.
/// It standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source positions for
/// syntax errors.
///
/// # Responsibilities
/// - Defines error enums for the lexer, the parser and runtime failures.
/// - Attaches line and column numbers to syntax errors.
/// - Combines them into the single `Error` returned by `execute_line`.
pub mod error;
/// Orchestrates the execution of a line.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the variable environment, and exposes the
/// [`Interpreter`] session type.
pub mod interpreter;
/// General utilities for checked integer arithmetic.
///
/// # Responsibilities
/// - Greatest common divisors for rational normalization.
/// - Narrowing and widening conversions without silent data loss.
/// - Digit accumulation for numeric literals.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{core::Interpreter, value::core::Value},
};

/// Executes a script line by line and writes the results to `out`.
///
/// Blank lines are skipped. Every other line goes through
/// [`Interpreter::execute_line`]; expression values are written one per line
/// and failures are written as `Error on line N: message`. A failing line does
/// not stop the script.
///
/// # Returns
/// The number of lines that failed.
///
/// # Errors
/// Only I/O errors from writing to `out` are returned.
///
/// # Examples
/// ```
/// use ratmat::{Interpreter, run_script};
///
/// let script = "R = 1 / 3\nR * 3\nZ\n";
/// let mut out = Vec::new();
/// let failures = run_script(&mut Interpreter::new(), script, &mut out).unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "1\nError on line 3: Undefined variable 'Z'.\n");
/// ```
pub fn run_script<W: Write>(interpreter: &mut Interpreter,
                            source: &str,
                            out: &mut W)
                            -> io::Result<usize> {
    let mut failures = 0;

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match interpreter.execute_line(line) {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {},
            Err(e) => {
                failures += 1;
                log::warn!("line {} failed: {e}", index + 1);
                writeln!(out, "Error on line {}: {e}", index + 1)?;
            },
        }
    }

    Ok(failures)
}
