/// Parser state and shared token helpers.
///
/// Defines the `Parser` cursor over a token slice, lookahead and `expect`
/// helpers, and the expression entry point.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+ -` and `* /`,
/// including the operand swap for `scalar * vector|matrix`.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles negation, grouping, variable references and built-in function
/// calls.
pub mod unary;

/// Literal parsing.
///
/// Converts number tokens to exact rationals and parses bracketed vector and
/// matrix literals.
pub mod literal;
