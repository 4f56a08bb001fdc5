use std::rc::Rc;

use ratmat::{
    Error, Interpreter, Value,
    error::{LexError, ParseError, RuntimeError},
};

fn eval(interpreter: &mut Interpreter, line: &str) -> String {
    match interpreter.execute_line(line) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => panic!("'{line}' produced no value"),
        Err(e) => panic!("'{line}' failed: {e}"),
    }
}

fn eval_fresh(line: &str) -> String {
    eval(&mut Interpreter::new(), line)
}

fn run(interpreter: &mut Interpreter, lines: &[&str]) {
    for line in lines {
        if let Err(e) = interpreter.execute_line(line) {
            panic!("'{line}' failed: {e}");
        }
    }
}

fn runtime_error(line: &str) -> RuntimeError {
    match Interpreter::new().execute_line(line) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error for '{line}', got {other:?}"),
    }
}

fn parse_error(line: &str) -> ParseError {
    match Interpreter::new().execute_line(line) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for '{line}', got {other:?}"),
    }
}

#[test]
fn sample_session() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter,
        &["V1 = [ 1 2 3 ]",
          "M1 = [ 1 0 0; 0 1 0; 0 0 1 ]",
          "V2 = M1 * V1",
          "R = 1 / 3",
          "V3 = V2 * R",
          "M2 = T(M1)"]);

    assert_eq!(eval(&mut interpreter, "V3"), "[ 1/3 2/3 1 ]");
    assert_eq!(eval(&mut interpreter, "M2"), "[\n1 0 0;\n0 1 0;\n0 0 1\n]");
}

#[test]
fn blank_lines_and_assignments_yield_nothing() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.execute_line(""), Ok(None));
    assert_eq!(interpreter.execute_line("   \t "), Ok(None));
    assert_eq!(interpreter.execute_line("x = 2"), Ok(None));
    assert_eq!(eval(&mut interpreter, "x"), "2");
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval_fresh("1 + 2 * 3"), "7");
    assert_eq!(eval_fresh("(1 + 2) * 3"), "9");
    assert_eq!(eval_fresh("8 - 3 - 2"), "3");
    assert_eq!(eval_fresh("8 / 4 / 2"), "1");
    assert_eq!(eval_fresh("-2 * 3"), "-6");
    assert_eq!(eval_fresh("- - 4"), "4");
    assert_eq!(eval_fresh("2 * -3"), "-6");
}

#[test]
fn rational_rendering() {
    assert_eq!(eval_fresh("2 / 4"), "1/2");
    assert_eq!(eval_fresh("-1 / 2"), "-1/2");
    assert_eq!(eval_fresh("7 / 2"), "3+(1/2)");
    assert_eq!(eval_fresh("-7 / 2"), "-3+(1/2)");
    assert_eq!(eval_fresh("6 / 3"), "2");
    assert_eq!(eval_fresh("1 / 3 + 1 / 6"), "1/2");
}

#[test]
fn decimals_are_exact() {
    assert_eq!(eval_fresh("3.25"), "3+(1/4)");
    assert_eq!(eval_fresh("-0.5"), "-1/2");
    assert_eq!(eval_fresh(".5"), "1/2");
    assert_eq!(eval_fresh("0.1 + 0.2"), "3/10");
    assert_eq!(eval_fresh("1.50000000000000000000"), "1+(1/2)");

    let mut interpreter = Interpreter::new();
    let Some(Value::Rational(r)) = interpreter.execute_line("3.25").unwrap() else {
        panic!("3.25 should be rational");
    };
    assert_eq!((r.numerator(), r.denominator()), (13, 4));
}

#[test]
fn complex_arithmetic() {
    assert_eq!(eval_fresh("i"), "1.0000000000i");
    assert_eq!(eval_fresh("i * i"), "-1.0000000000");
    assert_eq!(eval_fresh("-i"), "-1.0000000000i");
    assert_eq!(eval_fresh("1 + i"), "1.0000000000+1.0000000000i");
    assert_eq!(eval_fresh("2 - 3 * i"), "2.0000000000-3.0000000000i");
    assert_eq!(eval_fresh("1 / i"), "-1.0000000000i");
    assert_eq!(eval_fresh("1 / 2 + i"), "0.5000000000+1.0000000000i");
}

#[test]
fn complex_division_by_large_values() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter,
        &["z = 3000000000 + 3000000000 * i",
          "z = z * z",
          "z = z * z",
          "z = z * z",
          "z = z * z",
          "w = z * 10"]);

    assert_eq!(eval(&mut interpreter, "w / w"), "1.0000000000");
    assert_eq!(eval(&mut interpreter, "(w * i) / w"), "1.0000000000i");
}

#[test]
fn scalar_times_tensor_is_commutative() {
    assert_eq!(eval_fresh("2 * [ 1 2 3 ]"), "[ 2 4 6 ]");
    assert_eq!(eval_fresh("[ 1 2 3 ] * 2"), "[ 2 4 6 ]");
    assert_eq!(eval_fresh("1 / 2 * [ 1 0; 0 1 ]"), "[\n1/2 0;\n0 1/2\n]");
    assert_eq!(eval_fresh("[ 1 0; 0 1 ] * (1 / 2)"), "[\n1/2 0;\n0 1/2\n]");
}

#[test]
fn tensor_arithmetic() {
    assert_eq!(eval_fresh("[ 1 2 ] + [ 3 4 ]"), "[ 4 6 ]");
    assert_eq!(eval_fresh("[ 1 2 ] - [ 3 4 ]"), "[ -2 -2 ]");
    assert_eq!(eval_fresh("[ 1 2 ] / 4"), "[ 1/4 1/2 ]");
    assert_eq!(eval_fresh("[ 1/2 1; 0 1 ] - [ 1 1; 0 1 ]"), "[\n-1/2 0;\n0 0\n]");
    assert_eq!(eval_fresh("[ 2 4; 6 8 ] / 2"), "[\n1 2;\n3 4\n]");
    assert_eq!(eval_fresh("[ 1 2; 3 4 ] * [ 5 6; 7 8 ]"), "[\n19 22;\n43 50\n]");
    assert_eq!(eval_fresh("[ 1 2; 3 4 ] * [ 1 1 ]"), "[ 3 7 ]");
    assert_eq!(eval_fresh("[ 1 i; 0 1 ] * [ 1 1 ]"), "[ 1.0000000000+1.0000000000i 1 ]");
    assert_eq!(eval_fresh("T([ 1 2 3; 4 5 6 ])"), "[\n1 4;\n2 5;\n3 6\n]");
}

#[test]
fn literal_elements_are_full_expressions() {
    assert_eq!(eval_fresh("[ 1 -2 ]"), "[ -1 ]");
    assert_eq!(eval_fresh("[ 1 (-2) ]"), "[ 1 -2 ]");
    assert_eq!(eval_fresh("[ 1/2 2*3 ]"), "[ 1/2 6 ]");
    assert_eq!(eval_fresh("[ 1 2; ]"), "[ 1 2 ]");
}

#[test]
fn literal_errors() {
    assert_eq!(runtime_error("[ ]"), RuntimeError::EmptyLiteral);
    assert_eq!(runtime_error("[ ; ]"), RuntimeError::EmptyLiteral);
    assert_eq!(runtime_error("[ [ 1 2 ] 3 ]"),
               RuntimeError::ElementMustBeScalar { found: "vector" });
    assert_eq!(runtime_error("[ 1 2; 3 ]"),
               RuntimeError::RaggedMatrix { row:      2,
                                            expected: 2,
                                            found:    1, });
    assert!(matches!(parse_error("[ 1 2"), ParseError::ExpectedClosingBracket { .. }));
}

#[test]
fn unsupported_combinations() {
    for line in ["[ 1 2 ] * [ 3 4 ]",
                 "[ 1 2 ] + [ 1 2; 3 4 ]",
                 "[ 1 2 ] + 1",
                 "1 / [ 1 2 ]",
                 "[ 1 2 ] * [ 1 0; 0 1 ]",
                 "[ 1 2; 3 4 ] / [ 1 2; 3 4 ]",
                 "-[ 1 2 ]"]
    {
        assert!(matches!(runtime_error(line), RuntimeError::UnsupportedOperation { .. }),
                "{line} should be unsupported");
    }

    assert_eq!(runtime_error("1 / [ 1 2 ]"),
               RuntimeError::UnsupportedOperation { op:    "/",
                                                    left:  "rational",
                                                    right: "vector", });
    assert_eq!(runtime_error("T([ 1 2 ])"),
               RuntimeError::UnsupportedUnaryOperation { op:      "T",
                                                         operand: "vector", });
    assert!(matches!(runtime_error("T(i)"), RuntimeError::UnsupportedUnaryOperation { .. }));
}

#[test]
fn dimension_mismatches() {
    for line in ["[ 1 2 ] + [ 1 2 3 ]",
                 "[ 1 2 3; 4 5 6 ] * [ 1 2; 3 4 ]",
                 "[ 1 2; 3 4 ] * [ 1 2 3 ]",
                 "[ 1 2; 3 4 ] - [ 1 2 3; 4 5 6 ]"]
    {
        assert!(matches!(runtime_error(line), RuntimeError::DimensionMismatch { .. }),
                "{line} should be a dimension mismatch");
    }
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_error("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("i / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("1 / (i - i)"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("[ 1 2 ] / 0"), RuntimeError::DivisionByZero);
}

#[test]
fn undefined_variable_leaves_environment_alone() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, &["X = 5"]);
    let before = interpreter.environment().len();
    assert!(!interpreter.environment().is_empty());

    let err = interpreter.execute_line("Z").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "Z".to_string() }));
    assert!(err.to_string().contains("Undefined variable"));

    assert!(interpreter.execute_line("Y = Z + 1").is_err());
    assert!(!interpreter.environment().contains("Y"));
    assert_eq!(interpreter.environment().len(), before);
}

#[test]
fn failed_assignment_keeps_previous_value() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, &["X = 1"]);
    assert!(interpreter.execute_line("X = 1 / 0").is_err());
    assert!(interpreter.execute_line("X = 2 3").is_err());
    assert_eq!(eval(&mut interpreter, "X"), "1");
}

#[test]
fn assignment_shares_values() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, &["V2 = [ 1 2 ]", "V3 = V2"]);

    let env = interpreter.environment();
    match (env.get("V2"), env.get("V3")) {
        (Some(Value::Vector(a)), Some(Value::Vector(b))) => assert!(Rc::ptr_eq(a, b)),
        other => panic!("expected two vectors, got {other:?}"),
    }
}

#[test]
fn i_can_be_rebound() {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, &["i = 3"]);
    assert_eq!(eval(&mut interpreter, "i * 2"), "6");
}

#[test]
fn functions() {
    assert_eq!(runtime_error("inv([ 1 0; 0 1 ])"),
               RuntimeError::UnknownFunction { name: "inv".to_string() });
    assert_eq!(runtime_error("T"), RuntimeError::UndefinedVariable { name: "T".to_string() });
    assert_eq!(eval_fresh("T(T([ 1 2; 3 4 ]))"), "[\n1 2;\n3 4\n]");
}

#[test]
fn syntax_errors_carry_positions() {
    assert_eq!(parse_error("1 2"),
               ParseError::UnexpectedTrailingTokens { token:  "2".to_string(),
                                                      line:   1,
                                                      column: 3, });
    assert!(matches!(parse_error("(1 + 2"),
                     ParseError::ExpectedClosingParen { line: 1, column: 7 }));
    assert!(matches!(parse_error("1 +"), ParseError::ExpectedExpression { column: 4, .. }));
    assert!(matches!(parse_error("= 3"), ParseError::ExpectedExpression { column: 1, .. }));
    assert!(matches!(parse_error("x ="), ParseError::ExpectedExpression { .. }));
    assert!(matches!(parse_error("T(1"), ParseError::ExpectedClosingParen { .. }));

    match Interpreter::new().execute_line("1 $ 2") {
        Err(e @ Error::Lex(LexError::UnexpectedCharacter { character: '$', .. })) => {
            assert_eq!(e.position(), Some((1, 3)));
        },
        other => panic!("expected a lex error, got {other:?}"),
    }
    assert_eq!(Interpreter::new().execute_line("1.2.3"),
               Err(Error::Lex(LexError::SecondDecimalPoint { line: 1, column: 4 })));
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(parse_error("99999999999999999999"), ParseError::LiteralTooLarge { .. }));
    assert!(matches!(parse_error("0.0000000000000000001"),
                     ParseError::LiteralTooLarge { .. }));
    assert_eq!(runtime_error("9223372036854775807 + 1"), RuntimeError::Overflow);
    assert_eq!(eval_fresh("9223372036854775807 - 1"), "9223372036854775806");
}
