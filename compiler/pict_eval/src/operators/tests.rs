use super::*;
use pict_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

fn int(v: i64) -> Value {
    Value::Int(v)
}

fn real(v: f64) -> Value {
    Value::Real(v)
}

fn s(v: &str) -> Value {
    Value::Str(v.to_string())
}

#[test]
fn int_addition_stays_int() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &int(5), &int(3)).unwrap(),
        int(8)
    );
}

#[test]
fn real_operand_promotes_result() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &int(1), &real(0.5)).unwrap(),
        real(1.5)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Mul, &real(2.0), &int(3)).unwrap(),
        real(6.0)
    );
}

#[test]
fn add_concatenates_when_either_side_is_string() {
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &s("a"), &s("b")).unwrap(),
        s("ab")
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &s("n="), &int(4)).unwrap(),
        s("n=4")
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Add, &real(2.0), &s("!")).unwrap(),
        s("2.0!")
    );
}

#[test]
fn subtracting_strings_is_a_type_error() {
    let err = evaluate_binary(BinaryOp::Sub, &s("a"), &s("b")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn integer_overflow_is_fatal() {
    let err = evaluate_binary(BinaryOp::Add, &int(i64::MAX), &int(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
    let err = evaluate_binary(BinaryOp::Mul, &int(i64::MIN), &int(-1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
}

#[test]
fn division_always_yields_real() {
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &int(7), &int(2)).unwrap(),
        real(3.5)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Div, &int(6), &int(3)).unwrap(),
        real(2.0)
    );
}

#[test]
fn division_by_zero_is_fatal() {
    let err = evaluate_binary(BinaryOp::Div, &int(1), &int(0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
    assert!(err.message.contains("division by zero"));
    let err = evaluate_binary(BinaryOp::Div, &real(1.0), &real(0.0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
}

#[test]
fn equality_within_categories() {
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &int(2), &real(2.0)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &s("a"), &s("b")).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Eq, &Value::Bool(true), &Value::Bool(true)).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn equality_across_categories_is_a_type_error() {
    let err = evaluate_binary(BinaryOp::Eq, &int(1), &s("1")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    let err = evaluate_binary(BinaryOp::Eq, &Value::Bool(true), &int(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn ordering_on_numbers() {
    assert_eq!(
        evaluate_binary(BinaryOp::Gt, &int(3), &int(2)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Lt, &real(1.5), &int(2)).unwrap(),
        Value::Bool(true)
    );
    // Equal values satisfy neither direction.
    assert_eq!(
        evaluate_binary(BinaryOp::Gt, &int(2), &real(2.0)).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Lt, &int(2), &real(2.0)).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn ordering_on_strings_is_lexicographic() {
    assert_eq!(
        evaluate_binary(BinaryOp::Lt, &s("apple"), &s("banana")).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Gt, &s("b"), &s("a")).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn ordering_mixed_categories_is_a_type_error() {
    let err = evaluate_binary(BinaryOp::Gt, &s("a"), &int(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn logic_requires_bools() {
    assert_eq!(
        evaluate_binary(BinaryOp::And, &Value::Bool(true), &Value::Bool(false)).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Or, &Value::Bool(false), &Value::Bool(true)).unwrap(),
        Value::Bool(true)
    );
    let err = evaluate_binary(BinaryOp::And, &Value::Bool(true), &int(1)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}

#[test]
fn negation() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, &int(5)).unwrap(), int(-5));
    assert_eq!(
        evaluate_unary(UnaryOp::Neg, &real(2.5)).unwrap(),
        real(-2.5)
    );
    let err = evaluate_unary(UnaryOp::Neg, &s("x")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    let err = evaluate_unary(UnaryOp::Neg, &int(i64::MIN)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Runtime);
}

#[test]
fn logical_not() {
    assert_eq!(
        evaluate_unary(UnaryOp::Not, &Value::Bool(true)).unwrap(),
        Value::Bool(false)
    );
    let err = evaluate_unary(UnaryOp::Not, &int(0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
}
