use super::*;
use pretty_assertions::assert_eq;

#[test]
fn int_display_is_plain() {
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Int(-7).to_string(), "-7");
}

#[test]
fn whole_real_keeps_decimal_point() {
    assert_eq!(Value::Real(8.0).to_string(), "8.0");
    assert_eq!(Value::Real(-2.0).to_string(), "-2.0");
    assert_eq!(Value::Real(0.0).to_string(), "0.0");
}

#[test]
fn fractional_real_displays_as_is() {
    assert_eq!(Value::Real(3.5).to_string(), "3.5");
    assert_eq!(Value::Real(-0.25).to_string(), "-0.25");
}

#[test]
fn string_displays_verbatim() {
    assert_eq!(Value::Str("hi 🌱".to_string()).to_string(), "hi 🌱");
}

#[test]
fn bool_displays_lowercase() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn list_displays_bracketed() {
    let list = Value::list(vec![
        Value::Int(1),
        Value::Str("two".to_string()),
        Value::Real(3.0),
    ]);
    assert_eq!(list.to_string(), "[1, two, 3.0]");
    assert_eq!(Value::list(vec![]).to_string(), "[]");
}

#[test]
fn self_referential_list_renders_placeholder() {
    let a = Value::list(vec![Value::Int(1)]);
    if let Value::List(items) = &a {
        let handle = a.clone();
        items.borrow_mut().push(handle);
    }
    assert_eq!(a.to_string(), "[1, [...]]");
}

#[test]
fn numeric_equality_crosses_int_and_real() {
    assert_eq!(Value::Int(2), Value::Real(2.0));
    assert_ne!(Value::Int(2), Value::Real(2.5));
}

#[test]
fn mixed_categories_compare_unequal() {
    assert_ne!(Value::Int(1), Value::Str("1".to_string()));
    assert_ne!(Value::Bool(true), Value::Int(1));
}

#[test]
fn list_equality_is_deep_or_aliased() {
    let a = Value::list(vec![Value::Int(1), Value::Int(2)]);
    let b = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(a, b);
    let alias = a.clone();
    assert_eq!(a, alias);
}

#[test]
fn cloned_list_handle_aliases_storage() {
    let a = Value::list(vec![Value::Int(1)]);
    let b = a.clone();
    if let Value::List(items) = &b {
        items.borrow_mut().push(Value::Int(2));
    }
    assert_eq!(a.to_string(), "[1, 2]");
}

#[test]
fn type_names() {
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::Real(0.0).type_name(), "real");
    assert_eq!(Value::Str(String::new()).type_name(), "string");
    assert_eq!(Value::Bool(false).type_name(), "bool");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::Unit.type_name(), "unit");
}
