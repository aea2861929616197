//! Behaviour of the assertion entry points and fluent chains.

use bulwark_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;

fn args(error: &StructuredError) -> BTreeMap<String, String> {
    error.arguments().to_map()
}

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn null_input_is_rejected() {
    let err = require_present::<&str>("field", None).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryNull);
    assert_eq!(err.severity(), Some(ErrorSeverity::ServerFault));
    assert_eq!(args(&err), map(&[("field", "field")]));
    assert_eq!(
        err.to_string(),
        "The field \"field\" is mandatory and wasn't set (null)"
    );
}

#[rstest]
#[case::empty("")]
#[case::space(" ")]
#[case::spaces("  ")]
#[case::tab("\t")]
#[case::no_break_space("\u{a0}")]
#[case::ideographic_space("\u{3000}")]
fn blank_string_is_rejected(#[case] input: &str) {
    let err = require_not_blank("field", Some(input)).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryBlank);
    assert!(err.to_string().contains("(blank)"));
}

#[test]
fn null_string_is_null_not_blank() {
    let err = require_not_blank("field", None).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryNull);
    assert!(err.to_string().contains("(null)"));
}

#[test]
fn empty_collection_is_rejected() {
    let err = require_not_empty("field", Some(Vec::<String>::new())).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryEmpty);
    assert!(err.to_string().contains("(empty)"));

    let err = require_not_empty::<Vec<String>>("field", None).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryNull);
}

// ============================================================================
// NUMERIC CHAINS
// ============================================================================

#[test]
fn max_is_inclusive() {
    assert!(field("f", 4_i64).max(4).is_ok());

    let err = field("f", 5_i64).max(4).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::ValueOverMax);
    assert_eq!(args(&err), map(&[("field", "f"), ("max", "4"), ("value", "5")]));
}

#[test]
fn min_is_inclusive() {
    assert!(field("f", 4_i64).min(4).is_ok());

    let err = field("f", 4_i64).min(5).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::ValueUnderMin);
    assert_eq!(args(&err), map(&[("field", "f"), ("min", "5"), ("value", "4")]));
    assert_eq!(err.to_string(), "Value of \"f\" must be over 5 but was 4");
}

#[test]
fn integer_widths_render_identically() {
    let from_i32 = field("f", 5_i32).max(4).unwrap_err();
    let from_i64 = field("f", 5_i64).max(4).unwrap_err();
    let from_u8 = field("f", 5_u8).max(4).unwrap_err();

    assert_eq!(args(&from_i32), args(&from_i64));
    assert_eq!(args(&from_i64), args(&from_u8));
}

#[test]
fn absent_number_passes_bounds() {
    assert!(field("f", None::<i64>).max(3).is_ok());
    assert!(field("f", None::<i32>).min(3).is_ok());
}

// ============================================================================
// STRING CHAINS
// ============================================================================

#[test]
fn max_length_is_inclusive() {
    assert!(field("f", "value").max_length(5).is_ok());

    let err = field("f", "value").max_length(4).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::StringTooLong);
    assert_eq!(
        args(&err),
        map(&[("field", "f"), ("currentLength", "5"), ("maxLength", "4")])
    );
}

#[test]
fn too_short_string() {
    let err = field("f", "value").min_length(10).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::StringTooShort);
    assert_eq!(
        args(&err),
        map(&[("field", "f"), ("currentLength", "5"), ("minLength", "10")])
    );
}

#[test]
fn first_failure_short_circuits_chain() {
    let err = field("f", "abc")
        .max_length(2)
        .and_then(|h| h.min_length(10))
        .unwrap_err();
    assert_eq!(err.message_key(), MessageKey::StringTooLong);
}

#[test]
fn absent_string_passes_length() {
    assert!(field("f", None::<&str>).max_length(42).is_ok());
}

#[test]
fn blank_string_in_chain() {
    let err = field("field", " ").not_blank().unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryBlank);
}

// ============================================================================
// FORMAT
// ============================================================================

#[test]
fn malformed_pattern_is_invalid_regex() {
    let err = field("f", "value").format("[").unwrap_err();
    assert_eq!(err.message_key(), MessageKey::InvalidRegex);
    assert_eq!(args(&err), map(&[("regex", "[")]));
    assert!(err.to_string().contains("invalid regex: \"[\""));
}

#[test]
fn mismatching_value_is_wrong_format() {
    let err = field("f", "dummy").format("[0-9]+").unwrap_err();
    assert_eq!(err.message_key(), MessageKey::InvalidFormat);
    assert_eq!(
        args(&err),
        map(&[("field", "f"), ("regex", "[0-9]+"), ("value", "dummy")])
    );
}

#[test]
fn missing_pattern_is_caller_bug() {
    let err = field("field", "value").format(None::<&str>).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::MandatoryNull);
    assert!(err.to_string().contains("regex"));
}

#[test]
fn matching_value_passes_format() {
    assert!(field("f", "12345").format("[0-9]+").is_ok());
}

// ============================================================================
// REUSABLE RULES
// ============================================================================

#[test]
fn composed_rule_applies_in_chain() {
    let nickname = min_length(3).and(max_length(8));

    assert!(field("nickname", "alice").satisfies(&nickname).is_ok());

    let err = field("nickname", "al").satisfies(&nickname).unwrap_err();
    assert_eq!(err.message_key(), MessageKey::StringTooShort);
    assert_eq!(err.argument("field"), Some("nickname"));
}

#[test]
fn detached_copies_never_alter_arguments() {
    let errors = [
        require_present::<u8>("f", None).unwrap_err(),
        require_not_blank("f", Some(" ")).unwrap_err(),
        require_not_empty("f", Some(Vec::<u8>::new())).unwrap_err(),
        field("f", "value").max_length(1).unwrap_err(),
        field("f", "value").min_length(10).unwrap_err(),
        field("f", 5_i64).max(4).unwrap_err(),
        field("f", 3_i64).min(4).unwrap_err(),
        field("f", "value").format("[").unwrap_err(),
        field("f", "value").format("[0-9]+").unwrap_err(),
    ];

    for error in &errors {
        let before = args(error);
        let mut detached = error.arguments().to_map();
        detached.insert("field".to_owned(), "tampered".to_owned());
        assert_eq!(args(error), before, "{:?}", error.message_key());
        assert!(!error.arguments().is_empty());
    }
}

#[test]
fn chain_failure_messages() {
    let login = |value: &str| -> Result<(), StructuredError> {
        field("login", value)
            .not_blank()?
            .max_length(8)?
            .format("[a-z]+")?;
        Ok(())
    };

    insta::assert_snapshot!(
        login("  ").unwrap_err(),
        @r#"The field "login" is mandatory and wasn't set (blank)"#
    );
    insta::assert_snapshot!(
        login("alexander").unwrap_err(),
        @r#"Length of "login" must be under 8 but was 9"#
    );
    insta::assert_snapshot!(
        login("al3x").unwrap_err(),
        @r#"Can't validate "login" value, expected format is "[a-z]+" for "al3x""#
    );
    insta::assert_snapshot!(
        field("age", 200_u8).max(150).unwrap_err(),
        @r#"Value of "age" must be under 150 but was 200"#
    );
    insta::assert_snapshot!(
        field("login", "x").format("(").unwrap_err(),
        @r#"Can't validate format, invalid regex: "(""#
    );
}
