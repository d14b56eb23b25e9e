use catena::format::{render, DirectiveError, Lines};
use catena::prelude::*;

#[test]
fn substitutes_arguments_in_order() {
    assert_eq!(
        render("Hello, %s! You have %d new messages.", ("Alice", 5)).unwrap(),
        "Hello, Alice! You have 5 new messages."
    );
}

#[test]
fn mixed_argument_types() {
    assert_eq!(
        render("%s is %d years old, %f meters tall", ("Ada", 36, 1.7)).unwrap(),
        "Ada is 36 years old, 1.7 meters tall"
    );
}

#[test]
fn escaped_percent_is_literal() {
    assert_eq!(render("100%% of %d", (7,)).unwrap(), "100% of 7");
    assert_eq!(render("plain text, 100%%", ()).unwrap(), "plain text, 100%");
}

#[test]
fn directive_character_is_consumed() {
    // The character after `%` belongs to the directive, whatever it is.
    assert_eq!(render("%q|%s|", (1, 2)).unwrap(), "1|2|");
}

#[test]
fn missing_arguments() {
    assert_eq!(render("%d", ()), Err(DirectiveError::MissingArguments));
    assert_eq!(render("%d and %d", (1,)), Err(DirectiveError::MissingArguments));
}

#[test]
fn extra_arguments() {
    assert_eq!(render("no directives", (1,)), Err(DirectiveError::ExtraArguments));
    assert_eq!(render("just %d", (1, 2)), Err(DirectiveError::ExtraArguments));
}

#[test]
fn trailing_percent_counts_as_a_directive() {
    assert_eq!(render("%", ()), Err(DirectiveError::MissingArguments));
    assert_eq!(render("total: %", (9,)).unwrap(), "total: 9");
}

#[test]
fn error_messages() {
    assert_eq!(
        DirectiveError::MissingArguments.to_string(),
        "invalid format string: missing arguments"
    );
    assert_eq!(
        DirectiveError::ExtraArguments.to_string(),
        "extra arguments provided"
    );
}

#[test]
fn lines_displays_one_element_per_line() {
    let list = (7.5, "hello", 42).into_list();
    assert_eq!(Lines(&list).to_string(), "7.5\nhello\n42\n");
    assert_eq!(Lines(&()).to_string(), "");
}
