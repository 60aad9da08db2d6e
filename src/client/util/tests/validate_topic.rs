//! Tests for the new-topic form constraints.

use crate::client::util::validate_topic::{validate_topic, TopicValidationError};

const VALID_TITLE: &str = "How do I tune a PID loop?";
const VALID_CONTENT: &str = "My line follower oscillates badly at speed. What should I adjust?";
const CATEGORY: &str = "cat-1";

/// Expect a well-formed draft to pass.
#[test]
fn accepts_valid_draft() {
    assert_eq!(validate_topic(VALID_TITLE, CATEGORY, VALID_CONTENT), Ok(()));
}

/// Expect titles shorter than 5 characters to be rejected.
#[test]
fn rejects_short_title() {
    assert_eq!(
        validate_topic("Hey", CATEGORY, VALID_CONTENT),
        Err(TopicValidationError::TitleTooShort)
    );
}

/// Expect titles longer than 100 characters to be rejected, while exactly
/// 100 passes.
#[test]
fn rejects_long_title() {
    let at_limit = "t".repeat(100);
    let over_limit = "t".repeat(101);

    assert_eq!(validate_topic(&at_limit, CATEGORY, VALID_CONTENT), Ok(()));
    assert_eq!(
        validate_topic(&over_limit, CATEGORY, VALID_CONTENT),
        Err(TopicValidationError::TitleTooLong)
    );
}

/// Expect a missing category selection to be rejected.
#[test]
fn rejects_missing_category() {
    assert_eq!(
        validate_topic(VALID_TITLE, "", VALID_CONTENT),
        Err(TopicValidationError::MissingCategory)
    );
}

/// Expect content shorter than 20 characters to be rejected, while exactly
/// 20 passes.
#[test]
fn rejects_short_content() {
    let at_limit = "c".repeat(20);
    let under_limit = "c".repeat(19);

    assert_eq!(validate_topic(VALID_TITLE, CATEGORY, &at_limit), Ok(()));
    assert_eq!(
        validate_topic(VALID_TITLE, CATEGORY, &under_limit),
        Err(TopicValidationError::ContentTooShort)
    );
}

/// Expect content longer than 5000 characters to be rejected.
#[test]
fn rejects_long_content() {
    let over_limit = "c".repeat(5001);

    assert_eq!(
        validate_topic(VALID_TITLE, CATEGORY, &over_limit),
        Err(TopicValidationError::ContentTooLong)
    );
}

/// Expect surrounding whitespace not to count toward the limits.
#[test]
fn ignores_surrounding_whitespace() {
    assert_eq!(
        validate_topic("   Hi    ", CATEGORY, VALID_CONTENT),
        Err(TopicValidationError::TitleTooShort)
    );
}
