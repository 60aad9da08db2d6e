//! Tests for auth-API path and metadata construction.

use crate::client::api::auth::{default_username, signup_path};

/// Expect an explicit username to be kept as-is.
#[test]
fn keeps_explicit_username() {
    assert_eq!(default_username("a@b.com", Some("alice")), "alice");
}

/// Expect a missing or blank username to fall back to the email local
/// part.
#[test]
fn defaults_username_to_email_local_part() {
    assert_eq!(default_username("a@b.com", None), "a");
    assert_eq!(default_username("robot.fan@example.org", Some("  ")), "robot.fan");
}

/// Expect the redirect target to be percent-encoded into the sign-up path.
#[test]
fn signup_path_encodes_redirect_target() {
    assert_eq!(
        signup_path("https://kiteretsu.app/"),
        "/auth/v1/signup?redirect_to=https%3A%2F%2Fkiteretsu.app%2F"
    );
}
