//! Tests for session transition handling in the auth state container.

use chrono::Utc;

use crate::client::store::session::{AuthPhase, AuthState, SessionEvent};
use crate::model::auth::{Session, User, UserMetadata};
use crate::model::forum::Profile;

fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("token-{user_id}"),
        refresh_token: None,
        expires_in: Some(3600),
        user: User {
            id: user_id.to_string(),
            email: Some("a@b.com".to_string()),
            user_metadata: UserMetadata::default(),
        },
    }
}

fn profile(user_id: &str) -> Profile {
    Profile {
        id: format!("profile-{user_id}"),
        user_id: user_id.to_string(),
        username: "alice".to_string(),
        avatar_url: None,
        created_at: Utc::now(),
    }
}

/// Expect the initial phase to suppress dependent UI until the first
/// transition lands.
#[test]
fn starts_initializing() {
    let state = AuthState::default();

    assert_eq!(state.phase(), AuthPhase::Initializing);
    assert!(state.loading);
}

/// Expect a null startup session to settle as signed out with no
/// resolution started.
#[test]
fn initial_without_session_settles_unauthenticated() {
    let mut state = AuthState::default();

    let request = state.apply(SessionEvent::Initial(None));

    assert!(request.is_none());
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert!(!state.loading);
}

/// Expect a sign-in to start a resolution for the account and report the
/// profile as outstanding.
#[test]
fn sign_in_starts_profile_resolution() {
    let mut state = AuthState::default();

    let request = state.apply(SessionEvent::SignedIn(session("user-1")));

    let request = request.expect("sign-in should request a resolution");
    assert_eq!(request.user_id, "user-1");
    assert_eq!(state.phase(), AuthPhase::AuthenticatedNoProfile);
    assert!(state.profile_loading);
}

/// Expect a committed profile to complete the bootstrap.
#[test]
fn commit_reaches_authenticated_with_profile() {
    let mut state = AuthState::default();
    let request = state.apply(SessionEvent::SignedIn(session("user-1"))).unwrap();

    assert!(state.commit_profile(&request, Some(profile("user-1"))));

    assert_eq!(state.phase(), AuthPhase::AuthenticatedWithProfile);
    assert!(!state.profile_loading);
}

/// Expect an exhausted resolution to settle without a profile while the
/// session itself stays live.
#[test]
fn commit_without_profile_settles_no_profile() {
    let mut state = AuthState::default();
    let request = state.apply(SessionEvent::SignedIn(session("user-1"))).unwrap();

    assert!(state.commit_profile(&request, None));

    assert_eq!(state.phase(), AuthPhase::AuthenticatedNoProfile);
    assert!(!state.profile_loading);
    assert!(state.session.is_some());
}

/// Expect sign-out to clear the profile immediately, not after the
/// in-flight resolution finishes.
#[test]
fn sign_out_clears_profile_immediately() {
    let mut state = AuthState::default();
    let request = state.apply(SessionEvent::SignedIn(session("user-1"))).unwrap();
    state.commit_profile(&request, Some(profile("user-1")));

    let request = state.apply(SessionEvent::SignedOut);

    assert!(request.is_none());
    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert!(state.profile.is_none());
    assert!(state.session.is_none());
}

/// Expect a resolution started before sign-out to be discarded when it
/// finally lands: any sequence ending signed-out stays signed out.
#[test]
fn stale_commit_after_sign_out_is_discarded() {
    let mut state = AuthState::default();
    let stale = state.apply(SessionEvent::SignedIn(session("user-1"))).unwrap();
    state.apply(SessionEvent::SignedOut);

    assert!(!state.commit_profile(&stale, Some(profile("user-1"))));

    assert_eq!(state.phase(), AuthPhase::Unauthenticated);
    assert!(state.profile.is_none());
}

/// Expect a rapid re-sign-in to supersede the first resolution: only the
/// ticket from the latest transition may commit.
#[test]
fn newer_session_supersedes_older_resolution() {
    let mut state = AuthState::default();
    let first = state.apply(SessionEvent::SignedIn(session("user-1"))).unwrap();
    let second = state.apply(SessionEvent::SignedIn(session("user-2"))).unwrap();

    assert!(!state.commit_profile(&first, Some(profile("user-1"))));
    assert!(state.commit_profile(&second, Some(profile("user-2"))));

    let committed = state.profile.as_ref().expect("second commit should land");
    assert_eq!(committed.user_id, "user-2");
}
