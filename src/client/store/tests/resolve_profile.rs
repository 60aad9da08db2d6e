//! Tests for the bounded profile resolution loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;

use crate::client::api::ApiError;
use crate::client::store::resolve::{resolve_profile, BASE_DELAY, MAX_ATTEMPTS};
use crate::model::forum::Profile;

fn profile() -> Profile {
    Profile {
        id: "profile-1".to_string(),
        user_id: "user-1".to_string(),
        username: "alice".to_string(),
        avatar_url: None,
        created_at: Utc::now(),
    }
}

/// Drive the loop against a fetch that succeeds on `hit_on` (0 = never),
/// recording every fetch attempt and backoff delay.
async fn run_loop(hit_on: u32, fail_with_errors: bool) -> (Option<Profile>, u32, Vec<Duration>) {
    let calls = Rc::new(Cell::new(0u32));
    let delays = Rc::new(RefCell::new(Vec::new()));

    let fetch_calls = calls.clone();
    let sleep_delays = delays.clone();
    let resolved = resolve_profile(
        "user-1".to_string(),
        move |_user_id| {
            let calls = fetch_calls.clone();
            async move {
                calls.set(calls.get() + 1);
                if calls.get() == hit_on {
                    Ok(Some(profile()))
                } else if fail_with_errors {
                    Err(ApiError::Network("connection reset".to_string()))
                } else {
                    Ok(None)
                }
            }
        },
        move |delay| {
            sleep_delays.borrow_mut().push(delay);
            async {}
        },
    )
    .await;

    let delays = delays.borrow().clone();
    (resolved, calls.get(), delays)
}

/// Expect an immediate hit to resolve without any backoff sleeps.
#[tokio::test]
async fn first_attempt_hit_skips_backoff() {
    let (resolved, calls, delays) = run_loop(1, false).await;

    assert!(resolved.is_some());
    assert_eq!(calls, 1);
    assert!(delays.is_empty());
}

/// Expect a hit on attempt 3 to stop polling at once, after waiting
/// 500ms then 1000ms (1500ms in total).
#[tokio::test]
async fn third_attempt_hit_stops_polling() {
    let (resolved, calls, delays) = run_loop(3, false).await;

    assert!(resolved.is_some());
    assert_eq!(calls, 3);
    assert_eq!(
        delays,
        vec![Duration::from_millis(500), Duration::from_millis(1000)]
    );
    let total: Duration = delays.iter().sum();
    assert_eq!(total, Duration::from_millis(1500));
}

/// Expect a profile that never appears to spend the full attempt budget
/// with strictly increasing delays, then settle to no profile.
#[tokio::test]
async fn exhaustion_spends_exact_attempt_budget() {
    let (resolved, calls, delays) = run_loop(0, false).await;

    assert!(resolved.is_none());
    assert_eq!(calls, MAX_ATTEMPTS);
    // No sleep after the final attempt.
    assert_eq!(delays.len(), (MAX_ATTEMPTS - 1) as usize);
    for (index, delay) in delays.iter().enumerate() {
        assert_eq!(*delay, BASE_DELAY * (index as u32 + 1));
    }
    for pair in delays.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

/// Expect fetch errors to count as misses: the loop keeps polling and can
/// still succeed on a later attempt.
#[tokio::test]
async fn fetch_errors_do_not_abort_resolution() {
    let (resolved, calls, _) = run_loop(4, true).await;

    assert!(resolved.is_some());
    assert_eq!(calls, 4);
}
