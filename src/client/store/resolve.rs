//! Bounded polling for the asynchronously provisioned profile row.
//!
//! A server-side trigger creates the profile after sign-up, so the row can
//! lag behind the session by several seconds. The loop polls with a
//! strictly increasing linear backoff, exits on the first hit, and settles
//! to "no profile" once the attempt budget is spent.

use std::future::Future;
use std::time::Duration;

use dioxus_logger::tracing;

use crate::client::api::ApiError;
use crate::model::forum::Profile;

/// Maximum fetch attempts before resolving to "no profile".
pub const MAX_ATTEMPTS: u32 = 7;

/// Base backoff step; attempt `k` waits `k` times this before the next try.
pub const BASE_DELAY: Duration = Duration::from_millis(500);

/// Poll for the profile belonging to `user_id`.
///
/// The fetch and sleep effects are injected so the loop can be driven
/// deterministically in tests. Fetch errors count as a miss: a transient
/// failure is indistinguishable from the trigger not having fired yet.
/// Exhaustion emits a single error-level diagnostic and yields `None`.
pub async fn resolve_profile<F, FetchFut, S, SleepFut>(
    user_id: String,
    fetch: F,
    mut sleep: S,
) -> Option<Profile>
where
    F: Fn(String) -> FetchFut,
    FetchFut: Future<Output = Result<Option<Profile>, ApiError>>,
    S: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        tracing::debug!(
            "Resolving profile for account {} (attempt {}/{})",
            user_id,
            attempt,
            MAX_ATTEMPTS
        );

        match fetch(user_id.clone()).await {
            Ok(Some(profile)) => return Some(profile),
            Ok(None) => (),
            Err(err) => {
                tracing::warn!("Profile fetch attempt {} failed: {}", attempt, err);
            }
        }

        if attempt < MAX_ATTEMPTS {
            sleep(BASE_DELAY * attempt).await;
        }
    }

    tracing::error!(
        "Profile for account {} not found after {} attempts; the sign-up trigger may not have fired",
        user_id,
        MAX_ATTEMPTS
    );
    None
}
