//! Context-provided auth store and its operations.

use dioxus::prelude::*;

use crate::client::store::session::{AuthState, ProfileRequest, SessionEvent};
use crate::model::auth::Session;

/// Handle to the process-wide auth state.
///
/// Cheap to copy; the state itself is owned by [`AuthProvider`] and mutated
/// only through the store's own handlers. Views treat it as read-only.
#[derive(Clone, Copy)]
pub struct AuthStore {
    state: Signal<AuthState>,
}

/// Read the auth store provided by [`AuthProvider`].
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>()
}

impl AuthStore {
    /// Consistent snapshot of the current state. Reading it inside a
    /// component subscribes that component to future transitions.
    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    /// The in-memory session mirror. Nothing persists across reloads, so a
    /// fresh tab always starts signed out.
    pub fn current_session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    fn dispatch(self, event: SessionEvent) {
        let mut state = self.state;
        let request = state.write().apply(event);
        if let Some(request) = request {
            self.spawn_resolution(request);
        }
    }

    #[cfg(feature = "web")]
    fn spawn_resolution(self, request: ProfileRequest) {
        use dioxus_logger::tracing;

        use crate::client::api;
        use crate::client::store::resolve::resolve_profile;

        let mut state = self.state;
        spawn(async move {
            let profile = resolve_profile(
                request.user_id.clone(),
                |user_id| async move { api::forum::fetch_profile(&user_id).await },
                |delay| gloo_timers::future::sleep(delay),
            )
            .await;

            if !state.write().commit_profile(&request, profile) {
                tracing::debug!("Discarding profile resolution superseded by a later session");
            }
        });
    }

    #[cfg(not(feature = "web"))]
    fn spawn_resolution(self, _request: ProfileRequest) {}
}

#[cfg(feature = "web")]
mod operations {
    use dioxus_logger::tracing;

    use super::AuthStore;
    use crate::client::api::{self, ApiError};
    use crate::client::store::session::SessionEvent;

    impl AuthStore {
        /// Create an account. The profile row is provisioned by a
        /// server-side trigger afterwards; when the backend requires email
        /// verification no session is issued yet and the caller should
        /// prompt for it.
        pub async fn sign_up(
            self,
            email: &str,
            password: &str,
            username: Option<&str>,
        ) -> Result<(), ApiError> {
            let redirect_to = format!("{}/", site_origin());
            if let Some(session) =
                api::auth::sign_up(email, password, username, &redirect_to).await?
            {
                self.dispatch(SessionEvent::SignedIn(session));
            }
            Ok(())
        }

        pub async fn sign_in(self, email: &str, password: &str) -> Result<(), ApiError> {
            let session = api::auth::sign_in(email, password).await?;
            self.dispatch(SessionEvent::SignedIn(session));
            Ok(())
        }

        /// Sign out. Local state clears even when the revocation call
        /// fails; the token simply expires on its own in that case.
        pub async fn sign_out(self) {
            if let Some(session) = self.current_session() {
                if let Err(err) = api::auth::sign_out(&session.access_token).await {
                    tracing::warn!("Failed to revoke session on the backend: {}", err);
                }
            }
            self.dispatch(SessionEvent::SignedOut);
        }
    }

    fn site_origin() -> String {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
}

/// Provider establishing session and profile state before dependent views
/// render. Wraps the application root.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let state = use_signal(AuthState::default);
    let store = use_context_provider(|| AuthStore { state });

    // One-shot current-session fetch after the first render; the session
    // lifecycle is owned by the backend and only mirrored in memory here.
    // The peek keeps the effect from re-running on its own dispatch.
    use_effect(move || {
        let session = state.peek().session.clone();
        store.dispatch(SessionEvent::Initial(session));
    });

    rsx!({ children })
}
