use crate::model::auth::{Session, User};
use crate::model::forum::Profile;

/// Where the bootstrap currently stands, per browser tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// The first session resolution has not completed; dependent UI must
    /// not render yet.
    Initializing,
    Unauthenticated,
    /// A session exists but no usable profile has been resolved. Pages
    /// relying on a profile block writes in this phase.
    AuthenticatedNoProfile,
    AuthenticatedWithProfile,
}

/// A session transition reported by the auth surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The one-shot current-session fetch at startup.
    Initial(Option<Session>),
    SignedIn(Session),
    SignedOut,
}

/// Ticket pairing a profile resolution with the session transition that
/// started it. A commit presenting a ticket from an older transition is
/// rejected, so a superseded resolution can never clobber newer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    pub user_id: String,
    generation: u64,
}

/// The session/profile triple plus its bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    pub profile: Option<Profile>,
    /// True until the first session transition is applied.
    pub loading: bool,
    /// True while a profile resolution is outstanding.
    pub profile_loading: bool,
    generation: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            profile: None,
            loading: true,
            profile_loading: false,
            generation: 0,
        }
    }
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Initializing
        } else if self.user.is_none() {
            AuthPhase::Unauthenticated
        } else if self.profile.is_some() {
            AuthPhase::AuthenticatedWithProfile
        } else {
            AuthPhase::AuthenticatedNoProfile
        }
    }

    /// Apply a session transition.
    ///
    /// Every transition supersedes whatever resolution was in flight. For
    /// an authenticated session the profile is re-resolved from scratch and
    /// the returned request identifies the resolution to start; a signed-out
    /// transition clears the profile immediately.
    pub fn apply(&mut self, event: SessionEvent) -> Option<ProfileRequest> {
        self.generation += 1;
        self.loading = false;
        match event {
            SessionEvent::Initial(None) | SessionEvent::SignedOut => {
                self.session = None;
                self.user = None;
                self.profile = None;
                self.profile_loading = false;
                None
            }
            SessionEvent::Initial(Some(session)) | SessionEvent::SignedIn(session) => {
                let user = session.user.clone();
                let request = ProfileRequest {
                    user_id: user.id.clone(),
                    generation: self.generation,
                };
                self.session = Some(session);
                self.user = Some(user);
                self.profile = None;
                self.profile_loading = true;
                Some(request)
            }
        }
    }

    /// Commit a finished resolution.
    ///
    /// Returns false when the request was superseded by a later session
    /// transition, in which case the state is left untouched.
    pub fn commit_profile(&mut self, request: &ProfileRequest, profile: Option<Profile>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.profile = profile;
        self.profile_loading = false;
        true
    }
}
