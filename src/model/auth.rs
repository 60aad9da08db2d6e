use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the auth API.
///
/// Accounts are created and owned by the hosted backend; this client only
/// mirrors them. The application-level profile row is a separate record
/// provisioned asynchronously after sign-up (see [`crate::model::forum::Profile`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form metadata attached to an account at sign-up.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A backend-issued credential proving an authenticated account.
///
/// Renewal and expiry are managed entirely by the backend; the session is
/// mirrored in memory for the lifetime of the tab and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: User,
}
