use serde::{Deserialize, Serialize};

/// Error body returned by the data API when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct DataErrorDto {
    /// The error message
    pub message: String,
    /// Backend error code, e.g. a foreign key violation code
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Error body returned by the auth API when a request fails
///
/// The auth API is inconsistent about which field carries the message
/// depending on the endpoint, so all known variants are captured and
/// [`AuthErrorDto::message`] picks the first one present.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthErrorDto {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorDto {
    pub fn message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.message)
    }
}
