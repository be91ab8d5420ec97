use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::Result;

/// Profile of the logged-in user, persisted between runs
///
/// The token is a [`SecretString`], so `Debug` output never shows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: String,
    /// TOEIC score the user is aiming for
    #[serde(default)]
    pub target: u32,
    /// Bearer token sent with every API request
    #[serde(serialize_with = "serialize_token")]
    pub token: SecretString,
}

// The stored record must carry the token to survive a restart
fn serialize_token<S: Serializer>(
    token: &SecretString,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(token.expose_secret())
}

impl UserProfile {
    /// Serialize for storage
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a stored profile record
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl PartialEq for UserProfile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.email == other.email
            && self.avatar == other.avatar
            && self.role == other.role
            && self.target == other.target
            && self.token() == other.token()
    }
}

impl Eq for UserProfile {}

/// Live session: who is logged in and whether a session operation is running
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Bearer token of the current user, if any
    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(UserProfile::token)
    }
}
