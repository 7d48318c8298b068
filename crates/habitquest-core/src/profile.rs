//! Local user profile.
//!
//! Login and signup only check that every field is filled in. Nothing is
//! verified against a backend and the password is dropped immediately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub join_date: DateTime<Utc>,
}

impl UserProfile {
    fn build(name: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar_url(email),
            join_date: Utc::now(),
        }
    }

    /// Profile for an existing user. The display name is the email's local part.
    pub fn login(email: &str, password: &str) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return None;
        }
        let name = email.split('@').next().unwrap_or(email);
        Some(Self::build(name, email))
    }

    pub fn signup(name: &str, email: &str, password: &str) -> Option<Self> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self::build(name, email))
    }
}

pub fn avatar_url(email: &str) -> String {
    format!("{AVATAR_BASE_URL}?seed={}", urlencoding::encode(email))
}
