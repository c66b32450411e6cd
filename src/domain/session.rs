use serde::{Deserialize, Serialize};

use crate::domain::types::BearerToken;

/// Profile of the signed-in administrator kept next to the credential.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminProfile {
    pub full_name: String,
    pub email: Option<String>,
}

/// Explicit authentication context handed to every backend call.
#[derive(Clone, Debug)]
pub struct AdminSession {
    token: BearerToken,
    profile: AdminProfile,
}

impl AdminSession {
    pub fn new(token: BearerToken, profile: AdminProfile) -> Self {
        Self { token, profile }
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn profile(&self) -> &AdminProfile {
        &self.profile
    }
}
