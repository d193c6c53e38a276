use serde::{Deserialize, Serialize};

use crate::vault::repo::CredentialEntry;

/// Request body shared by save and update: all three fields are required.
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub website: String,
    pub username: String,
    pub password: String,
}

/// Response after appending an entry: the full updated sequence.
#[derive(Debug, Serialize)]
pub struct SavedPasswordsResponse {
    pub message: &'static str,
    #[serde(rename = "savedPasswords")]
    pub saved_passwords: Vec<CredentialEntry>,
}
