//! In-memory operations on a user's credential sequence. Handlers load the
//! sequence from the user row, apply one of these, and resave the whole row.

use uuid::Uuid;

use crate::vault::repo::CredentialEntry;

/// Append a new entry, assigning it a fresh id. Returns the id.
pub fn append_entry(
    entries: &mut Vec<CredentialEntry>,
    website: String,
    username: String,
    password: String,
) -> Uuid {
    let id = Uuid::new_v4();
    entries.push(CredentialEntry {
        id,
        website,
        username,
        password,
    });
    id
}

pub fn find_entry(entries: &[CredentialEntry], id: Uuid) -> Option<&CredentialEntry> {
    entries.iter().find(|e| e.id == id)
}

/// Replace all three fields of the matching entry wholesale. Returns false if
/// no entry with that id exists.
pub fn update_entry(
    entries: &mut [CredentialEntry],
    id: Uuid,
    website: String,
    username: String,
    password: String,
) -> bool {
    match entries.iter_mut().find(|e| e.id == id) {
        Some(entry) => {
            entry.website = website;
            entry.username = username;
            entry.password = password;
            true
        }
        None => false,
    }
}

/// Remove the matching entry if present. Removing an absent id is a no-op.
pub fn remove_entry(entries: &mut Vec<CredentialEntry>, id: Uuid) {
    entries.retain(|e| e.id != id);
}
