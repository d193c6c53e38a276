use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved website login, embedded in the owning user's row. The secret is
/// persisted as supplied; there is no encryption layer in front of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub id: Uuid,
    pub website: String,
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_wire_format() {
        let entry = CredentialEntry {
            id: Uuid::new_v4(),
            website: "site1".into(),
            username: "u1".into(),
            password: "s1".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(json["website"], "site1");
        assert_eq!(json["username"], "u1");
        assert_eq!(json["password"], "s1");
        assert!(obj.contains_key("id"));
    }
}
