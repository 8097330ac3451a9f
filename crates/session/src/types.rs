//! Account types shared by the session and the route guards.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// What kind of account is signed in
///
/// Decoding never fails: `"vet"` is a vet, any other value is an owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pet owner (the default account type)
    #[default]
    Owner,
    /// Veterinarian
    Vet,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Vet => "vet",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("vet") => Role::Vet,
            _ => Role::Owner,
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in account as returned by the auth API
///
/// Any JSON object decodes: missing or non-text fields become empty strings
/// (numbers are kept as their text) and the role falls back to owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user: User = serde_json::from_str(
            r#"{ "id": "u1", "full_name": "Dr. Sara Malik", "email": "sara@example.com", "role": "vet" }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Vet);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "vet");
    }

    #[test]
    fn test_unknown_role_reads_as_owner() {
        let user: User = serde_json::from_str(
            r#"{ "id": "u1", "full_name": "X", "email": "x@example.com", "role": "admin" }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Owner);

        let user: User = serde_json::from_str(r#"{ "role": null }"#).unwrap();
        assert_eq!(user.role, Role::Owner);
    }

    #[test]
    fn test_sparse_user_record() {
        let user: User = serde_json::from_str(r#"{ "id": 42, "fullName": "Ali" }"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.full_name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.role, Role::Owner);
    }
}
