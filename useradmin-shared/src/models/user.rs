use serde::{Deserialize, Serialize};

/// Upper bound accepted for [`UserPayload::age`].
pub const MAX_AGE: u32 = 120;

/// A user record as stored by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Server-assigned identifier. Clients never choose it.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Age in years.
    pub age: u32,

    /// Occupation or job title.
    pub occupation: String,
}

impl UserRecord {
    /// Strip the identifier, yielding the body used to replace this record.
    #[must_use]
    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            occupation: self.occupation.clone(),
        }
    }
}

/// Body of `POST /users/` and `PUT /users/{id}`.
///
/// Updates always send every field; the record is replaced as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub occupation: String,
}

/// Acknowledgement returned by `DELETE /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteUserResponse {
    #[serde(default)]
    pub message: Option<String>,
}
