use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// Only users with `status == true` are shown or counted. Remote records
/// without a `status` field are treated as hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub status: bool,
}

impl User {
    pub fn new(id: u64, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            status: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status
    }
}

/// Unvalidated input for adding a user; id and status are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}
