use serde::{Deserialize, Serialize};

/// A stored user record. Every field except `id` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Payload shared by the create and update routes, sent as a urlencoded form or JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    pub fn new(id: String, form: UserForm) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            password: form.password,
        }
    }
}
