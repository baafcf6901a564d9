use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // stored opaquely, never exposed in JSON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter2".into(),
        };
        let value = serde_json::to_value(&user).expect("serialize user");
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }
}
