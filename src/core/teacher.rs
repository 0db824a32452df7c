//! Teacher session record
//!
//! The profile returned by the login endpoint and persisted as the session.
//! Only `name` and `email` are interpreted; every other field the server
//! sends is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signed-in teacher profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub email: String,
    /// Additional server-returned fields (e.g. `role`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Teacher {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field, builder style
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Role reported by the login endpoint, if any
    pub fn role(&self) -> Option<&str> {
        self.extra.get("role").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let teacher: Teacher =
            serde_json::from_str(r#"{"name": "A", "email": "a@x.com"}"#).unwrap();

        assert_eq!(teacher.name, "A");
        assert_eq!(teacher.email, "a@x.com");
        assert!(teacher.extra.is_empty());
        assert_eq!(teacher.role(), None);
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let json = r#"{"email": "m@school.edu", "name": "Ms. Rodriguez", "role": "admin", "room": 12}"#;
        let teacher: Teacher = serde_json::from_str(json).unwrap();

        assert_eq!(teacher.role(), Some("admin"));
        assert_eq!(teacher.extra.get("room"), Some(&Value::from(12)));

        let back: Value = serde_json::to_value(&teacher).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let result = serde_json::from_str::<Teacher>(r#"{"name": "A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_role_is_ignored() {
        let teacher = Teacher::new("A", "a@x.com").with_field("role", 3);
        assert_eq!(teacher.role(), None);
    }
}
