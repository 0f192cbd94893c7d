//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! any server crate. `id`, `created_at`, and `updated_at` are assigned by the
//! server; the client never synthesizes them — every `Todo` value originates
//! from a decoded server response. Integration tests catch schema drift.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Request payload for creating a new todo.
///
/// `description` is always present in the JSON — an absent description is
/// sent as an explicit `null`, matching what the server stores for a todo
/// created without one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
///
/// `description` distinguishes three states: `None` omits the field entirely
/// (leave unchanged), `Some(None)` sends `null` (clear it), `Some(Some(s))`
/// sends the new text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Payload for a full text edit: new title plus description-or-null.
    pub fn edit(title: String, description: Option<String>) -> Self {
        Self {
            title: Some(title),
            description: Some(description),
            completed: None,
        }
    }

    /// Payload for flipping the completion flag, and nothing else.
    pub fn completion(completed: bool) -> Self {
        Self {
            title: None,
            description: None,
            completed: Some(completed),
        }
    }
}

/// Keep "field present but null" distinct from "field absent" when
/// deserializing. A present field always maps to `Some(inner)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 7,
            title: "Roundtrip".to_string(),
            description: Some("with description".to_string()),
            completed: true,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: None,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_accepts_null_description_and_updated_at() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"title":"T","description":null,"completed":false,"created_at":"2024-01-01T00:00:00+00:00","updated_at":null}"#,
        )
        .unwrap();
        assert!(todo.description.is_none());
        assert!(todo.updated_at.is_none());
    }

    #[test]
    fn create_todo_serializes_missing_description_as_null() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.as_object().unwrap().contains_key("description"));
        assert_eq!(json["description"], serde_json::Value::Null);
    }

    #[test]
    fn update_edit_serializes_both_text_fields() {
        let input = UpdateTodo::edit("New title".to_string(), None);
        let json = serde_json::to_value(&input).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["title"], "New title");
        assert_eq!(obj["description"], serde_json::Value::Null);
        assert!(!obj.contains_key("completed"));
    }

    #[test]
    fn update_completion_serializes_only_completed() {
        let input = UpdateTodo::completion(true);
        let json = serde_json::to_value(&input).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["completed"], true);
    }

    #[test]
    fn update_deserialize_keeps_null_distinct_from_absent() {
        let absent: UpdateTodo = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert!(absent.description.is_none());

        let null: UpdateTodo = serde_json::from_str(r#"{"title":"T","description":null}"#).unwrap();
        assert_eq!(null.description, Some(None));

        let set: UpdateTodo = serde_json::from_str(r#"{"description":"text"}"#).unwrap();
        assert_eq!(set.description, Some(Some("text".to_string())));
    }
}
