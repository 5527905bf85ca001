use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Partial update: each field is applied only when present in the request
/// body, otherwise the stored value is retained.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_absent_fields_are_none() {
        let req: UpdateTodoRequest = serde_json::from_str(r#"{"completed": true}"#).unwrap();
        assert_eq!(req.completed, Some(true));
        assert!(req.title.is_none());
        assert!(req.description.is_none());
    }

    #[test]
    fn update_request_empty_body_changes_nothing() {
        let req: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none() && req.description.is_none() && req.completed.is_none());
    }

    #[test]
    fn create_request_description_optional() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert!(req.description.is_none());
    }
}
