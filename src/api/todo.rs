//! Todo Requests

use super::{segment, ApiRequest, Method};
use crate::error::ApiResult;
use crate::models::{TodoId, TodoUpdate};

/// `DELETE /todos/{id}`
pub fn delete_todo(id: &TodoId) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: format!("/todos/{}", segment(id.as_str())),
        body: None,
    }
}

/// `POST /todos/{id}/edit` with `{"completed": ...}`
pub fn update_todo(id: &TodoId, completed: bool) -> ApiResult<ApiRequest> {
    let body = serde_json::to_string(&TodoUpdate { completed })?;
    Ok(ApiRequest {
        method: Method::Post,
        path: format!("/todos/{}/edit", segment(id.as_str())),
        body: Some(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_todo() {
        let request = delete_todo(&TodoId::parse("5").unwrap());
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/todos/5");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_update_todo_carries_flag() {
        let id = TodoId::parse("5").unwrap();
        let request = update_todo(&id, false).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/todos/5/edit");
        assert_eq!(request.body.as_deref(), Some(r#"{"completed":false}"#));
    }
}
