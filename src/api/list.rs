//! List Requests

use super::{segment, ApiRequest, Method};
use crate::models::ListId;

/// `POST /lists/{id}/edit`, empty body: mark every todo in the list done
pub fn complete_list(id: &ListId) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        path: format!("/lists/{}/edit", segment(id.as_str())),
        body: None,
    }
}

/// `DELETE /lists/{id}`
pub fn delete_list(id: &ListId) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: format!("/lists/{}", segment(id.as_str())),
        body: None,
    }
}
