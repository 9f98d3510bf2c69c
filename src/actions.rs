//! Page Actions
//!
//! The four things a user can do on the todo page. Each action knows which
//! request it sends, which error banner reports it, and how the page changes
//! once the server confirms it.

use crate::api::{self, ApiRequest};
use crate::config::{PageConfig, LIST_ERROR_ID, ROOT_PATH, TODO_ERROR_ID};
use crate::error::ApiResult;
use crate::models::{ListId, TodoId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DeleteTodo(TodoId),
    SetCompleted { id: TodoId, completed: bool },
    CompleteAll(ListId),
    DeleteList(ListId),
}

/// Shared error banners on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Todo,
    List,
}

impl Banner {
    pub fn element_id(self) -> &'static str {
        match self {
            Banner::Todo => TODO_ERROR_ID,
            Banner::List => LIST_ERROR_ID,
        }
    }
}

/// DOM change applied after a successful request
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Leave the page as the user left it
    None,
    RemoveTodoItem(TodoId),
    CheckAllCompleted,
    RemoveListItem(ListId),
    Navigate(&'static str),
}

impl Action {
    pub fn request(&self) -> ApiResult<ApiRequest> {
        match self {
            Action::DeleteTodo(id) => Ok(api::delete_todo(id)),
            Action::SetCompleted { id, completed } => api::update_todo(id, *completed),
            Action::CompleteAll(list) => Ok(api::complete_list(list)),
            Action::DeleteList(list) => Ok(api::delete_list(list)),
        }
    }

    pub fn banner(&self) -> Banner {
        match self {
            Action::DeleteList(_) => Banner::List,
            _ => Banner::Todo,
        }
    }

    pub fn on_success(&self, config: &PageConfig) -> Patch {
        match self {
            Action::DeleteTodo(id) => Patch::RemoveTodoItem(id.clone()),
            // checkbox already shows the new state
            Action::SetCompleted { .. } => Patch::None,
            Action::CompleteAll(_) => Patch::CheckAllCompleted,
            Action::DeleteList(list) if config.is_active(list) => Patch::Navigate(ROOT_PATH),
            Action::DeleteList(list) => Patch::RemoveListItem(list.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    fn todo(raw: &str) -> TodoId {
        TodoId::parse(raw).unwrap()
    }

    fn list(raw: &str) -> ListId {
        ListId::parse(raw).unwrap()
    }

    fn config_with_active(raw: &str) -> PageConfig {
        PageConfig { active_list: ListId::parse(raw), ..PageConfig::default() }
    }

    #[test]
    fn test_delete_todo_removes_matching_item() {
        let action = Action::DeleteTodo(todo("3"));
        let request = action.request().unwrap();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/todos/3");
        assert_eq!(action.banner(), Banner::Todo);
        assert_eq!(action.on_success(&PageConfig::default()), Patch::RemoveTodoItem(todo("3")));
    }

    #[test]
    fn test_toggle_sends_new_state_and_leaves_checkbox() {
        let action = Action::SetCompleted { id: todo("3"), completed: true };
        let request = action.request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/todos/3/edit");
        assert_eq!(request.body.as_deref(), Some(r#"{"completed":true}"#));
        assert_eq!(action.banner(), Banner::Todo);
        assert_eq!(action.on_success(&PageConfig::default()), Patch::None);
    }

    #[test]
    fn test_complete_all() {
        let action = Action::CompleteAll(list("42"));
        let request = action.request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/lists/42/edit");
        assert!(request.body.is_none());
        assert_eq!(action.banner(), Banner::Todo);
        assert_eq!(action.on_success(&PageConfig::default()), Patch::CheckAllCompleted);
    }

    #[test]
    fn test_delete_active_list_goes_home() {
        let action = Action::DeleteList(list("42"));
        assert_eq!(action.banner(), Banner::List);
        assert_eq!(action.on_success(&config_with_active("42")), Patch::Navigate("/"));
    }

    #[test]
    fn test_delete_other_list_removes_its_item() {
        let action = Action::DeleteList(list("7"));
        assert_eq!(action.request().unwrap().path, "/lists/7");
        assert_eq!(action.on_success(&config_with_active("42")), Patch::RemoveListItem(list("7")));
        // no active list rendered at all
        assert_eq!(action.on_success(&PageConfig::default()), Patch::RemoveListItem(list("7")));
    }

    #[test]
    fn test_banner_ids() {
        assert_eq!(Banner::Todo.element_id(), "todo-error");
        assert_eq!(Banner::List.element_id(), "list-error");
    }
}
