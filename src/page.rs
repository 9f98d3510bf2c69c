//! Page Access
//!
//! The DOM mutations the binder performs, behind a trait so the outcome
//! logic can run against a fake page in tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::actions::Banner;
use crate::config::{COMPLETED_SELECTOR, HIDDEN_CLASS, LIST_ID_ATTR, TODO_ID_ATTR};
use crate::models::{ListId, TodoId};

pub trait Page {
    /// Remove `li[data-todo-id=id]`. Returns false if it was not there.
    fn remove_todo_item(&self, id: &TodoId) -> bool;

    /// Remove `li[data-list-id=id]`. Returns false if it was not there.
    fn remove_list_item(&self, id: &ListId) -> bool;

    /// Check every completion checkbox currently on the page.
    /// Returns how many were found.
    fn check_all_completed(&self) -> usize;

    /// Replace the current history entry with `path`
    fn navigate(&self, path: &str);

    fn set_banner_visible(&self, banner: Banner, visible: bool);
}

/// Quote a value for use inside a CSS attribute selector
pub fn css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn item_selector(attr: &str, id: &str) -> String {
    format!("li[{}={}]", attr, css_string(id))
}

// ========================
// Browser Implementation
// ========================

pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn banner(&self, banner: Banner) -> Option<Element> {
        let element = self.document.get_element_by_id(banner.element_id());
        if element.is_none() {
            log::warn!("#{} not found on page", banner.element_id());
        }
        element
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &str) -> u32 {
        self.document
            .query_selector_all(selector)
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    fn remove_first(&self, selector: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => {
                element.remove();
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("bad selector {}: {:?}", selector, err);
                false
            }
        }
    }
}

impl Page for WebPage {
    fn remove_todo_item(&self, id: &TodoId) -> bool {
        self.remove_first(&item_selector(TODO_ID_ATTR, id.as_str()))
    }

    fn remove_list_item(&self, id: &ListId) -> bool {
        self.remove_first(&item_selector(LIST_ID_ATTR, id.as_str()))
    }

    fn check_all_completed(&self) -> usize {
        let Ok(nodes) = self.document.query_selector_all(COMPLETED_SELECTOR) else {
            return 0;
        };
        let mut checked = 0;
        for i in 0..nodes.length() {
            if let Some(input) = nodes.get(i).and_then(|node| node.dyn_into::<HtmlInputElement>().ok()) {
                input.set_checked(true);
                checked += 1;
            }
        }
        checked
    }

    fn navigate(&self, path: &str) {
        let Some(window) = self.document.default_view() else {
            log::warn!("cannot navigate to {}: no window", path);
            return;
        };
        if let Err(err) = window.location().replace(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }

    fn set_banner_visible(&self, banner: Banner, visible: bool) {
        let Some(element) = self.banner(banner) else {
            return;
        };
        let classes = element.class_list();
        let result = if visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
        if let Err(err) = result {
            log::warn!("could not toggle #{}: {:?}", banner.element_id(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_selector_quotes_id() {
        assert_eq!(item_selector("data-todo-id", "12"), r#"li[data-todo-id="12"]"#);
    }

    #[test]
    fn test_item_selector_keeps_padding() {
        let id = TodoId::parse(" 5").unwrap();
        assert_eq!(item_selector(TODO_ID_ATTR, id.as_str()), r#"li[data-todo-id=" 5"]"#);
    }

    #[test]
    fn test_css_string_escapes_quotes() {
        assert_eq!(css_string(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}
