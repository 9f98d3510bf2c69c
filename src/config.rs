//! Page Configuration
//!
//! Settings the server renders into `<body data-*>`, plus the names of the
//! elements and classes the binder expects to find on the page.

use log::LevelFilter;

use crate::models::ListId;

// ========================
// DOM Contract
// ========================

pub const TODO_DELETE_SELECTOR: &str = ".todo-del";
pub const LIST_DELETE_SELECTOR: &str = ".list-del";
pub const COMPLETED_SELECTOR: &str = ".completed";
pub const COMPLETE_ALL_SELECTOR: &str = "#complete-all";

pub const TODO_ID_ATTR: &str = "data-todo-id";
pub const LIST_ID_ATTR: &str = "data-list-id";

pub const TODO_ERROR_ID: &str = "todo-error";
pub const LIST_ERROR_ID: &str = "list-error";
pub const HIDDEN_CLASS: &str = "hidden";

pub const ROOT_PATH: &str = "/";

const ACTIVE_LIST_ATTR: &str = "data-active-list-id";
const API_BASE_ATTR: &str = "data-api-base";
const LOG_LEVEL_ATTR: &str = "data-log-level";

// ========================
// PageConfig
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// List the page is rendering; deleting it sends the browser home
    pub active_list: Option<ListId>,
    /// Prefix for every request path, without trailing slash
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            active_list: None,
            api_base: String::new(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

impl PageConfig {
    /// Build from an attribute lookup (normally `body.get_attribute`).
    ///
    /// Returns the config and any warnings to log once logging is up,
    /// since the log level itself comes from here.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let active_list = attr(ACTIVE_LIST_ATTR).and_then(|raw| ListId::parse(&raw));

        let api_base = attr(API_BASE_ATTR)
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let log_level = match attr(LOG_LEVEL_ATTR) {
            Some(raw) => match raw.trim().parse::<LevelFilter>() {
                Ok(level) => level,
                Err(_) => {
                    warnings.push(format!("unknown {} {:?}, using default", LOG_LEVEL_ATTR, raw));
                    default_log_level()
                }
            },
            None => default_log_level(),
        };

        (Self { active_list, api_base, log_level }, warnings)
    }

    /// Read from the document body; defaults when there is no body.
    pub fn from_document(document: &web_sys::Document) -> (Self, Vec<String>) {
        match document.body() {
            Some(body) => Self::from_attrs(|name| body.get_attribute(name)),
            None => (Self::default(), vec!["document has no <body>, using defaults".to_string()]),
        }
    }

    /// Whether `list` is the one this page renders
    pub fn is_active(&self, list: &ListId) -> bool {
        self.active_list.as_ref() == Some(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let (config, warnings) = PageConfig::from_attrs(attrs(&[]));
        assert_eq!(config, PageConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_reads_active_list_and_base() {
        let (config, _) = PageConfig::from_attrs(attrs(&[
            ("data-active-list-id", "7"),
            ("data-api-base", "/app/"),
        ]));
        assert_eq!(config.active_list, ListId::parse("7"));
        assert_eq!(config.api_base, "/app");
        assert!(config.is_active(&ListId::parse("7").unwrap()));
        assert!(!config.is_active(&ListId::parse("8").unwrap()));
    }

    #[test]
    fn test_blank_active_list_is_none() {
        let (config, _) = PageConfig::from_attrs(attrs(&[("data-active-list-id", "")]));
        assert!(config.active_list.is_none());
    }

    #[test]
    fn test_log_level() {
        let (config, warnings) = PageConfig::from_attrs(attrs(&[("data-log-level", "warn")]));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(warnings.is_empty());

        let (config, warnings) = PageConfig::from_attrs(attrs(&[("data-log-level", "loud")]));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(warnings.len(), 1);
    }
}
