//! Application Context
//!
//! Page configuration shared by every handler.

use leptos::prelude::*;

use crate::config::PageConfig;

/// Handler-wide state; cheap to copy into closures and futures
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<PageConfig>,
}

impl AppContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&PageConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn api_base(&self) -> String {
        self.with_config(|config| config.api_base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_reads_through_copies() {
        let ctx = AppContext::new(PageConfig { api_base: "/app".to_string(), ..PageConfig::default() });
        let copy = ctx;
        assert_eq!(copy.api_base(), "/app");
        assert!(ctx.with_config(|config| config.active_list.is_none()));
    }
}
