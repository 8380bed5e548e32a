//! List-view configuration.
//!
//! Page sizes and per-page modes are read from YAML:
//!
//! ```yaml
//! default_page_size: 25
//! rows_per_page_options: [25, 50, 100]
//! modes:
//!   roles: lazy
//!   teams: eager
//!   users: lazy
//! ```
//!
//! Every key is optional. Missing keys take the values of
//! [`ListConfig::default`].

use std::path::Path;

use roster_query::{ListMode, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Per-page [`ListMode`] selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageModes {
    pub roles: ListMode,
    pub teams: ListMode,
    pub users: ListMode,
}

impl Default for PageModes {
    fn default() -> Self {
        PageModes {
            roles: ListMode::Lazy,
            teams: ListMode::Eager,
            users: ListMode::Lazy,
        }
    }
}

/// Settings shared by every list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page used on open and whenever pagination resets.
    pub default_page_size: u64,
    /// Page sizes offered by the paginator. `ListPage::on_rows_per_page_change`
    /// accepts only these.
    pub rows_per_page_options: Vec<u64>,
    /// Mode of each page.
    pub modes: PageModes,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
            rows_per_page_options: vec![10, 25, 50],
            modes: PageModes::default(),
        }
    }
}

impl ListConfig {
    /// Loads the configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses the configuration from YAML content.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: ListConfig = serde_yaml::from_str(yaml)?;
        if config.default_page_size == 0 {
            config.default_page_size = DEFAULT_PAGE_SIZE;
        }
        config.rows_per_page_options.retain(|&size| size > 0);
        Ok(config)
    }

    /// Mode configured for a resource name (`roles`, `groups`/`teams`,
    /// `users`). Unknown resources are lazy.
    pub fn mode_for(&self, resource: &str) -> ListMode {
        match resource {
            "roles" => self.modes.roles,
            "groups" | "teams" => self.modes.teams,
            "users" => self.modes.users,
            _ => ListMode::Lazy,
        }
    }
}
