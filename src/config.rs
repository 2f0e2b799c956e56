//! Page configuration: element ids, class names and timings the controllers bind to.
//!
//! Every field has a default matching the stock course-site markup, so an empty file
//! (or no file at all) is a valid configuration.
//!
//! ```toml
//! [menu]
//! toggle_id = "menuToggle"
//! open_class = "show"
//!
//! [form]
//! acknowledgment_delay_ms = 4000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Button that opens and closes the panel.
    pub toggle_id: String,
    /// The navigation panel.
    pub nav_id: String,
    /// Class of the region whose clicks never count as "outside".
    pub region_class: String,
    /// Class set on the panel while open.
    pub open_class: String,
    /// Tag of the links inside the panel that dismiss it.
    pub link_tag: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "menuToggle".into(),
            nav_id: "navLinks".into(),
            region_class: "navbar".into(),
            open_class: "show".into(),
            link_tag: "a".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    /// Each field's error element id is the field id followed by this suffix.
    pub error_suffix: String,
    /// Element shown after an accepted submission.
    pub success_id: String,
    pub acknowledgment_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".into(),
            name_id: "name".into(),
            email_id: "email".into(),
            message_id: "message".into(),
            error_suffix: "Error".into(),
            success_id: "formSuccess".into(),
            acknowledgment_delay_ms: 4_000,
        }
    }
}

impl FormConfig {
    pub fn acknowledgment_delay(&self) -> Duration {
        Duration::from_millis(self.acknowledgment_delay_ms)
    }

    pub fn error_id(&self, field_id: &str) -> String {
        format!("{field_id}{}", self.error_suffix)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub menu: MenuConfig,
    pub form: FormConfig,
}

impl PageConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
