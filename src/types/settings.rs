use serde::{Deserialize, Serialize};

use super::credential::Category;
use super::generator::GeneratorConfig;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Options the generator starts with.
    pub generator: GeneratorConfig,
    pub vault: VaultSettings,
    pub clipboard: ClipboardSettings,
    pub logging: LoggingSettings,
}

/// Vault behaviour at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VaultSettings {
    /// Populate the vault with demo records on startup.
    pub seed_sample_data: bool,
    /// Category preselected in the add dialog.
    pub default_category: Category,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            default_category: Category::Personal,
        }
    }
}

/// Which clipboard backend copy operations go to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClipboardBackendKind {
    /// The operating system clipboard, via the platform copy tool.
    System,
    /// An in-process buffer; nothing leaves the process.
    Memory,
}

/// Clipboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClipboardSettings {
    pub backend: ClipboardBackendKind,
    /// Overrides the platform copy command, e.g. `["xsel", "--clipboard", "--input"]`.
    pub command: Option<Vec<String>>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            backend: ClipboardBackendKind::System,
            command: None,
        }
    }
}

/// Logging settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "securevault=info".to_string(),
        }
    }
}
