use serde::{Deserialize, Serialize};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}
