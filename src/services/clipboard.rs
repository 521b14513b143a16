//! Clipboard access for SecureVault.
//!
//! Copying is asynchronous and best-effort: one attempt, no timeout, no retry.
//! The caller decides how to report a failure.

use std::process::Stdio;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::platform;
use crate::types::errors::ClipboardError;
use crate::types::settings::{ClipboardBackendKind, ClipboardSettings};

/// A destination for copied text.
#[async_trait]
pub trait ClipboardBackend: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard. Holds the last copied text.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently copied text, if any.
    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl ClipboardBackend for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().await = Some(text.to_string());
        Ok(())
    }
}

/// System clipboard reached by piping text into a copy tool such as `pbcopy`.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Builds a backend from `[program, args...]`. Returns `None` for an empty command.
    pub fn new(command: Vec<String>) -> Option<Self> {
        let mut parts = command.into_iter();
        let program = parts.next().filter(|p| !p.is_empty())?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Uses the platform default copy tool.
    pub fn system() -> Option<Self> {
        Self::new(platform::clipboard_command())
    }
}

#[async_trait]
impl ClipboardBackend for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::WriteFailed(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                if let Err(kill_err) = child.kill().await {
                    warn!(program = %self.program, error = %kill_err, "failed to reap clipboard process");
                }
                return Err(ClipboardError::WriteFailed(e.to_string()));
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}

/// Cloneable handle to the configured clipboard backend.
#[derive(Clone)]
pub struct ClipboardService {
    backend: Arc<dyn ClipboardBackend>,
}

impl ClipboardService {
    pub fn new(backend: Arc<dyn ClipboardBackend>) -> Self {
        Self { backend }
    }

    /// Builds the backend described by `settings`.
    ///
    /// Falls back to the in-memory clipboard when no copy command is available.
    pub fn from_settings(settings: &ClipboardSettings) -> Self {
        let backend: Arc<dyn ClipboardBackend> = match settings.backend {
            ClipboardBackendKind::Memory => Arc::new(MemoryClipboard::new()),
            ClipboardBackendKind::System => {
                let command = match &settings.command {
                    Some(cmd) => CommandClipboard::new(cmd.clone()),
                    None => CommandClipboard::system(),
                };
                match command {
                    Some(cmd) => Arc::new(cmd),
                    None => {
                        warn!("no clipboard command configured, using in-memory clipboard");
                        Arc::new(MemoryClipboard::new())
                    }
                }
            }
        };
        Self { backend }
    }

    /// Writes `text` as is; an empty string is copied too.
    pub async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.backend.write_text(text).await?;
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
