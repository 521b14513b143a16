//! App Core for SecureVault.
//!
//! Central struct holding the generator, the vault, view state and the
//! clipboard. Each public method is one user action: it runs to completion,
//! reports its outcome as a toast, and returns the result to the caller.

use tracing::info;
use zeroize::Zeroizing;

use crate::managers::vault_manager::{VaultManager, VaultManagerTrait};
use crate::managers::view_state::{ViewState, MASKED_SECRET};
use crate::services::clipboard::ClipboardService;
use crate::services::notifications::NotificationCenter;
use crate::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::credential::{CategoryFilter, CredentialRecord, CredentialUpdate, NewCredential, VaultStats};
use crate::types::errors::{ClipboardError, GeneratorError, SettingsError, VaultError};
use crate::types::generator::{GeneratorConfig, PasswordStrength};
use crate::types::view::{ActiveView, CopyField, CredentialView};

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub generator: PasswordGenerator,
    pub generator_config: GeneratorConfig,
    pub vault: VaultManager,
    pub view: ViewState,
    pub notifications: NotificationCenter,
    pub clipboard: ClipboardService,
}

impl App {
    /// Loads settings (from `config_path`, `$SECUREVAULT_CONFIG` or the
    /// platform config dir) and builds the app from them.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        Ok(Self::from_settings(settings_engine))
    }

    /// Builds the app from an already loaded settings engine.
    pub fn from_settings(settings_engine: SettingsEngine) -> Self {
        let settings = settings_engine.get_settings().clone();
        let vault = if settings.vault.seed_sample_data {
            VaultManager::with_sample_data()
        } else {
            VaultManager::new()
        };

        info!(
            records = vault.count(),
            config = settings_engine.get_config_path(),
            "app initialized"
        );

        Self {
            generator: PasswordGenerator::new(),
            generator_config: settings.generator,
            vault,
            view: ViewState::new(),
            notifications: NotificationCenter::new(),
            clipboard: ClipboardService::from_settings(&settings.clipboard),
            settings_engine,
        }
    }

    /// Replaces the clipboard backend.
    pub fn with_clipboard(mut self, clipboard: ClipboardService) -> Self {
        self.clipboard = clipboard;
        self
    }

    // ─── View ───

    pub fn switch_view(&mut self, view: ActiveView) {
        self.view.switch_view(view);
    }

    // ─── Generator ───

    /// Replaces the generator options. Only the length is checked here; an
    /// empty character selection is reported when generating.
    pub fn set_generator_config(&mut self, config: GeneratorConfig) -> Result<(), GeneratorError> {
        config.check_length()?;
        self.generator_config = config;
        Ok(())
    }

    pub fn generate_password(&mut self) -> Result<String, GeneratorError> {
        match self.generator.generate(&self.generator_config) {
            Ok(password) => {
                self.view.set_generated(password.clone());
                Ok(password)
            }
            Err(err) => {
                let message = match err {
                    GeneratorError::NoCharacterClassSelected => {
                        "Please select at least one character type".to_string()
                    }
                    ref other => other.to_string(),
                };
                self.notifications.error(&message);
                Err(err)
            }
        }
    }

    /// Strength of the last generated password.
    pub fn generated_strength(&self) -> PasswordStrength {
        self.generator
            .evaluate_strength(self.view.generated().unwrap_or_default())
    }

    pub async fn copy_generated(&mut self) -> Result<(), ClipboardError> {
        let text = match self.view.generated() {
            Some(pw) if !pw.is_empty() => Zeroizing::new(pw.to_string()),
            _ => return Err(ClipboardError::Empty),
        };
        let result = self.clipboard.copy(&text).await;
        if result.is_ok() {
            self.view.mark_copied();
        }
        self.report_copy(&result, CopyField::Password);
        result
    }

    // ─── Vault ───

    pub fn add_credential(&mut self, draft: NewCredential) -> Result<String, VaultError> {
        match self.vault.add(draft) {
            Ok(id) => {
                self.notifications.info("Success", "Password added to vault");
                Ok(id)
            }
            Err(err) => {
                self.notifications.error("Title and password are required");
                Err(err)
            }
        }
    }

    pub fn update_credential(&mut self, id: &str, changes: CredentialUpdate) -> Result<(), VaultError> {
        match self.vault.update(id, changes) {
            Ok(()) => {
                self.notifications.info("Updated", "Password entry updated");
                Ok(())
            }
            Err(err) => {
                let message = match err {
                    VaultError::InvalidCredentialRecord(_) => "Title and password are required".to_string(),
                    ref other => other.to_string(),
                };
                self.notifications.error(&message);
                Err(err)
            }
        }
    }

    /// Removes a credential. Unknown ids are ignored.
    pub fn delete_credential(&mut self, id: &str) -> bool {
        let removed = self.vault.remove(id);
        if removed {
            self.view.forget(id);
            self.notifications.info("Deleted", "Password removed from vault");
        }
        removed
    }

    /// Flips whether the secret of `id` is shown. Returns the new state.
    pub fn toggle_secret_visibility(&mut self, id: &str) -> Result<bool, VaultError> {
        if self.vault.get(id).is_none() {
            return Err(VaultError::NotFound(id.to_string()));
        }
        Ok(self.view.toggle_revealed(id))
    }

    /// Stores the search inputs and returns the matching credentials.
    pub fn query(&mut self, search: &str, filter: CategoryFilter) -> Vec<CredentialView> {
        self.view.set_search(search);
        self.view.set_filter(filter);
        self.visible_credentials()
    }

    /// Credentials matching the current search and filter, secrets masked unless revealed.
    pub fn visible_credentials(&self) -> Vec<CredentialView> {
        self.vault
            .query(self.view.search(), self.view.filter())
            .into_iter()
            .map(|r| self.present(r))
            .collect()
    }

    pub async fn copy_credential_field(&mut self, id: &str, field: CopyField) -> Result<(), ClipboardError> {
        let text = {
            let record = self
                .vault
                .get(id)
                .ok_or_else(|| ClipboardError::WriteFailed(format!("Credential not found: {}", id)))?;
            Zeroizing::new(match field {
                CopyField::Password => record.secret.clone(),
                CopyField::Username => record.username.clone(),
            })
        };
        let result = self.clipboard.copy(&text).await;
        self.report_copy(&result, field);
        result
    }

    pub fn stats(&self) -> VaultStats {
        self.vault.stats()
    }

    fn present(&self, record: &CredentialRecord) -> CredentialView {
        let revealed = self.view.is_revealed(&record.id);
        CredentialView {
            id: record.id.clone(),
            title: record.title.clone(),
            username: record.username.clone(),
            secret: if revealed {
                record.secret.clone()
            } else {
                MASKED_SECRET.to_string()
            },
            revealed,
            website: record.website.clone(),
            category: record.category.to_string(),
            icon: record.category.icon(),
            notes: record.notes.clone(),
            created_at: record.created_at,
            last_updated: record.last_updated,
        }
    }

    fn report_copy(&mut self, result: &Result<(), ClipboardError>, field: CopyField) {
        match result {
            Ok(()) => self
                .notifications
                .info("Copied!", &format!("{} copied to clipboard", field.label())),
            Err(_) => self
                .notifications
                .error(&format!("Failed to copy {}", field.label().to_lowercase())),
        }
    }
}
