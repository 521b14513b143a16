//! RPC method handler for the SecureVault JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches each call to the `App` behind a Tokio mutex,
//! so requests never interleave.

use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::app::App;
use crate::managers::vault_manager::VaultManagerTrait;
use crate::services::password_generator::evaluate_strength;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::credential::{Category, CategoryFilter, CredentialUpdate, NewCredential};
use crate::types::generator::{GeneratorConfig, PasswordStrength};
use crate::types::view::{ActiveView, CopyField};

fn str_param<'a>(params: &'a Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

fn string_param(params: &Value, key: &str) -> Option<String> {
    str_param(params, key).map(str::to_string)
}

fn category_param(params: &Value, key: &str) -> Result<Option<Category>, String> {
    str_param(params, key)
        .map(|c| c.parse::<Category>().map_err(|e| e.to_string()))
        .transpose()
}

fn strength_json(strength: PasswordStrength) -> Value {
    json!({
        "label": strength.label(),
        "percent": strength.percent(),
        "color": strength.color(),
    })
}

/// Overlays the keys present in `params` onto `config`. Unknown keys are rejected.
fn merge_generator_config(config: &GeneratorConfig, params: &Value) -> Result<GeneratorConfig, String> {
    let mut current = serde_json::to_value(config).map_err(|e| e.to_string())?;
    if let (Value::Object(target), Value::Object(changes)) = (&mut current, params) {
        for (key, value) in changes {
            if !target.contains_key(key) {
                return Err(format!("unknown generator option: {}", key));
            }
            target.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(current).map_err(|e| format!("invalid generator options: {}", e))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── View ───
        "view.get" => {
            let a = app.lock().await;
            Ok(json!({"view": a.view.active_view().as_str()}))
        }
        "view.switch" => {
            let view: ActiveView = str_param(params, "view").ok_or("missing view")?.parse()?;
            let mut a = app.lock().await;
            a.switch_view(view);
            Ok(json!({"view": view.as_str()}))
        }

        // ─── Generator ───
        "generator.options.get" => {
            let a = app.lock().await;
            serde_json::to_value(&a.generator_config).map_err(|e| e.to_string())
        }
        "generator.options.set" => {
            let mut a = app.lock().await;
            let config = merge_generator_config(&a.generator_config, params)?;
            a.set_generator_config(config).map_err(|e| e.to_string())?;
            serde_json::to_value(&a.generator_config).map_err(|e| e.to_string())
        }
        "generator.generate" => {
            let mut a = app.lock().await;
            let password = a.generate_password().map_err(|e| e.to_string())?;
            Ok(json!({
                "password": password,
                "display": a.view.generated_display(),
                "strength": strength_json(a.generated_strength()),
            }))
        }
        "generator.strength" => {
            let password = str_param(params, "password").ok_or("missing password")?;
            Ok(strength_json(evaluate_strength(password)))
        }
        "generator.toggle_visibility" => {
            let mut a = app.lock().await;
            let visible = a.view.toggle_show_generated();
            Ok(json!({"visible": visible, "display": a.view.generated_display()}))
        }
        "generator.copy" => {
            let mut a = app.lock().await;
            a.copy_generated().await.map_err(|e| e.to_string())?;
            Ok(json!({"copied": a.view.is_copied()}))
        }

        // ─── Vault ───
        "vault.add" => {
            let mut a = app.lock().await;
            let category = category_param(params, "category")?
                .unwrap_or(a.settings_engine.get_settings().vault.default_category);
            let draft = NewCredential::new(
                str_param(params, "title").unwrap_or(""),
                str_param(params, "password").unwrap_or(""),
            )
            .username(str_param(params, "username").unwrap_or(""))
            .website(str_param(params, "website").unwrap_or(""))
            .category(category)
            .notes(str_param(params, "notes").unwrap_or(""));
            let id = a.add_credential(draft).map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "vault.update" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let changes = CredentialUpdate {
                title: string_param(params, "title"),
                username: string_param(params, "username"),
                secret: string_param(params, "password"),
                website: string_param(params, "website"),
                category: category_param(params, "category")?,
                notes: string_param(params, "notes"),
            };
            if changes.is_empty() {
                return Err("nothing to update".to_string());
            }
            let mut a = app.lock().await;
            a.update_credential(id, changes).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "vault.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().await;
            let removed = a.delete_credential(id);
            Ok(json!({"ok": true, "removed": removed}))
        }
        "vault.query" => {
            let mut a = app.lock().await;
            let search = string_param(params, "search").unwrap_or_else(|| a.view.search().to_string());
            let filter = match str_param(params, "category") {
                Some(c) => c.parse::<CategoryFilter>().map_err(|e| e.to_string())?,
                None => a.view.filter(),
            };
            let items = a.query(&search, filter);
            Ok(json!({
                "items": items,
                "total": a.vault.count(),
                "search": search,
                "category": filter.to_string(),
            }))
        }
        "vault.toggle_visibility" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().await;
            let visible = a.toggle_secret_visibility(id).map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "visible": visible}))
        }
        "vault.copy" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let field: CopyField = str_param(params, "field").unwrap_or("password").parse()?;
            let mut a = app.lock().await;
            a.copy_credential_field(id, field).await.map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "vault.stats" => {
            let a = app.lock().await;
            serde_json::to_value(a.stats()).map_err(|e| e.to_string())
        }
        "vault.categories" => {
            let arr: Vec<Value> = Category::ALL
                .iter()
                .map(|c| json!({"name": c.as_str(), "icon": c.icon()}))
                .collect();
            Ok(json!(arr))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("generator") {
                let config = a.settings_engine.get_settings().generator.clone();
                a.set_generator_config(config).map_err(|e| e.to_string())?;
            }
            Ok(json!({"ok": true}))
        }

        // ─── Notifications ───
        "notifications.drain" => {
            let mut a = app.lock().await;
            let toasts = a.notifications.drain();
            serde_json::to_value(toasts).map_err(|e| e.to_string())
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
