//! SecureVault: a password generator and in-memory credential vault.
//!
//! Entry point: runs a console demo of every component. The front-end shell
//! talks to the `securevault-rpc` binary instead.

use std::error::Error;
use std::sync::Arc;

use securevault::logging::init_logging;

type DemoResult = Result<(), Box<dyn Error>>;

#[tokio::main]
async fn main() {
    init_logging("securevault=warn");

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              SecureVault v{} — Demo Mode               ║", env!("CARGO_PKG_VERSION"));
    println!("║     Password generator and in-memory credential vault       ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let results = [
        ("Crypto Service", demo_crypto()),
        ("Password Generator", demo_generator()),
        ("Strength Evaluator", demo_strength()),
        ("Vault Manager", demo_vault()),
        ("App Core", demo_app_core().await),
    ];

    let failed: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();
    for (name, result) in &failed {
        if let Err(e) = result {
            println!("  ✗ {} failed: {}", name, e);
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    if failed.is_empty() {
        println!("  ✅ All {} components demonstrated successfully!", results.len());
    } else {
        println!("  ⚠ {} of {} components failed", failed.len(), results.len());
    }
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_crypto() -> DemoResult {
    use securevault::services::crypto_service::{CryptoService, CryptoServiceTrait};
    section("Crypto Service");

    let crypto = CryptoService::new();
    let bytes = crypto.generate_random_bytes(16)?;
    println!("  Random bytes (16): {}", bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>());

    let indices = crypto.random_indices(88, 8)?;
    println!("  Unbiased indices below 88: {:?}", indices);
    println!("  ✓ CryptoService OK");
    println!();
    Ok(())
}

fn demo_generator() -> DemoResult {
    use securevault::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
    use securevault::types::generator::GeneratorConfig;
    section("Password Generator");

    let generator = PasswordGenerator::new();
    let default = generator.generate(&GeneratorConfig::default())?;
    println!("  Default (16, all classes): {}", default);

    let pin_like = GeneratorConfig {
        length: 8,
        include_uppercase: false,
        include_lowercase: false,
        include_symbols: false,
        ..GeneratorConfig::default()
    };
    println!("  Digits only (8):           {}", generator.generate(&pin_like)?);

    let readable = GeneratorConfig { length: 24, exclude_similar: true, ..GeneratorConfig::default() };
    println!("  No look-alikes (24):       {}", generator.generate(&readable)?);

    let nothing = GeneratorConfig {
        include_uppercase: false,
        include_lowercase: false,
        include_numbers: false,
        include_symbols: false,
        ..GeneratorConfig::default()
    };
    match generator.generate(&nothing) {
        Err(e) => println!("  No classes selected:       correctly rejected ({})", e),
        Ok(_) => println!("  No classes selected:       ERROR"),
    }
    println!("  ✓ PasswordGenerator OK");
    println!();
    Ok(())
}

fn demo_strength() -> DemoResult {
    use securevault::services::password_generator::{evaluate_strength, score_password};
    section("Strength Evaluator");

    for sample in ["abc", "abcdefgh", "Abcdefgh1", "Abcdefgh1!", "Abcdefgh1!xyz"] {
        let strength = evaluate_strength(sample);
        println!(
            "  {:<14} score {} → {:<6} {:>3}% ({})",
            sample,
            score_password(sample),
            strength.label(),
            strength.percent(),
            strength.color()
        );
    }
    println!("  ✓ Strength OK");
    println!();
    Ok(())
}

fn demo_vault() -> DemoResult {
    use securevault::managers::vault_manager::{VaultManager, VaultManagerTrait};
    use securevault::types::credential::{Category, CategoryFilter, CredentialUpdate, NewCredential};
    section("Vault Manager");

    let mut vault = VaultManager::with_sample_data();
    println!("  Seeded {} sample records", vault.count());

    let id = vault.add(
        NewCredential::new("Bank", "c0rrect-H0rse!")
            .username("me@example.com")
            .category(Category::Finance),
    )?;
    println!("  Added 'Bank' ({}), now {} records", &id[..8], vault.count());

    let hits = vault.query("netflix", CategoryFilter::All);
    println!("  Search 'netflix': {} hit(s)", hits.len());

    let work = vault.query("", CategoryFilter::Only(Category::Work));
    println!("  Filter 'Work': {} hit(s)", work.len());

    vault.update(&id, CredentialUpdate { notes: Some("joint account".into()), ..Default::default() })?;
    println!("  Updated notes on 'Bank'");

    let rejected = vault.add(NewCredential::new("", "secret"));
    println!("  Add without title: {}", if rejected.is_err() { "correctly rejected" } else { "ERROR" });

    let stats = vault.stats();
    println!(
        "  Stats: {} stored, security score {}%, {} categories",
        stats.stored, stats.security_score, stats.categories_in_use
    );

    println!("  Delete 'Bank': {}", vault.remove(&id));
    println!("  Delete unknown id: {}", vault.remove("no-such-id"));
    println!("  ✓ VaultManager OK");
    println!();
    Ok(())
}

async fn demo_app_core() -> DemoResult {
    use securevault::app::App;
    use securevault::services::clipboard::{ClipboardService, MemoryClipboard};
    use securevault::services::settings_engine::SettingsEngine;
    use securevault::types::settings::AppSettings;
    use securevault::types::view::CopyField;
    section("App Core (full lifecycle)");

    let scratch = std::env::temp_dir().join("securevault-demo-settings.json");
    let engine = SettingsEngine::with_settings(scratch.to_string_lossy().into_owned(), AppSettings::default());
    let memory = Arc::new(MemoryClipboard::new());
    let mut app = App::from_settings(engine).with_clipboard(ClipboardService::new(memory.clone()));

    let password = app.generate_password()?;
    println!("  Generated: {} ({})", password, app.generated_strength().label());
    app.view.toggle_show_generated();
    println!("  Display while hidden: {}", app.view.generated_display().unwrap_or_default());

    app.copy_generated().await?;
    println!("  Clipboard holds generated password: {}", memory.contents().await.as_deref() == Some(password.as_str()));

    let first = app.visible_credentials().first().map(|c| c.id.clone()).ok_or("vault is empty")?;
    app.copy_credential_field(&first, CopyField::Username).await?;
    println!("  Copied username: {}", memory.contents().await.unwrap_or_default());

    for toast in app.notifications.drain() {
        println!("  Toast: {}: {}", toast.title, toast.description);
    }
    println!("  ✓ App Core OK");
    Ok(())
}
