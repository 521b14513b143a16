// SecureVault platform abstraction
// Provides the platform-specific config path and clipboard copy tool for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for SecureVault.
///
/// - **Linux**: `~/.config/securevault` (or `$XDG_CONFIG_HOME/securevault`)
/// - **macOS**: `~/Library/Application Support/SecureVault`
/// - **Windows**: `%APPDATA%/SecureVault`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the program and arguments that copy stdin to the system clipboard.
///
/// - **Linux**: `wl-copy` under Wayland, otherwise `xclip -selection clipboard`
/// - **macOS**: `pbcopy`
/// - **Windows**: `clip`
pub fn clipboard_command() -> Vec<String> {
    #[cfg(target_os = "linux")]
    {
        linux::clipboard_command()
    }
    #[cfg(target_os = "macos")]
    {
        macos::clipboard_command()
    }
    #[cfg(target_os = "windows")]
    {
        windows::clipboard_command()
    }
}
