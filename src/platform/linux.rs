// SecureVault platform support for Linux
// Config:    ~/.config/securevault
// Clipboard: wl-copy (Wayland) or xclip (X11)

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for SecureVault on Linux.
/// Uses `$XDG_CONFIG_HOME/securevault` if set, otherwise `~/.config/securevault`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("securevault")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("securevault")
    }
}

/// `wl-copy` when a Wayland display is present, `xclip` otherwise.
pub fn clipboard_command() -> Vec<String> {
    if env::var_os("WAYLAND_DISPLAY").is_some() {
        vec!["wl-copy".to_string()]
    } else {
        vec![
            "xclip".to_string(),
            "-selection".to_string(),
            "clipboard".to_string(),
        ]
    }
}
